// ABOUTME: Planner configuration: ramp fractions, session frequencies, tunables
// ABOUTME: Defaults + TRIPLAN_* env overrides, validated once, global OnceLock access
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Planner Configuration
//!
//! Deployment-tunable parameters for the generation pipeline. Values come
//! from environment variables (`TRIPLAN_*`) with compiled defaults as
//! fallback; the validated result is cached process-wide.

use serde::{Deserialize, Serialize};
use std::env;
use std::sync::OnceLock;

use crate::errors::{AppError, AppResult};
use crate::models::Phase;

/// Default weekly-hour fraction of the budget at the start of base
const DEFAULT_BASE_START_FRACTION: f64 = 0.50;
/// Default fraction reached by the end of base
const DEFAULT_BASE_END_FRACTION: f64 = 0.70;
/// Default fraction reached by the end of build
const DEFAULT_BUILD_END_FRACTION: f64 = 0.90;
/// Default fraction during peak weeks
const DEFAULT_PEAK_FRACTION: f64 = 1.00;
/// Default fraction for the final taper week
const DEFAULT_TAPER_FRACTION: f64 = 0.50;
/// Default interval (in weeks) between brick sessions during build/peak
const DEFAULT_BRICK_WEEK_INTERVAL: u32 = 2;
/// Default strength session length in minutes
const DEFAULT_STRENGTH_MINUTES: u32 = 30;

/// Tunable parameters for the generation pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Weekly-hour fraction of the budget at the start of the base phase
    #[serde(default = "default_base_start_fraction")]
    pub base_start_fraction: f64,

    /// Fraction reached by the end of the base phase
    #[serde(default = "default_base_end_fraction")]
    pub base_end_fraction: f64,

    /// Fraction reached by the end of the build phase
    #[serde(default = "default_build_end_fraction")]
    pub build_end_fraction: f64,

    /// Fraction held through the peak phase
    #[serde(default = "default_peak_fraction")]
    pub peak_fraction: f64,

    /// Fraction for the final taper week before the race
    #[serde(default = "default_taper_fraction")]
    pub taper_fraction: f64,

    /// Brick sessions land every this-many weeks within build and peak
    #[serde(default = "default_brick_week_interval")]
    pub brick_week_interval: u32,

    /// Strength sessions scheduled per week, by phase: base/build/peak/taper
    ///
    /// Strength work sits on top of the endurance hour budget; it does not
    /// count against `RaceConfig::max_weekly_hours`.
    #[serde(default = "default_strength_per_week")]
    pub strength_sessions_per_week: [u8; 4],

    /// Length of each strength session in minutes
    #[serde(default = "default_strength_minutes")]
    pub strength_minutes: u32,
}

fn default_base_start_fraction() -> f64 {
    DEFAULT_BASE_START_FRACTION
}

fn default_base_end_fraction() -> f64 {
    DEFAULT_BASE_END_FRACTION
}

fn default_build_end_fraction() -> f64 {
    DEFAULT_BUILD_END_FRACTION
}

fn default_peak_fraction() -> f64 {
    DEFAULT_PEAK_FRACTION
}

fn default_taper_fraction() -> f64 {
    DEFAULT_TAPER_FRACTION
}

fn default_brick_week_interval() -> u32 {
    DEFAULT_BRICK_WEEK_INTERVAL
}

fn default_strength_per_week() -> [u8; 4] {
    [2, 1, 1, 0]
}

fn default_strength_minutes() -> u32 {
    DEFAULT_STRENGTH_MINUTES
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            base_start_fraction: DEFAULT_BASE_START_FRACTION,
            base_end_fraction: DEFAULT_BASE_END_FRACTION,
            build_end_fraction: DEFAULT_BUILD_END_FRACTION,
            peak_fraction: DEFAULT_PEAK_FRACTION,
            taper_fraction: DEFAULT_TAPER_FRACTION,
            brick_week_interval: DEFAULT_BRICK_WEEK_INTERVAL,
            strength_sessions_per_week: default_strength_per_week(),
            strength_minutes: DEFAULT_STRENGTH_MINUTES,
        }
    }
}

impl PlannerConfig {
    /// Load configuration from the environment, falling back to defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_start_fraction: env_f64("TRIPLAN_BASE_START_FRACTION")
                .unwrap_or(DEFAULT_BASE_START_FRACTION),
            base_end_fraction: env_f64("TRIPLAN_BASE_END_FRACTION")
                .unwrap_or(DEFAULT_BASE_END_FRACTION),
            build_end_fraction: env_f64("TRIPLAN_BUILD_END_FRACTION")
                .unwrap_or(DEFAULT_BUILD_END_FRACTION),
            peak_fraction: env_f64("TRIPLAN_PEAK_FRACTION").unwrap_or(DEFAULT_PEAK_FRACTION),
            taper_fraction: env_f64("TRIPLAN_TAPER_FRACTION").unwrap_or(DEFAULT_TAPER_FRACTION),
            brick_week_interval: env_u32("TRIPLAN_BRICK_WEEK_INTERVAL")
                .unwrap_or(DEFAULT_BRICK_WEEK_INTERVAL),
            strength_sessions_per_week: default_strength_per_week(),
            strength_minutes: env_u32("TRIPLAN_STRENGTH_MINUTES")
                .unwrap_or(DEFAULT_STRENGTH_MINUTES),
        }
    }

    /// Validate fraction ordering and ranges
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when a fraction leaves (0, 1] or the ramp
    /// is not monotonically increasing base through peak.
    pub fn validate(&self) -> AppResult<()> {
        for (name, value) in [
            ("base_start_fraction", self.base_start_fraction),
            ("base_end_fraction", self.base_end_fraction),
            ("build_end_fraction", self.build_end_fraction),
            ("peak_fraction", self.peak_fraction),
            ("taper_fraction", self.taper_fraction),
        ] {
            if value <= 0.0 || value > 1.0 {
                return Err(AppError::value_out_of_range(format!(
                    "{name} must be in (0, 1], got {value}"
                )));
            }
        }
        if self.base_start_fraction > self.base_end_fraction
            || self.base_end_fraction > self.build_end_fraction
            || self.build_end_fraction > self.peak_fraction
        {
            return Err(AppError::value_out_of_range(
                "hour-ramp fractions must increase from base start through peak".to_owned(),
            ));
        }
        if self.brick_week_interval == 0 {
            return Err(AppError::value_out_of_range(
                "brick_week_interval must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }

    /// Strength sessions scheduled per week in the given phase
    #[must_use]
    pub const fn strength_per_week(&self, phase: Phase) -> u8 {
        let idx = match phase {
            Phase::Base => 0,
            Phase::Build => 1,
            Phase::Peak => 2,
            Phase::Taper => 3,
        };
        self.strength_sessions_per_week[idx]
    }

    /// Process-wide configuration, loaded from the environment once
    ///
    /// An invalid environment falls back to compiled defaults with a warning
    /// rather than failing generation.
    #[must_use]
    pub fn global() -> &'static Self {
        static INSTANCE: OnceLock<PlannerConfig> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let config = Self::from_env();
            match config.validate() {
                Ok(()) => config,
                Err(e) => {
                    tracing::warn!("invalid TRIPLAN_* configuration, using defaults: {e}");
                    Self::default()
                }
            }
        })
    }
}

fn env_f64(key: &str) -> Option<f64> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

fn env_u32(key: &str) -> Option<u32> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(PlannerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_ramp() {
        let config = PlannerConfig {
            base_start_fraction: 0.8,
            base_end_fraction: 0.6,
            ..PlannerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_fraction_outside_unit_interval() {
        let config = PlannerConfig {
            peak_fraction: 1.5,
            ..PlannerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_strength_frequency_by_phase() {
        let config = PlannerConfig::default();
        assert_eq!(config.strength_per_week(Phase::Base), 2);
        assert_eq!(config.strength_per_week(Phase::Taper), 0);
    }
}
