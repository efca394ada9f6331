// ABOUTME: Race goal models: distance presets, tiers, and the immutable race config
// ABOUTME: Validation happens once at generation entry; the config is never mutated
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::limits;
use crate::errors::{AppError, AppResult};

/// Race distance descriptor with per-discipline lengths
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RaceDistance {
    /// Stable distance id ("sprint", "olympic", "half", "full")
    pub id: String,
    /// Human-readable label
    pub label: String,
    /// Swim leg in meters
    pub swim_meters: u32,
    /// Bike leg in kilometers
    pub bike_km: f64,
    /// Run leg in kilometers
    pub run_km: f64,
}

impl RaceDistance {
    /// Sprint distance: 750m / 20km / 5km
    #[must_use]
    pub fn sprint() -> Self {
        Self {
            id: "sprint".into(),
            label: "Sprint".into(),
            swim_meters: 750,
            bike_km: 20.0,
            run_km: 5.0,
        }
    }

    /// Olympic distance: 1500m / 40km / 10km
    #[must_use]
    pub fn olympic() -> Self {
        Self {
            id: "olympic".into(),
            label: "Olympic".into(),
            swim_meters: 1500,
            bike_km: 40.0,
            run_km: 10.0,
        }
    }

    /// Half-iron distance (70.3): 1900m / 90km / 21.1km
    #[must_use]
    pub fn half() -> Self {
        Self {
            id: "half".into(),
            label: "Half Ironman (70.3)".into(),
            swim_meters: 1900,
            bike_km: 90.0,
            run_km: 21.1,
        }
    }

    /// Full-iron distance: 3800m / 180km / 42.2km
    #[must_use]
    pub fn full() -> Self {
        Self {
            id: "full".into(),
            label: "Ironman".into(),
            swim_meters: 3800,
            bike_km: 180.0,
            run_km: 42.2,
        }
    }

    /// Coarse tier used to anchor the weekly-hour ramp
    #[must_use]
    pub fn tier(&self) -> DistanceTier {
        match self.run_km {
            km if km > 30.0 => DistanceTier::Ultra,
            km if km > 15.0 => DistanceTier::Long,
            km if km > 7.5 => DistanceTier::Standard,
            _ => DistanceTier::Short,
        }
    }
}

/// Coarse race-distance tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DistanceTier {
    /// Sprint-distance races
    Short,
    /// Olympic-distance races
    Standard,
    /// Half-iron races
    Long,
    /// Full-iron races
    Ultra,
}

impl DistanceTier {
    /// Minimum sensible weekly hours at the start of the base phase
    ///
    /// Capped by the athlete's budget; a small budget always wins.
    #[must_use]
    pub const fn base_floor_hours(self) -> f64 {
        match self {
            Self::Short => 3.0,
            Self::Standard => 4.0,
            Self::Long => 6.0,
            Self::Ultra => 8.0,
        }
    }
}

/// Immutable race goal driving plan generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RaceConfig {
    /// Target race distance
    pub distance: RaceDistance,
    /// Race name ("Ironman Lake Placid")
    pub race_name: String,
    /// Race day as a local calendar date (no time component)
    pub race_date: NaiveDate,
    /// Target finish time, hours component
    pub target_hours: u32,
    /// Target finish time, minutes component (0-59)
    pub target_minutes: u32,
    /// Peak-week weekly training hour ceiling
    ///
    /// Bounds the swim/bike/run endurance budget. Strength sessions are
    /// scheduled on top of it, so a synthesized week can exceed this value
    /// by up to the week's strength allowance
    /// ([`PlannerConfig::strength_per_week`](crate::config::PlannerConfig::strength_per_week)
    /// sessions of `strength_minutes` each) plus 5-minute session
    /// rounding.
    pub max_weekly_hours: f64,
}

impl RaceConfig {
    /// Days from `today` until race day (may be non-positive)
    #[must_use]
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.race_date - today).num_days()
    }

    /// Validate the goal against `today`
    ///
    /// # Errors
    ///
    /// - `InvalidInput` when the race date is not at least one day out
    /// - `ValueOutOfRange` when the weekly-hour budget or target minutes are
    ///   outside their documented ranges
    pub fn validate(&self, today: NaiveDate) -> AppResult<()> {
        if self.days_until(today) < 1 {
            return Err(AppError::invalid_input(format!(
                "race date {} must be at least one day after {}",
                self.race_date, today
            )));
        }
        if self.max_weekly_hours < limits::MIN_WEEKLY_HOURS
            || self.max_weekly_hours > limits::MAX_WEEKLY_HOURS
        {
            return Err(AppError::value_out_of_range(format!(
                "weekly hours must be between {} and {}, got {}",
                limits::MIN_WEEKLY_HOURS,
                limits::MAX_WEEKLY_HOURS,
                self.max_weekly_hours
            )));
        }
        if self.target_minutes > 59 {
            return Err(AppError::value_out_of_range(format!(
                "target finish minutes must be 0-59, got {}",
                self.target_minutes
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(race_date: NaiveDate) -> RaceConfig {
        RaceConfig {
            distance: RaceDistance::olympic(),
            race_name: "City Tri".into(),
            race_date,
            target_hours: 2,
            target_minutes: 45,
            max_weekly_hours: 8.0,
        }
    }

    #[test]
    fn test_validate_rejects_past_race_date() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert!(config(today).validate(today).is_err());
        assert!(config(today - chrono::Duration::days(1)).validate(today).is_err());
        assert!(config(today + chrono::Duration::days(1)).validate(today).is_ok());
    }

    #[test]
    fn test_validate_rejects_hour_budget_outside_range() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let mut cfg = config(today + chrono::Duration::days(90));
        cfg.max_weekly_hours = 1.0;
        assert!(cfg.validate(today).is_err());
        cfg.max_weekly_hours = 45.0;
        assert!(cfg.validate(today).is_err());
        cfg.max_weekly_hours = 12.5;
        assert!(cfg.validate(today).is_ok());
    }

    #[test]
    fn test_distance_tiers() {
        assert_eq!(RaceDistance::sprint().tier(), DistanceTier::Short);
        assert_eq!(RaceDistance::olympic().tier(), DistanceTier::Standard);
        assert_eq!(RaceDistance::half().tier(), DistanceTier::Long);
        assert_eq!(RaceDistance::full().tier(), DistanceTier::Ultra);
    }
}
