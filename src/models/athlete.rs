// ABOUTME: Athlete profile models: experience, baselines, injuries, discipline split
// ABOUTME: Every field has a documented default; a missing profile is never an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::algorithms::zones::HeartRateZones;
use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use crate::models::workout::Discipline;

/// Athlete experience level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// First season of structured training
    Beginner,
    /// A few seasons of consistent training
    #[default]
    Intermediate,
    /// Several years of racing
    Advanced,
    /// Competitive age-grouper or better
    Elite,
}

impl ExperienceLevel {
    /// Number of quality (key) sessions scheduled per week
    #[must_use]
    pub const fn quality_sessions_per_week(self) -> usize {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced | Self::Elite => 3,
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Elite => "elite",
        };
        f.write_str(name)
    }
}

impl FromStr for ExperienceLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            "elite" => Ok(Self::Elite),
            other => Err(AppError::invalid_format(format!(
                "unknown experience level: {other}"
            ))),
        }
    }
}

/// Optional performance baselines used to attach pace/power targets
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceBaselines {
    /// Critical swim speed, seconds per 100m
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swim_css_sec_per_100m: Option<u32>,
    /// Functional threshold power, watts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bike_ftp_watts: Option<u32>,
    /// Run threshold pace, seconds per kilometer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_threshold_sec_per_km: Option<u32>,
}

/// A reported injury, used best-effort to soften sessions in its discipline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Injury {
    /// Opaque id
    pub id: String,
    /// Free-text description ("left achilles tendinopathy")
    pub description: String,
    /// Discipline whose high-impact sessions should be avoided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affected_discipline: Option<Discipline>,
}

impl Injury {
    /// Create an injury record with a fresh opaque id
    #[must_use]
    pub fn new(description: impl Into<String>, affected_discipline: Option<Discipline>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description: description.into(),
            affected_discipline,
        }
    }
}

/// Weekly training-time split across the three disciplines, in percent
///
/// The three percentages always sum to exactly 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineSplit {
    /// Swim share (percent)
    pub swim_pct: u8,
    /// Bike share (percent)
    pub bike_pct: u8,
    /// Run share (percent)
    pub run_pct: u8,
}

impl Default for DisciplineSplit {
    fn default() -> Self {
        Self {
            swim_pct: defaults::SWIM_SPLIT_PCT,
            bike_pct: defaults::BIKE_SPLIT_PCT,
            run_pct: defaults::RUN_SPLIT_PCT,
        }
    }
}

impl DisciplineSplit {
    /// Create a split, validating that the shares sum to 100
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the percentages do not sum to 100.
    pub fn new(swim_pct: u8, bike_pct: u8, run_pct: u8) -> AppResult<Self> {
        let split = Self {
            swim_pct,
            bike_pct,
            run_pct,
        };
        split.validate()?;
        Ok(split)
    }

    /// Check the sum-to-100 invariant
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the percentages do not sum to 100.
    pub fn validate(&self) -> AppResult<()> {
        let sum = u32::from(self.swim_pct) + u32::from(self.bike_pct) + u32::from(self.run_pct);
        if sum == 100 {
            Ok(())
        } else {
            Err(AppError::invalid_input(format!(
                "discipline split must sum to 100, got {sum}"
            )))
        }
    }

    /// Share for one discipline; non-split disciplines return 0
    #[must_use]
    pub const fn pct_for(&self, discipline: Discipline) -> u8 {
        match discipline {
            Discipline::Swim => self.swim_pct,
            Discipline::Bike => self.bike_pct,
            Discipline::Run => self.run_pct,
            _ => 0,
        }
    }

    /// Rebalance after one discipline's share changes
    ///
    /// The other two shares are rescaled proportionally to fill the
    /// remainder; the rounding error always lands on the first unchanged
    /// discipline in swim, bike, run order so the result is deterministic.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a non-split discipline or a share over 100.
    pub fn rebalance(&self, changed: Discipline, new_pct: u8) -> AppResult<Self> {
        if !changed.is_split_discipline() {
            return Err(AppError::invalid_input(format!(
                "{changed} has no share in the discipline split"
            )));
        }
        if new_pct > 100 {
            return Err(AppError::value_out_of_range(format!(
                "discipline share must be 0-100, got {new_pct}"
            )));
        }

        let order = [Discipline::Swim, Discipline::Bike, Discipline::Run];
        let mut others = order.iter().copied().filter(|d| *d != changed);
        let first = others.next().unwrap_or(Discipline::Swim);
        let second = others.next().unwrap_or(Discipline::Run);

        let remaining = u32::from(100 - new_pct);
        let old_first = u32::from(self.pct_for(first));
        let old_second = u32::from(self.pct_for(second));
        let old_remaining = old_first + old_second;

        // Scale the second discipline by floor division; the first absorbs
        // whatever rounding leaves over.
        let new_second = if old_remaining == 0 {
            remaining / 2
        } else {
            old_second * remaining / old_remaining
        };
        let new_first = remaining - new_second;

        let mut result = *self;
        for (d, pct) in [
            (changed, u32::from(new_pct)),
            (first, new_first),
            (second, new_second),
        ] {
            match d {
                Discipline::Swim => result.swim_pct = pct as u8,
                Discipline::Bike => result.bike_pct = pct as u8,
                Discipline::Run => result.run_pct = pct as u8,
                _ => {}
            }
        }
        result.validate()?;
        Ok(result)
    }
}

/// Optional athlete profile consumed by plan generation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AthleteProfile {
    /// Experience level (defaults to intermediate)
    pub experience: ExperienceLevel,
    /// Optional performance baselines
    #[serde(default)]
    pub baselines: PerformanceBaselines,
    /// Current injuries, best-effort avoidance only
    #[serde(default)]
    pub injuries: Vec<Injury>,
    /// Preferred rest weekdays by name ("monday"); may be empty
    #[serde(default)]
    pub preferred_rest_days: Vec<String>,
    /// Weekly time split across disciplines
    #[serde(default)]
    pub discipline_split: DisciplineSplit,
    /// Strongest discipline, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strongest_discipline: Option<Discipline>,
    /// Weakest discipline, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weakest_discipline: Option<Discipline>,
    /// Heart-rate zones from either wizard path, if configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate_zones: Option<HeartRateZones>,
}

impl AthleteProfile {
    /// Discipline split with the strength/weakness bias applied
    ///
    /// Shifts a few percentage points from the strongest to the weakest
    /// discipline when both are set and distinct; the base split is used
    /// unchanged otherwise.
    #[must_use]
    pub fn effective_split(&self) -> DisciplineSplit {
        let (Some(strong), Some(weak)) = (self.strongest_discipline, self.weakest_discipline)
        else {
            return self.discipline_split;
        };
        if strong == weak || !strong.is_split_discipline() || !weak.is_split_discipline() {
            return self.discipline_split;
        }

        let shift = defaults::WEAKNESS_BIAS_PCT.min(self.discipline_split.pct_for(strong));
        let mut split = self.discipline_split;
        for (d, delta) in [(strong, -i16::from(shift)), (weak, i16::from(shift))] {
            let adjusted = |pct: u8| (i16::from(pct) + delta).clamp(0, 100) as u8;
            match d {
                Discipline::Swim => split.swim_pct = adjusted(split.swim_pct),
                Discipline::Bike => split.bike_pct = adjusted(split.bike_pct),
                Discipline::Run => split.run_pct = adjusted(split.run_pct),
                _ => {}
            }
        }
        split
    }

    /// Whether an injury affects the given discipline
    #[must_use]
    pub fn has_injury_affecting(&self, discipline: Discipline) -> bool {
        self.injuries
            .iter()
            .any(|i| i.affected_discipline == Some(discipline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_split_sums_to_100() {
        assert!(DisciplineSplit::default().validate().is_ok());
    }

    #[test]
    fn test_rebalance_proportional_with_deterministic_remainder() {
        let split = DisciplineSplit::new(20, 45, 35).unwrap();
        // Swim raised to 30: bike/run share 70 proportionally (45:35 of 80).
        let rebalanced = split.rebalance(Discipline::Swim, 30).unwrap();
        assert!(rebalanced.validate().is_ok());
        assert_eq!(rebalanced.swim_pct, 30);
        // run (second in order) floors to 35*70/80 = 30, bike absorbs the rest.
        assert_eq!(rebalanced.run_pct, 30);
        assert_eq!(rebalanced.bike_pct, 40);
    }

    #[test]
    fn test_rebalance_from_zero_remainder_splits_evenly() {
        let split = DisciplineSplit::new(0, 100, 0).unwrap();
        let rebalanced = split.rebalance(Discipline::Bike, 40).unwrap();
        assert!(rebalanced.validate().is_ok());
        assert_eq!(rebalanced.bike_pct, 40);
        assert_eq!(rebalanced.swim_pct, 30);
        assert_eq!(rebalanced.run_pct, 30);
    }

    #[test]
    fn test_rebalance_rejects_non_split_discipline() {
        let split = DisciplineSplit::default();
        assert!(split.rebalance(Discipline::Strength, 10).is_err());
    }

    #[test]
    fn test_effective_split_shifts_toward_weakness() {
        let profile = AthleteProfile {
            strongest_discipline: Some(Discipline::Bike),
            weakest_discipline: Some(Discipline::Swim),
            ..AthleteProfile::default()
        };
        let split = profile.effective_split();
        assert!(split.validate().is_ok());
        assert_eq!(split.swim_pct, defaults::SWIM_SPLIT_PCT + defaults::WEAKNESS_BIAS_PCT);
        assert_eq!(split.bike_pct, defaults::BIKE_SPLIT_PCT - defaults::WEAKNESS_BIAS_PCT);
    }

    #[test]
    fn test_effective_split_without_bias_pair() {
        let profile = AthleteProfile::default();
        assert_eq!(profile.effective_split(), DisciplineSplit::default());
    }
}
