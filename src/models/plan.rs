// ABOUTME: Plan aggregate models: TrainingPlan, TrainingWeek, TrainingDay, Phase
// ABOUTME: Serializable aggregates; edits go through planner::mutations only
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::dates::weekday_label;
use crate::errors::AppError;
use crate::models::race::RaceConfig;
use crate::models::workout::Workout;

/// Periodization phase
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Aerobic foundation and consistency
    Base,
    /// Threshold work and race-specific volume
    Build,
    /// Highest load, race simulation
    Peak,
    /// Sharpen and shed fatigue before race day
    Taper,
}

impl Phase {
    /// Canonical phase ordering, base through taper
    pub const ORDERED: [Self; 4] = [Self::Base, Self::Build, Self::Peak, Self::Taper];

    /// Human-readable weekly focus for this phase
    #[must_use]
    pub const fn focus(self) -> &'static str {
        match self {
            Self::Base => "Aerobic endurance and technique",
            Self::Build => "Threshold development and race-specific work",
            Self::Peak => "Race simulation at peak volume",
            Self::Taper => "Freshen up: reduced volume, keep intensity touches",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Base => "base",
            Self::Build => "build",
            Self::Peak => "peak",
            Self::Taper => "taper",
        };
        f.write_str(name)
    }
}

impl FromStr for Phase {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base" => Ok(Self::Base),
            "build" => Ok(Self::Build),
            "peak" => Ok(Self::Peak),
            "taper" => Ok(Self::Taper),
            other => Err(AppError::invalid_format(format!("unknown phase: {other}"))),
        }
    }
}

/// One calendar day of the plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDay {
    /// Local calendar date
    pub date: NaiveDate,
    /// Day-of-week label, always derived from `date`
    pub day_of_week: String,
    /// Whether this day is a rest day
    pub is_rest_day: bool,
    /// Scheduled workouts (a rest day carries one synthetic rest workout)
    pub workouts: Vec<Workout>,
}

impl TrainingDay {
    /// Create a training day holding the given workouts
    #[must_use]
    pub fn training(date: NaiveDate, workouts: Vec<Workout>) -> Self {
        Self {
            date,
            day_of_week: weekday_label(date).to_owned(),
            is_rest_day: false,
            workouts,
        }
    }

    /// Create a rest day with a synthetic rest workout
    #[must_use]
    pub fn rest(date: NaiveDate) -> Self {
        Self {
            date,
            day_of_week: weekday_label(date).to_owned(),
            is_rest_day: true,
            workouts: vec![Workout::rest()],
        }
    }

    /// Whether any workout on this day carries a completion record
    #[must_use]
    pub fn has_logged_workout(&self) -> bool {
        self.workouts.iter().any(Workout::is_logged)
    }

    /// Total scheduled minutes on this day
    #[must_use]
    pub fn total_minutes(&self) -> u32 {
        self.workouts.iter().map(|w| w.total_duration).sum()
    }
}

/// One Monday-aligned week of the plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingWeek {
    /// 1-based week number, strictly sequential
    pub week_number: u32,
    /// Periodization phase this week belongs to
    pub phase: Phase,
    /// 1-based position within the phase
    pub week_in_phase: u32,
    /// Human-readable weekly focus
    pub focus: String,
    /// Derived total hours; recomputed after every mutation, never authoritative
    pub total_hours: f64,
    /// Exactly seven days, Monday through Sunday
    pub days: Vec<TrainingDay>,
}

/// Root plan aggregate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlan {
    /// Opaque plan id
    pub id: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// The originating race goal
    pub race: RaceConfig,
    /// Phase-length map; week counts sum to `total_weeks`
    pub phase_weeks: BTreeMap<Phase, u32>,
    /// Total number of weeks
    pub total_weeks: u32,
    /// Ordered weeks, week 1..N
    pub weeks: Vec<TrainingWeek>,
}

impl TrainingPlan {
    /// Assemble a plan with a fresh id and the current timestamp
    #[must_use]
    pub fn assemble(
        race: RaceConfig,
        phase_weeks: BTreeMap<Phase, u32>,
        weeks: Vec<TrainingWeek>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            race,
            phase_weeks,
            total_weeks: weeks.len() as u32,
            weeks,
        }
    }

    /// Look up the day at a calendar date, if it falls within the plan
    #[must_use]
    pub fn day(&self, date: NaiveDate) -> Option<&TrainingDay> {
        self.weeks
            .iter()
            .flat_map(|w| w.days.iter())
            .find(|d| d.date == date)
    }

    /// Locate a workout by id: (week index, day index, workout index)
    #[must_use]
    pub fn locate_workout(&self, workout_id: &str) -> Option<(usize, usize, usize)> {
        self.weeks.iter().enumerate().find_map(|(wi, week)| {
            week.days.iter().enumerate().find_map(|(di, day)| {
                day.workouts
                    .iter()
                    .position(|w| w.id == workout_id)
                    .map(|xi| (wi, di, xi))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_round_trip() {
        for phase in Phase::ORDERED {
            assert_eq!(phase.to_string().parse::<Phase>().unwrap(), phase);
        }
        assert!("race-week".parse::<Phase>().is_err());
    }

    #[test]
    fn test_rest_day_has_synthetic_workout() {
        let d = TrainingDay::rest(NaiveDate::from_ymd_opt(2026, 8, 31).unwrap());
        assert!(d.is_rest_day);
        assert_eq!(d.workouts.len(), 1);
        assert_eq!(d.total_minutes(), 0);
        assert_eq!(d.day_of_week, "Monday");
    }

    #[test]
    fn test_day_serializes_camel_case() {
        let d = TrainingDay::rest(NaiveDate::from_ymd_opt(2026, 8, 31).unwrap());
        let json = serde_json::to_value(&d).unwrap();
        assert!(json.get("dayOfWeek").is_some());
        assert!(json.get("isRestDay").is_some());
    }

    #[test]
    fn test_phase_weeks_map_serializes_with_string_keys() {
        let mut map = BTreeMap::new();
        map.insert(Phase::Base, 4_u32);
        map.insert(Phase::Taper, 1_u32);
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json.get("base").and_then(serde_json::Value::as_u64), Some(4));
        assert_eq!(json.get("taper").and_then(serde_json::Value::as_u64), Some(1));
    }
}
