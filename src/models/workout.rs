// ABOUTME: Workout models: disciplines, intensities, steps, and completion records
// ABOUTME: Total duration is authoritative on the workout; step durations are display text
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::AppError;

/// Triathlon training discipline
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    /// Swimming session
    Swim,
    /// Cycling session
    Bike,
    /// Running session
    Run,
    /// Combined bike-to-run transition session
    Brick,
    /// Strength and conditioning session
    Strength,
    /// Rest day placeholder
    Rest,
}

impl Discipline {
    /// Display label used in workout titles
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Swim => "Swim",
            Self::Bike => "Bike",
            Self::Run => "Run",
            Self::Brick => "Brick",
            Self::Strength => "Strength",
            Self::Rest => "Rest",
        }
    }

    /// Whether this discipline counts against the swim/bike/run time split
    #[must_use]
    pub const fn is_split_discipline(self) -> bool {
        matches!(self, Self::Swim | Self::Bike | Self::Run)
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Discipline {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "swim" => Ok(Self::Swim),
            "bike" | "ride" | "cycling" => Ok(Self::Bike),
            "run" => Ok(Self::Run),
            "brick" => Ok(Self::Brick),
            "strength" => Ok(Self::Strength),
            "rest" => Ok(Self::Rest),
            other => Err(AppError::invalid_format(format!(
                "unknown discipline: {other}"
            ))),
        }
    }
}

/// Session intensity classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// Very light spinning or technique work
    Recovery,
    /// Conversational aerobic effort
    Easy,
    /// Steady aerobic work
    Moderate,
    /// Comfortably hard sustained effort
    Tempo,
    /// At or near lactate threshold
    Threshold,
    /// Short hard repetitions with recoveries
    Intervals,
    /// Race-pace rehearsal
    Race,
}

impl Intensity {
    /// Expected RPE (1-10) for this intensity, used as the completion target effort
    #[must_use]
    pub const fn target_rpe(self) -> u8 {
        match self {
            Self::Recovery => 2,
            Self::Easy => 3,
            Self::Moderate => 5,
            Self::Tempo => 6,
            Self::Threshold => 8,
            Self::Intervals => 9,
            Self::Race => 10,
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Recovery => "recovery",
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Tempo => "tempo",
            Self::Threshold => "threshold",
            Self::Intervals => "intervals",
            Self::Race => "race",
        };
        f.write_str(name)
    }
}

/// A single step within a workout
///
/// `duration` is free text ("20 min", "6x400m"); it is displayed, not parsed,
/// except for the best-effort leading-integer weight used by visualization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutStep {
    /// Step name ("Warmup", "Main set", "Cooldown")
    pub name: String,
    /// Free-text duration for display
    pub duration: String,
    /// Intensity of this step
    pub intensity: Intensity,
    /// How to execute the step
    pub instructions: String,
    /// Target heart-rate zone label, when the athlete has zones configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_zone: Option<String>,
    /// Target pace, when a baseline supports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_pace: Option<String>,
    /// Target cadence, mostly for bike sessions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_cadence: Option<String>,
}

impl WorkoutStep {
    /// Create a step with no zone/pace/cadence targets
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        duration: impl Into<String>,
        intensity: Intensity,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            duration: duration.into(),
            intensity,
            instructions: instructions.into(),
            target_zone: None,
            target_pace: None,
            target_cadence: None,
        }
    }

    /// Attach a target heart-rate zone label
    #[must_use]
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.target_zone = Some(zone.into());
        self
    }

    /// Attach a target pace
    #[must_use]
    pub fn with_pace(mut self, pace: impl Into<String>) -> Self {
        self.target_pace = Some(pace.into());
        self
    }

    /// Attach a target cadence
    #[must_use]
    pub fn with_cadence(mut self, cadence: impl Into<String>) -> Self {
        self.target_cadence = Some(cadence.into());
        self
    }

    /// Best-effort leading integer from the duration text
    ///
    /// "20 min" parses as 20, "6x400m" as 6. Unparseable durations return
    /// `None`; visualization treats them as weight 1.
    #[must_use]
    pub fn leading_number(&self) -> Option<u32> {
        let digits: String = self
            .duration
            .trim_start()
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse().ok()
    }

    /// Proportional weight for visualization ratios (unparseable steps weigh 1)
    #[must_use]
    pub fn duration_weight(&self) -> u32 {
        self.leading_number().filter(|n| *n > 0).unwrap_or(1)
    }
}

/// Logged outcome status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    /// Workout done as planned
    Completed,
    /// Workout done in part
    Partial,
    /// Workout intentionally skipped
    Skipped,
}

impl CompletionStatus {
    /// Compliance points earned by this status
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::Completed => 1.0,
            Self::Partial => 0.75,
            Self::Skipped => 0.0,
        }
    }
}

/// Immutable record of a logged workout
///
/// Once attached to a [`Workout`] this is history: the merge engine treats
/// the whole day as sacrosanct and no mutation path rewrites it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    /// Outcome status
    pub status: CompletionStatus,
    /// When the workout was logged
    pub completed_at: DateTime<Utc>,
    /// Minutes actually trained (0 when skipped)
    pub actual_duration: u32,
    /// Perceived effort 1-10 (absent when skipped)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perceived_effort: Option<u8>,
    /// Intensity-implied expected RPE, computed at logging time
    pub target_effort: u8,
    /// Free-form athlete notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A single scheduled workout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Opaque id, unique within a plan; never semantically compared
    pub id: String,
    /// Discipline of the session
    pub discipline: Discipline,
    /// Short title ("Threshold Bike Intervals")
    pub title: String,
    /// One-sentence description of the session purpose
    pub description: String,
    /// Total duration in minutes; authoritative for all aggregation
    pub total_duration: u32,
    /// Ordered steps; non-rest workouts always have at least one
    pub steps: Vec<WorkoutStep>,
    /// Optional execution tips
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<String>>,
    /// Logged outcome, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion: Option<Completion>,
}

impl Workout {
    /// Create a workout with a fresh opaque id
    #[must_use]
    pub fn new(
        discipline: Discipline,
        title: impl Into<String>,
        description: impl Into<String>,
        total_duration: u32,
        steps: Vec<WorkoutStep>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            discipline,
            title: title.into(),
            description: description.into(),
            total_duration,
            steps,
            tips: None,
            completion: None,
        }
    }

    /// Synthetic rest-day workout carried by rest days
    #[must_use]
    pub fn rest() -> Self {
        Self::new(
            Discipline::Rest,
            "Rest Day",
            "Full recovery: no training scheduled.",
            0,
            vec![WorkoutStep::new(
                "Rest",
                "All day",
                Intensity::Recovery,
                "Take the day off. Light stretching or a short walk is fine.",
            )],
        )
    }

    /// Attach tips
    #[must_use]
    pub fn with_tips(mut self, tips: Vec<String>) -> Self {
        self.tips = Some(tips);
        self
    }

    /// Whether a completion record has been logged against this workout
    #[must_use]
    pub const fn is_logged(&self) -> bool {
        self.completion.is_some()
    }

    /// The highest-intensity step, used to derive the completion target effort
    #[must_use]
    pub fn dominant_intensity(&self) -> Intensity {
        self.steps
            .iter()
            .map(|s| s.intensity)
            .max_by_key(|i| i.target_rpe())
            .unwrap_or(Intensity::Easy)
    }
}
