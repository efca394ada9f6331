// ABOUTME: Domain models for the training plan engine
// ABOUTME: Race goals, athlete profiles, workouts, and plan aggregates
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core data models
//!
//! All models are plain serde value types; the serialized form is the
//! exchange format consumed whole by persistence collaborators.

/// Athlete profile: experience, baselines, injuries, discipline split
pub mod athlete;

/// Plan aggregates: `TrainingPlan`, `TrainingWeek`, `TrainingDay`, `Phase`
pub mod plan;

/// Race goal: distance presets, tiers, `RaceConfig`
pub mod race;

/// Workouts: disciplines, intensities, steps, completion records
pub mod workout;

pub use athlete::{
    AthleteProfile, DisciplineSplit, ExperienceLevel, Injury, PerformanceBaselines,
};
pub use plan::{Phase, TrainingDay, TrainingPlan, TrainingWeek};
pub use race::{DistanceTier, RaceConfig, RaceDistance};
pub use workout::{
    Completion, CompletionStatus, Discipline, Intensity, Workout, WorkoutStep,
};
