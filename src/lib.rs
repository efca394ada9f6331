// ABOUTME: Crate root for the triplan-core training plan engine
// ABOUTME: Pure domain logic; persistence, transport, and UI live in collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # triplan-core
//!
//! Training plan generation and reconciliation engine for triathlon
//! coaching. Given a race goal and an optional athlete profile, the engine
//! produces a periodized week-by-week plan of concrete workouts, and keeps
//! that plan consistent through completion logging, workout edits, and full
//! regeneration.
//!
//! ## Structure
//!
//! - [`models`] — serializable domain types: race goals, athlete profiles,
//!   workouts, and the plan aggregate
//! - [`planner`] — the generation pipeline plus merge and mutation
//!   operations on existing plans
//! - [`algorithms`] — heart-rate derivations (max HR, LTHR, zone banding)
//! - [`compliance`] — execution scoring over the plan-to-date
//! - [`dates`] — local-calendar date helpers; all plan dates are naive
//!   calendar dates, never instants
//! - [`visuals`] — pure derivations for timeline rendering
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use triplan_core::models::{RaceConfig, RaceDistance};
//! use triplan_core::planner::generate_plan;
//!
//! let race = RaceConfig {
//!     distance: RaceDistance::olympic(),
//!     race_name: "City Triathlon".to_owned(),
//!     race_date: NaiveDate::from_ymd_opt(2026, 11, 22).unwrap(),
//!     target_hours: 2,
//!     target_minutes: 45,
//!     max_weekly_hours: 9.0,
//! };
//! let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
//! let plan = generate_plan(race, None, today).unwrap();
//! assert_eq!(plan.weeks.len() as u32, plan.total_weeks);
//! ```

/// Heart-rate derivation algorithms
pub mod algorithms;

/// Compliance scoring over scheduled workouts
pub mod compliance;

/// Planner tunables, overridable from the environment
pub mod config;

/// Shared numeric constants with literature references
pub mod constants;

/// Local-calendar date helpers
pub mod dates;

/// Unified error handling
pub mod errors;

/// Serializable domain models
pub mod models;

/// Plan generation, merge, and mutation
pub mod planner;

/// Visualization derivations
pub mod visuals;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{AthleteProfile, RaceConfig, TrainingPlan};
pub use planner::{generate, generate_plan, regenerate_plan};
