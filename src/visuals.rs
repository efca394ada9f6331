// ABOUTME: Visualization helpers: proportional step ratios for timeline rendering
// ABOUTME: Pure derivations; no drawing happens in this crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::models::workout::{Workout, WorkoutStep};

/// Proportional width of each step for a workout timeline bar
///
/// Weights come from the best-effort leading integer of each step's duration
/// text; unparseable steps weigh 1 so every step stays visible. The ratios
/// sum to 1.0 for any workout with at least one step.
#[must_use]
pub fn step_duration_ratios(workout: &Workout) -> Vec<f64> {
    let weights: Vec<u32> = workout
        .steps
        .iter()
        .map(WorkoutStep::duration_weight)
        .collect();
    let total: u32 = weights.iter().sum();
    if total == 0 {
        return vec![0.0; weights.len()];
    }
    weights
        .into_iter()
        .map(|w| f64::from(w) / f64::from(total))
        .collect()
}
