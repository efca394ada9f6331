// ABOUTME: Compliance scoring: how much of the plan-to-date the athlete executed
// ABOUTME: Unlogged past workouts count as misses; future workouts never count
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::NaiveDate;

use crate::models::plan::TrainingPlan;
use crate::models::workout::{CompletionStatus, Discipline};

/// Compliance score (0-100) over all scheduled workouts up to and including `today`
///
/// Rest days and synthetic rest workouts are excluded from the denominator.
/// Completed workouts earn full credit, partials three quarters, skipped and
/// unlogged workouts none. An empty window scores 0.
#[must_use]
pub fn compliance_score(plan: &TrainingPlan, today: NaiveDate) -> f64 {
    let mut earned = 0.0_f64;
    let mut scheduled = 0_u32;

    for day in plan.weeks.iter().flat_map(|w| w.days.iter()) {
        if day.date > today || day.is_rest_day {
            continue;
        }
        for workout in &day.workouts {
            if workout.discipline == Discipline::Rest {
                continue;
            }
            scheduled += 1;
            if let Some(completion) = &workout.completion {
                earned += completion.status.points();
            }
        }
    }

    if scheduled == 0 {
        return 0.0;
    }
    earned / f64::from(scheduled) * 100.0
}

/// Count of logged completions per status, for summary views
#[must_use]
pub fn completion_counts(plan: &TrainingPlan) -> (u32, u32, u32) {
    let mut completed = 0;
    let mut partial = 0;
    let mut skipped = 0;
    for workout in plan
        .weeks
        .iter()
        .flat_map(|w| w.days.iter())
        .flat_map(|d| d.workouts.iter())
    {
        match workout.completion.as_ref().map(|c| c.status) {
            Some(CompletionStatus::Completed) => completed += 1,
            Some(CompletionStatus::Partial) => partial += 1,
            Some(CompletionStatus::Skipped) => skipped += 1,
            None => {}
        }
    }
    (completed, partial, skipped)
}
