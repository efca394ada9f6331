// ABOUTME: Plan mutations: replace and move workouts, log completion records
// ABOUTME: Every mutation edits the plan in place and recomputes affected week summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::models::plan::TrainingPlan;
use crate::models::workout::{Completion, CompletionStatus, Workout};

use super::summary::recalculate_week_summary;

/// Athlete-supplied completion data for one workout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompletionInput {
    /// Outcome status
    pub status: CompletionStatus,
    /// Minutes actually trained; ignored and forced to 0 when skipped
    #[serde(default)]
    pub actual_duration_minutes: u32,
    /// Perceived effort 1-10; required unless skipped, clamped into range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perceived_effort: Option<u8>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Replace a workout on a given day with a new one
///
/// The replacement keeps its own fresh id; callers re-fetch the day to learn
/// it. The day's rest flag is cleared since it now carries a real session.
///
/// # Errors
///
/// - `NotFound` when the date is outside the plan or the workout id is not
///   scheduled on that date
/// - `InvalidInput` when the workout already carries a completion record;
///   logged history is immutable
pub fn replace_workout(
    plan: &mut TrainingPlan,
    date: NaiveDate,
    workout_id: &str,
    replacement: Workout,
) -> AppResult<()> {
    let (wi, di, xi) = locate_on_date(plan, date, workout_id)?;
    reject_logged(&plan.weeks[wi].days[di].workouts[xi])?;
    let day = &mut plan.weeks[wi].days[di];
    info!(%date, workout_id, replacement = %replacement.title, "replacing workout");
    day.workouts[xi] = replacement;
    day.is_rest_day = false;
    recalculate_week_summary(&mut plan.weeks[wi]);
    Ok(())
}

/// Move a workout from one day to another
///
/// The destination day stops being a rest day and sheds any synthetic rest
/// workout; a source day left empty becomes a rest day.
///
/// # Errors
///
/// - `NotFound` when either date is outside the plan or the workout is not
///   scheduled on the source date
/// - `InvalidInput` when the workout already carries a completion record;
///   logged history stays on the day it was trained
pub fn move_workout(
    plan: &mut TrainingPlan,
    from: NaiveDate,
    to: NaiveDate,
    workout_id: &str,
) -> AppResult<()> {
    if from == to {
        return Ok(());
    }
    let (src_wi, src_di, xi) = locate_on_date(plan, from, workout_id)?;
    reject_logged(&plan.weeks[src_wi].days[src_di].workouts[xi])?;
    let (dst_wi, dst_di) = locate_day(plan, to)?;

    let moved = plan.weeks[src_wi].days[src_di].workouts.remove(xi);
    info!(%from, %to, workout_id, title = %moved.title, "moving workout");

    let source = &mut plan.weeks[src_wi].days[src_di];
    if source.workouts.is_empty() {
        source.workouts = vec![Workout::rest()];
        source.is_rest_day = true;
    }

    let dest = &mut plan.weeks[dst_wi].days[dst_di];
    if dest.is_rest_day {
        dest.workouts.retain(|w| w.total_duration > 0 || w.is_logged());
        dest.is_rest_day = false;
    }
    dest.workouts.push(moved);

    recalculate_week_summary(&mut plan.weeks[src_wi]);
    if dst_wi != src_wi {
        recalculate_week_summary(&mut plan.weeks[dst_wi]);
    }
    Ok(())
}

/// Log a completion record against a workout
///
/// The target effort is derived from the workout's hardest step at logging
/// time. Skipped workouts record zero duration and no perceived effort;
/// other statuses require a perceived effort, clamped to 1-10.
///
/// # Errors
///
/// - `NotFound` when the workout id is not in the plan
/// - `InvalidInput` when the workout is already logged, or a non-skipped
///   completion omits the perceived effort
pub fn log_completion(
    plan: &mut TrainingPlan,
    workout_id: &str,
    input: &CompletionInput,
    now: DateTime<Utc>,
) -> AppResult<()> {
    let (wi, di, xi) = plan
        .locate_workout(workout_id)
        .ok_or_else(|| AppError::not_found(format!("workout {workout_id} is not in the plan")))?;
    let workout = &mut plan.weeks[wi].days[di].workouts[xi];
    if workout.is_logged() {
        return Err(AppError::invalid_input(format!(
            "workout {workout_id} already has a completion record"
        )));
    }

    let target_effort = workout.dominant_intensity().target_rpe();
    let completion = if input.status == CompletionStatus::Skipped {
        Completion {
            status: CompletionStatus::Skipped,
            completed_at: now,
            actual_duration: 0,
            perceived_effort: None,
            target_effort,
            notes: input.notes.clone(),
        }
    } else {
        let effort = input.perceived_effort.ok_or_else(|| {
            AppError::invalid_input("perceived effort is required unless the workout was skipped")
        })?;
        Completion {
            status: input.status,
            completed_at: now,
            actual_duration: input.actual_duration_minutes,
            perceived_effort: Some(effort.clamp(1, 10)),
            target_effort,
            notes: input.notes.clone(),
        }
    };
    info!(workout_id, status = ?input.status, "logging workout completion");
    workout.completion = Some(completion);
    Ok(())
}

fn reject_logged(workout: &Workout) -> AppResult<()> {
    if workout.is_logged() {
        return Err(AppError::invalid_input(format!(
            "workout {} has a completion record and cannot be edited",
            workout.id
        )));
    }
    Ok(())
}

fn locate_day(plan: &TrainingPlan, date: NaiveDate) -> AppResult<(usize, usize)> {
    plan.weeks
        .iter()
        .enumerate()
        .find_map(|(wi, week)| {
            week.days
                .iter()
                .position(|d| d.date == date)
                .map(|di| (wi, di))
        })
        .ok_or_else(|| AppError::not_found(format!("date {date} is outside the plan")))
}

fn locate_on_date(
    plan: &TrainingPlan,
    date: NaiveDate,
    workout_id: &str,
) -> AppResult<(usize, usize, usize)> {
    let (wi, di) = locate_day(plan, date)?;
    let xi = plan.weeks[wi].days[di]
        .workouts
        .iter()
        .position(|w| w.id == workout_id)
        .ok_or_else(|| {
            AppError::not_found(format!("workout {workout_id} is not scheduled on {date}"))
        })?;
    Ok((wi, di, xi))
}
