// ABOUTME: Plan merge engine: carries logged history from an old plan into a regenerated one
// ABOUTME: A day with any completion record wins wholesale over the regenerated day
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::info;

use crate::dates::weekday_label;
use crate::models::plan::{TrainingDay, TrainingPlan};

use super::summary::recalculate_week_summary;

/// Merge a regenerated plan with the logged history of its predecessor
///
/// Every day in `old` that carries at least one completion record replaces
/// the day at the same calendar date in `new`, workouts and rest flag
/// together. Days the new plan does not cover are dropped with their
/// history; days without logged workouts always take the regenerated
/// content. Each merged day's weekday label is recomputed from its date,
/// never trusted from storage, so stale labels heal on regeneration.
/// Week summaries are recomputed afterwards.
#[must_use]
pub fn merge_plans(old: &TrainingPlan, mut new: TrainingPlan) -> TrainingPlan {
    let logged: HashMap<NaiveDate, &TrainingDay> = old
        .weeks
        .iter()
        .flat_map(|w| w.days.iter())
        .filter(|d| d.has_logged_workout())
        .map(|d| (d.date, d))
        .collect();

    let mut preserved = 0_usize;
    for week in &mut new.weeks {
        let mut changed = false;
        for day in &mut week.days {
            day.day_of_week = weekday_label(day.date).to_owned();
            if let Some(history) = logged.get(&day.date) {
                day.workouts = history.workouts.clone();
                day.is_rest_day = history.is_rest_day;
                changed = true;
                preserved += 1;
            }
        }
        if changed {
            recalculate_week_summary(week);
        }
    }
    info!(
        logged_days = logged.len(),
        preserved, "merged logged history into regenerated plan"
    );
    new
}
