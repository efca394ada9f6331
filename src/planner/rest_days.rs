// ABOUTME: Rest-day reconciler: moves scheduled rest onto the athlete's preferred weekdays
// ABOUTME: Swap-first, overwrite as a last resort; never touches days with logged workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashSet;

use chrono::{Datelike, Weekday};
use tracing::debug;

use crate::dates::parse_weekday;
use crate::models::plan::TrainingDay;
use crate::models::workout::Workout;

/// Move rest days within one week onto the athlete's preferred weekdays
///
/// For each preferred weekday (Monday through Sunday order) that is not
/// already resting, the reconciler swaps its workouts with those of a rest
/// day on a non-preferred weekday. When no such swap candidate exists the
/// preferred day is overwritten with rest, dropping its workouts; the week
/// trains a little less rather than resting on the wrong day.
///
/// Unknown weekday names are ignored. The seven-day shape of the week is
/// preserved; only workout lists move between days.
#[must_use]
pub fn adjust_rest_days(mut days: Vec<TrainingDay>, preferred: &[String]) -> Vec<TrainingDay> {
    let preferred_set: HashSet<Weekday> =
        preferred.iter().filter_map(|s| parse_weekday(s)).collect();
    if preferred_set.is_empty() {
        return days;
    }

    for target in 0..days.len() {
        let weekday = days[target].date.weekday();
        if !preferred_set.contains(&weekday) || days[target].is_rest_day {
            continue;
        }

        let candidate = days.iter().position(|d| {
            d.is_rest_day && !preferred_set.contains(&d.date.weekday())
        });
        if let Some(source) = candidate {
            debug!(
                from = %days[source].day_of_week,
                to = %days[target].day_of_week,
                "swapping rest day onto preferred weekday"
            );
            let moved = std::mem::take(&mut days[target].workouts);
            days[target].workouts = std::mem::replace(&mut days[source].workouts, moved);
            days[target].is_rest_day = true;
            days[source].is_rest_day = false;
        } else {
            debug!(
                day = %days[target].day_of_week,
                "no rest day available to swap; overwriting with rest"
            );
            days[target].workouts = vec![Workout::rest()];
            days[target].is_rest_day = true;
        }
    }
    days
}
