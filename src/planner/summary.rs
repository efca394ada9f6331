// ABOUTME: Summary recalculator: derives weekly aggregates from day-level durations
// ABOUTME: Summaries are never authoritative; recompute after every structural change
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::models::plan::{TrainingDay, TrainingWeek};

/// Recompute a week's derived totals from its days
///
/// `total_hours` is the sum of workout durations across all seven days,
/// converted to hours and rounded to one decimal. Rest-day synthetic
/// workouts contribute zero minutes and need no special casing.
pub fn recalculate_week_summary(week: &mut TrainingWeek) {
    let minutes: u32 = week.days.iter().map(TrainingDay::total_minutes).sum();
    week.total_hours = (f64::from(minutes) / 60.0 * 10.0).round() / 10.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::models::plan::{Phase, TrainingDay};
    use crate::models::workout::{Discipline, Workout};

    fn week_with_minutes(minutes: &[u32]) -> TrainingWeek {
        let start = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap();
        let days = minutes
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let date = start + chrono::Duration::days(i as i64);
                if *m == 0 {
                    TrainingDay::rest(date)
                } else {
                    TrainingDay::training(
                        date,
                        vec![Workout::new(Discipline::Run, "Run", "", *m, vec![])],
                    )
                }
            })
            .collect();
        TrainingWeek {
            week_number: 1,
            phase: Phase::Base,
            week_in_phase: 1,
            focus: Phase::Base.focus().to_owned(),
            total_hours: 0.0,
            days,
        }
    }

    #[test]
    fn test_total_hours_rounds_to_one_decimal() {
        // 400 minutes = 6.666... hours -> 6.7
        let mut week = week_with_minutes(&[0, 100, 100, 100, 100, 0, 0]);
        recalculate_week_summary(&mut week);
        assert!((week.total_hours - 6.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_all_rest_week_is_zero_hours() {
        let mut week = week_with_minutes(&[0, 0, 0, 0, 0, 0, 0]);
        recalculate_week_summary(&mut week);
        assert!(week.total_hours.abs() < f64::EPSILON);
    }
}
