// ABOUTME: Plan generation pipeline: periodize, synthesize, reconcile, summarize
// ABOUTME: Entry points generate_plan (explicit today) and generate (system clock)
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Training Plan Generation
//!
//! The pipeline runs in four stages per plan:
//!
//! 1. [`periodization`] splits the available weeks into phases and assigns
//!    each week an hour target ramping toward race day.
//! 2. [`synthesizer`] turns each week's phase and budget into seven
//!    Monday-aligned days of concrete workouts.
//! 3. [`rest_days`] moves scheduled rest onto the athlete's preferred
//!    weekdays.
//! 4. [`summary`] derives the weekly totals.
//!
//! Regeneration composes the same pipeline with [`merge`], which carries
//! logged history from the previous plan into the new one.

pub mod merge;
pub mod mutations;
pub mod periodization;
pub mod rest_days;
pub mod summary;
pub mod synthesizer;

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::config::PlannerConfig;
use crate::dates::{add_days, monday_on_or_before, weeks_between};
use crate::errors::AppResult;
use crate::models::athlete::AthleteProfile;
use crate::models::plan::{TrainingPlan, TrainingWeek};
use crate::models::race::RaceConfig;

use periodization::{weekly_hour_targets, PhaseAllocation};
use rest_days::adjust_rest_days;
use summary::recalculate_week_summary;
use synthesizer::{synthesize_week, WeekContext};

/// Generate a full training plan for a race goal
///
/// The plan spans every week from the Monday of the current week through
/// race week. A profile tailors the split, quality-session count, rest
/// days, and targets; omitting it yields a sensible intermediate default.
///
/// # Errors
///
/// Returns an error when the race config fails validation (race date not
/// at least one day out, weekly-hour budget out of range).
pub fn generate_plan(
    race: RaceConfig,
    profile: Option<&AthleteProfile>,
    today: NaiveDate,
) -> AppResult<TrainingPlan> {
    race.validate(today)?;
    let config = PlannerConfig::global();
    let default_profile = AthleteProfile::default();
    let profile = profile.unwrap_or(&default_profile);

    // Anchor the week count at the plan start so the final week reaches
    // race day even when generation happens late in the current week.
    let start = monday_on_or_before(today);
    let total_weeks = weeks_between(start, race.race_date).max(1) as u32;
    let allocation = PhaseAllocation::for_weeks(total_weeks);
    let targets = weekly_hour_targets(
        &allocation,
        race.max_weekly_hours,
        race.distance.tier(),
        config,
    );
    info!(
        race = %race.race_name,
        total_weeks,
        base = allocation.base,
        build = allocation.build,
        peak = allocation.peak,
        taper = allocation.taper,
        "generating training plan"
    );

    let mut weeks = Vec::with_capacity(total_weeks as usize);
    for index in 0..total_weeks {
        let (phase, week_in_phase) = allocation.phase_of_week(index);
        let target_hours = targets.get(index as usize).copied().unwrap_or(0.0);
        let ctx = WeekContext {
            phase,
            week_in_phase,
            target_hours,
            profile,
            config,
        };
        let week_start = add_days(start, i64::from(index) * 7);
        let days = adjust_rest_days(
            synthesize_week(&ctx, week_start),
            &profile.preferred_rest_days,
        );
        let mut week = TrainingWeek {
            week_number: index + 1,
            phase,
            week_in_phase,
            focus: phase.focus().to_owned(),
            total_hours: 0.0,
            days,
        };
        recalculate_week_summary(&mut week);
        weeks.push(week);
    }

    Ok(TrainingPlan::assemble(race, allocation.as_map(), weeks))
}

/// Generate a plan anchored at the local system date
///
/// # Errors
///
/// Same conditions as [`generate_plan`].
pub fn generate(race: RaceConfig, profile: Option<&AthleteProfile>) -> AppResult<TrainingPlan> {
    generate_plan(race, profile, Local::now().date_naive())
}

/// Regenerate a plan for an updated goal or profile, keeping logged history
///
/// Runs the full pipeline for the new inputs, then merges every logged day
/// of `previous` into the result.
///
/// # Errors
///
/// Same conditions as [`generate_plan`].
pub fn regenerate_plan(
    previous: &TrainingPlan,
    race: RaceConfig,
    profile: Option<&AthleteProfile>,
    today: NaiveDate,
) -> AppResult<TrainingPlan> {
    let fresh = generate_plan(race, profile, today)?;
    Ok(merge::merge_plans(previous, fresh))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::race::RaceDistance;

    fn race(weeks_out: i64) -> RaceConfig {
        RaceConfig {
            distance: RaceDistance::olympic(),
            race_name: "City Olympic".to_owned(),
            race_date: today() + chrono::Duration::weeks(weeks_out),
            target_hours: 2,
            target_minutes: 30,
            max_weekly_hours: 10.0,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 2).unwrap() // a Wednesday
    }

    #[test]
    fn test_generated_plan_spans_horizon_with_monday_weeks() {
        let plan = generate_plan(race(12), None, today()).unwrap();
        // Wednesday start: the Monday-aligned horizon needs a 13th week to
        // reach the race date.
        assert_eq!(plan.total_weeks, 13);
        assert_eq!(plan.weeks.len(), 13);
        let start = plan.weeks[0].days[0].date;
        assert_eq!(start, NaiveDate::from_ymd_opt(2026, 8, 31).unwrap());
        let last_day = plan.weeks.last().unwrap().days[6].date;
        assert!(last_day >= plan.race.race_date);
        for (i, week) in plan.weeks.iter().enumerate() {
            assert_eq!(week.week_number as usize, i + 1);
            assert_eq!(week.days.len(), 7);
            assert_eq!(week.days[0].day_of_week, "Monday");
        }
    }

    #[test]
    fn test_phase_weeks_sum_to_total() {
        let plan = generate_plan(race(16), None, today()).unwrap();
        let sum: u32 = plan.phase_weeks.values().sum();
        assert_eq!(sum, plan.total_weeks);
    }

    #[test]
    fn test_validation_failure_propagates() {
        assert!(generate_plan(race(0), None, today()).is_err());
    }

    #[test]
    fn test_one_day_horizon_yields_single_taper_week() {
        let mut cfg = race(12);
        cfg.race_date = today() + chrono::Duration::days(1);
        let plan = generate_plan(cfg, None, today()).unwrap();
        assert_eq!(plan.total_weeks, 1);
        assert_eq!(
            plan.weeks[0].phase,
            crate::models::plan::Phase::Taper
        );
    }

    #[test]
    fn test_preferred_rest_days_respected() {
        let profile = AthleteProfile {
            preferred_rest_days: vec!["friday".to_owned()],
            ..AthleteProfile::default()
        };
        let plan = generate_plan(race(8), Some(&profile), today()).unwrap();
        for week in &plan.weeks {
            assert!(week.days[4].is_rest_day, "week {} Friday", week.week_number);
        }
    }
}
