// ABOUTME: Integration tests for end-to-end plan generation
// ABOUTME: Covers periodization shape, hour ramp, rest placement, and serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plan Generation Tests
//!
//! Exercise the full pipeline through the public API: validation,
//! periodization, synthesis, rest-day reconciliation, and the serialized
//! exchange format.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use triplan_core::models::{
    AthleteProfile, Discipline, ExperienceLevel, Phase, RaceConfig, RaceDistance,
};
use triplan_core::planner::generate_plan;
use triplan_core::AppError;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 31).unwrap() // a Monday
}

fn race(distance: RaceDistance, weeks_out: i64, max_weekly_hours: f64) -> RaceConfig {
    RaceConfig {
        distance,
        race_name: "Test Race".to_owned(),
        race_date: today() + Duration::weeks(weeks_out),
        target_hours: 2,
        target_minutes: 30,
        max_weekly_hours,
    }
}

#[test]
fn test_sixteen_week_olympic_plan_shape() {
    let plan = generate_plan(race(RaceDistance::olympic(), 16, 10.0), None, today()).unwrap();

    assert_eq!(plan.total_weeks, 16);
    assert_eq!(plan.weeks.len(), 16);
    let phase_sum: u32 = plan.phase_weeks.values().sum();
    assert_eq!(phase_sum, 16);
    assert!(plan.phase_weeks.contains_key(&Phase::Base));
    assert!(plan.phase_weeks.contains_key(&Phase::Taper));

    // Weeks are Monday-aligned, contiguous, and seven days long.
    let mut expected = plan.weeks[0].days[0].date;
    assert_eq!(expected.weekday(), Weekday::Mon);
    for week in &plan.weeks {
        assert_eq!(week.days.len(), 7);
        for day in &week.days {
            assert_eq!(day.date, expected);
            expected += Duration::days(1);
        }
    }

    // Phases appear in canonical order week over week.
    let phases: Vec<Phase> = plan.weeks.iter().map(|w| w.phase).collect();
    let mut sorted = phases.clone();
    sorted.sort();
    assert_eq!(phases, sorted);
}

#[test]
fn test_hour_ramp_peaks_then_tapers() {
    let plan = generate_plan(race(RaceDistance::half(), 20, 12.0), None, today()).unwrap();

    let peak_week_hours = plan
        .weeks
        .iter()
        .filter(|w| w.phase == Phase::Peak)
        .map(|w| w.total_hours)
        .fold(0.0_f64, f64::max);
    let final_week = plan.weeks.last().unwrap();
    assert_eq!(final_week.phase, Phase::Taper);
    assert!(
        final_week.total_hours < peak_week_hours,
        "taper {} should be below peak {}",
        final_week.total_hours,
        peak_week_hours
    );
    // Nothing exceeds the athlete's stated ceiling by more than the strength
    // add-on and session rounding.
    for week in &plan.weeks {
        assert!(
            week.total_hours <= 13.0,
            "week {} at {} hours",
            week.week_number,
            week.total_hours
        );
    }
}

#[test]
fn test_every_week_has_rest_and_training() {
    let plan = generate_plan(race(RaceDistance::sprint(), 10, 6.0), None, today()).unwrap();
    for week in &plan.weeks {
        assert!(
            week.days.iter().any(|d| d.is_rest_day),
            "week {} has no rest day",
            week.week_number
        );
        assert!(
            week.days.iter().any(|d| !d.is_rest_day),
            "week {} has no training",
            week.week_number
        );
        // Rest days carry exactly one synthetic rest workout.
        for day in week.days.iter().filter(|d| d.is_rest_day) {
            assert_eq!(day.workouts.len(), 1);
            assert_eq!(day.workouts[0].discipline, Discipline::Rest);
            assert_eq!(day.workouts[0].total_duration, 0);
        }
    }
}

#[test]
fn test_preferred_rest_days_placed_every_week() {
    let profile = AthleteProfile {
        preferred_rest_days: vec!["wednesday".to_owned()],
        ..AthleteProfile::default()
    };
    let plan = generate_plan(
        race(RaceDistance::olympic(), 12, 9.0),
        Some(&profile),
        today(),
    )
    .unwrap();
    for week in &plan.weeks {
        let wednesday = &week.days[2];
        assert_eq!(wednesday.day_of_week, "Wednesday");
        assert!(
            wednesday.is_rest_day,
            "week {} Wednesday trains",
            week.week_number
        );
    }
}

#[test]
fn test_beginner_gets_fewer_quality_sessions_than_advanced() {
    let quality_titles = |level: ExperienceLevel| -> usize {
        let profile = AthleteProfile {
            experience: level,
            ..AthleteProfile::default()
        };
        let plan = generate_plan(
            race(RaceDistance::olympic(), 12, 9.0),
            Some(&profile),
            today(),
        )
        .unwrap();
        // Count hard sessions in a mid-plan build week.
        let week = plan
            .weeks
            .iter()
            .find(|w| w.phase == Phase::Build)
            .unwrap();
        week.days
            .iter()
            .flat_map(|d| d.workouts.iter())
            .filter(|w| w.dominant_intensity().target_rpe() >= 6)
            .count()
    };

    assert!(quality_titles(ExperienceLevel::Beginner) < quality_titles(ExperienceLevel::Advanced));
}

#[test]
fn test_rejects_race_in_the_past() {
    let mut cfg = race(RaceDistance::sprint(), 8, 6.0);
    cfg.race_date = today() - Duration::days(30);
    let err = generate_plan(cfg, None, today()).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn test_rejects_implausible_weekly_hours() {
    let err = generate_plan(race(RaceDistance::sprint(), 8, 0.5), None, today()).unwrap_err();
    assert!(matches!(err, AppError::ValueOutOfRange(_)));
}

#[test]
fn test_plan_round_trips_through_json() {
    let plan = generate_plan(race(RaceDistance::full(), 24, 14.0), None, today()).unwrap();
    let json = serde_json::to_string(&plan).unwrap();
    let restored: triplan_core::TrainingPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(plan, restored);

    // Exchange format uses camelCase aggregates and snake_case enums.
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.get("totalWeeks").is_some());
    assert!(value.get("phaseWeeks").and_then(|p| p.get("base")).is_some());
}
