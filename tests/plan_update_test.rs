// ABOUTME: Integration tests for plan mutations and regeneration merge
// ABOUTME: Logged history must survive edits, moves, and full regeneration
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plan Update Tests
//!
//! Cover the mutation operations (replace, move, log completion) and the
//! regeneration path that merges logged history into a fresh plan.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, NaiveDate, Utc};
use triplan_core::models::{
    AthleteProfile, CompletionStatus, Discipline, Intensity, RaceConfig, RaceDistance, Workout,
    WorkoutStep,
};
use triplan_core::planner::mutations::{
    log_completion, move_workout, replace_workout, CompletionInput,
};
use triplan_core::planner::{generate_plan, regenerate_plan};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 31).unwrap() // a Monday
}

fn race(weeks_out: i64) -> RaceConfig {
    RaceConfig {
        distance: RaceDistance::olympic(),
        race_name: "City Olympic".to_owned(),
        race_date: today() + Duration::weeks(weeks_out),
        target_hours: 2,
        target_minutes: 45,
        max_weekly_hours: 9.0,
    }
}

fn completed(effort: u8) -> CompletionInput {
    CompletionInput {
        status: CompletionStatus::Completed,
        actual_duration_minutes: 50,
        perceived_effort: Some(effort),
        notes: None,
    }
}

/// First non-rest workout on or after the plan start
fn first_session(plan: &triplan_core::TrainingPlan) -> (NaiveDate, String) {
    plan.weeks
        .iter()
        .flat_map(|w| w.days.iter())
        .find(|d| !d.is_rest_day)
        .map(|d| (d.date, d.workouts[0].id.clone()))
        .unwrap()
}

#[test]
fn test_replace_then_totals_stay_consistent() {
    let mut plan = generate_plan(race(12), None, today()).unwrap();
    let (date, id) = first_session(&plan);

    let replacement = Workout::new(
        Discipline::Swim,
        "Open Water Swim",
        "Race-venue familiarization swim.",
        40,
        vec![WorkoutStep::new(
            "Main",
            "40 min",
            Intensity::Easy,
            "Sight every few strokes.",
        )],
    );
    replace_workout(&mut plan, date, &id, replacement).unwrap();

    let week = &plan.weeks[0];
    let minutes: u32 = week
        .days
        .iter()
        .flat_map(|d| d.workouts.iter())
        .map(|w| w.total_duration)
        .sum();
    let expected = (f64::from(minutes) / 60.0 * 10.0).round() / 10.0;
    assert!((week.total_hours - expected).abs() < f64::EPSILON);
    assert_eq!(plan.day(date).unwrap().workouts[0].title, "Open Water Swim");
}

#[test]
fn test_move_workout_across_weeks_updates_both_summaries() {
    let mut plan = generate_plan(race(12), None, today()).unwrap();
    let (from, id) = first_session(&plan);
    // Move onto the second week's rest day.
    let to = plan.weeks[1]
        .days
        .iter()
        .find(|d| d.is_rest_day)
        .map(|d| d.date)
        .unwrap();
    let before_w1 = plan.weeks[0].total_hours;
    let before_w2 = plan.weeks[1].total_hours;

    move_workout(&mut plan, from, to, &id).unwrap();

    assert!(plan.weeks[0].total_hours < before_w1);
    assert!(plan.weeks[1].total_hours > before_w2);
    let dest = plan.day(to).unwrap();
    assert!(!dest.is_rest_day);
    assert!(dest.workouts.iter().all(|w| w.discipline != Discipline::Rest));
}

#[test]
fn test_regeneration_preserves_logged_days() {
    let mut plan = generate_plan(race(12), None, today()).unwrap();
    let (date, id) = first_session(&plan);
    log_completion(&mut plan, &id, &completed(6), Utc::now()).unwrap();

    // The athlete raises their budget; the plan is regenerated mid-week.
    let mut updated = race(12);
    updated.max_weekly_hours = 12.0;
    let merged =
        regenerate_plan(&plan, updated, None, today() + Duration::days(3)).unwrap();

    let day = merged.day(date).unwrap();
    assert!(day.has_logged_workout());
    assert_eq!(day.workouts[0].id, id, "logged day carried over wholesale");
}

#[test]
fn test_regeneration_with_profile_change_keeps_unlogged_days_fresh() {
    let plan = generate_plan(race(12), None, today()).unwrap();
    let profile = AthleteProfile {
        preferred_rest_days: vec!["saturday".to_owned()],
        ..AthleteProfile::default()
    };
    let merged = regenerate_plan(&plan, race(12), Some(&profile), today()).unwrap();

    // No logged history: every week obeys the new rest preference.
    for week in &merged.weeks {
        assert!(week.days[5].is_rest_day, "week {}", week.week_number);
    }
}

#[test]
fn test_completion_then_compliance_reflects_history() {
    let mut plan = generate_plan(race(12), None, today()).unwrap();
    let (date, id) = first_session(&plan);
    log_completion(&mut plan, &id, &completed(4), Utc::now()).unwrap();

    let remaining: Vec<String> = plan
        .day(date)
        .unwrap()
        .workouts
        .iter()
        .skip(1)
        .map(|w| w.id.clone())
        .collect();
    for other in &remaining {
        let input = CompletionInput {
            status: CompletionStatus::Skipped,
            actual_duration_minutes: 0,
            perceived_effort: None,
            notes: Some("travel day".to_owned()),
        };
        log_completion(&mut plan, other, &input, Utc::now()).unwrap();
    }

    let score = triplan_core::compliance::compliance_score(&plan, date);
    let scheduled = 1 + remaining.len();
    let expected = 1.0 / scheduled as f64 * 100.0;
    assert!((score - expected).abs() < 1e-9);
}
