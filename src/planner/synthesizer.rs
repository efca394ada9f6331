// ABOUTME: Workout synthesizer: turns a week's phase and hour budget into seven days
// ABOUTME: Deterministic day-role template; only opaque workout ids vary between runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Workout Synthesizer
//!
//! Builds the seven [`TrainingDay`]s of one week from the week's phase,
//! position, hour target, and the athlete profile. The weekly template is
//! fixed: Monday rests, Tuesday/Thursday carry the run and bike quality
//! slots, Wednesday and Friday swim, the weekend holds the long endurance
//! sessions. Rest-day preferences are applied afterwards by the reconciler.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::PlannerConfig;
use crate::constants::limits;
use crate::dates::add_days;
use crate::models::athlete::AthleteProfile;
use crate::models::plan::{Phase, TrainingDay};
use crate::models::workout::{Discipline, Intensity, Workout, WorkoutStep};

/// Everything the synthesizer needs to build one week
#[derive(Debug, Clone, Copy)]
pub struct WeekContext<'a> {
    /// Periodization phase of this week
    pub phase: Phase,
    /// 1-based position within the phase
    pub week_in_phase: u32,
    /// Target training hours for the week
    pub target_hours: f64,
    /// Athlete profile (defaults applied by the caller when absent)
    pub profile: &'a AthleteProfile,
    /// Planner tunables
    pub config: &'a PlannerConfig,
}

/// Weekly minute budget per split discipline
#[derive(Debug, Clone, Copy)]
struct MinuteBudget {
    swim: u32,
    bike: u32,
    run: u32,
}

impl MinuteBudget {
    /// Distribute the week's minutes per the effective discipline split
    ///
    /// Integer division leaves a few minutes over; they go to the largest
    /// share so the outcome is deterministic.
    fn from_split(total_minutes: u32, ctx: &WeekContext<'_>) -> Self {
        let split = ctx.profile.effective_split();
        let share = |pct: u8| total_minutes * u32::from(pct) / 100;
        let mut budget = Self {
            swim: share(split.swim_pct),
            bike: share(split.bike_pct),
            run: share(split.run_pct),
        };
        let leftover = total_minutes - (budget.swim + budget.bike + budget.run);
        let largest = [
            (split.swim_pct, 0_usize),
            (split.bike_pct, 1),
            (split.run_pct, 2),
        ]
        .into_iter()
        .max_by_key(|(pct, idx)| (*pct, usize::MAX - idx))
        .map_or(1, |(_, idx)| idx);
        match largest {
            0 => budget.swim += leftover,
            2 => budget.run += leftover,
            _ => budget.bike += leftover,
        }
        budget
    }
}

/// Synthesize the seven days of a Monday-aligned week
#[must_use]
pub fn synthesize_week(ctx: &WeekContext<'_>, week_start: NaiveDate) -> Vec<TrainingDay> {
    let total_minutes = (ctx.target_hours * 60.0).round() as u32;
    let budget = MinuteBudget::from_split(total_minutes, ctx);
    debug!(
        phase = %ctx.phase,
        week_in_phase = ctx.week_in_phase,
        total_minutes,
        "synthesizing week"
    );

    let quality_slots = ctx.profile.experience.quality_sessions_per_week();
    // Quality slot priority: bike, run, swim. A slot outside the athlete's
    // budget degrades to an easy session of the same discipline.
    let bike_quality = quality_slots >= 1;
    let run_quality = quality_slots >= 2;
    let swim_quality = quality_slots >= 3;

    let brick_week = matches!(ctx.phase, Phase::Build | Phase::Peak)
        && ctx.week_in_phase % ctx.config.brick_week_interval == 0;

    // Within-discipline allocation: quality session takes the smaller share,
    // the weekend endurance session the larger one.
    let swim_a = round_session(budget.swim * 55 / 100);
    let swim_b = round_session(budget.swim.saturating_sub(swim_a));
    let bike_a = round_session(budget.bike * 40 / 100);
    let bike_b = round_session(budget.bike.saturating_sub(bike_a));
    let run_a = round_session(budget.run * 40 / 100);
    let mut run_b = round_session(budget.run.saturating_sub(run_a));
    let mut brick_run = 0;
    if brick_week && run_b > 2 * limits::MIN_SESSION_MINUTES {
        brick_run = round_session(run_b * 30 / 100);
        run_b = round_session(run_b - brick_run);
    }

    let strength_sessions = ctx.config.strength_per_week(ctx.phase);

    let mut days = Vec::with_capacity(7);
    for offset in 0..7_i64 {
        let date = add_days(week_start, offset);
        let day = match offset {
            // Monday: default rest day
            0 => TrainingDay::rest(date),
            1 => day_with(date, run_session(ctx, run_a, run_quality)),
            2 => {
                let mut workouts = collect(swim_session(ctx, swim_a, swim_quality));
                if strength_sessions >= 2 {
                    workouts.push(strength_session(ctx));
                }
                day_or_rest(date, workouts)
            }
            3 => day_with(date, bike_session(ctx, bike_a, bike_quality)),
            4 => {
                let mut workouts = collect(technique_swim(swim_b));
                if strength_sessions >= 1 {
                    workouts.push(strength_session(ctx));
                }
                day_or_rest(date, workouts)
            }
            5 => {
                if brick_run > 0 {
                    day_with(date, Some(brick_session(ctx, bike_b, brick_run)))
                } else {
                    day_with(date, long_ride(ctx, bike_b))
                }
            }
            _ => day_with(date, long_run(ctx, run_b)),
        };
        days.push(day);
    }
    days
}

fn collect(workout: Option<Workout>) -> Vec<Workout> {
    workout.into_iter().collect()
}

fn day_with(date: NaiveDate, workout: Option<Workout>) -> TrainingDay {
    day_or_rest(date, collect(workout))
}

fn day_or_rest(date: NaiveDate, workouts: Vec<Workout>) -> TrainingDay {
    if workouts.is_empty() {
        TrainingDay::rest(date)
    } else {
        TrainingDay::training(date, workouts)
    }
}

/// Round a session to the 5-minute grid; sub-minimum sessions vanish
fn round_session(minutes: u32) -> u32 {
    let rounded = (minutes + limits::SESSION_ROUND_MINUTES / 2) / limits::SESSION_ROUND_MINUTES
        * limits::SESSION_ROUND_MINUTES;
    if rounded < limits::MIN_SESSION_MINUTES {
        0
    } else {
        rounded
    }
}

/// Quality-session intensity for a phase
const fn quality_intensity(phase: Phase) -> Intensity {
    match phase {
        Phase::Base => Intensity::Tempo,
        Phase::Build => Intensity::Threshold,
        Phase::Peak => Intensity::Intervals,
        Phase::Taper => Intensity::Race,
    }
}

/// Warmup/main/cooldown step durations summing exactly to `total`
const fn step_minutes(total: u32) -> (u32, u32, u32) {
    let warmup = {
        let w = total / 5;
        if w < 5 {
            5
        } else if w > 15 {
            15
        } else {
            w
        }
    };
    let cooldown = {
        let c = total / 8;
        if c < 5 {
            5
        } else if c > 10 {
            10
        } else {
            c
        }
    };
    (warmup, total - warmup - cooldown, cooldown)
}

fn minutes_text(minutes: u32) -> String {
    format!("{minutes} min")
}

/// Zone label for an intensity, when the athlete has zones configured
fn zone_label(ctx: &WeekContext<'_>, intensity: Intensity) -> Option<String> {
    let zones = ctx.profile.heart_rate_zones.as_ref()?;
    let index = match intensity {
        Intensity::Recovery => 0,
        Intensity::Easy => 1,
        Intensity::Moderate | Intensity::Tempo => 2,
        Intensity::Threshold => 3,
        Intensity::Intervals | Intensity::Race => 4,
    };
    zones.label_for(index).map(str::to_owned)
}

fn with_optional_zone(mut step: WorkoutStep, ctx: &WeekContext<'_>) -> WorkoutStep {
    if let Some(zone) = zone_label(ctx, step.intensity) {
        step.target_zone = Some(zone);
    }
    step
}

/// Format seconds-per-100m as a swim pace string
fn swim_pace_text(sec_per_100m: u32) -> String {
    format!("{}:{:02}/100m", sec_per_100m / 60, sec_per_100m % 60)
}

/// Format seconds-per-km as a run pace string
fn run_pace_text(sec_per_km: u32) -> String {
    format!("{}:{:02}/km", sec_per_km / 60, sec_per_km % 60)
}

fn swim_session(ctx: &WeekContext<'_>, minutes: u32, quality: bool) -> Option<Workout> {
    if minutes == 0 {
        return None;
    }
    let quality = quality && !ctx.profile.has_injury_affecting(Discipline::Swim);
    let intensity = if quality {
        quality_intensity(ctx.phase)
    } else {
        Intensity::Easy
    };
    let (warmup, main, cooldown) = step_minutes(minutes);
    let (title, description, instructions) = if quality {
        (
            format!("{} Swim", title_word(intensity)),
            "Main-set swim at controlled hard effort.".to_owned(),
            format!(
                "Break the {main} min main set into 100-200m repeats at {intensity} effort \
                 with 15-20s rest between repeats."
            ),
        )
    } else {
        (
            "Endurance Swim".to_owned(),
            "Steady aerobic swim with relaxed form.".to_owned(),
            format!("Swim {main} min continuous at conversational effort, focus on long strokes."),
        )
    };

    let mut main_step = WorkoutStep::new("Main set", minutes_text(main), intensity, instructions);
    if let Some(css) = ctx.profile.baselines.swim_css_sec_per_100m {
        main_step = main_step.with_pace(swim_pace_text(css));
    }
    Some(Workout::new(
        Discipline::Swim,
        title,
        description,
        minutes,
        vec![
            WorkoutStep::new(
                "Warmup",
                minutes_text(warmup),
                Intensity::Easy,
                "Easy swimming, mix in drills.",
            ),
            with_optional_zone(main_step, ctx),
            WorkoutStep::new(
                "Cooldown",
                minutes_text(cooldown),
                Intensity::Recovery,
                "Easy backstroke or choice.",
            ),
        ],
    ))
}

fn technique_swim(minutes: u32) -> Option<Workout> {
    if minutes == 0 {
        return None;
    }
    let (warmup, main, cooldown) = step_minutes(minutes);
    Some(Workout::new(
        Discipline::Swim,
        "Technique Swim",
        "Drill-focused swim to sharpen form.",
        minutes,
        vec![
            WorkoutStep::new(
                "Warmup",
                minutes_text(warmup),
                Intensity::Easy,
                "Easy freestyle.",
            ),
            WorkoutStep::new(
                "Drill set",
                minutes_text(main),
                Intensity::Easy,
                "Alternate 50m drill / 50m swim: catch-up, single-arm, fist.",
            ),
            WorkoutStep::new(
                "Cooldown",
                minutes_text(cooldown),
                Intensity::Recovery,
                "Easy choice of stroke.",
            ),
        ],
    ))
}

fn bike_session(ctx: &WeekContext<'_>, minutes: u32, quality: bool) -> Option<Workout> {
    if minutes == 0 {
        return None;
    }
    let quality = quality && !ctx.profile.has_injury_affecting(Discipline::Bike);
    let intensity = if quality {
        quality_intensity(ctx.phase)
    } else {
        Intensity::Easy
    };
    let (warmup, main, cooldown) = step_minutes(minutes);
    let (title, instructions) = if quality {
        (
            format!("{} Bike", title_word(intensity)),
            format!(
                "Ride the {main} min main set as repeats of 4-8 min at {intensity} effort \
                 with half-length easy spins between."
            ),
        )
    } else {
        (
            "Easy Spin".to_owned(),
            format!("Ride {main} min at an easy conversational effort."),
        )
    };

    let mut main_step = WorkoutStep::new("Main set", minutes_text(main), intensity, instructions)
        .with_cadence("90-95 rpm");
    if quality {
        if let Some(ftp) = ctx.profile.baselines.bike_ftp_watts {
            main_step = main_step.with_pace(format!("95-105% of {ftp}W"));
        }
    }
    Some(Workout::new(
        Discipline::Bike,
        title,
        "Structured bike session on trainer or quiet roads.",
        minutes,
        vec![
            WorkoutStep::new(
                "Warmup",
                minutes_text(warmup),
                Intensity::Easy,
                "Easy spinning, build cadence gradually.",
            ),
            with_optional_zone(main_step, ctx),
            WorkoutStep::new(
                "Cooldown",
                minutes_text(cooldown),
                Intensity::Recovery,
                "Light gear, high cadence.",
            ),
        ],
    ))
}

fn run_session(ctx: &WeekContext<'_>, minutes: u32, quality: bool) -> Option<Workout> {
    if minutes == 0 {
        return None;
    }
    let quality = quality && !ctx.profile.has_injury_affecting(Discipline::Run);
    let intensity = if quality {
        quality_intensity(ctx.phase)
    } else {
        Intensity::Easy
    };
    let (warmup, main, cooldown) = step_minutes(minutes);
    let (title, instructions) = if quality {
        (
            format!("{} Run", title_word(intensity)),
            format!(
                "Run the {main} min main set as 3-6 min repeats at {intensity} effort \
                 with equal jog recoveries."
            ),
        )
    } else {
        (
            "Easy Run".to_owned(),
            format!("Run {main} min relaxed; walk breaks are fine."),
        )
    };

    let mut main_step = WorkoutStep::new("Main set", minutes_text(main), intensity, instructions);
    if quality {
        if let Some(pace) = ctx.profile.baselines.run_threshold_sec_per_km {
            main_step = main_step.with_pace(run_pace_text(pace));
        }
    }
    Some(Workout::new(
        Discipline::Run,
        title,
        "Structured run with warmup and cooldown jogs.",
        minutes,
        vec![
            WorkoutStep::new(
                "Warmup",
                minutes_text(warmup),
                Intensity::Easy,
                "Easy jog, add a few strides at the end.",
            ),
            with_optional_zone(main_step, ctx),
            WorkoutStep::new(
                "Cooldown",
                minutes_text(cooldown),
                Intensity::Recovery,
                "Easy jog to walk.",
            ),
        ],
    ))
}

fn long_ride(ctx: &WeekContext<'_>, minutes: u32) -> Option<Workout> {
    if minutes == 0 {
        return None;
    }
    let intensity = if matches!(ctx.phase, Phase::Base | Phase::Taper) {
        Intensity::Easy
    } else {
        Intensity::Moderate
    };
    let step = WorkoutStep::new(
        "Endurance ride",
        minutes_text(minutes),
        intensity,
        "Steady aerobic riding; practice eating and drinking on the bike.",
    )
    .with_cadence("85-95 rpm");
    Some(
        Workout::new(
            Discipline::Bike,
            "Long Ride",
            "Weekly endurance ride building race-distance durability.",
            minutes,
            vec![with_optional_zone(step, ctx)],
        )
        .with_tips(vec![
            "Fuel every 30-40 minutes.".to_owned(),
            "Ride the flats in an aero position when safe.".to_owned(),
        ]),
    )
}

fn long_run(ctx: &WeekContext<'_>, minutes: u32) -> Option<Workout> {
    if minutes == 0 {
        return None;
    }
    let intensity = if matches!(ctx.phase, Phase::Base | Phase::Taper) {
        Intensity::Easy
    } else {
        Intensity::Moderate
    };
    let step = WorkoutStep::new(
        "Endurance run",
        minutes_text(minutes),
        intensity,
        "Steady aerobic running on soft surfaces where possible.",
    );
    Some(
        Workout::new(
            Discipline::Run,
            "Long Run",
            "Weekly endurance run building run-leg durability.",
            minutes,
            vec![with_optional_zone(step, ctx)],
        )
        .with_tips(vec!["Carry fluids on runs over an hour.".to_owned()]),
    )
}

fn brick_session(ctx: &WeekContext<'_>, bike_minutes: u32, run_minutes: u32) -> Workout {
    let total = bike_minutes + run_minutes;
    let bike_step = WorkoutStep::new(
        "Bike",
        minutes_text(bike_minutes),
        Intensity::Moderate,
        "Steady ride finishing at race effort for the last 10 minutes.",
    )
    .with_cadence("85-95 rpm");
    let run_step = WorkoutStep::new(
        "Transition run",
        minutes_text(run_minutes),
        Intensity::Moderate,
        "Rack the bike and run immediately; expect heavy legs for the first minutes.",
    );
    Workout::new(
        Discipline::Brick,
        "Brick: Bike + Run",
        "Bike-to-run transition session simulating race conditions.",
        total,
        vec![
            with_optional_zone(bike_step, ctx),
            with_optional_zone(run_step, ctx),
        ],
    )
    .with_tips(vec![
        "Lay out run shoes before starting the ride.".to_owned(),
        "Keep the transition under two minutes.".to_owned(),
    ])
}

fn strength_session(ctx: &WeekContext<'_>) -> Workout {
    let minutes = ctx.config.strength_minutes;
    Workout::new(
        Discipline::Strength,
        "Strength & Core",
        "General strength circuit supporting all three disciplines.",
        minutes,
        vec![
            WorkoutStep::new(
                "Activation",
                minutes_text(5),
                Intensity::Easy,
                "Band work and dynamic mobility.",
            ),
            WorkoutStep::new(
                "Circuit",
                minutes_text(minutes.saturating_sub(5)),
                Intensity::Moderate,
                "2-3 rounds: squats, lunges, planks, single-leg deadlifts, push-ups.",
            ),
        ],
    )
}

/// Title word for quality sessions ("Tempo", "Threshold", ...)
fn title_word(intensity: Intensity) -> String {
    let s = intensity.to_string();
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |c| {
        c.to_uppercase().collect::<String>() + chars.as_str()
    })
}
