// ABOUTME: Domain constants for periodization, heart-rate derivation, and defaults
// ABOUTME: Values follow published endurance-training conventions; grouped by concern
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain constants based on established endurance-training practice
//!
//! These values are process-wide immutable configuration: loaded once,
//! read-only thereafter. Tunables that a deployment may reasonably override
//! live in [`crate::config::PlannerConfig`] instead.

/// Periodization phase proportions of the total plan length
pub mod phases {
    /// Base phase share of total weeks (aerobic foundation)
    pub const BASE_FRACTION: f64 = 0.40;

    /// Build phase share of total weeks (threshold and race-specific work)
    pub const BUILD_FRACTION: f64 = 0.30;

    /// Peak phase share of total weeks (highest load)
    pub const PEAK_FRACTION: f64 = 0.20;

    /// Taper phase share of total weeks (sharpen and recover)
    pub const TAPER_FRACTION: f64 = 0.10;
}

/// Heart-rate estimation formulas and zone band edges
///
/// References:
/// - Tanaka, H., Monahan, K.D., & Seals, D.R. (2001). "Age-predicted maximal
///   heart rate revisited." *J Am Coll Cardiol*, 37(1), 153-156.
/// - Karvonen, M.J. et al. (1957). "The effects of training on heart rate."
/// - Friel, J. (2009). "The Triathlete's Training Bible." LTHR zone banding.
pub mod heart_rate {
    /// Tanaka formula intercept: `maxHR = 208 - 0.7 x age`
    pub const TANAKA_INTERCEPT: f64 = 208.0;

    /// Tanaka formula age coefficient
    pub const TANAKA_AGE_COEFFICIENT: f64 = 0.7;

    /// LTHR as a fraction of maximum heart rate for trained endurance athletes
    pub const LTHR_MAX_HR_FRACTION: f64 = 0.89;

    /// Lowest physiologically plausible heart rate accepted as input (bpm)
    pub const MIN_PLAUSIBLE_HR: u32 = 40;

    /// Highest physiologically plausible heart rate accepted as input (bpm)
    pub const MAX_PLAUSIBLE_HR: u32 = 220;

    /// Five-zone banding as fractions of heart-rate reserve (Karvonen method)
    pub const HRR_ZONE_BANDS: [(f64, f64); 5] = [
        (0.50, 0.60),
        (0.60, 0.70),
        (0.70, 0.80),
        (0.80, 0.90),
        (0.90, 1.00),
    ];

    /// Five-zone banding as fractions of LTHR (Friel-style percentages)
    pub const LTHR_ZONE_BANDS: [(f64, f64); 5] = [
        (0.65, 0.81),
        (0.81, 0.89),
        (0.89, 0.94),
        (0.94, 1.00),
        (1.00, 1.06),
    ];

    /// Display labels for the five training zones, lowest to highest
    pub const ZONE_LABELS: [&str; 5] = [
        "Zone 1 (Recovery)",
        "Zone 2 (Aerobic)",
        "Zone 3 (Tempo)",
        "Zone 4 (Threshold)",
        "Zone 5 (VO2 Max)",
    ];
}

/// Defaults applied when no athlete profile (or profile field) is supplied
pub mod defaults {
    /// Default swim share of weekly training time (percent)
    pub const SWIM_SPLIT_PCT: u8 = 20;

    /// Default bike share of weekly training time (percent)
    pub const BIKE_SPLIT_PCT: u8 = 45;

    /// Default run share of weekly training time (percent)
    pub const RUN_SPLIT_PCT: u8 = 35;

    /// Percentage points shifted from the strongest to the weakest discipline
    pub const WEAKNESS_BIAS_PCT: u8 = 5;
}

/// Validation bounds for race configuration
pub mod limits {
    /// Minimum accepted weekly-hour budget
    pub const MIN_WEEKLY_HOURS: f64 = 2.0;

    /// Maximum accepted weekly-hour budget
    pub const MAX_WEEKLY_HOURS: f64 = 40.0;

    /// Shortest workout the synthesizer will schedule (minutes)
    pub const MIN_SESSION_MINUTES: u32 = 20;

    /// Session durations are rounded to this granularity (minutes)
    pub const SESSION_ROUND_MINUTES: u32 = 5;
}
