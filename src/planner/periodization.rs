// ABOUTME: Periodization planner: phase-length allocation and weekly hour ramp
// ABOUTME: Deterministic mapping from total weeks to phases and per-week hour targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeMap;

use crate::config::PlannerConfig;
use crate::constants::phases;
use crate::models::plan::Phase;
use crate::models::race::DistanceTier;

/// Week counts per phase; sums to the plan's total weeks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseAllocation {
    /// Base phase weeks
    pub base: u32,
    /// Build phase weeks
    pub build: u32,
    /// Peak phase weeks
    pub peak: u32,
    /// Taper phase weeks
    pub taper: u32,
}

impl PhaseAllocation {
    /// Allocate phases for a plan of `total_weeks`
    ///
    /// Uses the ~40/30/20/10 proportions with every phase getting at least
    /// one week whenever four or more weeks are available. Shorter horizons
    /// collapse from the front: the phases nearest the race are the ones
    /// that still matter when it is imminent.
    #[must_use]
    pub fn for_weeks(total_weeks: u32) -> Self {
        let n = total_weeks.max(1);
        match n {
            1 => Self { base: 0, build: 0, peak: 0, taper: 1 },
            2 => Self { base: 0, build: 0, peak: 1, taper: 1 },
            3 => Self { base: 0, build: 1, peak: 1, taper: 1 },
            _ => Self::proportional(n),
        }
    }

    fn proportional(n: u32) -> Self {
        let fractions = [
            phases::BASE_FRACTION,
            phases::BUILD_FRACTION,
            phases::PEAK_FRACTION,
            phases::TAPER_FRACTION,
        ];
        let mut counts = [0_u32; 4];
        let mut remainders = [0.0_f64; 4];
        for (i, fraction) in fractions.iter().enumerate() {
            let raw = fraction * f64::from(n);
            counts[i] = raw.floor() as u32;
            remainders[i] = raw - raw.floor();
        }
        // Every phase is present once n reaches 4.
        for i in 0..4 {
            if counts[i] == 0 {
                counts[i] = 1;
                remainders[i] = 0.0;
            }
        }
        // Hand remaining weeks to the largest fractional remainders;
        // repeated picks cycle so the loop always terminates.
        let mut sum: u32 = counts.iter().sum();
        while sum < n {
            let mut pick = 0;
            for i in 1..4 {
                if remainders[i] > remainders[pick] {
                    pick = i;
                }
            }
            counts[pick] += 1;
            remainders[pick] -= 1.0;
            sum += 1;
        }
        Self {
            base: counts[0],
            build: counts[1],
            peak: counts[2],
            taper: counts[3],
        }
    }

    /// Total allocated weeks
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.base + self.build + self.peak + self.taper
    }

    /// Week count for one phase
    #[must_use]
    pub const fn weeks_in(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Base => self.base,
            Phase::Build => self.build,
            Phase::Peak => self.peak,
            Phase::Taper => self.taper,
        }
    }

    /// Phase and 1-based position within it for a 0-based plan week index
    #[must_use]
    pub fn phase_of_week(&self, week_index: u32) -> (Phase, u32) {
        let mut remaining = week_index;
        for phase in Phase::ORDERED {
            let len = self.weeks_in(phase);
            if remaining < len {
                return (phase, remaining + 1);
            }
            remaining -= len;
        }
        // Past the end; callers iterate 0..total() so this is the last week.
        (Phase::Taper, self.taper.max(1))
    }

    /// Phase-length map for the plan aggregate; zero-week phases are omitted
    #[must_use]
    pub fn as_map(&self) -> BTreeMap<Phase, u32> {
        Phase::ORDERED
            .into_iter()
            .filter_map(|p| {
                let len = self.weeks_in(p);
                (len > 0).then_some((p, len))
            })
            .collect()
    }
}

/// Target training hours for every week of the plan
///
/// Ramps from roughly half the budget at the start of base (lifted to the
/// race tier's floor when the budget allows) up to the full budget in peak,
/// then tapers sharply to `taper_fraction` of the budget in the final week.
#[must_use]
pub fn weekly_hour_targets(
    allocation: &PhaseAllocation,
    max_hours: f64,
    tier: DistanceTier,
    config: &PlannerConfig,
) -> Vec<f64> {
    let base_end = max_hours * config.base_end_fraction;
    let start = (max_hours * config.base_start_fraction)
        .max(tier.base_floor_hours().min(base_end));
    let build_end = max_hours * config.build_end_fraction;
    let peak = max_hours * config.peak_fraction;
    let taper_floor = max_hours * config.taper_fraction;

    let mut targets = Vec::with_capacity(allocation.total() as usize);
    push_linear(&mut targets, allocation.base, start, base_end);
    push_linear(&mut targets, allocation.build, base_end, build_end);
    for _ in 0..allocation.peak {
        targets.push(round_tenth(peak.min(max_hours)));
    }
    // Taper descends from peak load to the final-week floor.
    push_linear(&mut targets, allocation.taper, peak, taper_floor);
    targets
}

/// Linear ramp (or descent) over `weeks` ending exactly at `to`
fn push_linear(targets: &mut Vec<f64>, weeks: u32, from: f64, to: f64) {
    for i in 0..weeks {
        let t = f64::from(i + 1) / f64::from(weeks);
        targets.push(round_tenth((to - from).mul_add(t, from)));
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
