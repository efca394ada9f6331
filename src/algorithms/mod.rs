// ABOUTME: Heart-rate derivation algorithms used by the profile wizard paths
// ABOUTME: Max-HR estimation, LTHR estimation, and five-zone banding
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heart-rate derivation algorithms
//!
//! Two wizard paths produce a zone set: directly from a measured LTHR, or
//! from age plus resting heart rate (estimated max HR, then heart-rate
//! reserve banding). Both representations are supported and serializable.

/// LTHR estimation from maximum heart rate
pub mod lthr;

/// Age-predicted maximum heart rate (Tanaka formula)
pub mod maxhr;

/// Five-zone heart-rate band construction
pub mod zones;

pub use lthr::estimate_lthr;
pub use maxhr::estimate_max_hr;
pub use zones::{HeartRateZone, HeartRateZones, ZoneBasis};
