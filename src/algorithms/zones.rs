// ABOUTME: Five-zone heart-rate band construction from LTHR or age+resting HR
// ABOUTME: Both wizard paths are supported: %LTHR banding and Karvonen HRR banding
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

use crate::algorithms::lthr::validate_hr;
use crate::algorithms::maxhr::estimate_max_hr;
use crate::constants::heart_rate;
use crate::errors::{AppError, AppResult};

/// One heart-rate training zone
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeartRateZone {
    /// Display label ("Zone 4 (Threshold)")
    pub label: String,
    /// Zone floor in bpm (inclusive)
    pub min_bpm: u32,
    /// Zone ceiling in bpm (inclusive)
    pub max_bpm: u32,
}

/// How a zone set was derived; kept so the wizard can re-open either path
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ZoneBasis {
    /// Percent-of-LTHR banding anchored on a measured or estimated LTHR
    Lthr {
        /// Lactate threshold heart rate, bpm
        lthr: u32,
    },
    /// Karvonen banding on heart-rate reserve from age and resting HR
    HeartRateReserve {
        /// Estimated maximum heart rate, bpm
        max_hr: u32,
        /// Resting heart rate, bpm
        resting_hr: u32,
    },
}

/// A complete five-zone set with its derivation basis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeartRateZones {
    /// Derivation method and anchors
    pub basis: ZoneBasis,
    /// Five zones, lowest to highest
    pub zones: Vec<HeartRateZone>,
}

impl HeartRateZones {
    /// Build zones from a lactate threshold heart rate
    ///
    /// Friel-style %LTHR banding; zone 4 spans 94-100% of LTHR, so its
    /// ceiling is the LTHR itself.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for an implausible LTHR.
    pub fn from_lthr(lthr: u32) -> AppResult<Self> {
        validate_hr(lthr, "LTHR")?;
        let zones = heart_rate::LTHR_ZONE_BANDS
            .iter()
            .zip(heart_rate::ZONE_LABELS)
            .map(|(&(lo, hi), label)| HeartRateZone {
                label: label.to_owned(),
                min_bpm: (f64::from(lthr) * lo).round() as u32,
                max_bpm: (f64::from(lthr) * hi).round() as u32,
            })
            .collect();
        Ok(Self {
            basis: ZoneBasis::Lthr { lthr },
            zones,
        })
    }

    /// Build zones from age and resting HR (Tanaka max HR, Karvonen bands)
    ///
    /// Zone edges sit at 50-60/60-70/70-80/80-90/90-100% of heart-rate
    /// reserve above resting.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for an invalid age, an implausible resting
    /// HR, or a resting HR at or above the estimated max.
    pub fn from_age_and_resting_hr(age: u32, resting_hr: u32) -> AppResult<Self> {
        let max_hr = estimate_max_hr(age)?;
        validate_hr(resting_hr, "resting heart rate")?;
        if resting_hr >= max_hr {
            return Err(AppError::value_out_of_range(format!(
                "resting HR {resting_hr} must be below estimated max HR {max_hr}"
            )));
        }

        let reserve = f64::from(max_hr - resting_hr);
        let zones = heart_rate::HRR_ZONE_BANDS
            .iter()
            .zip(heart_rate::ZONE_LABELS)
            .map(|(&(lo, hi), label)| HeartRateZone {
                label: label.to_owned(),
                min_bpm: reserve.mul_add(lo, f64::from(resting_hr)).round() as u32,
                max_bpm: reserve.mul_add(hi, f64::from(resting_hr)).round() as u32,
            })
            .collect();
        Ok(Self {
            basis: ZoneBasis::HeartRateReserve { max_hr, resting_hr },
            zones,
        })
    }

    /// Label of the zone matching an intensity-class index (0-based)
    #[must_use]
    pub fn label_for(&self, zone_index: usize) -> Option<&str> {
        self.zones.get(zone_index).map(|z| z.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lthr_zone4_edges() {
        let zones = HeartRateZones::from_lthr(160).unwrap();
        let zone4 = &zones.zones[3];
        assert_eq!(zone4.min_bpm, (160.0_f64 * 0.94).round() as u32);
        assert_eq!(zone4.max_bpm, 160);
    }

    #[test]
    fn test_lthr_zones_are_ordered() {
        let zones = HeartRateZones::from_lthr(165).unwrap();
        assert_eq!(zones.zones.len(), 5);
        for pair in zones.zones.windows(2) {
            assert!(pair[0].min_bpm < pair[1].min_bpm);
            assert!(pair[0].max_bpm <= pair[1].min_bpm + 1);
        }
    }

    #[test]
    fn test_karvonen_banding() {
        // Age 30 -> max 187; resting 60 -> reserve 127.
        let zones = HeartRateZones::from_age_and_resting_hr(30, 60).unwrap();
        assert_eq!(
            zones.basis,
            ZoneBasis::HeartRateReserve {
                max_hr: 187,
                resting_hr: 60
            }
        );
        let zone1 = &zones.zones[0];
        assert_eq!(zone1.min_bpm, 124); // 60 + 0.5*127 = 123.5
        assert_eq!(zone1.max_bpm, 136); // 60 + 0.6*127 = 136.2
        assert_eq!(zones.zones[4].max_bpm, 187);
    }

    #[test]
    fn test_resting_must_be_below_max() {
        assert!(HeartRateZones::from_age_and_resting_hr(30, 190).is_err());
    }

    #[test]
    fn test_zone_set_round_trips_through_json() {
        let zones = HeartRateZones::from_lthr(158).unwrap();
        let json = serde_json::to_string(&zones).unwrap();
        let back: HeartRateZones = serde_json::from_str(&json).unwrap();
        assert_eq!(back, zones);
    }
}
