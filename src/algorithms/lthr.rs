// ABOUTME: Lactate threshold heart rate estimation from maximum heart rate
// ABOUTME: LTHR = 89% of max HR, the trained-endurance-athlete percentage
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::heart_rate;
use crate::errors::{AppError, AppResult};

/// Estimate LTHR as a fixed percentage of maximum heart rate
///
/// `LTHR = round(0.89 x maxHR)`. Individual variation is ±5-10 bpm; a field
/// test is more accurate when available, but this estimate is what the
/// age-based wizard path uses.
///
/// # Errors
///
/// Returns `ValueOutOfRange` if the max HR is outside the plausible 40-220
/// bpm range.
///
/// # Example
///
/// ```
/// use triplan_core::algorithms::estimate_lthr;
///
/// assert_eq!(estimate_lthr(180).unwrap(), 160);
/// ```
pub fn estimate_lthr(max_hr: u32) -> AppResult<u32> {
    validate_hr(max_hr, "maximum heart rate")?;
    Ok((f64::from(max_hr) * heart_rate::LTHR_MAX_HR_FRACTION).round() as u32)
}

/// Validate a heart rate against the plausible physiological range
pub(crate) fn validate_hr(hr: u32, what: &str) -> AppResult<()> {
    if hr < heart_rate::MIN_PLAUSIBLE_HR || hr > heart_rate::MAX_PLAUSIBLE_HR {
        return Err(AppError::value_out_of_range(format!(
            "{what} must be between {} and {} bpm, got {hr}",
            heart_rate::MIN_PLAUSIBLE_HR,
            heart_rate::MAX_PLAUSIBLE_HR
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lthr_reference_values() {
        assert_eq!(estimate_lthr(180).unwrap(), 160); // 160.2 rounds down
        assert_eq!(estimate_lthr(187).unwrap(), 166); // 166.43 rounds down
        assert_eq!(estimate_lthr(200).unwrap(), 178);
    }

    #[test]
    fn test_hr_bounds() {
        assert!(estimate_lthr(39).is_err());
        assert!(estimate_lthr(221).is_err());
        assert!(estimate_lthr(190).is_ok());
    }
}
