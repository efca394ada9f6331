// ABOUTME: Age-predicted maximum heart rate estimation
// ABOUTME: Tanaka formula (208 - 0.7 x age), the current gold standard
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::heart_rate;
use crate::errors::{AppError, AppResult};

/// Estimate maximum heart rate from age using the Tanaka formula
///
/// `maxHR = 208 - 0.7 x age`, rounded to the nearest beat.
///
/// Based on a meta-analysis of 18,712 subjects; standard deviation ±7-8 bpm.
/// Reference: Tanaka, H., Monahan, K.D., & Seals, D.R. (2001).
/// "Age-predicted maximal heart rate revisited." *J Am Coll Cardiol*, 37(1).
///
/// # Errors
///
/// Returns `ValueOutOfRange` if age is outside 1-120 years.
///
/// # Example
///
/// ```
/// use triplan_core::algorithms::estimate_max_hr;
///
/// assert_eq!(estimate_max_hr(30).unwrap(), 187);
/// ```
pub fn estimate_max_hr(age: u32) -> AppResult<u32> {
    if age == 0 || age > 120 {
        return Err(AppError::value_out_of_range(format!(
            "age must be between 1 and 120 years, got {age}"
        )));
    }

    let estimate = heart_rate::TANAKA_AGE_COEFFICIENT
        .mul_add(-f64::from(age), heart_rate::TANAKA_INTERCEPT);
    Ok(estimate.round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tanaka_reference_values() {
        assert_eq!(estimate_max_hr(30).unwrap(), 187); // 208 - 21
        assert_eq!(estimate_max_hr(40).unwrap(), 180); // 208 - 28
        assert_eq!(estimate_max_hr(25).unwrap(), 191); // 208 - 17.5, rounded
    }

    #[test]
    fn test_age_bounds() {
        assert!(estimate_max_hr(0).is_err());
        assert!(estimate_max_hr(121).is_err());
        assert!(estimate_max_hr(1).is_ok());
        assert!(estimate_max_hr(120).is_ok());
    }
}
