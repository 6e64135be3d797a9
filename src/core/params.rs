//! Advisory parameter estimation.
//!
//! Given a bit budget and an expected number of items, this module reports
//! the classic Bloom filter sizing guidance: how many hash functions to use
//! and the resulting false positive probability. The output is advisory
//! only; construction does not enforce it.
//!
//! # Mathematical Background
//!
//! With `m` bits and `n` expected items, the hash count that minimizes the
//! false positive rate is:
//!
//! ```text
//! k = ln(2) * m / n  ≈ 0.6931 * m / n
//! ```
//!
//! and at that optimum the false positive probability is:
//!
//! ```text
//! p = 0.5^k = 0.6185^(m/n)
//! ```

use crate::error::{FilterError, Result};

/// ln(2), the factor relating bits-per-item to the optimal hash count.
const LN_2: f64 = std::f64::consts::LN_2;

/// Base of the optimal false positive probability, `0.5^ln(2)`.
const FPP_BASE: f64 = 0.6185;

/// Advisory sizing estimate for a filter configuration.
///
/// Produced by [`estimate`]. Values are reported raw (un-rounded) so callers
/// can apply their own rounding policy when choosing an integer hash count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Optimal number of hash functions, `ln(2) * bit_count / expected_items`.
    pub hash_count: f64,

    /// False positive probability at that optimum, as a percentage in
    /// [0, 100].
    pub false_positive_percent: f64,
}

impl Estimate {
    /// Render the estimate as a one-line human-readable report.
    ///
    /// # Examples
    ///
    /// ```
    /// use saltbloom::core::params::estimate;
    ///
    /// let est = estimate(800, 80).unwrap();
    /// let report = est.report();
    /// assert!(report.contains("hash functions"));
    /// ```
    #[must_use]
    pub fn report(&self) -> String {
        format!(
            "optimal hash functions: {:.2}, false positive probability: {:.4}%",
            self.hash_count, self.false_positive_percent
        )
    }
}

impl std::fmt::Display for Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.report())
    }
}

/// Estimate the optimal hash count and false positive probability for a
/// filter of `bit_count` bits expected to hold `expected_items` items.
///
/// # Errors
///
/// Returns [`FilterError::InvalidConfiguration`] if either argument is 0.
///
/// # Examples
///
/// ```
/// use saltbloom::core::params::estimate;
///
/// // 10 bits per item.
/// let est = estimate(1000, 100).unwrap();
/// assert!((est.hash_count - 6.93).abs() < 0.01);
/// assert!((est.false_positive_percent - 0.82).abs() < 0.01);
/// ```
pub fn estimate(bit_count: usize, expected_items: usize) -> Result<Estimate> {
    if bit_count == 0 {
        return Err(FilterError::invalid_configuration(
            "bit count must be greater than 0",
        ));
    }
    if expected_items == 0 {
        return Err(FilterError::invalid_configuration(
            "expected item count must be greater than 0",
        ));
    }

    let bits_per_item = bit_count as f64 / expected_items as f64;
    Ok(Estimate {
        hash_count: LN_2 * bits_per_item,
        false_positive_percent: FPP_BASE.powf(bits_per_item) * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_bits_per_item() {
        let est = estimate(1000, 100).unwrap();
        // k = ln(2) * 10 ≈ 6.9315
        assert!((est.hash_count - 6.9315).abs() < 0.001);
        // p = 0.6185^10 * 100 ≈ 0.8178%
        assert!((est.false_positive_percent - 0.8178).abs() < 0.01);
    }

    #[test]
    fn test_one_bit_per_item() {
        let est = estimate(100, 100).unwrap();
        assert!((est.hash_count - LN_2).abs() < 1e-12);
        assert!((est.false_positive_percent - 61.85).abs() < 0.01);
    }

    #[test]
    fn test_more_bits_lower_probability() {
        let small = estimate(400, 80).unwrap();
        let large = estimate(1600, 80).unwrap();
        assert!(large.false_positive_percent < small.false_positive_percent);
        assert!(large.hash_count > small.hash_count);
    }

    #[test]
    fn test_zero_bit_count_error() {
        assert!(estimate(0, 100).is_err());
    }

    #[test]
    fn test_zero_expected_items_error() {
        assert!(estimate(1000, 0).is_err());
    }

    #[test]
    fn test_report_format() {
        let est = estimate(800, 80).unwrap();
        let report = est.report();
        assert!(report.contains("hash functions"));
        assert!(report.contains("false positive probability"));
        assert_eq!(report, format!("{}", est));
    }
}
