//! Error types for saltbloom operations.
//!
//! The crate deliberately keeps the runtime hot path (`put`/`check`) free of
//! error handling: construction and the advisory estimator are the only
//! fallible surfaces, and both fail for exactly one reason, a configuration
//! that cannot describe a functional filter.
//!
//! # Error Propagation
//!
//! ```
//! use saltbloom::{FilterError, Result, SaltedBloomFilter};
//!
//! fn build(bits: usize, hashes: usize) -> Result<SaltedBloomFilter> {
//!     let filter = SaltedBloomFilter::new(bits, hashes)?;
//!     Ok(filter)
//! }
//! # assert!(build(800, 5).is_ok());
//! # assert!(build(0, 5).is_err());
//! ```

use std::fmt;

/// Result type alias for saltbloom operations.
///
/// All fallible operations in this crate return [`Result<T>`] where the error
/// type is [`FilterError`].
pub type Result<T> = std::result::Result<T, FilterError>;

/// Errors that can occur while configuring a filter or the estimator.
///
/// # Design Notes
/// - `Clone` + `PartialEq` enable testing and error comparison
/// - The runtime operations (`put`, `check`) cannot fail and therefore have
///   no error variants; misconfiguration is the single fatal category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The requested configuration cannot describe a functional filter.
    ///
    /// Raised when the bit count or hash-function count is zero at
    /// construction time, or when the advisory estimator is asked to divide
    /// by a zero expected-item count.
    InvalidConfiguration {
        /// Human-readable description of what's invalid.
        message: String,
    },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { message } => {
                write!(f, "Invalid filter configuration: {}.", message)
            }
        }
    }
}

impl std::error::Error for FilterError {}

impl FilterError {
    /// Create an `InvalidConfiguration` error with a formatted message.
    ///
    /// # Examples
    /// ```
    /// use saltbloom::FilterError;
    ///
    /// let err = FilterError::invalid_configuration("bit count must be greater than 0");
    /// assert!(err.to_string().contains("bit count"));
    /// ```
    #[must_use]
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_configuration() {
        let err = FilterError::invalid_configuration("hash-function count must be greater than 0");
        let display = format!("{err}");
        assert!(display.contains("Invalid filter configuration"));
        assert!(display.contains("hash-function count"));
        assert!(display.ends_with('.'));
    }

    #[test]
    fn test_implements_std_error() {
        let _err: Box<dyn std::error::Error> =
            Box::new(FilterError::invalid_configuration("test"));
    }

    #[test]
    fn test_clone_and_eq() {
        let err1 = FilterError::invalid_configuration("test");
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    #[test]
    fn test_propagation_with_question_mark() {
        fn inner() -> Result<()> {
            Err(FilterError::invalid_configuration("inner failure"))
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        assert!(outer().is_err());
    }
}
