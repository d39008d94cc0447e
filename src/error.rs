//! Error types for the checked moment functions.
//!
//! The plain functions in [`crate::moments`] never fail: degenerate input
//! propagates as NaN or infinity. The `try_*` family reports the same
//! conditions through [`MomentError`] instead.

use thiserror::Error;

/// Result type for the checked moment functions.
pub type MomentResult<T> = Result<T, MomentError>;

/// Reasons a checked moment computation can reject its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MomentError {
    /// The sample set has no elements, so the mean is undefined.
    #[error("empty sample set")]
    EmptyInput,

    /// All samples are identical; standardized moments divide by zero.
    #[error("zero variance: standardized moments are undefined")]
    ZeroVariance,

    /// The computation produced NaN or infinity (non-finite input or overflow).
    #[error("non-finite {statistic}")]
    NonFinite { statistic: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(MomentError::EmptyInput.to_string(), "empty sample set");
        assert_eq!(
            MomentError::ZeroVariance.to_string(),
            "zero variance: standardized moments are undefined"
        );
        assert_eq!(
            MomentError::NonFinite { statistic: "kurtosis" }.to_string(),
            "non-finite kurtosis"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&MomentError::EmptyInput);
    }
}
