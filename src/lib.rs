//! # u-moments
//!
//! Descriptive moment statistics over in-memory sample sets.
//!
//! Computes the mean, population standard deviation, skewness, and excess
//! kurtosis of a slice of `f64` samples. All functions are stateless and
//! safe to call from any number of threads at once.
//!
//! ## Modules
//!
//! - [`moments`] — The four moment statistics, a combined summary, and
//!   checked variants
//! - [`error`] — Error type for the checked variants
//! - [`random`] — Seeded RNG, shuffling, and normal sampling for synthetic data
//!
//! ## Degenerate input
//!
//! - **Default**: plain functions follow IEEE 754. Empty or zero-variance
//!   input yields NaN or infinity.
//! - **Checked**: the `try_*` functions return [`MomentError`] for the
//!   same conditions.
//!
//! ```
//! use u_moments::{kurtosis, skewness};
//! let samples = [
//!     60.0, 80.0, 130.0, 110.0, 70.0, 2020.0, 20.0, 77.0, 98.0, 330.0, 220.0, 177.0, 323.0,
//!     200.0, 100.0,
//! ];
//! assert!((skewness(&samples) - 3.2733488310507317).abs() < 1e-9);
//! assert!((kurtosis(&samples) - 9.189926557641753).abs() < 1e-9);
//! ```

pub mod error;
pub mod moments;
pub mod random;

pub use error::{MomentError, MomentResult};
pub use moments::{describe, kurtosis, mean, skewness, standard_deviation, Moments};
