//! Descriptive moment statistics over a slice of samples.
//!
//! Every function here is pure: it borrows the samples, scans them, and
//! returns a scalar. Nothing is cached between calls, so repeated calls on
//! the same input are bit-identical.
//!
//! # Algorithms
//!
//! - **Mean**: plain left-to-right summation divided by `n`.
//! - **Standard deviation**: population form (divisor `n`), computed in a
//!   second pass over the deviations from the mean.
//! - **Skewness / kurtosis**: third and fourth standardized moments. Each is
//!   three independent linear passes: mean, standard deviation, then the
//!   powered deviation sum.
//!
//! No compensated summation or online update is applied. For samples that
//! span many orders of magnitude the results are subject to ordinary
//! floating-point cancellation.
//!
//! # Degenerate input
//!
//! The plain functions follow IEEE 754 semantics: an empty slice yields NaN
//! from `0.0 / 0.0`, and a zero-variance slice makes [`skewness`] and
//! [`kurtosis`] NaN or infinite. The `try_*` variants report the same
//! conditions as [`MomentError`] values instead.
//!
//! Reference: NIST/SEMATECH e-Handbook of Statistical Methods, §1.3.5.11,
//! "Measures of Skewness and Kurtosis".

use log::debug;

use crate::error::{MomentError, MomentResult};

/// Absolute skewness above which a sample set is reported as skewed.
pub const SKEWNESS_THRESHOLD: f64 = 1.0;

/// Excess kurtosis above which a sample set is reported as heavy-tailed.
pub const KURTOSIS_THRESHOLD: f64 = 1.0;

/// Computes the arithmetic mean.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// NaN if `data` is empty.
///
/// # Examples
/// ```
/// use u_moments::moments::mean;
/// let v = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(mean(&v), 3.0);
/// assert!(mean(&[]).is_nan());
/// ```
pub fn mean(data: &[f64]) -> f64 {
    let mut sum = 0.0;
    for &x in data {
        sum += x;
    }
    sum / data.len() as f64
}

/// Computes the population variance (denominator `n`).
///
/// # Examples
/// ```
/// use u_moments::moments::population_variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(population_variance(&v), 4.0);
/// ```
pub fn population_variance(data: &[f64]) -> f64 {
    let mu = mean(data);
    deviation_power_sum(data, mu, 2) / data.len() as f64
}

/// Computes the population standard deviation (denominator `n`).
///
/// The mean is computed first, then the square root of the average squared
/// deviation from it. The result is never negative for non-empty input.
///
/// # Complexity
/// Time: O(n), two passes. Space: O(1)
///
/// # Returns
/// NaN if `data` is empty; `0.0` if all samples are identical.
///
/// # Examples
/// ```
/// use u_moments::moments::standard_deviation;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(standard_deviation(&v), 2.0);
/// ```
pub fn standard_deviation(data: &[f64]) -> f64 {
    population_variance(data).sqrt()
}

/// Computes the `order`-th central moment: the average of `(x − x̄)^order`.
///
/// Order 2 is the population variance.
///
/// # Examples
/// ```
/// use u_moments::moments::central_moment;
/// let v = [-2.0, -1.0, 0.0, 1.0, 2.0];
/// assert_eq!(central_moment(&v, 2), 2.0);
/// assert_eq!(central_moment(&v, 3), 0.0);
/// ```
pub fn central_moment(data: &[f64], order: i32) -> f64 {
    let mu = mean(data);
    deviation_power_sum(data, mu, order) / data.len() as f64
}

/// Computes the population skewness (third standardized moment).
///
/// # Formula
/// ```text
/// g₁ = Σ(xᵢ − x̄)³ / (n · σ³)
/// ```
/// where `σ` is the population standard deviation. Positive values indicate
/// a long right tail, negative values a long left tail.
///
/// No bias correction is applied.
///
/// # Complexity
/// Time: O(n), three passes. Space: O(1)
///
/// # Returns
/// NaN or ±∞ if `data` is empty or all samples are identical.
///
/// # Examples
/// ```
/// use u_moments::moments::skewness;
/// // Symmetric data → skewness = 0
/// assert_eq!(skewness(&[-2.0, -1.0, 0.0, 1.0, 2.0]), 0.0);
///
/// // Right-skewed data → positive skewness
/// assert!(skewness(&[1.0, 2.0, 3.0, 4.0, 50.0]) > 0.0);
/// ```
pub fn skewness(data: &[f64]) -> f64 {
    let n = data.len() as f64;
    let mu = mean(data);
    let sum = deviation_power_sum(data, mu, 3);
    let sigma = standard_deviation(data);
    sum / (n * sigma.powi(3))
}

/// Computes the population excess kurtosis (fourth standardized moment − 3).
///
/// # Formula
/// ```text
/// g₂ = Σ(xᵢ − x̄)⁴ / (n · σ⁴) − 3
/// ```
///
/// Returns **0** for a normal distribution, positive for heavy tails
/// (leptokurtic), negative for light tails (platykurtic).
///
/// # Returns
/// NaN if `data` is empty or all samples are identical.
///
/// # Examples
/// ```
/// use u_moments::moments::kurtosis;
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// assert!(kurtosis(&data) < 0.0); // platykurtic
/// ```
pub fn kurtosis(data: &[f64]) -> f64 {
    let n = data.len() as f64;
    let mu = mean(data);
    let sum = deviation_power_sum(data, mu, 4);
    let sigma = standard_deviation(data);
    sum / (n * sigma.powi(4)) - 3.0
}

fn deviation_power_sum(data: &[f64], mu: f64, order: i32) -> f64 {
    let mut sum = 0.0;
    for &x in data {
        sum += (x - mu).powi(order);
    }
    sum
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// All four moment statistics of one sample set.
///
/// # Examples
/// ```
/// use u_moments::moments::describe;
/// let m = describe(&[60.0, 80.0, 130.0, 110.0, 70.0, 2020.0, 20.0]);
/// assert_eq!(m.count, 7);
/// assert!(m.is_skewed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub skewness: f64,
    pub kurtosis: f64,
}

impl Moments {
    /// Returns true if `|skewness|` exceeds [`SKEWNESS_THRESHOLD`].
    ///
    /// Non-finite skewness is never reported as skewed.
    pub fn is_skewed(&self) -> bool {
        self.skewness.is_finite() && self.skewness.abs() > SKEWNESS_THRESHOLD
    }

    /// Returns true if the excess kurtosis exceeds [`KURTOSIS_THRESHOLD`].
    pub fn is_heavy_tailed(&self) -> bool {
        self.kurtosis.is_finite() && self.kurtosis > KURTOSIS_THRESHOLD
    }
}

/// Computes every statistic in [`Moments`] for `data`.
///
/// Each field is produced by the corresponding standalone function, so the
/// values are bit-identical to calling them one by one.
pub fn describe(data: &[f64]) -> Moments {
    Moments {
        count: data.len(),
        mean: mean(data),
        std_dev: standard_deviation(data),
        skewness: skewness(data),
        kurtosis: kurtosis(data),
    }
}

// ---------------------------------------------------------------------------
// Checked variants
// ---------------------------------------------------------------------------

/// Like [`mean`], but rejects empty or non-finite input.
///
/// # Examples
/// ```
/// use u_moments::moments::try_mean;
/// use u_moments::MomentError;
/// assert_eq!(try_mean(&[1.0, 3.0]), Ok(2.0));
/// assert_eq!(try_mean(&[]), Err(MomentError::EmptyInput));
/// ```
pub fn try_mean(data: &[f64]) -> MomentResult<f64> {
    require_non_empty(data, "mean")?;
    finite(mean(data), "mean")
}

/// Like [`standard_deviation`], but rejects empty or non-finite input.
///
/// Zero is a valid standard deviation and is returned as `Ok(0.0)`.
pub fn try_standard_deviation(data: &[f64]) -> MomentResult<f64> {
    require_non_empty(data, "standard deviation")?;
    finite(standard_deviation(data), "standard deviation")
}

/// Like [`skewness`], but rejects empty, constant, or non-finite input.
///
/// # Examples
/// ```
/// use u_moments::moments::try_skewness;
/// use u_moments::MomentError;
/// assert_eq!(try_skewness(&[5.0, 5.0, 5.0]), Err(MomentError::ZeroVariance));
/// ```
pub fn try_skewness(data: &[f64]) -> MomentResult<f64> {
    require_spread(data, "skewness")?;
    finite(skewness(data), "skewness")
}

/// Like [`kurtosis`], but rejects empty, constant, or non-finite input.
pub fn try_kurtosis(data: &[f64]) -> MomentResult<f64> {
    require_spread(data, "kurtosis")?;
    finite(kurtosis(data), "kurtosis")
}

/// Like [`describe`], but fails if any statistic is undefined.
pub fn try_describe(data: &[f64]) -> MomentResult<Moments> {
    require_spread(data, "moments")?;
    Ok(Moments {
        count: data.len(),
        mean: finite(mean(data), "mean")?,
        std_dev: finite(standard_deviation(data), "standard deviation")?,
        skewness: finite(skewness(data), "skewness")?,
        kurtosis: finite(kurtosis(data), "kurtosis")?,
    })
}

fn require_non_empty(data: &[f64], statistic: &'static str) -> MomentResult<()> {
    if data.is_empty() {
        debug!("{statistic} rejected: empty sample set");
        return Err(MomentError::EmptyInput);
    }
    Ok(())
}

// A constant slice can still leave a tiny non-zero spread after the mean
// rounds (e.g. `[0.1; 3]`), so identical samples are detected directly.
// Repeated infinities compare equal but have NaN spread, not zero.
fn require_spread(data: &[f64], statistic: &'static str) -> MomentResult<()> {
    require_non_empty(data, statistic)?;
    let first = data[0];
    let identical = first.is_finite() && data.iter().all(|&x| x == first);
    if identical || standard_deviation(data) == 0.0 {
        debug!("{statistic} rejected: all {} samples equal", data.len());
        return Err(MomentError::ZeroVariance);
    }
    Ok(())
}

fn finite(value: f64, statistic: &'static str) -> MomentResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        debug!("{statistic} rejected: result is {value}");
        Err(MomentError::NonFinite { statistic })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
