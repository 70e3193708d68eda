//! # Bernoulli distribution
//!
//! The [Bernoulli distribution](https://en.wikipedia.org/wiki/Bernoulli_distribution).
//!
//! A Bernoulli random variable (also called a **boolean** or **indicator**
//! random variable) takes the value `1` with probability `p` (the experiment
//! succeeded) or `0` with probability `1 - p`. It is a special case of the
//! [Binomial distribution](crate::distributions::Binomial) when `n = 1`.
//!
//! It can be interpreted as a coin toss, where `p = 0.5` and the results `1` represents
//! heads and `0` represents tails. Other examples are a random binary digit,
//! whether a disk drive crashed or whether someone likes a movie. If we want a
//! distribution to simulte the probability of getting a 6 on a fair dice,
//! we can do so by setting `p = 1/6`.
//!
//! Note that `p` must belong to the open interval `(0, 1)`.
//!

use rand::{Rng, RngCore};

use crate::{
    distribution_trait::DiscreteDistribution, domain::DiscreteDomain,
    errors::DistributionError,
};

/// Represnets a Bernoulli distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Bernoulli {
    p: f64,
    /// Always `{0, 1}`
    support: DiscreteDomain,
    mean: f64,
    variance: f64,
}

impl Bernoulli {
    /// Creates a new [bernulli distribution](https://en.wikipedia.org/wiki/Bernoulli_distribution).
    ///
    ///  - `p` indicates the probability of success (returning `1.0`).
    ///     - `p` must belong in the open interval `(0.0, 1.0)`. Otherwise
    ///         [DistributionError::InvalidParameter] will be returned.
    pub fn new(p: f64) -> Result<Bernoulli, DistributionError> {
        // a NaN fails the comparisons
        if !(0.0 < p && p < 1.0) {
            tracing::debug!(p, "rejected Bernoulli parameter");
            return Err(DistributionError::InvalidParameter {
                name: "p",
                value: p,
                constraint: "a probability in the open interval (0, 1)",
            });
        }

        tracing::debug!(p, "created Bernoulli distribution");
        // SAFETY: `p` has just been checked
        return Ok(unsafe { Bernoulli::new_unchecked(p) });
    }

    /// Creates a new [bernulli distribution](https://en.wikipedia.org/wiki/Bernoulli_distribution)
    /// without any checks.
    ///
    /// ## Safety
    ///
    /// If the following conditions are not fullfiled, the returned distribution
    /// will be invalid.
    ///
    ///  - `p` must be finite (no NaNs or `+-inf`)
    ///  - `p` must be a valid probability (`p` belongs to the interval `(0, 1)`)
    ///
    #[must_use]
    pub unsafe fn new_unchecked(p: f64) -> Bernoulli {
        return Bernoulli {
            p,
            support: DiscreteDomain::Custom(vec![0.0, 1.0]),
            mean: p,
            variance: p * (1.0 - p),
        };
    }

    /// Return `p` (probability of success).
    #[must_use]
    pub const fn get_p(&self) -> f64 {
        return self.p;
    }
}

impl DiscreteDistribution for Bernoulli {
    /// The smooth definition of the pmf:
    ///
    /// > `pmf(x) = p^x * (1 - p)^(1 - x)`
    ///
    /// For `x = 1` it is `p` and for `x = 0` it is `1 - p`. Other values of
    /// `x` are **not** rejected, the formula is just evaluated.
    #[must_use]
    fn pmf(&self, x: f64) -> f64 {
        return self.p.powf(x) * (1.0 - self.p).powf(1.0 - x);
    }

    #[must_use]
    fn get_domain(&self) -> &DiscreteDomain {
        return &self.support;
    }

    #[must_use]
    fn expected_value(&self) -> f64 {
        return self.mean;
    }

    #[must_use]
    fn variance(&self) -> f64 {
        return self.variance;
    }

    fn cdf(&self, x: f64) -> Result<f64, DistributionError> {
        if x.is_nan() {
            return Err(DistributionError::NanValue);
        }

        if x < 0.0 {
            return Ok(0.0);
        }

        if 1.0 <= x {
            return Ok(1.0);
        }

        return Ok(1.0 - self.p);
    }

    fn cdf_multiple(&self, points: &[f64]) -> Result<Vec<f64>, DistributionError> {
        return points.iter().map(|&x| self.cdf(x)).collect();
    }

    fn quantile(&self, x: f64) -> Result<f64, DistributionError> {
        if x.is_nan() {
            return Err(DistributionError::NanValue);
        }
        if !(0.0..=1.0).contains(&x) {
            return Err(DistributionError::InvalidProbability(x));
        }

        if x <= 1.0 - self.p {
            return Ok(0.0);
        }

        return Ok(1.0);
    }

    fn quantile_multiple(&self, points: &[f64]) -> Result<Vec<f64>, DistributionError> {
        return points.iter().map(|&x| self.quantile(x)).collect();
    }

    fn sample_multiple_with(&self, n: usize, rng: &mut dyn RngCore) -> Vec<f64> {
        return (0..n)
            .map(|_| {
                let r: f64 = rng.random();
                if r < self.p { 1.0 } else { 0.0 }
            })
            .collect();
    }

    #[must_use]
    fn mode(&self) -> f64 {
        if 0.5 < self.p {
            return 1.0;
        }
        return 0.0;
    }

    #[must_use]
    fn skewness(&self) -> f64 {
        let num: f64 = 1.0 - 2.0 * self.p;
        let den: f64 = self.variance.sqrt();
        return num / den;
    }

    #[must_use]
    fn kurtosis(&self) -> f64 {
        return 3.0 + self.excess_kurtosis();
    }

    #[must_use]
    fn excess_kurtosis(&self) -> f64 {
        let pq: f64 = self.variance;
        return (1.0 - 6.0 * pq) / pq;
    }

    #[must_use]
    fn entropy(&self) -> f64 {
        let q: f64 = 1.0 - self.p;
        return -q * q.ln() - self.p * self.p.ln();
    }
}

impl Default for Bernoulli {
    fn default() -> Self {
        // SAFETY: 0.5 is a valid probability
        return unsafe { Bernoulli::new_unchecked(0.5) };
    }
}
