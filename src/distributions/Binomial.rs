//! The [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution)
//! is the distribution that models the number of successes of `n` independent
//! [Bernoulli trials](crate::distributions::Bernoulli) with succes probability `p`.
//!
//! For example, if you whant to know the probability to get exacly 17 heads in 22
//! throws of a coin, we can model this as a binomial distribution with parameters
//! `n = 22` and `p = 0.5` and evaluate the pmf at `17` (assuming head = 1 and tail = 0).
//! To get the probability of getting 14 heads or less we can compute the cdf at `14`.
//!
//! Other examples: the number of `1`s in a random bit string of length `n`, or
//! the number of crashed disk drives in a cluster of `n` computers (assuming
//! they crash independently).
//!
//! ## Support
//!
//! The support accepted by [Binomial::proba](DiscreteDistribution::proba) is
//! `{1, ..., n}`: the value `0` is **not** accepted, even if `0` successes
//! has a non-zero probability (`(1 - p)^n`). The rest of the methods (cdf,
//! quantile, sampling, entropy...) work over the full set of outcomes
//! `{0, ..., n}` (see [DiscreteDistribution::get_outcomes]).
//!

use crate::{
    configuration::combinatorics::EXACT_PMF_MAX_TRIALS,
    distribution_trait::DiscreteDistribution,
    domain::DiscreteDomain,
    errors::DistributionError,
    euclid::combinatorics,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Binomial {
    p: f64,
    n: u64,
    /// `{1, ..., n}`
    support: DiscreteDomain,
    /// `{0, ..., n}`
    outcomes: DiscreteDomain,
    mean: f64,
    variance: f64,
}

const TRIALS_CONSTRAINT: &str = "a natural number, i.e. {1, 2, 3, ...}";

impl Binomial {
    /// Creates a new [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution).
    ///
    ///  - `p` indicates the probability of success (returning `1.0`) of each Bernoulli trial.
    ///      - `p` must belong in the open interval `(0.0, 1.0)`.
    ///  - `n` indicates the number of trials
    ///      - `n` must be a positive integer (`1 <= n`).
    ///
    /// Otherwise [DistributionError::InvalidParameter] will be returned.
    pub fn new(p: f64, n: i64) -> Result<Binomial, DistributionError> {
        check_p(p)?;

        let n_trials: u64 = match u64::try_from(n) {
            Ok(v) if 0 < v => v,
            _ => {
                tracing::debug!(n, "rejected Binomial number of trials");
                return Err(DistributionError::InvalidParameter {
                    name: "n",
                    value: n as f64,
                    constraint: TRIALS_CONSTRAINT,
                });
            }
        };

        tracing::debug!(p, n, "created Binomial distribution");
        // SAFETY: both parameters have just been checked
        return Ok(unsafe { Binomial::new_unchecked(p, n_trials) });
    }

    /// Same as [Binomial::new], but the number of trials is given as a real
    /// number. It must still be a positive integer: `2.5`, NaNs and
    /// infinities are rejected with [DistributionError::InvalidParameter].
    pub fn from_real_trials(p: f64, n: f64) -> Result<Binomial, DistributionError> {
        // `n.fract()` is NaN for infinities, so they are rejected too
        let is_natural: bool = 1.0 <= n && n.fract() == 0.0 && n < i64::MAX as f64;
        if !is_natural {
            tracing::debug!(n, "rejected Binomial number of trials");
            return Err(DistributionError::InvalidParameter {
                name: "n",
                value: n,
                constraint: TRIALS_CONSTRAINT,
            });
        }

        return Binomial::new(p, n as i64);
    }

    /// Creates a new [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution)
    /// without any checks.
    ///
    /// ## Safety
    ///
    /// If the following conditions are not fullfiled, the returned distribution
    /// will be invalid.
    ///
    ///  - `p` must be a valid probability (`p` belongs to the interval `(0, 1)`)
    ///  - `n` must be positive and not larger than [i64::MAX]
    #[must_use]
    pub unsafe fn new_unchecked(p: f64, n: u64) -> Binomial {
        let max: i64 = i64::try_from(n).unwrap_or(i64::MAX);
        let n_f: f64 = n as f64;

        return Binomial {
            p,
            n,
            support: DiscreteDomain::Range(1, max),
            outcomes: DiscreteDomain::Range(0, max),
            mean: n_f * p,
            // https://proofwiki.org/wiki/Variance_of_Binomial_Distribution
            variance: n_f * p * (1.0 - p),
        };
    }

    /// Return `p` (probability of success).
    #[must_use]
    pub const fn get_p(&self) -> f64 {
        return self.p;
    }

    /// Return `n` (number of trials).
    #[must_use]
    pub const fn get_n(&self) -> u64 {
        return self.n;
    }
}

fn check_p(p: f64) -> Result<(), DistributionError> {
    // a NaN fails the comparisons
    if !(0.0 < p && p < 1.0) {
        tracing::debug!(p, "rejected Binomial parameter");
        return Err(DistributionError::InvalidParameter {
            name: "p",
            value: p,
            constraint: "a probability in the open interval (0, 1)",
        });
    }
    return Ok(());
}

impl DiscreteDistribution for Binomial {
    /// > `pmf(x) = C(n, x) * p^x * (1 - p)^(n - x)`
    ///
    /// Returns `0.0` if `x` is not an integer in `[0, n]`, since the
    /// binomial coefficient is 0 there. The support is not checked.
    fn pmf(&self, x: f64) -> f64 {
        if !(0.0 <= x && x <= self.n as f64) || x.fract() != 0.0 {
            return 0.0;
        }

        let k: u64 = x as u64;
        let n_minus_k: u64 = self.n - k;

        if self.n <= EXACT_PMF_MAX_TRIALS {
            if let Some(binomial_coef) = combinatorics::binomial_coefficient(self.n, k) {
                // `n <= EXACT_PMF_MAX_TRIALS` so the exponents fit in an i32
                let prob_p: f64 = self.p.powi(k as i32);
                let prob_q: f64 = (1.0 - self.p).powi(n_minus_k as i32);
                return (binomial_coef as f64) * prob_p * prob_q;
            }
        }

        tracing::trace!(n = self.n, k, "binomial pmf computed in the log domain");
        let ln_coef: f64 = combinatorics::ln_binomial_coefficient(self.n, k);
        let ln_p: f64 = (k as f64) * self.p.ln();
        let ln_q: f64 = (n_minus_k as f64) * (-self.p).ln_1p();
        return (ln_coef + ln_p + ln_q).exp();
    }

    fn get_domain(&self) -> &DiscreteDomain {
        return &self.support;
    }

    fn get_outcomes(&self) -> &DiscreteDomain {
        return &self.outcomes;
    }

    fn expected_value(&self) -> f64 {
        return self.mean;
    }

    fn variance(&self) -> f64 {
        return self.variance;
    }

    fn mode(&self) -> f64 {
        // floor((n + 1) * p). Since p < 1 it is at most n.
        // If (n + 1) * p is an integer m, both m - 1 and m are modes and we
        // return the smaller one, like every other distribution in the crate.
        let m: f64 = (self.n as f64 + 1.0) * self.p;
        let mode: f64 = if m.fract() == 0.0 && 1.0 <= m {
            m - 1.0
        } else {
            m.floor()
        };
        return mode.min(self.n as f64);
    }

    fn skewness(&self) -> f64 {
        // = (q - p) / sqrt(p*q*n) = ((1-p) - p) / sqrt(p*(1-p)*n)
        // = (1 - 2*p) / sqrt(p*(1-p)*n)

        let numerator: f64 = 1.0 - 2.0 * self.p;
        let denominator: f64 = self.variance.sqrt();
        return numerator / denominator;
    }

    fn kurtosis(&self) -> f64 {
        return 3.0 + self.excess_kurtosis();
    }

    fn excess_kurtosis(&self) -> f64 {
        let numerator: f64 = 1.0 - 6.0 * self.p * (1.0 - self.p);
        return numerator / self.variance;
    }
}
