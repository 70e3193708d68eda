//! This script contains the interface used to comunicate with the distributions.

use rand::{Rng, RngCore};

use crate::configuration::disrete_distribution_deafults::MAXIMUM_STEPS;
use crate::domain::DiscreteDomain;
use crate::errors::DistributionError;
use crate::euclid;

/// The trait for any discrete distribution.
///
/// None of the provided methods are guaranteed to work if the implemented
/// [DiscreteDistribution::pmf] is NOT a [valid pmf](https://en.wikipedia.org/wiki/Probability_mass_function)
/// over [DiscreteDistribution::get_outcomes]. So, it needs to fullfill:
///  - The function must be stricly non-negative on the outcomes
///  - The masses of all the outcomes must add up to 1
///
/// Two domains are involved:
///  - [DiscreteDistribution::get_domain] is the declared **support**: the only
///     values accepted by [DiscreteDistribution::proba].
///  - [DiscreteDistribution::get_outcomes] is the set where the mass actually lies.
///     It is the one walked by [DiscreteDistribution::cdf], [DiscreteDistribution::quantile],
///     sampling, [DiscreteDistribution::entropy]... By deafult it is the support.
pub trait DiscreteDistribution {
    //Requiered methods:

    /// Evaluates the [PMF](https://en.wikipedia.org/wiki/Probability_mass_function)
    /// (Probability Mass Function) of the distribution at point `x`.
    ///
    /// This is the plain formula: `x` is **not** checked against the support.
    /// Use [DiscreteDistribution::proba] for a validated query.
    fn pmf(&self, x: f64) -> f64;

    /// Returns a reference to the support of the distribution. The returned
    /// domain should be constant and not change.
    fn get_domain(&self) -> &DiscreteDomain;

    /// Returns the [expected value](https://en.wikipedia.org/wiki/Expected_value)
    /// of the distribution.
    fn expected_value(&self) -> f64;

    /// Returns the [variance](https://en.wikipedia.org/wiki/Variance) of
    /// the distribution.
    fn variance(&self) -> f64;

    // Provided methods:
    // Manual implementation for a specific distribution is recommended.

    /// Returns the set of values with non-zero mass. Deafults to the support
    /// ([DiscreteDistribution::get_domain]).
    fn get_outcomes(&self) -> &DiscreteDomain {
        return self.get_domain();
    }

    /// Returns the probability of the random variable being equal to `x`,
    /// `P(X = x)`.
    ///
    /// Returns [DistributionError::UnsupportedValue] if `x` is not in the
    /// support of the distribution.
    fn proba(&self, x: f64) -> Result<f64, DistributionError> {
        let support: &DiscreteDomain = self.get_domain();
        if !support.contains(x) {
            tracing::trace!(value = x, %support, "probability query outside the support");
            return Err(DistributionError::UnsupportedValue {
                value: x,
                support: support.clone(),
            });
        }

        return Ok(self.pmf(x));
    }

    /// Returns the [standard deviation](https://en.wikipedia.org/wiki/Standard_deviation)
    /// of the distribution.
    fn standard_deviation(&self) -> f64 {
        return self.variance().sqrt();
    }

    /// Evaluates the [CDF](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
    /// (Cumulative distribution function), `P(X <= x)`.
    ///
    /// Returns `0.0` below the outcomes and `1.0` above them.
    /// Returns [DistributionError::NanValue] if `x` is a NaN.
    fn cdf(&self, x: f64) -> Result<f64, DistributionError> {
        let aux: Vec<f64> = self.cdf_multiple(&[x])?;
        return Ok(aux[0]);
    }

    /// Evaluates the [DiscreteDistribution::cdf] at multiple points.
    ///
    /// The outcomes are walked only once, so this is cheaper than calling
    /// [DiscreteDistribution::cdf] for every point.
    fn cdf_multiple(&self, points: &[f64]) -> Result<Vec<f64>, DistributionError> {
        if points.iter().any(|x| x.is_nan()) {
            return Err(DistributionError::NanValue);
        }

        return Ok(cdf_sweep(self, points));
    }

    /// Evaluates the [quantile function](https://en.wikipedia.org/wiki/Quantile_function):
    /// the smallest outcome `x` such that `x <= cdf(x)`.
    ///
    ///  - Returns [DistributionError::NanValue] if `x` is a NaN.
    ///  - Returns [DistributionError::InvalidProbability] if `x` is outside `[0, 1]`.
    fn quantile(&self, x: f64) -> Result<f64, DistributionError> {
        let aux: Vec<f64> = self.quantile_multiple(&[x])?;
        return Ok(aux[0]);
    }

    /// Evaluates the [DiscreteDistribution::quantile] at multiple points.
    fn quantile_multiple(&self, points: &[f64]) -> Result<Vec<f64>, DistributionError> {
        for &point in points {
            if point.is_nan() {
                return Err(DistributionError::NanValue);
            }
            if !(0.0..=1.0).contains(&point) {
                return Err(DistributionError::InvalidProbability(point));
            }
        }

        return Ok(quantile_sweep(self, points));
    }

    /// Returns the [median](https://en.wikipedia.org/wiki/Median): the
    /// smallest outcome with `0.5 <= cdf(x)`.
    fn median(&self) -> f64 {
        return quantile_sweep(self, &[0.5])[0];
    }

    /// Samples the distribution at random.
    fn sample(&self) -> f64 {
        let aux: Vec<f64> = self.sample_multiple(1);
        return aux[0];
    }

    /// Generates `n` samples of the distribution using the thread local
    /// random number generator.
    fn sample_multiple(&self, n: usize) -> Vec<f64> {
        let mut rng: rand::rngs::ThreadRng = rand::rng();
        return self.sample_multiple_with(n, &mut rng);
    }

    /// Generates `n` samples of the distribution using `rng`.
    ///
    /// The deafult method is [Inverse transform sampling](https://en.wikipedia.org/wiki/Inverse_transform_sampling):
    /// `n` uniform numbers in `[0, 1)` are transformed with the quantile function.
    fn sample_multiple_with(&self, n: usize, rng: &mut dyn RngCore) -> Vec<f64> {
        let rand_quantiles: Vec<f64> = (0..n).map(|_| rng.random::<f64>()).collect();
        return quantile_sweep(self, &rand_quantiles);
    }

    /// Returns the [mode](https://en.wikipedia.org/wiki/Mode_(statistics))
    /// of the distribution (the first outcome with the largest mass).
    ///
    /// Returns NaN if the distribution has no outcomes.
    fn mode(&self) -> f64 {
        let mut ret: f64 = f64::NAN;
        let mut max_mass: f64 = f64::NEG_INFINITY;

        for x in self.get_outcomes().iter().take(max_steps()) {
            let mass: f64 = self.pmf(x);
            if max_mass < mass {
                ret = x;
                max_mass = mass;
            }
        }

        return ret;
    }

    /// Returns the [skewness](https://en.wikipedia.org/wiki/Skewness)
    /// of the distribution.
    fn skewness(&self) -> f64 {
        return standardized_moment(self, 3);
    }

    /// Returns the [kurtosis](https://en.wikipedia.org/wiki/Kurtosis)
    /// of the distribution.
    fn kurtosis(&self) -> f64 {
        return standardized_moment(self, 4);
    }

    /// Returns the [excess kurtosis](https://en.wikipedia.org/wiki/Kurtosis#Excess_kurtosis)
    /// of the distribution.
    ///
    /// The excess kurtosis is defined as `kurtosis - 3`.
    fn excess_kurtosis(&self) -> f64 {
        return self.kurtosis() - 3.0;
    }

    /// Returns the [entropy](https://en.wikipedia.org/wiki/Information_entropy)
    /// of the distribution (in nats).
    fn entropy(&self) -> f64 {
        let log_fn = |x: f64| {
            let p: f64 = self.pmf(x);
            if p <= 0.0 { 0.0 } else { p * p.ln() }
        };

        return -euclid::discrete_sum(log_fn, self.get_outcomes(), Some(max_steps()));
    }

    /// Adds the mass of all the outcomes. For a valid distribution it is `1.0`
    /// (up to rounding errors).
    fn total_mass(&self) -> f64 {
        return euclid::discrete_sum(|x| self.pmf(x), self.get_outcomes(), Some(max_steps()));
    }
}

fn max_steps() -> usize {
    return usize::try_from(MAXIMUM_STEPS).unwrap_or(usize::MAX);
}

/// `E[((X - mean) / std)^order]` summed over the outcomes.
fn standardized_moment<D>(distribution: &D, order: i32) -> f64
where
    D: DiscreteDistribution + ?Sized,
{
    let mean: f64 = distribution.expected_value();
    let inv_std_dev: f64 = 1.0 / distribution.standard_deviation();

    let integration_fn = |x: f64| {
        let std_inp: f64 = (x - mean) * inv_std_dev;
        std_inp.powi(order) * distribution.pmf(x)
    };

    return euclid::discrete_sum(integration_fn, distribution.get_outcomes(), Some(max_steps()));
}

/// Indices of `points` in increasing order of their values.
/// `points` must not contain NaNs.
fn sorted_indices(points: &[f64]) -> Vec<usize> {
    let mut sorted_indicies: Vec<usize> = (0..points.len()).collect::<Vec<usize>>();
    sorted_indicies.sort_unstable_by(|&i, &j| points[i].total_cmp(&points[j]));
    return sorted_indicies;
}

/// Computes the cdf at every point walking the outcomes once.
/// `points` must not contain NaNs.
fn cdf_sweep<D>(distribution: &D, points: &[f64]) -> Vec<f64>
where
    D: DiscreteDistribution + ?Sized,
{
    let mut ret: Vec<f64> = vec![0.0; points.len()];
    let outcomes: &DiscreteDomain = distribution.get_outcomes();
    let steps: usize = max_steps();

    let mut idx_iter = sorted_indices(points).into_iter().peekable();
    let mut accumulator: f64 = 0.0;

    for x in outcomes.iter().take(steps) {
        // every remaining point below `x` has accumulated all its mass
        while let Some(&i) = idx_iter.peek() {
            if x <= points[i] {
                break;
            }
            ret[i] = accumulator;
            idx_iter.next();
        }

        if idx_iter.peek().is_none() {
            return ret;
        }

        accumulator += distribution.pmf(x);
    }

    // The remaining points are above every outcome. If the walk was cut short
    // we only know the mass seen so far.
    let tail: f64 = if outcomes.len() <= steps as u64 {
        1.0
    } else {
        accumulator
    };
    for i in idx_iter {
        ret[i] = tail;
    }

    return ret;
}

/// Computes the quantile at every point walking the outcomes once.
/// `points` must be in `[0, 1]` (NaNs are not allowed).
fn quantile_sweep<D>(distribution: &D, points: &[f64]) -> Vec<f64>
where
    D: DiscreteDistribution + ?Sized,
{
    let mut ret: Vec<f64> = vec![0.0; points.len()];
    let outcomes: &DiscreteDomain = distribution.get_outcomes();

    let mut idx_iter = sorted_indices(points).into_iter().peekable();
    let mut accumulator: f64 = 0.0;

    for x in outcomes.iter().take(max_steps()) {
        accumulator += distribution.pmf(x);

        while let Some(&i) = idx_iter.peek() {
            if accumulator < points[i] {
                break;
            }
            ret[i] = x;
            idx_iter.next();
        }

        if idx_iter.peek().is_none() {
            return ret;
        }
    }

    // Rounding errors may leave the accumulated mass slightly below 1.0.
    // Those points belong to the largest outcome.
    let upper: f64 = match outcomes.get_bounds() {
        Some((_, max)) => max,
        None => f64::NAN,
    };
    for i in idx_iter {
        ret[i] = upper;
    }

    return ret;
}
