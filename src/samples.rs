//! Storage for observations and a helper to draw them from a distribution.
//!
//! [Samples] holds finite observations and computes the usual sample
//! statistics. [draw_samples] fills one from any
//! [DiscreteDistribution](crate::distribution_trait::DiscreteDistribution).

use rand::{SeedableRng, rngs::StdRng};

use crate::{distribution_trait::DiscreteDistribution, errors::DistributionError};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Samples {
    data: Vec<f64>,
}

impl Samples {
    /// Creates a new instance of [Samples] with the given `data`.
    ///
    /// `data` must not contain NaNs or infinities (`+-inf`).
    ///
    /// If you want to just move the data without copying it,
    /// use [Samples::new_move].
    pub fn new(data: &[f64]) -> Result<Samples, DistributionError> {
        return Samples::new_move(Vec::from(data));
    }

    /// Creates a new instance of [Samples] with the given `data`.
    ///
    /// `data` must not contain NaNs or infinities (`+-inf`).
    pub fn new_move(data: Vec<f64>) -> Result<Samples, DistributionError> {
        let invalid_contained: bool = data.iter().any(|f: &f64| !f.is_finite());
        if invalid_contained {
            return Err(DistributionError::InvalidSamples);
        }

        return Ok(Samples { data });
    }

    /// Gives a reference to the contained data.
    #[must_use]
    pub fn peek_data(&self) -> &[f64] {
        return &self.data;
    }

    /// Returns the contained data and drops self.
    #[must_use]
    pub fn get_data(self) -> Vec<f64> {
        return self.data;
    }

    /// Number of observations.
    #[must_use]
    pub fn count(&self) -> usize {
        return self.data.len();
    }

    /// Computes the sample [mean](https://en.wikipedia.org/wiki/Mean).
    ///
    /// Returns `None` if there are no observations.
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        if self.data.is_empty() {
            return None;
        }

        let total: f64 = self.data.iter().sum::<f64>();
        return Some(total / self.data.len() as f64);
    }

    /// Computes the **unbiased** sample [variance](https://en.wikipedia.org/wiki/Variance#Unbiased_sample_variance)
    /// (divided by `n - 1`).
    ///
    /// Returns `None` if there are less than 2 observations.
    #[must_use]
    pub fn variance(&self) -> Option<f64> {
        if self.data.len() < 2 {
            return None;
        }

        let mean: f64 = self.mean()?;
        let sum_sq: f64 = self
            .data
            .iter()
            .map(|x| {
                let d: f64 = x - mean;
                d * d
            })
            .sum::<f64>();

        return Some(sum_sq / (self.data.len() - 1) as f64);
    }

    /// Relative frequency of the observations equal to `value`.
    ///
    /// Returns `None` if there are no observations.
    #[must_use]
    pub fn frequency(&self, value: f64) -> Option<f64> {
        if self.data.is_empty() {
            return None;
        }

        let hits: usize = self.data.iter().filter(|&&x| x == value).count();
        return Some(hits as f64 / self.data.len() as f64);
    }
}

/// Draws `count` samples of `distribution` and stores them in [Samples].
///
///  - `distribution`: the distribution to sample.
///  - `count`: number of samples.
///  - `seed`: (Optional) seed for a [StdRng]. Using the same seed gives the
///     same samples. If it is not set, the thread local generator is used.
///
/// ```
/// use DiscreteDistributions::{distributions::Binomial::Binomial, samples::draw_samples};
///
/// let binomial: Binomial = Binomial::new(0.6, 5).unwrap();
/// let samples = draw_samples().distribution(&binomial).count(100).seed(7).call();
/// assert_eq!(samples.count(), 100);
/// ```
#[bon::builder]
pub fn draw_samples(
    distribution: &dyn DiscreteDistribution,
    count: usize,
    seed: Option<u64>,
) -> Samples {
    let data: Vec<f64> = match seed {
        Some(s) => {
            let mut rng: StdRng = StdRng::seed_from_u64(s);
            distribution.sample_multiple_with(count, &mut rng)
        }
        None => distribution.sample_multiple(count),
    };

    tracing::debug!(count, seeded = seed.is_some(), "drew samples");

    // Samples of a distribution are always finite
    return Samples { data };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite_data() {
        assert_eq!(
            Samples::new(&[1.0, f64::NAN]),
            Err(DistributionError::InvalidSamples)
        );
        assert_eq!(
            Samples::new_move(vec![f64::NEG_INFINITY]),
            Err(DistributionError::InvalidSamples)
        );
    }

    #[test]
    fn statistics() {
        let samples: Samples = Samples::new(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(samples.count(), 4);
        assert_eq!(samples.mean(), Some(2.5));
        // ((1.5^2 + 0.5^2) * 2) / 3
        assert!((samples.variance().unwrap() - 5.0 / 3.0).abs() < 1e-12);
        assert_eq!(samples.frequency(2.0), Some(0.25));
    }

    #[test]
    fn statistics_need_enough_samples() {
        let empty: Samples = Samples::default();
        assert_eq!(empty.mean(), None);
        assert_eq!(empty.variance(), None);
        assert_eq!(empty.frequency(0.0), None);

        let single: Samples = Samples::new(&[3.0]).unwrap();
        assert_eq!(single.mean(), Some(3.0));
        assert_eq!(single.variance(), None);
    }
}
