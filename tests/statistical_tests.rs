use DiscreteDistributions::{
    distribution_trait::DiscreteDistribution,
    distributions::{Bernoulli::Bernoulli, Binomial::Binomial},
    domain::DiscreteDomain,
    samples::{Samples, draw_samples},
};
use assert_approx_eq::assert_approx_eq;
use rand::{SeedableRng, rngs::StdRng};

/// Only implements the requiered methods, so every other method uses the
/// provided (generic) implementation.
struct PlainBinomial {
    inner: Binomial,
}

impl DiscreteDistribution for PlainBinomial {
    fn pmf(&self, x: f64) -> f64 {
        self.inner.pmf(x)
    }

    fn get_domain(&self) -> &DiscreteDomain {
        self.inner.get_domain()
    }

    fn get_outcomes(&self) -> &DiscreteDomain {
        self.inner.get_outcomes()
    }

    fn expected_value(&self) -> f64 {
        self.inner.expected_value()
    }

    fn variance(&self) -> f64 {
        self.inner.variance()
    }
}

#[test]
fn closed_forms_match_generic_implementations() {
    // (0.5, 5) and (0.5, 1) have two modes: the smaller one is returned
    for (p, n) in [(0.6, 5), (0.5, 10), (0.1, 40), (0.85, 100), (0.5, 5), (0.5, 1)] {
        let closed: Binomial = Binomial::new(p, n).unwrap();
        let plain: PlainBinomial = PlainBinomial {
            inner: closed.clone(),
        };

        assert_eq!(closed.mode(), plain.mode(), "p = {p}, n = {n}");
        assert_approx_eq!(closed.skewness(), plain.skewness(), 1e-9);
        assert_approx_eq!(closed.kurtosis(), plain.kurtosis(), 1e-8);
        assert_approx_eq!(closed.excess_kurtosis(), plain.excess_kurtosis(), 1e-8);
        assert_approx_eq!(closed.standard_deviation(), plain.variance().sqrt(), 1e-12);
    }
}

#[test]
fn bernoulli_is_binomial_with_one_trial() {
    for p in [0.2, 0.5, 0.9] {
        let bernoulli: Bernoulli = Bernoulli::new(p).unwrap();
        let binomial: Binomial = Binomial::new(p, 1).unwrap();

        assert_approx_eq!(bernoulli.pmf(0.0), binomial.pmf(0.0), 1e-15);
        assert_approx_eq!(bernoulli.pmf(1.0), binomial.pmf(1.0), 1e-15);
        assert_approx_eq!(bernoulli.expected_value(), binomial.expected_value(), 1e-15);
        assert_approx_eq!(bernoulli.variance(), binomial.variance(), 1e-15);
        assert_approx_eq!(bernoulli.skewness(), binomial.skewness(), 1e-12);
        assert_approx_eq!(bernoulli.kurtosis(), binomial.kurtosis(), 1e-12);
        // Binomial uses the generic entropy (summed over {0, 1})
        assert_approx_eq!(bernoulli.entropy(), binomial.entropy(), 1e-12);
        assert_eq!(bernoulli.mode(), binomial.mode(), "p = {p}");
    }
}

#[test]
fn tied_modes_return_the_smaller_outcome() {
    assert_eq!(Binomial::new(0.5, 1).unwrap().mode(), 0.0);
    assert_eq!(Bernoulli::new(0.5).unwrap().mode(), 0.0);
    assert_eq!(Binomial::new(0.5, 5).unwrap().mode(), 2.0);
    assert_eq!(Binomial::new(0.5, 4).unwrap().mode(), 2.0);
}

#[test]
fn bernoulli_sample_frequency() {
    let distribution: Bernoulli = Bernoulli::new(0.3).unwrap();
    let samples: Samples = draw_samples()
        .distribution(&distribution)
        .count(10_000)
        .seed(42)
        .call();

    assert_eq!(samples.count(), 10_000);
    assert!(samples.peek_data().iter().all(|&x| x == 0.0 || x == 1.0));
    assert_approx_eq!(samples.frequency(1.0).unwrap(), 0.3, 0.03);
}

#[test]
fn binomial_sample_moments() {
    let distribution: Binomial = Binomial::new(0.3, 20).unwrap();
    let samples: Samples = draw_samples()
        .distribution(&distribution)
        .count(20_000)
        .seed(7)
        .call();

    assert!(
        samples
            .peek_data()
            .iter()
            .all(|&x| x.fract() == 0.0 && (0.0..=20.0).contains(&x))
    );
    assert_approx_eq!(samples.mean().unwrap(), 6.0, 0.1);
    assert_approx_eq!(samples.variance().unwrap(), 4.2, 0.25);
    // `0` successes is a possible outcome even if it is not in the declared support
    assert!(samples.frequency(0.0).unwrap() < 0.01);
}

#[test]
fn seeded_sampling_is_reproducible() {
    let distribution: Binomial = Binomial::new(0.5, 8).unwrap();

    let first: Vec<f64> = draw_samples()
        .distribution(&distribution)
        .count(500)
        .seed(2024)
        .call()
        .get_data();
    let second: Vec<f64> = draw_samples()
        .distribution(&distribution)
        .count(500)
        .seed(2024)
        .call()
        .get_data();
    assert_eq!(first, second);

    let mut rng: StdRng = StdRng::seed_from_u64(2024);
    assert_eq!(distribution.sample_multiple_with(500, &mut rng), first);
}

#[test]
fn unseeded_sampling() {
    let distribution: Bernoulli = Bernoulli::new(0.5).unwrap();
    let samples: Samples = draw_samples().distribution(&distribution).count(64).call();
    assert_eq!(samples.count(), 64);

    let single: f64 = Binomial::new(0.5, 3).unwrap().sample();
    assert!((0.0..=3.0).contains(&single));
}

#[test]
fn distributions_are_shareable_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Bernoulli>();
    assert_send_sync::<Binomial>();

    let distribution: Binomial = Binomial::new(0.25, 12).unwrap();
    let shared: &Binomial = &distribution;
    let handles: Vec<f64> = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..4)
            .map(|k| scope.spawn(move || shared.proba(f64::from(k + 1)).unwrap()))
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    for (k, value) in handles.into_iter().enumerate() {
        assert_eq!(value, distribution.pmf((k + 1) as f64));
    }
}
