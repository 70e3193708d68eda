use DiscreteDistributions::{
    distribution_trait::DiscreteDistribution,
    distributions::{Bernoulli::Bernoulli, Binomial::Binomial},
    errors::DistributionError,
};

fn main() -> Result<(), DistributionError> {
    let coin: Bernoulli = Bernoulli::new(0.75)?;
    println!("Bernoulli(p = {})", coin.get_p());
    println!("  P(X = 1) = {}", coin.proba(1.0)?);
    println!("  P(X = 0) = {}", coin.proba(0.0)?);
    match coin.proba(0.5) {
        Ok(v) => println!("  P(X = 0.5) = {v}"),
        Err(e) => println!("  P(X = 0.5) -> {e}"),
    }

    let trials: Binomial = Binomial::new(0.6, 5)?;
    println!("Binomial(p = {}, n = {})", trials.get_p(), trials.get_n());
    println!(
        "  mean = {}, variance = {}",
        trials.expected_value(),
        trials.variance()
    );
    println!("  P(X = 2) = {}", trials.proba(2.0)?);
    println!("  P(X <= 2) = {}", trials.cdf(2.0)?);

    return Ok(());
}
