#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::excessive_precision
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
// ^Disable warning "crate `DiscreteDistributions` should have a snake case name"
// (and for the distribution modules). The rest of the names follow the snake_case convention.

//! # Discrete Distributions
//!
//! A small library of parameterized
//! [discrete probability distributions](https://en.wikipedia.org/wiki/Probability_distribution#Discrete_probability_distribution).
//!
//! ## Distributions
//!
//! We have defined the trait [DiscreteDistribution](distribution_trait::DiscreteDistribution)
//! that defines the interface to work with distributions. The only requiered methods
//! to implement are:
//!  - [pmf](distribution_trait::DiscreteDistribution::pmf): the pmf of the distribution
//!     (the plain formula, it does not validate its input).
//!  - [get_domain](distribution_trait::DiscreteDistribution::get_domain): the support
//!     of the distribution.
//!  - [expected_value](distribution_trait::DiscreteDistribution::expected_value) and
//!     [variance](distribution_trait::DiscreteDistribution::variance).
//!
//! After this, a wide array of funcions are avaliable: the validated query
//! [proba](distribution_trait::DiscreteDistribution::proba), the cdf, the quantile
//! function, sampling, mode, skewness, kurtosis, entropy...
//!
//! Implemented distributions:
//!
//!  - [x] [Bernoulli](distributions::Bernoulli) ([Wiki](https://en.wikipedia.org/wiki/Bernoulli_distribution))
//!  - [x] [Binomial](distributions::Binomial) ([Wiki](https://en.wikipedia.org/wiki/Binomial_distribution))
//!
//! ```
//! use DiscreteDistributions::distribution_trait::DiscreteDistribution;
//! use DiscreteDistributions::distributions::Binomial::Binomial;
//!
//! let d: Binomial = Binomial::new(0.6, 5).unwrap();
//! let p: f64 = d.proba(2.0).unwrap();
//! assert!((p - 0.2304).abs() < 1e-12);
//! ```
//!
//! ## Errors
//!
//! Every fallible operation returns [DistributionError](errors::DistributionError):
//! invalid parameters at construction time and values outside the support at
//! query time.
//!
//! ## Diagnostics
//!
//! The library emits [tracing](https://docs.rs/tracing) events (construction,
//! rejected queries) but never installs a subscriber.
//!
//! ***
//!

pub mod configuration;
pub mod distribution_trait;
pub mod distributions;
pub mod domain;
pub mod errors;
pub mod euclid;
pub mod samples;
