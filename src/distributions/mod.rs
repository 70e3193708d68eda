// Discrete
pub mod Bernoulli;
pub mod Binomial;
