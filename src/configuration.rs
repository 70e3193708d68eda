//! This file contains the deafult values and other value choices used trough the library.
//!

/// Values that control how combinatorial quantities are computed.
pub mod combinatorics {

    /// Largest number of trials for wich the [Binomial](crate::distributions::Binomial::Binomial)
    /// pmf is computed with the exact (integer) binomial coefficient.
    ///
    /// For more trials, `C(n, k)` quickly becomes too large to be represented
    /// exactly and `p^k * (1-p)^(n-k)` too small, so the pmf is computed in
    /// the log domain instead:
    ///
    /// > `pmf(k) = exp(ln(C(n, k)) + k * ln(p) + (n - k) * ln(1 - p))`
    ///
    /// The largest coefficient used in the exact path is `C(60, 30) ~= 1.18 * 10^17`.
    pub static EXACT_PMF_MAX_TRIALS: u64 = 60;
}

/// Deafult values for the provided methods of
/// [DiscreteDistribution](crate::distribution_trait::DiscreteDistribution).
pub mod disrete_distribution_deafults {

    /// The maximum number of outcomes visited by the provided methods that walk
    /// the domain of a distribution (cdf, quantile, entropy, mode...).
    ///
    /// `2^24 = 16 777 216`
    pub static MAXIMUM_STEPS: u64 = 1 << 24;
}

/// Maximum number of elements of a [DiscreteDomain::Custom](crate::domain::DiscreteDomain::Custom)
/// written when it is displayed (for example, in an error message). The rest
/// are abbreviated.
pub static SUPPORT_DISPLAY_MAX_ELEMENTS: usize = 16;
