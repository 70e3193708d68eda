//! Numerical helpers shared by the distributions.
//!
//!  - [combinatorics]: binomial coefficients, exact and in the log domain.
//!  - [discrete_sum]: sums a function over the elements of a [DiscreteDomain].
//!

use crate::domain::DiscreteDomain;

pub mod combinatorics {
    use statrs::function::gamma::ln_gamma;

    /// Computes the [binomial coefficient](https://en.wikipedia.org/wiki/Binomial_coefficient)
    /// `C(n, k) = n! / (k! * (n - k)!)` exactly.
    ///
    /// Returns `Some(0)` if `n < k` and `None` if the result (or an intermediate
    /// product) does not fit in a [u128].
    ///
    /// The multiplicative formula is used:
    ///
    /// > `C(n, k) = prod_{i = 1}^{k} (n - k + i) / i`
    ///
    /// After step `i` the accumulator equals `C(n - k + i, i)`, so every
    /// division is exact.
    #[must_use]
    pub fn binomial_coefficient(n: u64, k: u64) -> Option<u128> {
        if n < k {
            return Some(0);
        }

        // C(n, k) = C(n, n - k)
        let k: u64 = k.min(n - k);
        let base: u128 = u128::from(n - k);

        let mut acc: u128 = 1;
        for i in 1..=u128::from(k) {
            acc = acc.checked_mul(base + i)? / i;
        }

        return Some(acc);
    }

    /// Computes `ln(C(n, k))` without ever computing `C(n, k)` itself.
    ///
    /// > `ln(C(n, k)) = ln(Gamma(n + 1)) - ln(Gamma(k + 1)) - ln(Gamma(n - k + 1))`
    ///
    /// Returns `-inf` if `n < k` (`C(n, k) = 0`). It takes constant time and
    /// is valid for any `n` that fits in a [u64].
    #[must_use]
    pub fn ln_binomial_coefficient(n: u64, k: u64) -> f64 {
        if n < k {
            return f64::NEG_INFINITY;
        }
        if k == 0 || k == n {
            return 0.0;
        }

        let n1: f64 = (n as f64) + 1.0;
        let k1: f64 = (k as f64) + 1.0;
        let nk1: f64 = ((n - k) as f64) + 1.0;
        return ln_gamma(n1) - ln_gamma(k1) - ln_gamma(nk1);
    }
}

/// Adds `func(x)` for every `x` in `domain`, in increasing order.
///
/// If `max_steps` is given, at most that many elements are visited.
#[must_use]
pub fn discrete_sum<F>(func: F, domain: &DiscreteDomain, max_steps: Option<usize>) -> f64
where
    F: Fn(f64) -> f64,
{
    let steps: usize = max_steps.unwrap_or(usize::MAX);

    let mut acc: f64 = 0.0;
    for x in domain.iter().take(steps) {
        acc += func(x);
    }

    return acc;
}

#[cfg(test)]
mod tests {
    use super::combinatorics::*;
    use super::*;

    #[test]
    fn small_coefficients() {
        assert_eq!(binomial_coefficient(5, 0), Some(1));
        assert_eq!(binomial_coefficient(5, 2), Some(10));
        assert_eq!(binomial_coefficient(5, 5), Some(1));
        assert_eq!(binomial_coefficient(10, 3), Some(120));
        assert_eq!(binomial_coefficient(3, 4), Some(0));
        assert_eq!(binomial_coefficient(0, 0), Some(1));
    }

    #[test]
    fn pascal_rule() {
        for n in 1..40_u64 {
            for k in 1..n {
                let left: u128 = binomial_coefficient(n, k).unwrap();
                let right: u128 = binomial_coefficient(n - 1, k - 1).unwrap()
                    + binomial_coefficient(n - 1, k).unwrap();
                assert_eq!(left, right, "n = {n}, k = {k}");
            }
        }
    }

    #[test]
    fn large_coefficient_overflows_to_none() {
        // C(120, 60) ~= 9.7 * 10^34 still fits, C(200, 100) ~= 9.05 * 10^58 does not.
        assert_eq!(
            binomial_coefficient(120, 60),
            Some(96_614_908_840_363_322_603_893_139_521_372_656)
        );
        assert_eq!(binomial_coefficient(200, 100), None);
    }

    #[test]
    fn ln_coefficient_matches_exact() {
        for n in 0..60_u64 {
            for k in 0..=n {
                let exact: f64 = binomial_coefficient(n, k).unwrap() as f64;
                let ln: f64 = ln_binomial_coefficient(n, k);
                assert!(
                    (ln - exact.ln()).abs() < 1e-9,
                    "n = {n}, k = {k}: {ln} vs {}",
                    exact.ln()
                );
            }
        }
        assert_eq!(ln_binomial_coefficient(2, 3), f64::NEG_INFINITY);
    }

    #[test]
    fn ln_coefficient_of_huge_n_is_finite() {
        let ln: f64 = ln_binomial_coefficient(1_000_000, 500_000);
        assert!(ln.is_finite());
        // Stirling: ln C(2m, m) ~= 2m ln 2 - 0.5 ln(pi m)
        let m: f64 = 500_000.0;
        let approx: f64 = 2.0 * m * 2.0_f64.ln() - 0.5 * (core::f64::consts::PI * m).ln();
        assert!((ln - approx).abs() < 1e-3, "{ln} vs {approx}");
    }

    #[test]
    fn sum_over_domain() {
        let domain: DiscreteDomain = DiscreteDomain::Range(1, 4);
        assert_eq!(discrete_sum(|x| x, &domain, None), 10.0);
        assert_eq!(discrete_sum(|x| x, &domain, Some(2)), 3.0);
    }
}
