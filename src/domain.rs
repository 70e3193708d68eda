//! A Domain represents the set of points where a function is defined.
//!
//! In this library we use it for the support of the distributions (see
//! [crate::distribution_trait]): the values a random variable may take and
//! that [DiscreteDistribution::proba](crate::distribution_trait::DiscreteDistribution::proba)
//! accepts.
//!

use core::fmt;

use crate::configuration::SUPPORT_DISPLAY_MAX_ELEMENTS;

/// A [domain](https://en.wikipedia.org/wiki/Domain_of_a_function) composed of
/// finitely many elements.
///
/// [DiscreteDomain] assumes that most discrete domains only include integers.
/// If your domain does not fit this description use the [DiscreteDomain::Custom]
/// variant, wich allows you to maually indicate the values you want to include.
#[derive(Debug, Clone, PartialEq)]
pub enum DiscreteDomain {
    /// All the integers in the range [.0, .1] (**both** inclusive).
    /// The first number is the minimum, and the last is the maximum.
    ///
    /// A range with `max < min` is treated as empty.
    Range(i64, i64),
    /// Detemine manually at wich points can this function be evaluated.
    ///
    /// This variant has the following **invariants**:
    ///  - No infinities (either positive or negative)
    ///  - No NaNs
    ///  - No repeated elements
    ///  - The values in the vector must be sorted
    ///
    /// Use [DiscreteDomain::new_discrete_custom] when creating this variant to ensure
    /// all the invariants are fullfilled.
    Custom(Vec<f64>),
}

impl DiscreteDomain {
    /// Create a domain composed only by the given `values` ([DiscreteDomain::Custom]).
    /// This method makes sure to fullfill the necessary invariants:
    ///  - No infinities (either positive or negative)
    ///  - No NaNs
    ///  - No repeated elements
    ///  - The values in the vector must be sorted
    #[must_use]
    pub fn new_discrete_custom(values: &[f64]) -> Self {
        let mut points: Vec<f64> = values
            .iter()
            .copied()
            .filter(|&x| x.is_finite())
            .map(|x| if x == 0.0 { 0.0 } else { x })
            .collect::<Vec<f64>>();
        // no NaNs left, `total_cmp` agrees with `partial_cmp`
        points.sort_by(f64::total_cmp);

        // remove duplicate elements. (will remove all because `points` is sorted).
        points.dedup();

        return DiscreteDomain::Custom(points);
    }

    /// Returns true if `x` is one of the elements of the domain.
    ///
    /// NaNs and fractional numbers are never contained in a [DiscreteDomain::Range].
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        match self {
            DiscreteDomain::Range(min, max) => {
                if !x.is_finite() || x.fract() != 0.0 {
                    // the value is fractional, but ranges only include integers
                    return false;
                }
                (*min as f64) <= x && x <= (*max as f64)
            }
            DiscreteDomain::Custom(vec) => {
                if x.is_nan() {
                    return false;
                }
                // `total_cmp` orders -0.0 before 0.0
                let x: f64 = if x == 0.0 { 0.0 } else { x };
                vec.binary_search_by(|other| other.total_cmp(&x)).is_ok()
            }
        }
    }

    /// Returns the lower and upper bounds of the domain. Both are included.
    ///
    /// It is guaranteed that `return.0 <= return.1` for any non-empty domain.
    /// An empty domain returns `None`.
    #[must_use]
    pub fn get_bounds(&self) -> Option<(f64, f64)> {
        match self {
            DiscreteDomain::Range(min, max) if min <= max => Some((*min as f64, *max as f64)),
            DiscreteDomain::Range(_, _) => None,
            DiscreteDomain::Custom(vec) => match (vec.first(), vec.last()) {
                (Some(first), Some(last)) => Some((*first, *last)),
                _ => None,
            },
        }
    }

    /// Number of elements in the domain.
    ///
    /// `Range(i64::MIN, i64::MAX)` has `2^64` elements, wich does not fit in
    /// a [u64]; the result saturates at [u64::MAX].
    #[must_use]
    pub fn len(&self) -> u64 {
        match self {
            DiscreteDomain::Range(min, max) if max < min => 0,
            DiscreteDomain::Range(min, max) => max.abs_diff(*min).saturating_add(1),
            DiscreteDomain::Custom(vec) => vec.len() as u64,
        }
    }

    /// Returns true if the domain contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            DiscreteDomain::Range(min, max) => max < min,
            DiscreteDomain::Custom(vec) => vec.is_empty(),
        }
    }

    /// Returns an iteratior that iterates trough all the elements in the domain
    /// in increasing order.
    #[must_use]
    pub fn iter(&self) -> DiscreteDomainIterator<'_> {
        DiscreteDomainIterator {
            domain: self,
            next_index: 0,
        }
    }
}

impl fmt::Display for DiscreteDomain {
    /// Writes the domain as a set: `{0, 1}` or `{1, ..., 20}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscreteDomain::Range(min, max) if max < min => write!(f, "{{}}"),
            DiscreteDomain::Range(min, max) => match max.abs_diff(*min) {
                0 => write!(f, "{{{min}}}"),
                1 => write!(f, "{{{min}, {max}}}"),
                _ => write!(f, "{{{min}, ..., {max}}}"),
            },
            DiscreteDomain::Custom(vec) => {
                write!(f, "{{")?;
                let shown: usize = vec.len().min(SUPPORT_DISPLAY_MAX_ELEMENTS);
                for (i, value) in vec.iter().take(shown).enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                if shown < vec.len() {
                    write!(f, ", ... ({} more)", vec.len() - shown)?;
                }
                write!(f, "}}")
            }
        }
    }
}

pub struct DiscreteDomainIterator<'a> {
    domain: &'a DiscreteDomain,
    /// Position (starting from the smallest element) of the next value to return.
    next_index: u64,
}

impl Iterator for DiscreteDomainIterator<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        let ret: Option<f64> = match self.domain {
            DiscreteDomain::Range(min, max) => {
                let value: i128 = i128::from(*min) + i128::from(self.next_index);
                if i128::from(*max) < value {
                    return None;
                }
                Some(value as f64)
            }
            DiscreteDomain::Custom(vec) => {
                let idx: usize = usize::try_from(self.next_index).ok()?;
                vec.get(idx).copied()
            }
        };

        self.next_index += 1;
        return ret;
    }
}
