use thiserror::Error;

use crate::domain::DiscreteDomain;

/// Everything that can go wrong when building or querying a distribution.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// A parameter of a distribution did not fullfill its constraint.
    /// Returned by the constructors (for example, `p` outside `(0, 1)` or a
    /// number of trials that is not a positive integer).
    #[error("Invalid parameter `{name}` = {value}: it must be {constraint}. ")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Human readable description of the valid values.
        constraint: &'static str,
    },
    /// A probability was queried for a value outside the support of the
    /// distribution.
    #[error("The value {value} is not in the support of the distribution. Valid values are {support}. ")]
    UnsupportedValue {
        /// The rejected value.
        value: f64,
        /// The support the value was checked against.
        support: DiscreteDomain,
    },
    /// A NaN (Not a Number) was found in the input.
    #[error("A NaN (Not a Number) was found in the input. ")]
    NanValue,
    /// A quantile was requested for a number that is not a probability.
    #[error("The quantile function was evaluated at {0}, but it only accepts values in [0, 1]. ")]
    InvalidProbability(f64),
    /// The observations contained a NaN or an infinity.
    #[error("The observations must be finite (no NaNs or `+-inf`). ")]
    InvalidSamples,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_message_names_the_constraint() {
        let err: DistributionError = DistributionError::InvalidParameter {
            name: "p",
            value: 1.5,
            constraint: "in the open interval (0, 1)",
        };
        let msg: String = err.to_string();
        assert!(msg.contains("`p`"));
        assert!(msg.contains("1.5"));
        assert!(msg.contains("(0, 1)"));
    }

    #[test]
    fn unsupported_value_message_names_the_support() {
        let err: DistributionError = DistributionError::UnsupportedValue {
            value: 7.0,
            support: DiscreteDomain::Range(1, 5),
        };
        let msg: String = err.to_string();
        assert!(msg.contains('7'));
        assert!(msg.contains("{1, ..., 5}"), "{msg}");
    }
}
