//! Error types for rational construction, arithmetic and parsing

use thiserror::Error;

/// Errors raised while building or combining rationals
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
    /// A zero denominator was supplied, or the reciprocal of zero was requested
    #[error("division by zero")]
    DivisionByZero,

    #[error(transparent)]
    Parse(#[from] ParseRationalError),
}

/// Reasons a string is rejected by the strict parser
///
/// Accepted grammar: `-?[0-9]+` optionally followed by `/-?[0-9]+`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRationalError {
    #[error("cannot parse a rational from an empty string")]
    Empty,

    #[error("invalid numerator: {0:?}")]
    InvalidNumerator(String),

    #[error("invalid denominator: {0:?}")]
    InvalidDenominator(String),

    /// More than one `/` separator; holds the number of parts found
    #[error("expected at most one '/', found {0} parts")]
    TooManyParts(usize),

    #[error("denominator is zero")]
    ZeroDenominator,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(RationalError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            RationalError::from(ParseRationalError::TooManyParts(3)).to_string(),
            "expected at most one '/', found 3 parts"
        );
        assert_eq!(
            ParseRationalError::InvalidNumerator("x1".to_string()).to_string(),
            "invalid numerator: \"x1\""
        );
    }
}
