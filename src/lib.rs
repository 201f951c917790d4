//! Rationals - exact arbitrary-precision fractions
//!
//! This crate provides:
//! - `Rational`, a fraction of two `BigInt`s kept in lowest terms with a
//!   positive denominator
//! - Arithmetic operators, ordering and inclusive range tests
//! - Strict and lenient parsing from `"n"` / `"n/d"` text
//! - A WASM binding exposing the same operations to JavaScript

use wasm_bindgen::prelude::*;

pub mod error;
pub mod js;
pub mod parse;
pub mod rational;

// Re-export main types for convenience
pub use error::{ParseRationalError, RationalError};
pub use rational::{over, Rational};

/// Initialize the WASM module
/// Call this once when loading the module to set up panic hooks
#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages
    console_error_panic_hook::set_once();
}

/// Get the version of the rationals library
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_reference_scenarios() {
        let half = over(1, 2).unwrap();
        let third = over(1, 3).unwrap();
        let two_thirds = over(2, 3).unwrap();

        assert_eq!(&half + &third, over(5, 6).unwrap());
        assert_eq!(&half - &third, over(1, 6).unwrap());
        assert_eq!(&half * &third, over(1, 6).unwrap());
        assert_eq!(&half / &third, over(3, 2).unwrap());
        assert_eq!(-&half, over(-1, 2).unwrap());

        assert_eq!(over(2, 1).unwrap().to_string(), "2");
        assert_eq!(over(-2, 4).unwrap().to_string(), "-1/2");
        assert_eq!("117/1098".parse::<Rational>().unwrap().to_string(), "13/122");

        assert!(half < two_thirds);
        assert!((third..=two_thirds).contains(&half));
        assert_eq!(over(2_000_000_000i64, 4_000_000_000i64).unwrap(), half);
    }
}
