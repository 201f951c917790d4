//! Arbitrary-precision rational number arithmetic
//!
//! A [`Rational`] is always held in lowest terms with a positive
//! denominator, and zero is stored as `0/1`. Every constructor goes through
//! the same reduction step, so equality, hashing and ordering work directly
//! on the stored fields.

use crate::error::{ParseRationalError, RationalError};
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Pow, Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Sub};
use wasm_bindgen::prelude::*;

/// Exact fraction of two arbitrary-precision integers
#[wasm_bindgen]
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "RationalRepr", try_from = "RationalRepr")]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

/// Wire representation used by serde
#[derive(Serialize, Deserialize)]
struct RationalRepr {
    n: String, // signed numerator, decimal
    d: String, // positive denominator, decimal
}

/// `numer / denom` in lowest terms; the infix-style spelling of [`Rational::new`]
pub fn over(
    numer: impl Into<BigInt>,
    denom: impl Into<BigInt>,
) -> Result<Rational, RationalError> {
    Rational::new(numer, denom)
}

impl Rational {
    /// Create a rational in lowest terms
    ///
    /// The sign is moved onto the numerator, so `1/-2` is stored as `-1/2`.
    /// Fails with [`RationalError::DivisionByZero`] when `denom` is zero.
    pub fn new(
        numer: impl Into<BigInt>,
        denom: impl Into<BigInt>,
    ) -> Result<Rational, RationalError> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Rational::reduce(numer.into(), denom))
    }

    /// Normalize a pair whose denominator is known to be nonzero
    pub(crate) fn reduce(mut numer: BigInt, mut denom: BigInt) -> Rational {
        debug_assert!(!denom.is_zero());

        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }

        // gcd(0, d) == d, which turns every zero into 0/1
        let gcd = numer.gcd(&denom);
        if !gcd.is_one() {
            numer /= &gcd;
            denom /= &gcd;
        }

        Rational { numer, denom }
    }

    /// Create a rational with denominator 1
    pub fn from_integer(n: impl Into<BigInt>) -> Rational {
        Rational {
            numer: n.into(),
            denom: BigInt::one(),
        }
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// Always positive
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numer, self.denom)
    }

    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// The numerator, if the denominator is 1
    pub fn to_integer(&self) -> Option<BigInt> {
        if self.is_integer() {
            Some(self.numer.clone())
        } else {
            None
        }
    }

    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.numer.is_positive()
    }

    /// -1, 0 or 1
    pub fn signum(&self) -> Rational {
        Rational::from_integer(self.numer.signum())
    }

    pub fn abs(&self) -> Rational {
        Rational {
            numer: self.numer.abs(),
            denom: self.denom.clone(),
        }
    }

    /// The reciprocal (1/x)
    ///
    /// Zero has no reciprocal and yields [`RationalError::DivisionByZero`].
    pub fn recip(&self) -> Result<Rational, RationalError> {
        Rational::new(self.denom.clone(), self.numer.clone())
    }

    /// Divide, reporting a zero divisor instead of panicking
    pub fn checked_div(&self, rhs: &Rational) -> Result<Rational, RationalError> {
        Ok(self * &rhs.recip()?)
    }

    /// Raise to an integer power
    ///
    /// Negative exponents take the reciprocal, which fails for zero.
    pub fn pow(&self, exp: i32) -> Result<Rational, RationalError> {
        let magnitude = exp.unsigned_abs();
        let numer: BigInt = Pow::pow(&self.numer, magnitude);
        let denom: BigInt = Pow::pow(&self.denom, magnitude);

        if exp >= 0 {
            // powers of coprime integers stay coprime
            Ok(Rational { numer, denom })
        } else {
            Rational::new(denom, numer)
        }
    }

    /// Inclusive range test: `low <= self <= high`
    pub fn is_between(&self, low: &Rational, high: &Rational) -> bool {
        low <= self && self <= high
    }

    /// Nearest `f64`; may round or overflow to infinity for huge values
    pub fn to_f64(&self) -> f64 {
        BigRational::new_raw(self.numer.clone(), self.denom.clone())
            .to_f64()
            .unwrap_or(f64::NAN)
    }
}

// Implement standard traits

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self)
    }
}

/// `N` for integers, `N/D` otherwise
impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom.is_one() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denom == other.denom {
            return self.numer.cmp(&other.numer);
        }
        // both denominators are positive, so cross-multiplying keeps the order
        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add<&Rational> for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        Rational::reduce(
            &self.numer * &rhs.denom + &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }
}

impl Sub<&Rational> for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        Rational::reduce(
            &self.numer * &rhs.denom - &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }
}

impl Mul<&Rational> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        Rational::reduce(&self.numer * &rhs.numer, &self.denom * &rhs.denom)
    }
}

/// # Panics
///
/// Panics if `rhs` is zero, like integer division. Use
/// [`Rational::checked_div`] to get an error instead.
impl Div<&Rational> for &Rational {
    type Output = Rational;

    fn div(self, rhs: &Rational) -> Rational {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(_) => panic!("attempt to divide a rational by zero"),
        }
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                $imp::$method(self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numer: -&self.numer,
            denom: self.denom.clone(),
        }
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::from_integer(1)
    }

    fn is_one(&self) -> bool {
        self.numer.is_one() && self.denom.is_one()
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Rational {
        iter.fold(Rational::zero(), |acc, r| acc + r)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Rational {
        iter.fold(Rational::zero(), |acc, r| acc + r)
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Rational {
        iter.fold(Rational::one(), |acc, r| acc * r)
    }
}

impl<'a> Product<&'a Rational> for Rational {
    fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Rational {
        iter.fold(Rational::one(), |acc, r| acc * r)
    }
}

macro_rules! from_integer_type {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Rational {
                fn from(n: $t) -> Self {
                    Rational::from_integer(n)
                }
            }
        )*
    };
}

from_integer_type!(i32, i64, u32, u64, BigInt);

impl TryFrom<(i64, i64)> for Rational {
    type Error = RationalError;

    fn try_from((numer, denom): (i64, i64)) -> Result<Self, Self::Error> {
        Rational::new(numer, denom)
    }
}

impl From<Rational> for BigRational {
    fn from(r: Rational) -> Self {
        // already reduced with a positive denominator
        BigRational::new_raw(r.numer, r.denom)
    }
}

impl TryFrom<BigRational> for Rational {
    type Error = RationalError;

    fn try_from(r: BigRational) -> Result<Self, Self::Error> {
        let (numer, denom) = r.into_raw();
        Rational::new(numer, denom)
    }
}

impl From<Rational> for RationalRepr {
    fn from(r: Rational) -> Self {
        RationalRepr {
            n: r.numer.to_string(),
            d: r.denom.to_string(),
        }
    }
}

impl TryFrom<RationalRepr> for Rational {
    type Error = RationalError;

    fn try_from(repr: RationalRepr) -> Result<Self, Self::Error> {
        let numer: BigInt = repr
            .n
            .parse()
            .map_err(|_| ParseRationalError::InvalidNumerator(repr.n.clone()))?;
        let denom: BigInt = repr
            .d
            .parse()
            .map_err(|_| ParseRationalError::InvalidDenominator(repr.d.clone()))?;

        Rational::new(numer, denom)
    }
}
