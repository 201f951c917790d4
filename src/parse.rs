//! Text to `Rational`
//!
//! Accepted grammar is `-?[0-9]+` optionally followed by `/-?[0-9]+`, with no
//! surrounding whitespace. `str::parse` rejects anything else with a
//! [`ParseRationalError`]; [`Rational::parse_lenient`] maps every rejection to
//! zero instead.

use crate::error::ParseRationalError;
use crate::rational::Rational;
use log::{debug, trace};
use num_bigint::BigInt;
use num_traits::Zero;
use std::str::FromStr;

impl FromStr for Rational {
    type Err = ParseRationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let result = parse_strict(s);

        if let Err(e) = &result {
            trace!("rejected rational {:?}: {}", s, e);
        }

        result
    }
}

impl Rational {
    /// Parse without ever failing
    ///
    /// Malformed text and zero denominators yield `0`. When the text holds
    /// more than one `/`, only the first two parts are read, so `"1/2/3"` is
    /// `1/2`. Prefer `str::parse` unless callers depend on this fallback.
    pub fn parse_lenient(text: &str) -> Rational {
        let parts: Vec<&str> = text.split('/').collect();

        let parsed = match parts.as_slice() {
            [single] => parse_integer(single).map(Rational::from_integer),
            [numer, denom, ..] => match (parse_integer(numer), parse_integer(denom)) {
                (Some(numer), Some(denom)) if !denom.is_zero() => {
                    Some(Rational::reduce(numer, denom))
                }
                _ => None,
            },
            [] => None,
        };

        parsed.unwrap_or_else(|| {
            debug!("falling back to zero for unparsable rational {:?}", text);
            Rational::zero()
        })
    }
}

fn parse_strict(s: &str) -> Result<Rational, ParseRationalError> {
    if s.is_empty() {
        return Err(ParseRationalError::Empty);
    }

    let parts: Vec<&str> = s.split('/').collect();

    match parts.as_slice() {
        [numer] => {
            let numer = parse_integer(numer)
                .ok_or_else(|| ParseRationalError::InvalidNumerator(numer.to_string()))?;
            Ok(Rational::from_integer(numer))
        }
        [numer, denom] => {
            let numer = parse_integer(numer)
                .ok_or_else(|| ParseRationalError::InvalidNumerator(numer.to_string()))?;
            let denom = parse_integer(denom)
                .ok_or_else(|| ParseRationalError::InvalidDenominator(denom.to_string()))?;

            if denom.is_zero() {
                return Err(ParseRationalError::ZeroDenominator);
            }

            Ok(Rational::reduce(numer, denom))
        }
        _ => Err(ParseRationalError::TooManyParts(parts.len())),
    }
}

/// `-?[0-9]+`
///
/// `BigInt`'s own parser also takes a leading `+` and `_` separators, so the
/// shape is checked first.
fn parse_integer(text: &str) -> Option<BigInt> {
    let digits = text.strip_prefix('-').unwrap_or(text);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn r(numer: i64, denom: i64) -> Rational {
        Rational::new(numer, denom).unwrap()
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!("3/4".parse::<Rational>(), Ok(r(3, 4)));
        assert_eq!("117/1098".parse::<Rational>().unwrap().to_string(), "13/122");
        assert_eq!("-6/-8".parse::<Rational>(), Ok(r(3, 4)));
        assert_eq!("4/-8".parse::<Rational>(), Ok(r(-1, 2)));
        assert_eq!("0/-5".parse::<Rational>(), Ok(Rational::zero()));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!("5".parse::<Rational>(), Ok(Rational::from_integer(5)));
        assert_eq!("-12".parse::<Rational>(), Ok(Rational::from_integer(-12)));
        assert_eq!("007".parse::<Rational>(), Ok(Rational::from_integer(7)));
    }

    #[test]
    fn test_parse_big() {
        let x: Rational = "20395802948019459839003802001190283020/32493205934869548609023910932454365628"
            .parse()
            .unwrap();
        assert!(x.is_between(&r(1, 2), &r(2, 3)));

        let half: Rational = "912016490186296920119201192141970416029/1824032980372593840238402384283940832058"
            .parse()
            .unwrap();
        assert_eq!(half, r(1, 2));
    }

    #[test]
    fn test_parse_rejects() {
        use ParseRationalError::*;

        assert_eq!("".parse::<Rational>(), Err(Empty));
        assert_eq!("1/0".parse::<Rational>(), Err(ZeroDenominator));
        assert_eq!("1/-0".parse::<Rational>(), Err(ZeroDenominator));
        assert_eq!("1/2/3".parse::<Rational>(), Err(TooManyParts(3)));
        assert_eq!("/2".parse::<Rational>(), Err(InvalidNumerator("".to_string())));
        assert_eq!("1/".parse::<Rational>(), Err(InvalidDenominator("".to_string())));
        assert_eq!(" 1/2".parse::<Rational>(), Err(InvalidNumerator(" 1".to_string())));
        assert_eq!("+1".parse::<Rational>(), Err(InvalidNumerator("+1".to_string())));
        assert_eq!("1_000".parse::<Rational>(), Err(InvalidNumerator("1_000".to_string())));
        assert_eq!("1.5".parse::<Rational>(), Err(InvalidNumerator("1.5".to_string())));
        assert_eq!("-".parse::<Rational>(), Err(InvalidNumerator("-".to_string())));
        assert_eq!("1/--2".parse::<Rational>(), Err(InvalidDenominator("--2".to_string())));
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(Rational::parse_lenient("117/1098"), r(13, 122));
        assert_eq!(Rational::parse_lenient("-9"), Rational::from_integer(-9));
        assert_eq!(Rational::parse_lenient("1/2/3"), r(1, 2));

        assert_eq!(Rational::parse_lenient("1/0"), Rational::zero());
        assert_eq!(Rational::parse_lenient("abc"), Rational::zero());
        assert_eq!(Rational::parse_lenient("1/x"), Rational::zero());
        assert_eq!(Rational::parse_lenient(""), Rational::zero());
    }

    #[test]
    fn test_display_round_trip() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..300 {
            let numer = BigInt::from(rng.gen::<i64>()) * BigInt::from(rng.gen::<u32>());
            let sign = if rng.gen_bool(0.5) { -1i64 } else { 1 };
            let denom = BigInt::from(rng.gen_range(1i64..i64::MAX)) * BigInt::from(sign);
            let x = Rational::new(numer, denom).unwrap();

            assert_eq!(x.to_string().parse::<Rational>(), Ok(x.clone()));
            assert_eq!(Rational::parse_lenient(&x.to_string()), x);
        }
    }
}
