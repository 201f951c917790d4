//! JavaScript surface for `Rational`
//!
//! Errors cross the boundary as string `JsValue`s. Values wider than an `i32`
//! enter through `fromString` or `fromJSON`.

use crate::rational::Rational;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt::Display;
use wasm_bindgen::prelude::*;

fn to_js_error(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
impl Rational {
    #[wasm_bindgen(constructor)]
    pub fn js_new(num: i32, den: i32) -> Result<Rational, JsValue> {
        Rational::new(num, den).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = fromInt)]
    pub fn from_int(n: i32) -> Rational {
        Rational::from_integer(n)
    }

    /// Parse `"n"` or `"n/d"`
    #[wasm_bindgen(js_name = fromString)]
    pub fn from_string(s: &str) -> Result<Rational, JsValue> {
        s.parse::<Rational>().map_err(to_js_error)
    }

    /// Parse, returning 0 for anything malformed
    #[wasm_bindgen(js_name = fromStringLenient)]
    pub fn from_string_lenient(s: &str) -> Rational {
        Rational::parse_lenient(s)
    }

    #[wasm_bindgen(js_name = add)]
    pub fn js_add(&self, other: &Rational) -> Rational {
        self + other
    }

    #[wasm_bindgen(js_name = sub)]
    pub fn js_sub(&self, other: &Rational) -> Rational {
        self - other
    }

    #[wasm_bindgen(js_name = mul)]
    pub fn js_mul(&self, other: &Rational) -> Rational {
        self * other
    }

    /// Throws on a zero divisor
    #[wasm_bindgen(js_name = div)]
    pub fn js_div(&self, other: &Rational) -> Result<Rational, JsValue> {
        self.checked_div(other).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = neg)]
    pub fn js_neg(&self) -> Rational {
        -self
    }

    #[wasm_bindgen(js_name = abs)]
    pub fn js_abs(&self) -> Rational {
        self.abs()
    }

    #[wasm_bindgen(js_name = inverse)]
    pub fn js_inverse(&self) -> Result<Rational, JsValue> {
        self.recip().map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = pow)]
    pub fn js_pow(&self, exp: i32) -> Result<Rational, JsValue> {
        self.pow(exp).map_err(to_js_error)
    }

    pub fn equals(&self, other: &Rational) -> bool {
        self == other
    }

    /// Returns -1 if self < other, 0 if equal, 1 if self > other
    pub fn compare(&self, other: &Rational) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Inclusive on both ends
    #[wasm_bindgen(js_name = isBetween)]
    pub fn js_is_between(&self, low: &Rational, high: &Rational) -> bool {
        self.is_between(low, high)
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_string_repr(&self) -> String {
        self.to_string()
    }

    #[wasm_bindgen(js_name = numeratorStr)]
    pub fn numerator_str(&self) -> String {
        self.numer().to_string()
    }

    #[wasm_bindgen(js_name = denominatorStr)]
    pub fn denominator_str(&self) -> String {
        self.denom().to_string()
    }

    #[wasm_bindgen(js_name = toF64)]
    pub fn js_to_f64(&self) -> f64 {
        self.to_f64()
    }

    #[wasm_bindgen(js_name = isZero)]
    pub fn js_is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    #[wasm_bindgen(js_name = isOne)]
    pub fn js_is_one(&self) -> bool {
        One::is_one(self)
    }

    #[wasm_bindgen(js_name = isInteger)]
    pub fn js_is_integer(&self) -> bool {
        self.is_integer()
    }

    #[wasm_bindgen(js_name = isNegative)]
    pub fn js_is_negative(&self) -> bool {
        self.is_negative()
    }

    #[wasm_bindgen(js_name = clone)]
    pub fn clone_rational(&self) -> Rational {
        self.clone()
    }

    /// `{ n: "<numerator>", d: "<denominator>" }`
    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = fromJSON)]
    pub fn from_json(value: JsValue) -> Result<Rational, JsValue> {
        serde_wasm_bindgen::from_value(value).map_err(to_js_error)
    }
}
