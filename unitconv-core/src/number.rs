//! Exact decimal numbers using dashu
//!
//! Uses dashu-float (DBig, base 10) so that decimal conversion factors
//! such as 0.0254 or 28.349523125 are stored exactly, and rounding to a
//! number of decimal places is deterministic.

use std::cmp::Ordering;
use std::fmt;
use dashu_float::ops::Abs;
use dashu_float::DBig;
use dashu_int::IBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,
}

/// Working precision for calculations (significant decimal digits)
const DEFAULT_PRECISION: usize = 50;

/// Largest accepted decimal exponent when parsing
const MAX_EXPONENT: i64 = 400;

/// Exact decimal number
///
/// Built on dashu-float's DBig. All operations return Results or new
/// Numbers, never panic.
#[derive(Debug, Clone)]
pub struct Number {
    inner: DBig,
}

impl Number {
    // ========== Construction ==========

    /// Widen to the working precision so later arithmetic keeps 50 digits
    fn with_work_precision(val: DBig) -> DBig {
        val.with_precision(DEFAULT_PRECISION).value()
    }

    /// Parse a decimal literal: "123", "3.14", ".5", "-42", "1234e-2", "1.5E6"
    pub fn from_str(text: &str) -> Result<Self, NumberError> {
        let text = text.trim();
        let invalid = || NumberError::ParseError(text.to_string());
        let literal = text.to_ascii_lowercase();

        let (mantissa, exponent) = match literal.split_once('e') {
            Some((mantissa, exp)) => (mantissa, exp.parse::<i64>().map_err(|_| invalid())?),
            None => (literal.as_str(), 0),
        };

        let (negative, digits) = match mantissa.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
        };
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

        Self::from_decimal_parts(negative, int_part, frac_part, exponent).map_err(|_| invalid())
    }

    /// Create from the pieces of a decimal literal: sign, integer digits,
    /// fractional digits and a power-of-ten exponent.
    ///
    /// `from_decimal_parts(false, "1", "5", 3)` is `1.5e3`. Either digit
    /// string may be empty, but not both.
    pub fn from_decimal_parts(
        negative: bool,
        int_part: &str,
        frac_part: &str,
        exponent: i64,
    ) -> Result<Self, NumberError> {
        let literal = format!("{}.{}e{}", int_part, frac_part, exponent);
        let all_digits = format!("{}{}", int_part, frac_part);

        if all_digits.is_empty() || !all_digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NumberError::ParseError(literal));
        }
        if exponent.abs() > MAX_EXPONENT {
            return Err(NumberError::ParseError(literal));
        }

        let mut significand: IBig = all_digits
            .parse()
            .map_err(|_| NumberError::ParseError(literal.clone()))?;
        if negative {
            significand = -significand;
        }

        // significand * 10^(exponent - fractional digits)
        let scale = exponent - frac_part.len() as i64;
        let scale = isize::try_from(scale).map_err(|_| NumberError::ParseError(literal))?;

        Ok(Self {
            inner: Self::with_work_precision(DBig::from_parts(significand, scale)),
        })
    }

    pub fn from_i64(n: i64) -> Self {
        let inner = Self::with_work_precision(DBig::from(n));
        Self { inner }
    }

    /// Create `significand * 10^exponent` exactly, e.g. `from_scaled(254, -4)` is 0.0254
    pub fn from_scaled(significand: i64, exponent: isize) -> Self {
        let value = DBig::from_parts(IBig::from(significand), exponent);
        Self { inner: Self::with_work_precision(value) }
    }

    /// `num / den` at working precision; a zero denominator gives zero
    pub fn from_ratio(num: i64, den: i64) -> Self {
        Self::from_i64(num)
            .checked_div(&Self::from_i64(den))
            .unwrap_or_default()
    }

    // ========== Predicates ==========

    pub fn is_zero(&self) -> bool {
        self.inner == DBig::ZERO
    }

    /// Exactly one, the only value a unit name is singular for
    pub fn is_one(&self) -> bool {
        self.inner == DBig::ONE
    }

    pub fn is_negative(&self) -> bool {
        self.inner < DBig::ZERO
    }

    // ========== Arithmetic ==========

    pub fn add(&self, rhs: &Self) -> Self {
        let inner = &self.inner + &rhs.inner;
        Self { inner }
    }

    pub fn sub(&self, rhs: &Self) -> Self {
        let inner = &self.inner - &rhs.inner;
        Self { inner }
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        let inner = &self.inner * &rhs.inner;
        Self { inner }
    }

    /// Division that reports a zero divisor instead of panicking
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, NumberError> {
        match rhs.is_zero() {
            true => Err(NumberError::DivisionByZero),
            false => Ok(Self { inner: &self.inner / &rhs.inner }),
        }
    }

    /// `self` raised to a small non-negative power
    pub fn pow(&self, exp: u32) -> Self {
        (0..exp).fold(Self::from_i64(1), |acc, _| acc.mul(self))
    }

    pub fn abs(&self) -> Self {
        Self { inner: self.inner.clone().abs() }
    }

    /// Round to `places` decimal places, ties away from zero
    pub fn round_to(&self, places: u32) -> Self {
        let scale = Self::with_work_precision(DBig::from_parts(IBig::from(1), places as isize));
        let half = Self::with_work_precision(DBig::from_parts(IBig::from(5), -1));

        let scaled = &self.inner * &scale;
        let rounded = if self.is_negative() {
            (&scaled - &half).ceil()
        } else {
            (&scaled + &half).floor()
        };

        Self { inner: &rounded / &scale }
    }

    // ========== Display ==========

    /// Render as a plain decimal: no exponent, no trailing fractional
    /// zeros, no trailing decimal point. `20.0` renders as `20`,
    /// `1.23455e6` as `1234550`.
    pub fn to_plain_string(&self) -> String {
        // DBig stores as significand * 10^exponent
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();
        let negative = significand < IBig::ZERO;
        let rendered = significand.to_string();
        let digits = rendered.trim_start_matches('-');

        if digits.bytes().all(|b| b == b'0') {
            return "0".to_string();
        }

        let body = if exponent >= 0 {
            format!("{}{}", digits, "0".repeat(exponent.unsigned_abs()))
        } else {
            let shift = exponent.unsigned_abs();
            let padded = if digits.len() <= shift {
                format!("{}{}", "0".repeat(shift - digits.len() + 1), digits)
            } else {
                digits.to_string()
            };
            let (int_part, frac_part) = padded.split_at(padded.len() - shift);
            let frac_part = frac_part.trim_end_matches('0');
            if frac_part.is_empty() {
                int_part.to_string()
            } else {
                format!("{}.{}", int_part, frac_part)
            }
        };

        if negative {
            format!("-{}", body)
        } else {
            body
        }
    }
}

// ========== Trait Implementations ==========

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_string())
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::from_i64(0)
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_plain_string())
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_str(&text).map_err(serde::de::Error::custom)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        // decimals are totally ordered; no NaN
        self.inner.partial_cmp(&other.inner).unwrap_or(Ordering::Equal)
    }
}
