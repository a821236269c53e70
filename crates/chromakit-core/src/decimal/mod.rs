//! Arbitrary-precision decimal numbers.
//!
//! [`Decimal`] stores an exact rational value together with a precision
//! (significant digits). Every arithmetic result is rounded to the precision
//! of its **left operand**, half away from zero, so a color conversion carries
//! the precision of the coordinates it was fed.
//!
//! Values built from an exact rational ([`Decimal::from_rational`]) are the
//! exception: they stay exact through arithmetic with other exact values and
//! are only rounded when rendered as text.
//!
//! ```
//! use chromakit_core::Decimal;
//!
//! let a: Decimal = "42.5".parse().unwrap();
//! let b: Decimal = "7.5".parse().unwrap();
//! assert_eq!((&a + &b).to_string(), "50.0");
//! assert_eq!((&a + 1).to_string(), "43.5");
//!
//! let third = Decimal::from_rational(1, 3).unwrap();
//! assert!(third.is_exact());
//! assert_eq!(third.with_precision(4).to_string(), "0.3333");
//! ```
//!
//! # Approximation boundary
//!
//! `sqrt`, non-integer powers, `atan2`, `cos` and `sin` are evaluated in
//! `f64` and converted back, so they are only accurate to double precision.
//! Integer powers and the four basic operations are exact before rounding.
//!
//! # Panics
//!
//! The `/` and `%` operators panic on a zero divisor, like integer division.
//! Use [`Decimal::checked_div`] and [`Decimal::checked_rem`] to get a
//! [`DecimalError::DivisionByZero`] instead.

mod context;
mod error;
mod literal;

pub use context::{DecimalContext, DEFAULT_PRECISION};
pub use error::DecimalError;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

use num::{BigInt, BigRational, Signed, ToPrimitive, Zero};
use once_cell::sync::Lazy;

/// Significant digits handed to `f64` math; enough to round-trip a double.
const F64_DIGITS: u32 = 17;

static PI: Lazy<Decimal> = Lazy::new(|| Decimal::from_scaled(3_141_592_653_589_793_238, 18));
static DEGREES_PER_RADIAN: Lazy<Decimal> =
    Lazy::new(|| Decimal::from_scaled(5_729_577_951_308_232_088, 17));
static RADIANS_PER_DEGREE: Lazy<Decimal> =
    Lazy::new(|| Decimal::from_scaled(1_745_329_251_994_329_577, 20));

/// A decimal number with a configurable number of significant digits.
///
/// Equality, ordering and hashing look at the numeric value only; precision
/// and exactness do not participate. An exact `1/3` and the rounded literal
/// `"0.333333333333333333333333"` are therefore different values.
#[derive(Clone)]
pub struct Decimal {
    value: BigRational,
    precision: u32,
    exact: bool,
}

impl Decimal {
    fn rounded(value: BigRational, precision: u32) -> Self {
        Self {
            value: literal::round_significant(&value, precision),
            precision,
            exact: false,
        }
    }

    fn exact(value: BigRational, precision: u32) -> Self {
        Self {
            value,
            precision,
            exact: true,
        }
    }

    /// Zero at the default precision.
    pub fn zero() -> Self {
        Self::from(0)
    }

    /// One at the default precision.
    pub fn one() -> Self {
        Self::from(1)
    }

    /// Parse a decimal literal at the default precision.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::InvalidDecimalFormat`] for anything that is
    /// not an optionally signed decimal number with an optional exponent.
    pub fn parse(literal: &str) -> Result<Self, DecimalError> {
        Self::parse_with_precision(literal, DEFAULT_PRECISION)
    }

    pub(crate) fn parse_with_precision(literal: &str, precision: u32) -> Result<Self, DecimalError> {
        literal::parse(literal)
            .map(|value| Self::rounded(value, precision))
            .ok_or_else(|| DecimalError::InvalidDecimalFormat(literal.to_string()))
    }

    /// Convert a float through its shortest round-trip decimal form, so
    /// `0.1` becomes exactly `0.1` rather than the nearest binary fraction.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::NonFinite`] for NaN and infinities.
    pub fn from_f64(value: f64) -> Result<Self, DecimalError> {
        Self::from_f64_with_precision(value, DEFAULT_PRECISION)
    }

    pub(crate) fn from_f64_with_precision(value: f64, precision: u32) -> Result<Self, DecimalError> {
        if !value.is_finite() {
            return Err(DecimalError::NonFinite("float conversion"));
        }
        Self::parse_with_precision(&value.to_string(), precision)
    }

    /// An exact rational `numer / denom`. Rounding is deferred until the
    /// value is rendered or combined with a non-exact value.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::DivisionByZero`] when `denom` is zero.
    pub fn from_rational(numer: i64, denom: i64) -> Result<Self, DecimalError> {
        Self::from_rational_with_precision(numer, denom, DEFAULT_PRECISION)
    }

    pub(crate) fn from_rational_with_precision(
        numer: i64,
        denom: i64,
        precision: u32,
    ) -> Result<Self, DecimalError> {
        if denom == 0 {
            return Err(DecimalError::DivisionByZero);
        }
        Ok(Self::exact(
            BigRational::new(BigInt::from(numer), BigInt::from(denom)),
            precision,
        ))
    }

    /// `mantissa * 10^-scale`, e.g. `from_scaled(12_92, 2)` is `12.92`.
    pub fn from_scaled(mantissa: i64, scale: u32) -> Self {
        Self::rounded(
            BigRational::from_integer(BigInt::from(mantissa)) * literal::pow10(-i64::from(scale)),
            DEFAULT_PRECISION,
        )
    }

    /// The same value at another precision. Non-exact values are re-rounded.
    pub fn with_precision(&self, precision: u32) -> Self {
        let precision = precision.max(1);
        if self.exact {
            Self::exact(self.value.clone(), precision)
        } else {
            Self::rounded(self.value.clone(), precision)
        }
    }

    /// Zero carrying this value's precision and exactness.
    pub(crate) fn zeroed(&self) -> Decimal {
        self.unary(BigRational::zero())
    }

    /// Significant digits kept by arithmetic on this value.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Whether the value is an exact rational with deferred rounding.
    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// The underlying rational value.
    pub fn as_rational(&self) -> &BigRational {
        &self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.value.is_positive()
    }

    /// Nearest `f64` (via 17 significant digits).
    pub fn to_f64(&self) -> f64 {
        let approx = literal::round_significant(&self.value, F64_DIGITS);
        literal::format_plain(&approx).parse().unwrap_or(f64::NAN)
    }

    /// Integer part, truncated toward zero. `None` if it does not fit.
    pub fn to_i64(&self) -> Option<i64> {
        self.value.trunc().to_integer().to_i64()
    }

    /// Result of a binary operation: exact only if both operands are.
    fn combine(&self, other: &Decimal, value: BigRational) -> Decimal {
        if self.exact && other.exact {
            Self::exact(value, self.precision)
        } else {
            Self::rounded(value, self.precision)
        }
    }

    /// Result of a unary operation, keeping exactness.
    fn unary(&self, value: BigRational) -> Decimal {
        if self.exact {
            Self::exact(value, self.precision)
        } else {
            Self::rounded(value, self.precision)
        }
    }

    fn from_float_result(&self, value: f64, operation: &'static str) -> Result<Decimal, DecimalError> {
        if !value.is_finite() {
            return Err(DecimalError::NonFinite(operation));
        }
        Self::from_f64_with_precision(value, self.precision)
    }

    /// Promote an integer operand to this value's precision and exactness.
    fn coerce(&self, value: impl Into<BigInt>) -> Decimal {
        Decimal {
            value: BigRational::from_integer(value.into()),
            precision: self.precision,
            exact: self.exact,
        }
    }

    fn plus(&self, rhs: &Decimal) -> Decimal {
        self.combine(rhs, &self.value + &rhs.value)
    }

    fn minus(&self, rhs: &Decimal) -> Decimal {
        self.combine(rhs, &self.value - &rhs.value)
    }

    fn times(&self, rhs: &Decimal) -> Decimal {
        self.combine(rhs, &self.value * &rhs.value)
    }

    fn divided(&self, rhs: &Decimal) -> Decimal {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(_) => panic!("attempt to divide a Decimal by zero"),
        }
    }

    fn modulo(&self, rhs: &Decimal) -> Decimal {
        match self.checked_rem(rhs) {
            Ok(remainder) => remainder,
            Err(_) => panic!("attempt to calculate the remainder of a Decimal with a divisor of zero"),
        }
    }

    /// Division.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::DivisionByZero`] when `divisor` is zero.
    pub fn checked_div(&self, divisor: &Decimal) -> Result<Decimal, DecimalError> {
        if divisor.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }
        Ok(self.combine(divisor, &self.value / &divisor.value))
    }

    /// Floored modulo: the result takes the sign of `divisor`, so
    /// `-30 % 360 == 330`.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::DivisionByZero`] when `divisor` is zero.
    pub fn checked_rem(&self, divisor: &Decimal) -> Result<Decimal, DecimalError> {
        if divisor.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }
        let quotient = (&self.value / &divisor.value).floor();
        Ok(self.combine(divisor, &self.value - &divisor.value * quotient))
    }

    pub fn abs(&self) -> Decimal {
        self.unary(self.value.abs())
    }

    /// Round to `places` fractional digits, half away from zero.
    ///
    /// ```
    /// use chromakit_core::Decimal;
    ///
    /// let d = Decimal::parse("42.555").unwrap();
    /// assert_eq!(d.round(2).to_string(), "42.56");
    /// assert_eq!(d.round(0).to_string(), "43.0");
    /// ```
    pub fn round(&self, places: i32) -> Decimal {
        self.unary(literal::round_fractional(&self.value, i64::from(places)))
    }

    /// Largest integer not greater than the value.
    pub fn floor(&self) -> Decimal {
        self.unary(self.value.floor())
    }

    /// Square root through `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::NonFinite`] for negative input.
    pub fn sqrt(&self) -> Result<Decimal, DecimalError> {
        if self.is_negative() {
            return Err(DecimalError::NonFinite("sqrt"));
        }
        self.from_float_result(self.to_f64().sqrt(), "sqrt")
    }

    /// Exact integer power (rounded to precision afterwards).
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::DivisionByZero`] for zero raised to a
    /// negative power.
    pub fn powi(&self, exponent: i32) -> Result<Decimal, DecimalError> {
        let magnitude = num::pow(self.value.clone(), exponent.unsigned_abs() as usize);
        let value = if exponent < 0 {
            if magnitude.is_zero() {
                return Err(DecimalError::DivisionByZero);
            }
            magnitude.recip()
        } else {
            magnitude
        };
        Ok(self.unary(value))
    }

    /// Raise to the rational power `numer / denom`.
    ///
    /// Whole exponents are exact. Otherwise the power is taken in `f64`;
    /// a negative base with an odd denominator yields the real root, so
    /// `(-8)^(1/3) == -2`.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::DivisionByZero`] for a zero denominator and
    /// [`DecimalError::NonFinite`] when the result is not a finite real.
    pub fn pow_ratio(&self, numer: i64, denom: i64) -> Result<Decimal, DecimalError> {
        if denom == 0 {
            return Err(DecimalError::DivisionByZero);
        }
        let (numer, denom) = if denom < 0 {
            match (numer.checked_neg(), denom.checked_neg()) {
                (Some(numer), Some(denom)) => (numer, denom),
                _ => return Err(DecimalError::NonFinite("pow")),
            }
        } else {
            (numer, denom)
        };
        if numer % denom == 0 {
            if let Ok(exponent) = i32::try_from(numer / denom) {
                return self.powi(exponent);
            }
        }

        let base = self.to_f64();
        if base < 0.0 && denom % 2 == 0 {
            return Err(DecimalError::NonFinite("pow"));
        }
        let magnitude = match (denom, i32::try_from(numer)) {
            (3, Ok(n)) => base.abs().cbrt().powi(n),
            _ => base.abs().powf(numer as f64 / denom as f64),
        };
        let value = if base < 0.0 && numer % 2 != 0 {
            -magnitude
        } else {
            magnitude
        };
        self.from_float_result(value, "pow")
    }

    /// Raise to a decimal power. Integer and small rational exponents take
    /// the [`powi`](Self::powi) / [`pow_ratio`](Self::pow_ratio) paths.
    ///
    /// # Errors
    ///
    /// Same as [`pow_ratio`](Self::pow_ratio).
    pub fn pow(&self, exponent: &Decimal) -> Result<Decimal, DecimalError> {
        if exponent.value.is_integer() {
            if let Some(exponent) = exponent.value.to_integer().to_i32() {
                return self.powi(exponent);
            }
        }
        if let (Some(numer), Some(denom)) = (
            exponent.value.numer().to_i64(),
            exponent.value.denom().to_i64(),
        ) {
            return self.pow_ratio(numer, denom);
        }
        self.from_float_result(self.to_f64().powf(exponent.to_f64()), "pow")
    }

    /// Four-quadrant arctangent of `y / x` in radians, at `y`'s precision.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::NonFinite`] if the `f64` result is not finite.
    pub fn atan2(y: &Decimal, x: &Decimal) -> Result<Decimal, DecimalError> {
        y.from_float_result(y.to_f64().atan2(x.to_f64()), "atan2")
    }

    /// Cosine of an angle in radians.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::NonFinite`] if the `f64` result is not finite.
    pub fn cos(&self) -> Result<Decimal, DecimalError> {
        self.from_float_result(self.to_f64().cos(), "cos")
    }

    /// Sine of an angle in radians.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::NonFinite`] if the `f64` result is not finite.
    pub fn sin(&self) -> Result<Decimal, DecimalError> {
        self.from_float_result(self.to_f64().sin(), "sin")
    }

    /// Radians to degrees.
    pub fn to_degrees(&self) -> Decimal {
        self.times(&DEGREES_PER_RADIAN)
    }

    /// Degrees to radians.
    pub fn to_radians(&self) -> Decimal {
        self.times(&RADIANS_PER_DEGREE)
    }

    /// π to 19 significant digits.
    pub fn pi() -> Decimal {
        PI.clone()
    }
}

/// Convert any supported numeric or string source into a [`Decimal`] at the
/// default precision.
///
/// ```
/// use chromakit_core::decimal::to_decimal;
///
/// assert_eq!(to_decimal(2).unwrap(), to_decimal("2.0").unwrap());
/// assert_eq!(to_decimal(0.5).unwrap().to_string(), "0.5");
/// assert!(to_decimal("half").is_err());
/// ```
///
/// # Errors
///
/// Whatever the source conversion reports: [`DecimalError::InvalidDecimalFormat`]
/// for strings, [`DecimalError::NonFinite`] for NaN/infinite floats.
pub fn to_decimal<T>(value: T) -> Result<Decimal, DecimalError>
where
    T: TryInto<Decimal>,
    DecimalError: From<T::Error>,
{
    Ok(value.try_into()?)
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Decimal {
                fn from(value: $t) -> Self {
                    Decimal {
                        value: BigRational::from_integer(BigInt::from(value)),
                        precision: DEFAULT_PRECISION,
                        exact: false,
                    }
                }
            }
        )*
    };
}

from_integer!(i32, i64, u8, u32, u64);

impl From<&Decimal> for Decimal {
    fn from(value: &Decimal) -> Self {
        value.clone()
    }
}

impl From<BigRational> for Decimal {
    fn from(value: BigRational) -> Self {
        Decimal::exact(value, DEFAULT_PRECISION)
    }
}

impl TryFrom<f64> for Decimal {
    type Error = DecimalError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Decimal::from_f64(value)
    }
}

impl TryFrom<f32> for Decimal {
    type Error = DecimalError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(DecimalError::NonFinite("float conversion"));
        }
        // f32's own shortest form, not the widened f64 one
        Decimal::parse(&value.to_string())
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::parse(s)
    }
}

impl TryFrom<&str> for Decimal {
    type Error = DecimalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Decimal::parse(value)
    }
}

impl TryFrom<String> for Decimal {
    type Error = DecimalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Decimal::parse(&value)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exact {
            let rounded = literal::round_significant(&self.value, self.precision);
            f.write_str(&literal::format_plain(&rounded))
        } else {
            f.write_str(&literal::format_plain(&self.value))
        }
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal(\"{}\")", self)
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        -&self
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        self.unary(-self.value.clone())
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $inner:ident) => {
        impl<'a, 'b> $trait<&'b Decimal> for &'a Decimal {
            type Output = Decimal;

            fn $method(self, rhs: &'b Decimal) -> Decimal {
                self.$inner(rhs)
            }
        }

        impl $trait<Decimal> for Decimal {
            type Output = Decimal;

            fn $method(self, rhs: Decimal) -> Decimal {
                self.$inner(&rhs)
            }
        }

        impl<'a> $trait<&'a Decimal> for Decimal {
            type Output = Decimal;

            fn $method(self, rhs: &'a Decimal) -> Decimal {
                self.$inner(rhs)
            }
        }

        impl<'a> $trait<Decimal> for &'a Decimal {
            type Output = Decimal;

            fn $method(self, rhs: Decimal) -> Decimal {
                self.$inner(&rhs)
            }
        }
    };
}

forward_binop!(Add, add, plus);
forward_binop!(Sub, sub, minus);
forward_binop!(Mul, mul, times);
forward_binop!(Div, div, divided);
forward_binop!(Rem, rem, modulo);

// Integer operands adopt the Decimal operand's precision, so `d + 1` and
// `1 + d` are computed identically. Only `i64` gets operator impls so an
// unsuffixed literal has a single candidate; narrower integers go through
// `Decimal::from`.
macro_rules! forward_primitive_binop {
    ($prim:ty, $trait:ident, $method:ident, $inner:ident) => {
        impl $trait<$prim> for Decimal {
            type Output = Decimal;

            fn $method(self, rhs: $prim) -> Decimal {
                self.$inner(&self.coerce(rhs))
            }
        }

        impl<'a> $trait<$prim> for &'a Decimal {
            type Output = Decimal;

            fn $method(self, rhs: $prim) -> Decimal {
                self.$inner(&self.coerce(rhs))
            }
        }

        impl $trait<Decimal> for $prim {
            type Output = Decimal;

            fn $method(self, rhs: Decimal) -> Decimal {
                rhs.coerce(self).$inner(&rhs)
            }
        }

        impl<'a> $trait<&'a Decimal> for $prim {
            type Output = Decimal;

            fn $method(self, rhs: &'a Decimal) -> Decimal {
                rhs.coerce(self).$inner(rhs)
            }
        }
    };
}

macro_rules! primitive_ops {
    ($($prim:ty),*) => {
        $(
            forward_primitive_binop!($prim, Add, add, plus);
            forward_primitive_binop!($prim, Sub, sub, minus);
            forward_primitive_binop!($prim, Mul, mul, times);
            forward_primitive_binop!($prim, Div, div, divided);
            forward_primitive_binop!($prim, Rem, rem, modulo);
        )*
    };
}

primitive_ops!(i64);
