//! Explicit precision configuration for building [`Decimal`] values.

use super::{Decimal, DecimalError};

/// Significant digits used when no context is given.
pub const DEFAULT_PRECISION: u32 = 24;

/// Factory for [`Decimal`] values at a configured precision.
///
/// The precision is fixed at construction; values built earlier are never
/// affected by a context created later.
///
/// ```
/// use chromakit_core::DecimalContext;
///
/// let ctx = DecimalContext::new(4);
/// let third = ctx.parse("1").unwrap() / ctx.from_i64(3);
/// assert_eq!(third.to_string(), "0.3333");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalContext {
    precision: u32,
}

impl Default for DecimalContext {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl DecimalContext {
    /// Environment variable read by [`DecimalContext::from_env`].
    pub const PRECISION_ENV: &'static str = "CHROMAKIT_DECIMAL_PRECISION";

    /// A context with `precision` significant digits (at least one).
    pub fn new(precision: u32) -> Self {
        Self {
            precision: precision.max(1),
        }
    }

    /// Read the precision from `CHROMAKIT_DECIMAL_PRECISION`, falling back to
    /// [`DEFAULT_PRECISION`] when it is unset or not a positive integer.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(Self::PRECISION_ENV).ok().as_deref())
    }

    pub(crate) fn from_env_value(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::default();
        };
        match Self::parse_precision(raw) {
            Some(precision) => {
                tracing::debug!(precision, "Using decimal precision from environment");
                Self::new(precision)
            }
            None => {
                tracing::warn!(
                    value = %raw,
                    variable = Self::PRECISION_ENV,
                    "Invalid decimal precision, using default of {}",
                    DEFAULT_PRECISION
                );
                Self::default()
            }
        }
    }

    /// Parse a precision setting such as the value of
    /// `CHROMAKIT_DECIMAL_PRECISION`. Surrounding whitespace is ignored;
    /// anything but a positive integer gives `None`.
    pub fn parse_precision(raw: &str) -> Option<u32> {
        raw.trim().parse::<u32>().ok().filter(|&precision| precision > 0)
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Parse a decimal literal at this precision.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::InvalidDecimalFormat`] for malformed input.
    pub fn parse(&self, literal: &str) -> Result<Decimal, DecimalError> {
        Decimal::parse_with_precision(literal, self.precision)
    }

    /// Convert a float at this precision.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::NonFinite`] for NaN and infinities.
    pub fn from_f64(&self, value: f64) -> Result<Decimal, DecimalError> {
        Decimal::from_f64_with_precision(value, self.precision)
    }

    pub fn from_i64(&self, value: i64) -> Decimal {
        Decimal::from(value).with_precision(self.precision)
    }

    /// An exact rational at this precision.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::DivisionByZero`] when `denom` is zero.
    pub fn from_rational(&self, numer: i64, denom: i64) -> Result<Decimal, DecimalError> {
        Decimal::from_rational_with_precision(numer, denom, self.precision)
    }

    /// Re-express an existing value at this precision.
    pub fn apply(&self, value: &Decimal) -> Decimal {
        value.with_precision(self.precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_precision() {
        assert_eq!(DecimalContext::default().precision(), 24);
        assert_eq!(DecimalContext::from_env_value(None).precision(), 24);
    }

    #[test]
    fn test_env_value_parsing() {
        assert_eq!(DecimalContext::from_env_value(Some("12")).precision(), 12);
        assert_eq!(DecimalContext::from_env_value(Some(" 8 ")).precision(), 8);
        assert_eq!(DecimalContext::from_env_value(Some("0")).precision(), 24);
        assert_eq!(DecimalContext::from_env_value(Some("many")).precision(), 24);
    }

    #[test]
    fn test_from_env_reads_variable() {
        // Nothing else in this crate reads the variable
        std::env::set_var(DecimalContext::PRECISION_ENV, "7");
        let ctx = DecimalContext::from_env();
        std::env::remove_var(DecimalContext::PRECISION_ENV);
        assert_eq!(ctx.precision(), 7);
        assert_eq!(DecimalContext::from_env().precision(), DEFAULT_PRECISION);
    }

    #[test]
    fn test_parse_precision() {
        assert_eq!(DecimalContext::parse_precision("6"), Some(6));
        assert_eq!(DecimalContext::parse_precision("\t30\n"), Some(30));
        assert_eq!(DecimalContext::parse_precision("0"), None);
        assert_eq!(DecimalContext::parse_precision("-3"), None);
        assert_eq!(DecimalContext::parse_precision("1.5"), None);
    }

    #[test]
    fn test_values_carry_context_precision() {
        let ctx = DecimalContext::new(5);
        let value = ctx.parse("3.14159265").unwrap();
        assert_eq!(value.precision(), 5);
        assert_eq!(value.to_string(), "3.1416");

        let third = ctx.from_rational(1, 3).unwrap();
        assert!(third.is_exact());
        assert_eq!(third.to_string(), "0.33333");

        assert_eq!(ctx.from_f64(0.1).unwrap().to_string(), "0.1");
        assert_eq!(ctx.from_i64(7).precision(), 5);
    }

    #[test]
    fn test_later_context_does_not_touch_existing_values() {
        let before = Decimal::parse("2.718281828459045").unwrap();
        let _ctx = DecimalContext::new(3);
        assert_eq!(before.to_string(), "2.718281828459045");
        assert_eq!(DecimalContext::new(3).apply(&before).to_string(), "2.72");
    }

    #[test]
    fn test_zero_precision_is_raised_to_one() {
        assert_eq!(DecimalContext::new(0).precision(), 1);
    }
}
