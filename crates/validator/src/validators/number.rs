//! Numeric text validators.
//!
//! [`NumberFormat`] describes which numbers a field accepts: how many decimal
//! places, whether the value must be negative, and whether zero is allowed.
//! [`NumberFormat::compile`] turns that description into a reusable
//! [`NumberRule`].
//!
//! Rules run in a fixed order:
//!
//! 1. Numbers are rendered to text first (`-0` renders as `"0"`).
//! 2. Zero written any way other than `"0"` (`"0.0"`, `"-0"`, `"00"`) is
//!    rejected, whatever the format says.
//! 3. The text must fully match the pattern selected by the format.
//! 4. A bounded format then counts the digits after the point.
//!
//! Integer formats that reject zero (`negative` or `unable_zero` with
//! `fixed == 0`) reject a `0` digit anywhere, so `"10"` and `"-105"` fail.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationError};

static DEGENERATE_ZERO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?0+(?:\.0+)?$").expect("valid degenerate zero pattern"));

static ANY_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+(?:\.[0-9]+)?$").expect("valid decimal pattern"));

static UNSIGNED_DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(?:\.([0-9]+))?$").expect("valid unsigned decimal pattern")
});

static NEGATIVE_DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-[0-9]+(?:\.([0-9]+))?$").expect("valid negative decimal pattern")
});

static UNSIGNED_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid integer pattern"));

static NONZERO_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9]+$").expect("valid nonzero digits pattern"));

static NEGATIVE_NONZERO_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-[1-9]+$").expect("valid negative digits pattern"));

// ============================================================================
// INPUT
// ============================================================================

/// A number, or its textual form, submitted for validation.
#[derive(Debug, Clone, PartialEq)]
pub enum Numeric<'a> {
    /// A numeric value, rendered to text before matching.
    Number(f64),
    /// Text matched as-is.
    Text(Cow<'a, str>),
}

impl Numeric<'_> {
    /// Returns the text the rules are matched against.
    ///
    /// ```
    /// use sift_validator::validators::Numeric;
    ///
    /// assert_eq!(Numeric::from(-0.0).to_text(), "0");
    /// assert_eq!(Numeric::from(1e21).to_text(), "1e+21");
    /// assert_eq!(Numeric::from("0.50").to_text(), "0.50");
    /// ```
    #[must_use]
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Number(n) => Cow::Owned(number_to_text(*n)),
            Self::Text(text) => Cow::Borrowed(text),
        }
    }
}

impl From<f64> for Numeric<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Numeric<'_> {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Numeric<'_> {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for Numeric<'_> {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl<'a> From<&'a str> for Numeric<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Numeric<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<String> for Numeric<'_> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

/// Renders a number the way ECMAScript's `Number#toString` does.
///
/// Magnitudes at or above `1e21` and below `1e-6` use exponent notation with
/// an explicit exponent sign; everything else is plain decimal in its
/// shortest round-tripping form.
fn number_to_text(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if n == 0.0 {
        return "0".to_owned();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }

    let exponent_form = format!("{n:e}");
    match exponent_form.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponent_form,
    }
}

// ============================================================================
// FORMAT
// ============================================================================

/// Which numbers a field accepts.
///
/// Deserializes from the option object used by form schemas:
///
/// ```
/// use sift_validator::validators::NumberFormat;
///
/// let format: NumberFormat =
///     serde_json::from_str(r#"{ "fixed": 2, "unableZero": true }"#).unwrap();
/// assert_eq!(format, NumberFormat::new().fixed(2).unable_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberFormat {
    /// Maximum digits after the decimal point; `Some(0)` means integers only.
    /// `None` accepts any precision. Negative values count as `0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed: Option<i64>,
    /// Require a leading `-`.
    pub negative: bool,
    /// Reject zero.
    pub unable_zero: bool,
}

impl NumberFormat {
    /// Accepts any optionally signed decimal.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fixed: None,
            negative: false,
            unable_zero: false,
        }
    }

    /// Sets the maximum number of decimal places.
    #[must_use = "builder methods must be chained or built"]
    pub const fn fixed(mut self, places: i64) -> Self {
        self.fixed = Some(places);
        self
    }

    /// Requires a leading `-`.
    #[must_use = "builder methods must be chained or built"]
    pub const fn negative(mut self) -> Self {
        self.negative = true;
        self
    }

    /// Rejects zero.
    #[must_use = "builder methods must be chained or built"]
    pub const fn unable_zero(mut self) -> Self {
        self.unable_zero = true;
        self
    }

    /// Decimal places after clamping negatives to zero.
    #[must_use]
    pub fn decimal_places(&self) -> Option<u64> {
        self.fixed.map(|places| places.max(0) as u64)
    }

    /// Builds the rule this format describes.
    ///
    /// Every format maps onto a process-wide pattern; the decimal-place bound
    /// is checked against the captured fraction, so any `fixed` is usable.
    #[must_use]
    pub fn compile(&self) -> NumberRule {
        let pattern: &'static Regex = match self.decimal_places() {
            Some(0) if self.negative => &NEGATIVE_NONZERO_DIGITS,
            Some(0) if self.unable_zero => &NONZERO_DIGITS,
            Some(0) => &UNSIGNED_INTEGER,
            Some(_) if self.negative => &NEGATIVE_DECIMAL,
            Some(_) => &UNSIGNED_DECIMAL,
            None => &ANY_DECIMAL,
        };

        NumberRule {
            format: *self,
            pattern,
        }
    }
}

// ============================================================================
// RULE
// ============================================================================

/// A compiled [`NumberFormat`].
///
/// # Examples
///
/// ```
/// use sift_validator::foundation::Validate;
/// use sift_validator::validators::NumberFormat;
///
/// let price = NumberFormat::new().fixed(2).compile();
/// assert!(price.validate("3.14").is_ok());
/// assert!(price.validate("3.145").is_err());
/// assert!(price.check(12).is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NumberRule {
    format: NumberFormat,
    pattern: &'static Regex,
}

impl NumberRule {
    /// The format this rule was compiled from.
    #[must_use]
    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    /// The full-match pattern selected by the format.
    #[must_use]
    pub fn pattern(&self) -> &'static str {
        self.pattern.as_str()
    }

    /// Validates a number or numeric text.
    pub fn check<'a>(&self, value: impl Into<Numeric<'a>>) -> Result<(), ValidationError> {
        let value: Numeric<'a> = value.into();
        self.validate(&value.to_text())
    }

    fn reject(&self, error: ValidationError) -> Result<(), ValidationError> {
        tracing::trace!(validator = self.name(), code = %error.code, "input rejected");
        Err(error)
    }
}

impl Validate for NumberRule {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input != "0" && DEGENERATE_ZERO.is_match(input) {
            return self.reject(
                ValidationError::new("degenerate_zero", "Zero must be written as '0'")
                    .with_param("actual", input.to_owned()),
            );
        }

        if self.format.fixed.is_none() && self.format.unable_zero && input == "0" {
            let error = ValidationError::new("zero_not_allowed", "Zero is not allowed");
            return self.reject(error);
        }

        let Some(captures) = self.pattern.captures(input) else {
            return self.reject(
                ValidationError::new("invalid_number", "Value does not match the number format")
                    .with_param("pattern", self.pattern().to_owned()),
            );
        };

        // Digits are ASCII, so the byte length is the digit count.
        if let (Some(max), Some(fraction)) = (self.format.decimal_places(), captures.get(1)) {
            let places = fraction.as_str().len() as u64;
            if places > max {
                return self.reject(
                    ValidationError::new("too_many_decimal_places", "Too many decimal places")
                        .with_param("max", max.to_string())
                        .with_param("actual", places.to_string()),
                );
            }
        }

        Ok(())
    }
}

/// Returns whether `value` satisfies `config` (any signed decimal when
/// `None`).
///
/// ```
/// use sift_validator::validators::{NumberFormat, validate_number};
///
/// assert!(validate_number("0", None));
/// assert!(!validate_number("0.0", None));
/// assert!(validate_number("-3.1", Some(&NumberFormat::new().fixed(2).negative())));
/// assert!(!validate_number("10", Some(&NumberFormat::new().fixed(0).unable_zero())));
/// ```
#[must_use]
pub fn validate_number<'a>(value: impl Into<Numeric<'a>>, config: Option<&NumberFormat>) -> bool {
    config
        .copied()
        .unwrap_or_default()
        .compile()
        .check(value)
        .is_ok()
}

// ============================================================================
// TESTS
// ============================================================================
