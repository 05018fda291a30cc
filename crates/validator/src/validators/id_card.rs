//! Identity card number validators.
//!
//! Two shapes are supported:
//!
//! - [`IdCardNumber`]: the full 18-character number (region code, birth
//!   date, sequence, check character)
//! - [`IdCardSuffix`]: only the trailing six characters, for forms that
//!   collect the tail of the number
//!
//! Neither computes the check-character checksum nor verifies that the birth
//! date exists on the calendar; `19900231` passes the date shape.

use crate::foundation::{Validate, ValidationError};

crate::pattern_validator! {
    /// Validates a full 18-character identity card number.
    ///
    /// Layout: 6-digit region code (first digit non-zero), birth year starting
    /// with `18`, `19` or `20`, month `01`-`12`, day `01`-`31`, 3-digit
    /// sequence, and a check character that is a digit or `X`/`x`.
    pub IdCardNumber = r"^[1-9][0-9]{5}(?:18|19|20)[0-9]{2}(?:0[1-9]|10|11|12)(?:0[1-9]|[12][0-9]|30|31)[0-9]{3}[0-9Xx]$";
    error(input) { ValidationError::invalid_format("", "id_card") }
}

crate::pattern_validator! {
    /// Validates that a string ends with five digits and a check character.
    ///
    /// Only the end is anchored, so any prefix is accepted.
    pub IdCardSuffix = r"[0-9]{5}[0-9Xx]$";
    error(input) { ValidationError::invalid_format("", "id_card_suffix") }
}

// ============================================================================
// MODE-SELECTING VALIDATOR
// ============================================================================

/// Which part of the identity card number is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IdCardMode {
    /// The whole 18-character number.
    #[default]
    Full,
    /// Only the trailing six characters.
    LastSix,
}

impl From<bool> for IdCardMode {
    /// `true` selects [`IdCardMode::LastSix`].
    fn from(only_validate_last: bool) -> Self {
        if only_validate_last {
            Self::LastSix
        } else {
            Self::Full
        }
    }
}

/// Validates an identity card number in the configured [`IdCardMode`].
///
/// # Examples
///
/// ```
/// use sift_validator::foundation::Validate;
/// use sift_validator::validators::{IdCard, IdCardMode};
///
/// assert!(IdCard::full().validate("110101199003071234").is_ok());
/// assert!(IdCard::full().validate("11010119900307123X").is_ok());
/// assert!(IdCard::new(IdCardMode::LastSix).validate("anything071234").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdCard {
    mode: IdCardMode,
}

impl IdCard {
    /// Creates a validator for the given mode.
    #[must_use]
    pub const fn new(mode: IdCardMode) -> Self {
        Self { mode }
    }

    /// Checks the whole number.
    #[must_use]
    pub const fn full() -> Self {
        Self::new(IdCardMode::Full)
    }

    /// Checks only the trailing six characters.
    #[must_use]
    pub const fn last_six() -> Self {
        Self::new(IdCardMode::LastSix)
    }

    /// Returns the configured mode.
    #[must_use]
    pub const fn mode(&self) -> IdCardMode {
        self.mode
    }
}

impl Validate for IdCard {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match self.mode {
            IdCardMode::Full => IdCardNumber.validate(input),
            IdCardMode::LastSix => IdCardSuffix.validate(input),
        }
    }
}

/// Returns whether `value` is a well-formed identity card number.
///
/// With `only_validate_last` set, only the trailing six characters are
/// checked.
///
/// ```
/// use sift_validator::validators::validate_id_card;
///
/// assert!(validate_id_card("110101199003071234", false));
/// assert!(!validate_id_card("110101209913071234", false));
/// assert!(validate_id_card("anything071234", true));
/// ```
#[must_use]
pub fn validate_id_card(value: &str, only_validate_last: bool) -> bool {
    IdCard::new(only_validate_last.into()).is_valid(value)
}

// ============================================================================
// TESTS
// ============================================================================
