//! Mobile phone number validator.
//!
//! Accepts the 11-digit mainland mobile format: a leading `1`, a second
//! digit in `3..=9`, then nine more digits. No separators, no country code.

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// MOBILE PHONE VALIDATOR
// ============================================================================

crate::pattern_validator! {
    /// Validates an 11-digit mobile phone number.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift_validator::foundation::Validate;
    /// use sift_validator::validators::MobilePhone;
    ///
    /// assert!(MobilePhone.validate("13800138000").is_ok());
    /// assert!(MobilePhone.validate("12800138000").is_err()); // second digit
    /// assert!(MobilePhone.validate("+8613800138000").is_err());
    /// ```
    pub MobilePhone = r"^1[3-9][0-9]{9}$";
    error(input) {
        if input.is_empty() {
            ValidationError::new("empty_phone", "Phone number cannot be empty")
        } else {
            ValidationError::invalid_format("", "mobile_phone")
                .with_param("actual_length", input.chars().count().to_string())
        }
    }
    fn mobile_phone();
}

/// Returns whether `value` is a well-formed 11-digit mobile phone number.
///
/// ```
/// use sift_validator::validators::validate_phone_number;
///
/// assert!(validate_phone_number("13800138000"));
/// assert!(!validate_phone_number("1380013800"));
/// ```
#[must_use]
pub fn validate_phone_number(value: &str) -> bool {
    MobilePhone.is_valid(value)
}

// ============================================================================
// TESTS
// ============================================================================
