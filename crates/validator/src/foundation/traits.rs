//! Core traits for the validation system

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every validator implements.
///
/// Validators are generic over their input type; `?Sized` inputs such as
/// `str` are allowed. Each built-in boolean entry point of this crate is
/// `validator.validate(input).is_ok()` for one of these.
///
/// # Examples
///
/// ```
/// use sift_validator::foundation::{Validate, ValidationError};
///
/// struct Digits;
///
/// impl Validate for Digits {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
///             Ok(())
///         } else {
///             Err(ValidationError::invalid_format("", "digits"))
///         }
///     }
/// }
///
/// assert!(Digits.is_valid("0123"));
/// assert!(!Digits.is_valid("12a"));
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` describing the first rule that failed
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns whether the input passes, discarding the error detail.
    #[inline]
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }

    /// Short name used in log events.
    fn name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}

// ============================================================================
// TESTS
// ============================================================================
