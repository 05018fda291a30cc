//! Core validation types and traits
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! Every validator in this crate is a small value implementing [`Validate`]
//! for a concrete input type. The boolean helpers in
//! [`validators`](crate::validators) are thin wrappers that discard the
//! structured error.

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::Validate;

// ============================================================================
// UTILITIES
// ============================================================================

/// Runs every validator against the same value and collects all failures.
///
/// # Examples
///
/// ```
/// use sift_validator::foundation::{Validate, validate_with_all};
/// use sift_validator::validators::{IdCard, IdCardMode};
///
/// let full = IdCard::new(IdCardMode::Full);
/// let suffix = IdCard::new(IdCardMode::LastSix);
/// let validators: &[&dyn Validate<Input = str>] = &[&full, &suffix];
///
/// assert!(validate_with_all("110101199003071234", validators).is_ok());
/// assert_eq!(validate_with_all("x071234", validators).unwrap_err().len(), 1);
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect::<ValidationErrors>()
        .into_result(())
}

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
