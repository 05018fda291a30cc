//! Prelude module for convenient imports.
//!
//! `use sift_validator::prelude::*;` brings in the `Validate` trait, the
//! error types, every built-in validator and the JSON helpers.

// ============================================================================
// FOUNDATION: Core traits, errors
// ============================================================================

pub use crate::foundation::{Validate, ValidationError, ValidationErrors, validate_with_all};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// JSON: serde_json bridges
// ============================================================================

pub use crate::json::{number_format_from_json, validate_json_type};
