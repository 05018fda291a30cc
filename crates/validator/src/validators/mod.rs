//! Built-in validators
//!
//! # Categories
//!
//! - **Runtime type**: [`TypeOf`] over [`Dynamic`] values
//! - **Contact**: [`MobilePhone`]
//! - **Identity**: [`IdCard`], [`IdCardNumber`], [`IdCardSuffix`]
//! - **Numeric text**: [`NumberFormat`] compiled into a [`NumberRule`]
//!
//! Each category also has a boolean helper (`validate_type`,
//! `validate_phone_number`, `validate_id_card`, `validate_number`) for
//! callers that only need a yes/no answer.
//!
//! # Examples
//!
//! ```
//! use sift_validator::validators::*;
//!
//! assert!(validate_phone_number("13800138000"));
//! assert!(validate_id_card("110101199003071234", false));
//! assert!(validate_number("3.14", Some(&NumberFormat::new().fixed(2))));
//! assert!(validate_type(&Dynamic::Array(vec![]), "Array"));
//! ```

pub mod id_card;
pub mod kind;
pub mod number;
pub mod phone;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use id_card::{IdCard, IdCardMode, IdCardNumber, IdCardSuffix, validate_id_card};
pub use kind::{Dynamic, TypeName, TypeOf, TypeTag, UnknownTypeTag, validate_type};
pub use number::{NumberFormat, NumberRule, Numeric, validate_number};
pub use phone::{MobilePhone, mobile_phone, validate_phone_number};
