//! # sift-validator
//!
//! Stateless validation predicates for form input: runtime-type checks,
//! mobile phone numbers, identity card numbers and configurable numeric text.
//!
//! ## Quick Start
//!
//! ```
//! use sift_validator::prelude::*;
//!
//! assert!(validate_phone_number("13800138000"));
//! assert!(validate_id_card("110101199003071234", false));
//! assert!(validate_number("-3.1", Some(&NumberFormat::new().fixed(2).negative())));
//! assert!(validate_type(&Dynamic::Number(f64::NAN), "NaN"));
//! ```
//!
//! ## Structured errors
//!
//! Every boolean helper wraps a validator implementing
//! [`Validate`](foundation::Validate), which reports *why* a value failed:
//!
//! ```
//! use sift_validator::prelude::*;
//!
//! let rule = NumberFormat::new().fixed(0).unable_zero().compile();
//! let error = rule.validate("10").unwrap_err();
//! assert_eq!(error.code, "invalid_number");
//! ```
//!
//! ## Built-in Validators
//!
//! - **Runtime type**: [`TypeOf`](validators::TypeOf)
//! - **Contact**: [`MobilePhone`](validators::MobilePhone)
//! - **Identity**: [`IdCard`](validators::IdCard)
//! - **Numeric text**: [`NumberRule`](validators::NumberRule)

pub mod foundation;
pub mod json;
mod macros;
pub mod prelude;
pub mod validators;

#[doc(hidden)]
pub mod __private {
    pub use regex;
    pub use tracing;
}
