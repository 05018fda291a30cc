//! Runtime category checks for dynamically typed values.
//!
//! [`Dynamic`] models a value whose type is only known at runtime, the way
//! form payloads and scripting bridges hand values over. Every value reports
//! a [`TypeTag`] (the word inside `[object <Tag>]`), and [`TypeOf`] compares
//! that tag against an expected [`TypeName`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// RUNTIME VALUE
// ============================================================================

/// A value of a runtime-determined category.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Dynamic {
    /// Absence of a value.
    #[default]
    Undefined,
    /// Explicit null.
    Null,
    /// `true` / `false`.
    Boolean(bool),
    /// Double-precision number; NaN and the infinities included.
    Number(f64),
    /// Arbitrary-precision integer.
    BigInt(i128),
    /// Text.
    String(String),
    /// Unique symbol with an optional description.
    Symbol(Option<String>),
    /// Ordered list.
    Array(Vec<Dynamic>),
    /// Plain key-value object.
    Object(BTreeMap<String, Dynamic>),
    /// Callable, identified by name.
    Function(String),
    /// Point in time as milliseconds since the Unix epoch.
    Date(f64),
    /// Regular expression source.
    RegExp(String),
    /// Keyed collection with arbitrary keys.
    Map(Vec<(Dynamic, Dynamic)>),
    /// Collection of unique values.
    Set(Vec<Dynamic>),
    /// Error carrying a message.
    Error(String),
}

impl Dynamic {
    /// Returns the runtime category of this value.
    #[must_use]
    pub const fn tag(&self) -> TypeTag {
        match self {
            Self::Undefined => TypeTag::Undefined,
            Self::Null => TypeTag::Null,
            Self::Boolean(_) => TypeTag::Boolean,
            Self::Number(_) => TypeTag::Number,
            Self::BigInt(_) => TypeTag::BigInt,
            Self::String(_) => TypeTag::String,
            Self::Symbol(_) => TypeTag::Symbol,
            Self::Array(_) => TypeTag::Array,
            Self::Object(_) => TypeTag::Object,
            Self::Function(_) => TypeTag::Function,
            Self::Date(_) => TypeTag::Date,
            Self::RegExp(_) => TypeTag::RegExp,
            Self::Map(_) => TypeTag::Map,
            Self::Set(_) => TypeTag::Set,
            Self::Error(_) => TypeTag::Error,
        }
    }

    /// Returns true only for a number holding NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self, Self::Number(n) if n.is_nan())
    }
}

impl From<bool> for Dynamic {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for Dynamic {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Dynamic {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for Dynamic {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Dynamic {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Dynamic {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Dynamic>> for Dynamic {
    fn from(value: Vec<Dynamic>) -> Self {
        Self::Array(value)
    }
}

impl From<BTreeMap<String, Dynamic>> for Dynamic {
    fn from(value: BTreeMap<String, Dynamic>) -> Self {
        Self::Object(value)
    }
}

impl<T: Into<Dynamic>> From<Option<T>> for Dynamic {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

// ============================================================================
// CATEGORY TAG
// ============================================================================

/// Runtime category reported by [`Dynamic::tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeTag {
    /// No value at all.
    Undefined,
    /// An explicit empty value.
    Null,
    /// `true` or `false`.
    Boolean,
    /// A double-precision float, NaN and infinities included.
    Number,
    /// An arbitrary-precision integer.
    BigInt,
    /// Text.
    String,
    /// A unique opaque identifier.
    Symbol,
    /// An ordered list.
    Array,
    /// A plain key/value record.
    Object,
    /// A callable.
    Function,
    /// A point in time.
    Date,
    /// A regular expression.
    RegExp,
    /// A keyed collection.
    Map,
    /// A collection of unique values.
    Set,
    /// An error value.
    Error,
}

impl TypeTag {
    /// Every tag, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Undefined,
        Self::Null,
        Self::Boolean,
        Self::Number,
        Self::BigInt,
        Self::String,
        Self::Symbol,
        Self::Array,
        Self::Object,
        Self::Function,
        Self::Date,
        Self::RegExp,
        Self::Map,
        Self::Set,
        Self::Error,
    ];

    /// The tag's canonical spelling, e.g. `"RegExp"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::BigInt => "BigInt",
            Self::String => "String",
            Self::Symbol => "Symbol",
            Self::Array => "Array",
            Self::Object => "Object",
            Self::Function => "Function",
            Self::Date => "Date",
            Self::RegExp => "RegExp",
            Self::Map => "Map",
            Self::Set => "Set",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known [`TypeTag`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown type tag `{0}`")]
pub struct UnknownTypeTag(pub String);

impl FromStr for TypeTag {
    type Err = UnknownTypeTag;

    /// Parses the exact, case-sensitive tag spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownTypeTag(s.to_owned()))
    }
}

// ============================================================================
// EXPECTED TYPE
// ============================================================================

/// What a [`TypeOf`] validator expects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeName {
    /// The not-a-number sentinel, checked by value rather than by tag.
    NaN,
    /// A runtime category.
    Tag(TypeTag),
    /// A name matching no category; nothing satisfies it.
    Unknown(String),
}

impl TypeName {
    /// Interprets a category name. Never fails; unrecognised names become
    /// [`TypeName::Unknown`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if name == "NaN" {
            return Self::NaN;
        }
        name.parse::<TypeTag>()
            .map_or_else(|_| Self::Unknown(name.to_owned()), Self::Tag)
    }

    /// The name as it would be written by a caller.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::NaN => "NaN",
            Self::Tag(tag) => tag.as_str(),
            Self::Unknown(name) => name,
        }
    }

    /// Returns whether `value` belongs to this type.
    #[must_use]
    pub fn matches(&self, value: &Dynamic) -> bool {
        match self {
            Self::NaN => value.is_nan(),
            Self::Tag(tag) => value.tag() == *tag,
            Self::Unknown(_) => false,
        }
    }
}

impl From<TypeTag> for TypeName {
    fn from(tag: TypeTag) -> Self {
        Self::Tag(tag)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TYPE VALIDATOR
// ============================================================================

/// Validates that a [`Dynamic`] value belongs to an expected type.
///
/// # Examples
///
/// ```
/// use sift_validator::foundation::Validate;
/// use sift_validator::validators::{Dynamic, TypeOf, TypeTag};
///
/// let arrays = TypeOf::new(TypeTag::Array);
/// assert!(arrays.validate(&Dynamic::Array(vec![])).is_ok());
///
/// let error = arrays.validate(&Dynamic::Null).unwrap_err();
/// assert_eq!(error.param("actual"), Some("Null"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeOf {
    expected: TypeName,
}

impl TypeOf {
    /// Creates a validator for the expected type.
    #[must_use]
    pub fn new(expected: impl Into<TypeName>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    /// Creates a validator from a category name such as `"Array"` or `"NaN"`.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self::new(TypeName::parse(name))
    }
}

impl Validate for TypeOf {
    type Input = Dynamic;

    fn validate(&self, input: &Dynamic) -> Result<(), ValidationError> {
        if self.expected.matches(input) {
            return Ok(());
        }

        let actual = input.tag();
        tracing::trace!(
            validator = self.name(),
            expected = %self.expected,
            %actual,
            "input rejected"
        );
        Err(ValidationError::type_mismatch(
            self.expected.as_str().to_owned(),
            actual.as_str(),
        ))
    }
}

/// Returns whether `target` belongs to the category named by `type_name`.
///
/// `"NaN"` checks for the not-a-number value; every other name is compared
/// against the value's [`TypeTag`]. Unknown names yield `false`.
///
/// ```
/// use sift_validator::validators::{Dynamic, validate_type};
///
/// assert!(validate_type(&Dynamic::Number(f64::NAN), "NaN"));
/// assert!(validate_type(&Dynamic::Array(vec![]), "Array"));
/// assert!(!validate_type(&Dynamic::Number(5.0), "NaN"));
/// ```
#[must_use]
pub fn validate_type(target: &Dynamic, type_name: &str) -> bool {
    TypeName::parse(type_name).matches(target)
}

// ============================================================================
// TESTS
// ============================================================================
