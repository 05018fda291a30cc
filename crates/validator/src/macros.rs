//! Macros for declaring validators with minimal boilerplate.
//!
//! - [`pattern_validator!`] — a unit validator backed by a fixed regular
//!   expression (struct + `Validate` impl + optional factory fn)

// ============================================================================
// PATTERN VALIDATOR MACRO
// ============================================================================

/// Declares a zero-sized validator whose rule is a single regular expression.
///
/// The pattern is compiled once per process on first use. The input type is
/// always `str`. `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]`
/// is always applied.
///
/// ```rust,ignore
/// pattern_validator! {
///     /// Exactly three ASCII digits.
///     pub ThreeDigits = r"^[0-9]{3}$";
///     error(input) { ValidationError::invalid_format("", "three_digits") }
///     fn three_digits();
/// }
/// ```
#[macro_export]
macro_rules! pattern_validator {
    // ── Variant 1: pattern validator + factory fn ────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident = $pattern:literal;
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::pattern_validator! {
            $(#[$meta])*
            $vis $name = $pattern;
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 2: pattern validator, no factory ─────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident = $pattern:literal;
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $name {
            /// The regular expression this validator matches against.
            pub const PATTERN: &'static str = $pattern;

            fn regex() -> &'static $crate::__private::regex::Regex {
                static REGEX: ::std::sync::LazyLock<$crate::__private::regex::Regex> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::__private::regex::Regex::new($name::PATTERN)
                            .expect(concat!("built-in pattern for ", stringify!($name), " is valid"))
                    });
                &REGEX
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = str;

            #[allow(unused_variables)]
            fn validate(&self, input: &str) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if Self::regex().is_match(input) {
                    Ok(())
                } else {
                    let $einp = input;
                    let error: $crate::foundation::ValidationError = $err;
                    $crate::__private::tracing::trace!(
                        validator = $crate::foundation::Validate::name(self),
                        code = %error.code,
                        "input rejected"
                    );
                    Err(error)
                }
            }
        }
    };
}
