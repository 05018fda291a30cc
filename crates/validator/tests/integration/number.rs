use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use sift_validator::prelude::*;

#[rstest]
#[case::canonical_zero("0", true)]
#[case::zero_point_zero("0.0", false)]
#[case::negative_zero("-0", false)]
#[case::double_zero("00", false)]
#[case::negative_decimal("-12.5", true)]
#[case::long_decimal("3.14159", true)]
#[case::trailing_point("3.", false)]
#[case::leading_point(".5", false)]
#[case::plus_sign("+1", false)]
#[case::exponent("1e3", false)]
fn unbounded_format(#[case] value: &str, #[case] expected: bool) {
    crate::init_tracing();
    assert_eq!(validate_number(value, None), expected);
}

#[rstest]
#[case::integer_unable_zero_with_zero_digit("10", NumberFormat::new().fixed(0).unable_zero(), false)]
#[case::integer_unable_zero("19", NumberFormat::new().fixed(0).unable_zero(), true)]
#[case::integer("120", NumberFormat::new().fixed(0), true)]
#[case::integer_rejects_decimal("1.5", NumberFormat::new().fixed(0), false)]
#[case::negative_integer("-19", NumberFormat::new().fixed(0).negative(), true)]
#[case::negative_integer_zero_digit("-10", NumberFormat::new().fixed(0).negative(), false)]
#[case::negative_integer_unsigned("19", NumberFormat::new().fixed(0).negative(), false)]
#[case::two_places("3.14", NumberFormat::new().fixed(2), true)]
#[case::three_places("3.145", NumberFormat::new().fixed(2), false)]
#[case::negative_two_places("-3.1", NumberFormat::new().fixed(2).negative(), true)]
#[case::negative_mode_requires_sign("3.1", NumberFormat::new().fixed(2).negative(), false)]
#[case::positive_mode_rejects_sign("-3.1", NumberFormat::new().fixed(2), false)]
#[case::zero_with_places("0", NumberFormat::new().fixed(2), true)]
#[case::degenerate_with_places("0.00", NumberFormat::new().fixed(2), false)]
#[case::unable_zero_unbounded("0", NumberFormat::new().unable_zero(), false)]
#[case::clamped_places("7", NumberFormat::new().fixed(-1), true)]
fn configured_format(#[case] value: &str, #[case] format: NumberFormat, #[case] expected: bool) {
    crate::init_tracing();
    assert_eq!(validate_number(value, Some(&format)), expected);
}

#[test]
fn numbers_render_before_matching() {
    assert!(validate_number(0.0, None));
    assert!(validate_number(-0.0, None));
    assert!(validate_number(-42, Some(&NumberFormat::new().fixed(0).negative())));
    assert!(!validate_number(0.25, Some(&NumberFormat::new().fixed(1))));
    assert!(!validate_number(1e-7, None));
}

#[test]
fn compiled_rule_is_reusable() {
    let rule = NumberFormat::new().fixed(1).compile();
    let accepted: Vec<bool> = ["1", "1.5", "1.55", "-1"]
        .into_iter()
        .map(|value| rule.is_valid(value))
        .collect();
    assert_eq!(accepted, vec![true, true, false, false]);
    assert_eq!(rule.format(), &NumberFormat::new().fixed(1));
}

#[test]
fn failure_codes() {
    let rule = NumberFormat::new().unable_zero().compile();
    assert_eq!(rule.validate("0.0").unwrap_err().code, "degenerate_zero");
    assert_eq!(rule.validate("0").unwrap_err().code, "zero_not_allowed");
    assert_eq!(rule.validate("abc").unwrap_err().code, "invalid_number");
}

#[test]
fn format_from_schema_options() {
    let format = number_format_from_json(&json!({"fixed": 0, "unableZero": true})).unwrap();
    assert_eq!(format, NumberFormat::new().fixed(0).unable_zero());
    assert!(!validate_number("10", Some(&format)));
    assert!(validate_number("19", Some(&format)));
}

#[rstest]
#[case::one_place(1, "1.5", true)]
#[case::one_place_exceeded(1, "1.55", false)]
#[case::large_bound(100_000, "1.5", true)]
#[case::max_bound(i64::MAX, "1.5", true)]
#[case::max_bound_malformed(i64::MAX, "1.", false)]
fn any_decimal_bound_is_usable(#[case] fixed: i64, #[case] value: &str, #[case] expected: bool) {
    crate::init_tracing();
    let format = NumberFormat::new().fixed(fixed);
    assert_eq!(validate_number(value, Some(&format)), expected);
}

#[test]
fn long_fraction_is_counted_against_bound() {
    let rule = NumberFormat::new().fixed(100_000).compile();
    assert!(rule.is_valid(&format!("1.{}", "5".repeat(100_000))));

    let beyond = format!("1.{}", "5".repeat(100_001));
    let error = rule.validate(&beyond).unwrap_err();
    assert_eq!(error.code, "too_many_decimal_places");
    assert_eq!(error.param("actual"), Some("100001"));
}
