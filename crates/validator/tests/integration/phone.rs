use pretty_assertions::assert_eq;
use rstest::rstest;
use sift_validator::prelude::*;

#[rstest]
#[case::china_mobile("13800138000")]
#[case::china_unicom("15600001111")]
#[case::lowest_second_digit("13000000000")]
#[case::highest_second_digit("19999999999")]
fn accepts_mobile_numbers(#[case] number: &str) {
    crate::init_tracing();
    assert!(validate_phone_number(number));
}

#[rstest]
#[case::wrong_first_digit("23800138000")]
#[case::second_digit_too_low("12800138000")]
#[case::too_short("1380013800")]
#[case::too_long("138001380000")]
#[case::country_code("+8613800138000")]
#[case::separators("138 0013 8000")]
#[case::letters("1380013800a")]
#[case::empty("")]
fn rejects_malformed_numbers(#[case] number: &str) {
    crate::init_tracing();
    assert!(!validate_phone_number(number));
}

#[test]
fn typed_validator_reports_why() {
    assert_eq!(
        MobilePhone.validate("").unwrap_err().code.as_ref(),
        "empty_phone"
    );

    let error = mobile_phone().validate("1380013800").unwrap_err();
    assert_eq!(
        error.to_string(),
        "invalid_format: Invalid format (expected=mobile_phone, actual_length=10)"
    );
}
