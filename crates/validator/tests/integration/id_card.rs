use pretty_assertions::assert_eq;
use rstest::rstest;
use sift_validator::prelude::*;

#[rstest]
#[case::lowercase_check("11010119900307123x")]
#[case::uppercase_check("11010119900307123X")]
#[case::digit_check("110101199003071234")]
#[case::nineteenth_century("110101189912311234")]
#[case::twenty_first_century("440304200001011234")]
fn accepts_full_numbers(#[case] number: &str) {
    assert!(validate_id_card(number, false));
}

#[rstest]
#[case::year_prefix_99("110101209913071234")]
#[case::year_prefix_17("110101179003071234")]
#[case::month_zero("110101199000071234")]
#[case::month_thirteen("110101199013071234")]
#[case::day_zero("110101199003001234")]
#[case::day_thirty_two("110101199003321234")]
#[case::region_leading_zero("010101199003071234")]
#[case::bad_check("11010119900307123Z")]
#[case::seventeen_chars("11010119900307123")]
#[case::suffix_only("071234")]
fn rejects_malformed_full_numbers(#[case] number: &str) {
    assert!(!validate_id_card(number, false));
}

#[rstest]
#[case("071234", true)]
#[case("anything071234", true)]
#[case("11010119900307123X", true)]
#[case("abc07123x", true)]
#[case("07123", false)]
#[case("0712345 ", false)]
#[case("07123Y", false)]
fn last_six_mode_checks_suffix_only(#[case] value: &str, #[case] expected: bool) {
    assert_eq!(validate_id_card(value, true), expected);
}

#[test]
fn mode_selects_pattern() {
    let full = IdCard::new(IdCardMode::Full);
    let suffix = IdCard::new(IdCardMode::LastSix);

    assert!(full.validate("anything071234").is_err());
    assert!(suffix.validate("anything071234").is_ok());
    assert_eq!(
        full.validate("x").unwrap_err().param("expected"),
        Some("id_card")
    );
}

#[test]
fn both_modes_collect_failures() {
    let full = IdCard::full();
    let suffix = IdCard::last_six();
    let validators: &[&dyn Validate<Input = str>] = &[&full, &suffix];

    let errors = validate_with_all("bad", validators).unwrap_err();
    assert_eq!(errors.len(), 2);
}
