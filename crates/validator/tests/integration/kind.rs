use std::collections::BTreeMap;

use rstest::rstest;
use serde_json::json;
use sift_validator::prelude::*;

#[rstest]
#[case::nan(Dynamic::Number(f64::NAN), "NaN", true)]
#[case::five_is_not_nan(Dynamic::Number(5.0), "NaN", false)]
#[case::array(Dynamic::Array(vec![]), "Array", true)]
#[case::object(Dynamic::Object(BTreeMap::new()), "Object", true)]
#[case::null(Dynamic::Null, "Null", true)]
#[case::undefined(Dynamic::Undefined, "Undefined", true)]
#[case::null_is_not_object(Dynamic::Null, "Object", false)]
#[case::date(Dynamic::Date(0.0), "Date", true)]
#[case::regexp(Dynamic::RegExp("^1$".into()), "RegExp", true)]
#[case::function(Dynamic::Function("main".into()), "Function", true)]
#[case::string_nan(Dynamic::from("NaN"), "NaN", false)]
#[case::unknown(Dynamic::from("x"), "Widget", false)]
#[case::lowercase(Dynamic::from("x"), "string", false)]
fn validate_type_by_name(#[case] value: Dynamic, #[case] name: &str, #[case] expected: bool) {
    assert_eq!(validate_type(&value, name), expected);
}

#[test]
fn typed_validator_reports_actual_tag() {
    let error = TypeOf::new(TypeTag::Array)
        .validate(&Dynamic::Boolean(false))
        .unwrap_err();
    assert_eq!(error.code, "type_mismatch");
    assert_eq!(error.param("actual"), Some("Boolean"));
}

#[test]
fn json_payload_fields_are_checked() {
    let payload = json!({"tags": ["a", "b"], "profile": {"age": 30}, "nickname": null});

    assert!(validate_json_type(&payload["tags"], "Array"));
    assert!(validate_json_type(&payload["profile"], "Object"));
    assert!(validate_json_type(&payload["nickname"], "Null"));
    assert!(validate_json_type(&payload["profile"]["age"], "Number"));
}
