use enumkit_core::EnumDef;
use enumkit_rules::{EnumKeyRule, EnumValueRule, Validator};
use pretty_assertions::assert_eq;
use serde_json::json;

fn user_type() -> EnumDef {
    EnumDef::builder("UserType")
        .member("Administrator", 0)
        .member("Moderator", 1)
        .member("Subscriber", 2)
        .member("SuperAdministrator", 3)
        .build()
        .unwrap()
}

#[test]
fn valid_submission_passes() {
    let def = user_type();
    let validator = Validator::new()
        .rule("role", EnumValueRule::new(&def))
        .rule("role_key", EnumKeyRule::new(&def));

    let input = json!({ "role": 1, "role_key": "Moderator" });
    assert!(validator.validate(input.as_object().unwrap()).is_empty());
}

#[test]
fn strict_rejects_string_rendering_of_value() {
    let def = user_type();
    let validator = Validator::new().rule("role", EnumValueRule::new(&def));

    let input = json!({ "role": "1" });
    let failures = validator.validate(input.as_object().unwrap());

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].rule, "enum-value");
    assert_eq!(
        failures[0].message,
        "The selected value is not a valid user type."
    );
}

#[test]
fn loose_accepts_string_rendering_of_value() {
    let def = user_type();
    let validator = Validator::new().rule("role", EnumValueRule::with_strict(&def, false));

    let input = json!({ "role": "1" });
    assert!(validator.validate(input.as_object().unwrap()).is_empty());
}

#[test]
fn absent_field_fails_without_panicking() {
    let def = user_type();
    let validator = Validator::new()
        .rule("role", EnumValueRule::new(&def))
        .rule("role_key", EnumKeyRule::new(&def));

    let input = json!({});
    let failures = validator.validate(input.as_object().unwrap());

    assert_eq!(failures.len(), 2);
    assert!(failures.iter().any(|f| f.field == "role"));
    assert!(failures.iter().any(|f| f.field == "role_key"));
}

#[test]
fn null_field_fails_without_panicking() {
    let def = user_type();
    let validator = Validator::new().rule("role_key", EnumKeyRule::new(&def));

    let input = json!({ "role_key": null });
    let failures = validator.validate(input.as_object().unwrap());
    assert_eq!(failures.len(), 1);
    assert_eq!(
        failures[0].message,
        "The selected key is not a valid user type key."
    );
}

#[test]
fn key_rule_is_case_sensitive_end_to_end() {
    let def = user_type();
    let validator = Validator::new().rule("role_key", EnumKeyRule::new(&def));

    let ok = json!({ "role_key": "Moderator" });
    assert!(validator.validate(ok.as_object().unwrap()).is_empty());

    let bad = json!({ "role_key": "moderator" });
    assert_eq!(validator.validate(bad.as_object().unwrap()).len(), 1);
}
