//! Rule: enum-value
//!
//! Passes when the candidate equals some value of the bound definition.
//! Strict mode requires matching scalar type (a JSON string never matches
//! an integer value); loose mode also accepts an integer's decimal string
//! rendering and vice versa.

use enumkit_core::{humanize, EnumDef, Scalar};
use serde_json::Value;

use crate::ValidationRule;

pub struct EnumValueRule<'a> {
    def: &'a EnumDef,
    strict: bool,
}

impl<'a> EnumValueRule<'a> {
    /// Strict by default.
    pub fn new(def: &'a EnumDef) -> Self {
        Self { def, strict: true }
    }

    pub fn with_strict(def: &'a EnumDef, strict: bool) -> Self {
        Self { def, strict }
    }

    pub fn strict(&self) -> bool {
        self.strict
    }
}

impl ValidationRule for EnumValueRule<'_> {
    fn id(&self) -> &str {
        "enum-value"
    }

    fn message(&self) -> String {
        format!(
            "The selected value is not a valid {}.",
            humanize(self.def.name()).to_lowercase()
        )
    }

    fn passes(&self, candidate: &Value) -> bool {
        self.def
            .values()
            .iter()
            .any(|value| matches_value(candidate, value, self.strict))
    }
}

/// Compare a JSON candidate against one declared scalar value. Candidates
/// that have no scalar counterpart (null, bool, float, arrays) never match.
fn matches_value(candidate: &Value, value: &Scalar, strict: bool) -> bool {
    let candidate = match candidate {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Scalar::Int(i),
            None => return false,
        },
        Value::String(s) => Scalar::Str(s.clone()),
        _ => return false,
    };

    if strict {
        candidate == *value
    } else {
        candidate.loose_eq(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn strict_accepts_matching_integer() {
        let def = user_type();
        let rule = EnumValueRule::new(&def);
        assert!(rule.passes(&json!(1)));
        assert!(!rule.passes(&json!(9)));
    }

    #[test]
    fn strict_rejects_string_rendering() {
        let def = user_type();
        let rule = EnumValueRule::new(&def);
        assert!(!rule.passes(&json!("1")));
    }

    #[test]
    fn loose_accepts_string_rendering() {
        let def = user_type();
        let rule = EnumValueRule::with_strict(&def, false);
        assert!(rule.passes(&json!("1")));
        assert!(!rule.passes(&json!("one")));
    }

    #[test]
    fn loose_matches_number_against_string_value() {
        let def = EnumDef::builder("Level")
            .member("Low", "1")
            .member("High", "2")
            .build()
            .unwrap();

        let strict = EnumValueRule::new(&def);
        assert!(!strict.passes(&json!(1)));

        let loose = EnumValueRule::with_strict(&def, false);
        assert!(loose.passes(&json!(1)));
    }

    #[test]
    fn loose_path_agrees_with_scalar_loose_eq() {
        let def = user_type();
        let rule = EnumValueRule::with_strict(&def, false);

        for (candidate, scalar) in [
            (json!("1"), Scalar::Str("1".into())),
            (json!("3"), Scalar::Str("3".into())),
            (json!(2), Scalar::Int(2)),
            (json!("one"), Scalar::Str("one".into())),
        ] {
            let expected = def.values().iter().any(|v| scalar.loose_eq(v));
            assert_eq!(rule.passes(&candidate), expected);
        }
    }

    #[test]
    fn null_and_odd_types_fail_quietly() {
        let def = user_type();
        let rule = EnumValueRule::new(&def);
        assert!(!rule.passes(&Value::Null));
        assert!(!rule.passes(&json!(true)));
        assert!(!rule.passes(&json!([1])));
        assert!(!rule.passes(&json!(1.5)));
    }

    #[test]
    fn message_uses_display_name() {
        let def = user_type();
        let rule = EnumValueRule::new(&def);
        assert_eq!(
            rule.message(),
            "The selected value is not a valid user type."
        );
    }
}
