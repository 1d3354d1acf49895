//! Rule: enum-key
//!
//! Passes when the candidate, taken as a string, equals some key of the
//! bound definition. Keys are case-sensitive identifiers, so comparison is
//! always exact; the strict flag exists only for constructor symmetry with
//! the value rule.

use enumkit_core::{humanize, EnumDef};
use serde_json::Value;

use crate::ValidationRule;

pub struct EnumKeyRule<'a> {
    def: &'a EnumDef,
    strict: bool,
}

impl<'a> EnumKeyRule<'a> {
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

impl ValidationRule for EnumKeyRule<'_> {
    fn id(&self) -> &str {
        "enum-key"
    }

    fn message(&self) -> String {
        format!(
            "The selected key is not a valid {} key.",
            humanize(self.def.name()).to_lowercase()
        )
    }

    fn passes(&self, candidate: &Value) -> bool {
        match candidate {
            Value::String(s) => self.def.has_key(s),
            _ => false,
        }
    }
}
