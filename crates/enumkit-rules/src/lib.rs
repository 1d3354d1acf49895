//! Input-validation rules over enumkit definitions.
//!
//! Provides a trait-based rule framework plus a small validator engine for
//! checking submitted form values against declared enums. Rules never raise
//! lookup errors: a candidate that is null, absent, or outside the
//! definition fails validation with a user-facing message.

mod rules;

pub use rules::*;
use serde::Serialize;
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Rule failure
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleFailure {
    pub rule: String,
    pub field: String,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Validation rule trait
// ---------------------------------------------------------------------------

/// Trait that all validation rules implement.
pub trait ValidationRule: Send + Sync {
    /// Unique rule identifier (e.g., "enum-value").
    fn id(&self) -> &str;

    /// User-facing failure message, templated with the enum's display name.
    fn message(&self) -> String;

    /// Whether the candidate passes. Must tolerate any JSON value,
    /// including `Null`, without panicking.
    fn passes(&self, candidate: &Value) -> bool;

    /// Run the rule against one named field's candidate value.
    fn check(&self, field: &str, candidate: &Value) -> Option<RuleFailure> {
        if self.passes(candidate) {
            None
        } else {
            Some(RuleFailure {
                rule: self.id().to_string(),
                field: field.to_string(),
                message: self.message(),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Validator engine
// ---------------------------------------------------------------------------

/// Binds rules to field names and runs them over a submitted input map.
/// A field missing from the input is validated as `Null`, so required enum
/// fields fail with the rule's message instead of erroring.
#[derive(Default)]
pub struct Validator<'a> {
    checks: Vec<(String, Box<dyn ValidationRule + 'a>)>,
}

impl<'a> Validator<'a> {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    pub fn rule(mut self, field: impl Into<String>, rule: impl ValidationRule + 'a) -> Self {
        self.checks.push((field.into(), Box::new(rule)));
        self
    }

    /// Run every bound rule; returns all failures, empty when valid.
    pub fn validate(&self, input: &Map<String, Value>) -> Vec<RuleFailure> {
        let mut failures = Vec::new();

        for (field, rule) in &self.checks {
            let candidate = input.get(field).unwrap_or(&Value::Null);
            if let Some(failure) = rule.check(field, candidate) {
                failures.push(failure);
            }
        }

        failures
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
