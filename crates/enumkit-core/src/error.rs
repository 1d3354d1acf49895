use thiserror::Error;

use crate::types::Scalar;

/// Errors raised by definition construction and lookup operations.
///
/// Validation rules never surface these: a failed membership test inside a
/// rule becomes a boolean fail, not an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnumError {
    #[error("key \"{key}\" is not a member of enum \"{def}\"")]
    KeyNotFound { def: String, key: String },

    #[error("value \"{value}\" is not a member of enum \"{def}\"")]
    ValueNotFound { def: String, value: Scalar },

    #[error("invalid enum definition \"{def}\": {reason}")]
    Definition { def: String, reason: String },
}
