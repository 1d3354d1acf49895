use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Scalar values
// ---------------------------------------------------------------------------

/// Union type for enum member payloads (integer | string).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Str(String),
}

impl Scalar {
    /// Loose equality: in addition to strict equality, an integer matches
    /// its decimal string rendering (`1` ≈ `"1"`). No other coercions.
    pub fn loose_eq(&self, other: &Scalar) -> bool {
        if self == other {
            return true;
        }
        match (self, other) {
            (Scalar::Int(n), Scalar::Str(s)) | (Scalar::Str(s), Scalar::Int(n)) => {
                s.parse::<i64>().map(|p| p == *n).unwrap_or(false)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Int(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Int(n as i64)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Str(s)
    }
}

// ---------------------------------------------------------------------------
// Members
// ---------------------------------------------------------------------------

/// One declared constant: an identifier key bound to a scalar value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub key: String,
    pub value: Scalar,
}

/// One entry of a select-list projection: a value and its display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: Scalar,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_eq_distinguishes_types() {
        assert_ne!(Scalar::Int(1), Scalar::Str("1".into()));
        assert_eq!(Scalar::Int(1), Scalar::Int(1));
        assert_eq!(Scalar::Str("a".into()), Scalar::Str("a".into()));
    }

    #[test]
    fn loose_eq_matches_int_and_rendering() {
        assert!(Scalar::Int(1).loose_eq(&Scalar::Str("1".into())));
        assert!(Scalar::Str("42".into()).loose_eq(&Scalar::Int(42)));
        assert!(!Scalar::Int(1).loose_eq(&Scalar::Str("01x".into())));
        assert!(!Scalar::Str("one".into()).loose_eq(&Scalar::Int(1)));
    }

    #[test]
    fn display_renders_bare_payload() {
        assert_eq!(Scalar::Int(3).to_string(), "3");
        assert_eq!(Scalar::Str("Moderator".into()).to_string(), "Moderator");
    }

    #[test]
    fn scalar_serializes_untagged() {
        assert_eq!(serde_json::to_string(&Scalar::Int(7)).unwrap(), "7");
        assert_eq!(
            serde_json::to_string(&Scalar::Str("x".into())).unwrap(),
            "\"x\""
        );
    }
}
