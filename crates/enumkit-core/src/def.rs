use std::collections::HashMap;

use rand::seq::SliceRandom;
use serde::Serialize;

use crate::error::EnumError;
use crate::types::{Member, Scalar};

// ---------------------------------------------------------------------------
// Definition
// ---------------------------------------------------------------------------

/// The ordered key→value mapping for one declared enumeration.
///
/// Definitions are built explicitly, once, and are immutable afterwards.
/// The intended publication pattern for "one definition per enum type" is a
/// `LazyLock` static, which gives the compute-once-and-publish caching the
/// contract asks for:
///
/// ```
/// use std::sync::LazyLock;
/// use enumkit_core::EnumDef;
///
/// static USER_TYPE: LazyLock<EnumDef> = LazyLock::new(|| {
///     EnumDef::builder("UserType")
///         .member("Administrator", 0)
///         .member("Moderator", 1)
///         .build()
///         .unwrap()
/// });
///
/// assert_eq!(USER_TYPE.keys(), vec!["Administrator", "Moderator"]);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct EnumDef {
    name: String,
    members: Vec<Member>,
    #[serde(skip)]
    key_index: HashMap<String, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    localization_key: Option<String>,
}

impl EnumDef {
    /// Start building a definition with the given type name.
    pub fn builder(name: impl Into<String>) -> EnumDefBuilder {
        EnumDefBuilder {
            name: name.into(),
            members: Vec::new(),
            localization_key: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Localization path prefix for description lookup, if configured.
    pub fn localization_key(&self) -> Option<&str> {
        self.localization_key.as_deref()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// All keys, in declaration order.
    pub fn keys(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.key.as_str()).collect()
    }

    /// All values, in declaration order (matching `keys()`).
    pub fn values(&self) -> Vec<&Scalar> {
        self.members.iter().map(|m| &m.value).collect()
    }

    /// The full ordered mapping.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// First key whose value strictly equals `value`.
    pub fn key_of(&self, value: &Scalar) -> Result<&str, EnumError> {
        self.members
            .iter()
            .find(|m| m.value == *value)
            .map(|m| m.key.as_str())
            .ok_or_else(|| EnumError::ValueNotFound {
                def: self.name.clone(),
                value: value.clone(),
            })
    }

    /// The value bound to `key`.
    pub fn value_of(&self, key: &str) -> Result<&Scalar, EnumError> {
        self.key_index
            .get(key)
            .map(|&i| &self.members[i].value)
            .ok_or_else(|| EnumError::KeyNotFound {
                def: self.name.clone(),
                key: key.to_string(),
            })
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.key_index.contains_key(key)
    }

    /// Strict membership test on values.
    pub fn has_value(&self, value: &Scalar) -> bool {
        self.members.iter().any(|m| m.value == *value)
    }

    /// Uniformly random key. Fails on a definition with no members.
    pub fn random_key(&self) -> Result<&str, EnumError> {
        self.random_member().map(|m| m.key.as_str())
    }

    /// Uniformly random value. Fails on a definition with no members.
    pub fn random_value(&self) -> Result<&Scalar, EnumError> {
        self.random_member().map(|m| &m.value)
    }

    fn random_member(&self) -> Result<&Member, EnumError> {
        self.members
            .choose(&mut rand::thread_rng())
            .ok_or_else(|| EnumError::Definition {
                def: self.name.clone(),
                reason: "cannot sample from an enum with no members".to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for [`EnumDef`]. Declaration order of `member` calls is the
/// order every projection reports.
pub struct EnumDefBuilder {
    name: String,
    members: Vec<Member>,
    localization_key: Option<String>,
}

impl EnumDefBuilder {
    pub fn member(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.members.push(Member {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    pub fn localization_key(mut self, path: impl Into<String>) -> Self {
        self.localization_key = Some(path.into());
        self
    }

    /// Finish the definition. Duplicate or empty keys are declaration
    /// errors; a definition with zero members is allowed (only sampling
    /// operations reject it later).
    pub fn build(self) -> Result<EnumDef, EnumError> {
        let mut key_index: HashMap<String, usize> = HashMap::new();

        for (i, member) in self.members.iter().enumerate() {
            if member.key.is_empty() {
                return Err(EnumError::Definition {
                    def: self.name,
                    reason: format!("member at position {i} has an empty key"),
                });
            }
            if key_index.insert(member.key.clone(), i).is_some() {
                return Err(EnumError::Definition {
                    def: self.name,
                    reason: format!("duplicate key \"{}\"", member.key),
                });
            }
        }

        Ok(EnumDef {
            name: self.name,
            members: self.members,
            key_index,
            localization_key: self.localization_key,
        })
    }
}
