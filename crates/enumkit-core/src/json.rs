//! JSON API for host-language embedders.
//!
//! All functions return JSON strings wrapped in a `{ success, data, error }`
//! envelope, keeping the embedding surface string-only.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::def::EnumDef;
use crate::describe::Describer;

#[derive(Debug, Serialize)]
pub struct JsonResult<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn envelope<T: Serialize>(data: T) -> String {
    let result = JsonResult {
        success: true,
        data: Some(data),
        error: None,
    };
    serde_json::to_string(&result).unwrap_or_else(|e| {
        serde_json::to_string(&JsonResult::<()> {
            success: false,
            data: None,
            error: Some(format!("JSON serialization error: {e}")),
        })
        .unwrap()
    })
}

/// Serialize a definition as `{ "name": …, "members": { key: value, … } }`
/// with members in declaration order.
pub fn def_to_json(def: &EnumDef) -> String {
    #[derive(Serialize)]
    struct DefJson {
        name: String,
        members: Map<String, Value>,
    }

    let mut members = Map::new();
    for m in def.members() {
        let value = serde_json::to_value(&m.value).unwrap_or(Value::Null);
        members.insert(m.key.clone(), value);
    }

    envelope(DefJson {
        name: def.name().to_string(),
        members,
    })
}

/// Serialize the select-list projection as an ordered array of
/// `{ "value": …, "label": … }` objects.
pub fn select_to_json(def: &EnumDef, describer: &Describer<'_>) -> String {
    envelope(describer.select_options(def))
}
