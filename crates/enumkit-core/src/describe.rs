use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::def::EnumDef;
use crate::error::EnumError;
use crate::types::{Scalar, SelectOption};

/// Regex for camel/Pascal word boundaries: a lowercase letter or digit
/// immediately followed by an uppercase letter.
static RE_WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

// ---------------------------------------------------------------------------
// Localization collaborator
// ---------------------------------------------------------------------------

/// Read-only translation lookup. The resolver asks for
/// `"{localization_key}.{value}"`; a `None` answer is not an error, it
/// selects the humanized fallback.
pub trait Localizer {
    fn lookup(&self, path: &str) -> Option<String>;
}

/// In-memory `Localizer` backed by a path→translation table.
#[derive(Debug, Clone, Default)]
pub struct TableLocalizer {
    entries: HashMap<String, String>,
}

impl TableLocalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(mut self, path: impl Into<String>, translation: impl Into<String>) -> Self {
        self.entries.insert(path.into(), translation.into());
        self
    }
}

impl Localizer for TableLocalizer {
    fn lookup(&self, path: &str) -> Option<String> {
        self.entries.get(path).cloned()
    }
}

// ---------------------------------------------------------------------------
// Description resolution
// ---------------------------------------------------------------------------

/// Resolves display strings for enum values.
///
/// Resolution order: the override closure, then the localization table,
/// then the humanized key name. Both collaborators are optional and passed
/// explicitly; a bare `Describer::new()` always produces the humanized
/// fallback.
#[derive(Default)]
pub struct Describer<'a> {
    localizer: Option<&'a dyn Localizer>,
    override_fn: Option<&'a dyn Fn(&Scalar) -> Option<String>>,
}

impl<'a> Describer<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_localizer(mut self, localizer: &'a dyn Localizer) -> Self {
        self.localizer = Some(localizer);
        self
    }

    /// Install a value-specific override consulted before localization and
    /// the humanized fallback. Returning `None` falls through.
    pub fn with_override(mut self, f: &'a dyn Fn(&Scalar) -> Option<String>) -> Self {
        self.override_fn = Some(f);
        self
    }

    /// Display string for `value`, which must be a member of `def`.
    pub fn describe(&self, def: &EnumDef, value: &Scalar) -> Result<String, EnumError> {
        let key = def.key_of(value)?;

        if let Some(f) = self.override_fn {
            if let Some(label) = f(value) {
                return Ok(label);
            }
        }

        if let (Some(localizer), Some(loc_key)) = (self.localizer, def.localization_key()) {
            if let Some(label) = localizer.lookup(&format!("{loc_key}.{value}")) {
                return Ok(label);
            }
        }

        Ok(humanize(key))
    }

    /// Declaration-ordered select-list projection: every value of `def`
    /// paired with its resolved label.
    pub fn select_options(&self, def: &EnumDef) -> Vec<SelectOption> {
        def.members()
            .iter()
            .map(|m| SelectOption {
                value: m.value.clone(),
                // key_of cannot miss here: the value comes from the def
                label: self
                    .describe(def, &m.value)
                    .unwrap_or_else(|_| humanize(&m.key)),
            })
            .collect()
    }
}

/// Turn an identifier key into a display phrase: word boundaries become
/// spaces, underscores too, then everything after the first character is
/// lowered and the first is raised. `"SuperAdministrator"` →
/// `"Super administrator"`.
pub fn humanize(key: &str) -> String {
    let spaced = RE_WORD_BOUNDARY
        .replace_all(&key.replace('_', " "), "$1 $2")
        .into_owned();

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => {
            let rest: String = chars.collect::<String>().to_lowercase();
            format!("{}{rest}", first.to_uppercase())
        }
        None => String::new(),
    }
}
