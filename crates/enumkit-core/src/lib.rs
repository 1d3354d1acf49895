//! Declared scalar enums with reflective utilities.
//!
//! Applications declare each enumeration once as an explicit, ordered
//! key→value table ([`EnumDef`]) and derive everything else from it:
//! lookups, random sampling, select-list projection, and human-readable
//! descriptions with optional localization. Validation rules over these
//! definitions live in the companion `enumkit-rules` crate.
//!
//! There is no extension registry: every operation is an inherent method or
//! free function, so embedders extend the library by plain composition —
//! write a wrapper function over the definition you own.

pub mod def;
pub mod describe;
pub mod error;
pub mod json;
pub mod types;

pub use def::{EnumDef, EnumDefBuilder};
pub use describe::{humanize, Describer, Localizer, TableLocalizer};
pub use error::EnumError;
pub use json::{def_to_json, select_to_json};
pub use types::{Member, Scalar, SelectOption};
