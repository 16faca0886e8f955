//! # Pagemark Panel
//!
//! Property-panel side of the line shape: which fields the editor exposes,
//! how they are validated, and the defaults new instances start from.
//! Titles and messages go through an injected [`Translate`] lookup.

pub mod descriptor;
pub mod field;
pub mod i18n;
pub mod violation;

pub use descriptor::{ShapeDescriptor, LINE_DESCRIPTOR};
pub use field::{FieldMeta, FieldSpec, FieldType, LineField, Rule, RuleMeta, Widget};
pub use i18n::{Catalog, Translate};
pub use violation::{FieldViolation, ViolationKind};
