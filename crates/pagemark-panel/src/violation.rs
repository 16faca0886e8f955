use serde::{Deserialize, Serialize};

/// Kind of panel validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    Required,
    Pattern,
    OutOfRange,
}

/// A single field that failed panel validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Schema key of the offending field.
    pub field: String,
    pub kind: ViolationKind,
    /// Localized for pattern and required rules; plain text for range checks.
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &str, kind: ViolationKind, message: String) -> Self {
        Self {
            field: field.to_string(),
            kind,
            message,
        }
    }
}
