use thiserror::Error;

/// Conditions that stop a single shape from being rendered.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("Invalid color format '{0}', expected #RRGGBB")]
    InvalidColorFormat(String),

    #[error("Invalid geometry in '{field}': {reason}")]
    InvalidGeometry { field: &'static str, reason: String },
}
