use thiserror::Error;

use pagemark_core::ShapeError;

/// Why a single shape was not drawn.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("Invalid page height {0}")]
    InvalidPageHeight(f64),
}
