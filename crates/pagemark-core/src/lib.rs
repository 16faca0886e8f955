//! # Pagemark Core
//!
//! Line-shape schema model and the layout transform that moves it from
//! top-left-origin editor space into bottom-left-origin page space,
//! plus the hex color codec the document renderer needs.
//!
//! Everything here is pure and stateless; renderers call in once per shape.

pub mod color;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod schema;
pub mod units;

pub use color::{hex_to_rgb, is_hex_color, Rgb, DEFAULT_LINE_COLOR, HEX_COLOR_PATTERN};
pub use error::ShapeError;
pub use geometry::{rotate_point, Point};
pub use layout::{convert, RenderGeometry};
pub use schema::{EndPosition, ShapeKind, ShapeSchema, StartPosition};
pub use units::Unit;
