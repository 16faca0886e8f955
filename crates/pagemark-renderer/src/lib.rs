//! # Pagemark Renderer
//!
//! The two render targets for line shapes. The document target converts a
//! schema into page space and hands a stroke to the host's [`LinePage`]; the
//! on-screen target produces a declarative fill style for the host element.
//!
//! The drawing primitive itself belongs to the host. This crate only decides
//! what to draw.

pub mod error;
pub mod page;
pub mod pdf;
pub mod settings;
pub mod ui;

pub use error::RenderError;
pub use page::{render_page, PageReport, ShapeFailure};
pub use pdf::{prepare_line, render_line, LinePage, PdfLine};
pub use settings::RenderSettings;
pub use ui::{render_line_ui, BoxStyle, Length};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_public_types_are_send_sync() {
        assert_send_sync::<PdfLine>();
        assert_send_sync::<BoxStyle>();
        assert_send_sync::<PageReport>();
        assert_send_sync::<ShapeFailure>();
        assert_send_sync::<RenderError>();
        assert_send_sync::<RenderSettings>();
    }
}
