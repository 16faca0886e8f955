use pagemark_core::ShapeSchema;

use crate::error::RenderError;
use crate::pdf::{render_line, LinePage, PdfLine};
use crate::settings::RenderSettings;

/// A shape that was skipped during a page render.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeFailure {
    /// Position of the shape in the page's shape list.
    pub index: usize,
    pub name: String,
    pub error: RenderError,
}

/// Outcome of rendering every shape on one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageReport {
    pub drawn: Vec<PdfLine>,
    pub failures: Vec<ShapeFailure>,
}

impl PageReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Render each shape in order. A failing shape is reported and skipped.
pub fn render_page<P: LinePage + ?Sized>(
    page: &mut P,
    shapes: &[ShapeSchema],
    settings: &RenderSettings,
) -> PageReport {
    let mut report = PageReport::default();
    for (index, schema) in shapes.iter().enumerate() {
        match render_line(page, schema, settings) {
            Ok(line) => report.drawn.push(line),
            Err(error) => {
                log::warn!("Skipping shape #{} '{}': {}", index, schema.label(), error);
                report.failures.push(ShapeFailure {
                    index,
                    name: schema.label().to_string(),
                    error,
                });
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::tests::RecordingPage;
    use pagemark_core::{Point, ShapeError};

    #[test]
    fn test_bad_shape_does_not_stop_page() {
        let _ = env_logger::builder().is_test(true).try_init();
        let shapes = vec![
            ShapeSchema::line().with_name("broken").with_color("#ZZZZZZ"),
            ShapeSchema::line().with_name("ok"),
        ];
        let mut page = RecordingPage::new(100.0);
        let report = render_page(&mut page, &shapes, &RenderSettings::default());

        assert!(!report.is_clean());
        assert_eq!(report.drawn.len(), 1);
        assert_eq!(page.lines, report.drawn);
        assert_eq!(page.lines[0].end, Point::new(5.0, 95.0));
        assert_eq!(
            report.failures,
            vec![ShapeFailure {
                index: 0,
                name: "broken".to_string(),
                error: RenderError::Shape(ShapeError::InvalidColorFormat("#ZZZZZZ".to_string())),
            }]
        );
    }

    #[test]
    fn test_empty_page() {
        let mut page = RecordingPage::new(297.0);
        let report = render_page(&mut page, &[], &RenderSettings::default());
        assert!(report.is_clean());
        assert!(report.drawn.is_empty());
    }
}
