//! Document target: page space with the origin at the bottom-left.

use serde::{Deserialize, Serialize};

use pagemark_core::{convert, hex_to_rgb, Point, Rgb, ShapeError, ShapeSchema};

use crate::error::RenderError;
use crate::settings::RenderSettings;

/// Arguments for the host's stroke primitive, already in page space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PdfLine {
    pub start: Point,
    pub end: Point,
    pub thickness: f64,
    pub color: Rgb,
    pub opacity: f64,
}

impl PdfLine {
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Scaling or the axis flip can overflow finite input, so the finished
    /// line is checked again before it reaches the page.
    pub fn check_finite(&self) -> Result<(), ShapeError> {
        for (field, p) in [("startPosition", self.start), ("endPosition", self.end)] {
            if !p.is_finite() {
                return Err(ShapeError::InvalidGeometry {
                    field,
                    reason: format!("page-space coordinate ({}, {}) is not finite", p.x, p.y),
                });
            }
        }
        if !self.thickness.is_finite() {
            return Err(ShapeError::InvalidGeometry {
                field: "height",
                reason: format!("page-space thickness {} is not finite", self.thickness),
            });
        }
        Ok(())
    }
}

/// A document page able to stroke a segment.
pub trait LinePage {
    /// Page height in the page's own unit.
    fn height(&self) -> f64;
    fn draw_line(&mut self, line: &PdfLine);
}

/// Resolve color and geometry for `schema` without drawing anything.
pub fn prepare_line(
    schema: &ShapeSchema,
    page_height: f64,
    settings: &RenderSettings,
) -> Result<PdfLine, RenderError> {
    if !page_height.is_finite() || page_height < 0.0 {
        return Err(RenderError::InvalidPageHeight(page_height));
    }

    let color = hex_to_rgb(schema.effective_color())?;
    schema.check_geometry()?;

    if schema.rotate != 0.0 {
        log::debug!(
            "line '{}' has rotate={} which is not applied; endpoints are drawn as given",
            schema.label(),
            schema.rotate
        );
    }

    let scaled = schema.scaled(settings.scale_factor());
    let geometry = convert(&scaled, page_height, false);

    let line = PdfLine {
        start: geometry.start(),
        end: geometry.end(),
        thickness: geometry.height,
        color,
        opacity: geometry.opacity,
    };
    line.check_finite()?;
    Ok(line)
}

/// Draw `schema` on `page`. Nothing is drawn when an error is returned.
pub fn render_line<P: LinePage + ?Sized>(
    page: &mut P,
    schema: &ShapeSchema,
    settings: &RenderSettings,
) -> Result<PdfLine, RenderError> {
    let line = prepare_line(schema, page.height(), settings)?;
    log::debug!(
        "draw line '{}' ({}, {}) -> ({}, {}) length {} thickness {}",
        schema.label(),
        line.start.x,
        line.start.y,
        line.end.x,
        line.end.y,
        line.length(),
        line.thickness
    );
    page.draw_line(&line);
    Ok(line)
}
