use serde::{Deserialize, Serialize};

use crate::color::DEFAULT_LINE_COLOR;
use crate::error::ShapeError;
use crate::geometry::Point;

/// Shape kind tag stored under `type` in page templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Line,
}

/// First endpoint of a line, serialized as `{x1, y1}`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StartPosition {
    pub x1: f64,
    pub y1: f64,
}

impl StartPosition {
    pub fn new(x1: f64, y1: f64) -> Self {
        Self { x1, y1 }
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x1, self.y1)
    }
}

impl From<Point> for StartPosition {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

/// Second endpoint of a line, serialized as `{x2, y2}`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EndPosition {
    pub x2: f64,
    pub y2: f64,
}

impl EndPosition {
    pub fn new(x2: f64, y2: f64) -> Self {
        Self { x2, y2 }
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x2, self.y2)
    }
}

impl From<Point> for EndPosition {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

/// Editable description of one line shape, in editor space (origin top-left).
///
/// Missing fields fall back to the line defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShapeSchema {
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Top-left anchor of the bounding box.
    pub position: Point,
    pub width: f64,
    /// Box height; doubles as stroke thickness for a line.
    pub height: f64,
    /// Clockwise rotation in degrees around the box center.
    pub rotate: f64,
    pub start_position: StartPosition,
    pub end_position: EndPosition,
    pub opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub read_only: bool,
}

impl Default for ShapeSchema {
    fn default() -> Self {
        Self::line()
    }
}

impl ShapeSchema {
    /// A freshly created line with the stock defaults.
    pub fn line() -> Self {
        Self {
            kind: ShapeKind::Line,
            name: None,
            position: Point::new(0.0, 0.0),
            width: 5.0,
            height: 1.0,
            rotate: 0.0,
            start_position: StartPosition::new(0.0, 0.0),
            end_position: EndPosition::new(5.0, 5.0),
            opacity: 1.0,
            color: Some(DEFAULT_LINE_COLOR.to_string()),
            read_only: true,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    /// Name used in logs and reports.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("line")
    }

    /// The color to paint with: the schema's own, or the default when unset or empty.
    pub fn effective_color(&self) -> &str {
        match self.color.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => DEFAULT_LINE_COLOR,
        }
    }

    /// Copy with every length multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        if factor == 1.0 {
            return self.clone();
        }
        Self {
            position: self.position.scale(factor),
            width: self.width * factor,
            height: self.height * factor,
            start_position: self.start_position.to_point().scale(factor).into(),
            end_position: self.end_position.to_point().scale(factor).into(),
            ..self.clone()
        }
    }

    /// Reject negative sizes and non-finite numbers. Never corrects them.
    pub fn check_geometry(&self) -> Result<(), ShapeError> {
        let finite_points = [
            ("position", self.position),
            ("startPosition", self.start_position.to_point()),
            ("endPosition", self.end_position.to_point()),
        ];
        for (field, p) in finite_points {
            if !p.is_finite() {
                return Err(ShapeError::InvalidGeometry {
                    field,
                    reason: format!("non-finite coordinate ({}, {})", p.x, p.y),
                });
            }
        }

        let scalars = [
            ("width", self.width),
            ("height", self.height),
            ("rotate", self.rotate),
            ("opacity", self.opacity),
        ];
        for (field, v) in scalars {
            if !v.is_finite() {
                return Err(ShapeError::InvalidGeometry {
                    field,
                    reason: format!("non-finite value {v}"),
                });
            }
        }

        for (field, v) in [("width", self.width), ("height", self.height)] {
            if v < 0.0 {
                return Err(ShapeError::InvalidGeometry {
                    field,
                    reason: format!("negative size {v}"),
                });
            }
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
