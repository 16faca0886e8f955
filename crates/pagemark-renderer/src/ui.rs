//! On-screen target. The host container is already placed, so the line is
//! painted as a block filling it.

use std::fmt;

use serde::{Deserialize, Serialize};

use pagemark_core::ShapeSchema;

/// A CSS-like length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Length {
    Percent(f64),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Percent(p) => write!(f, "{p}%"),
        }
    }
}

/// Declarative style for the host element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxStyle {
    pub background_color: String,
    pub width: Length,
    pub height: Length,
}

impl BoxStyle {
    pub fn to_css(&self) -> String {
        format!(
            "background-color: {}; width: {}; height: {};",
            self.background_color, self.width, self.height
        )
    }
}

pub fn render_line_ui(schema: &ShapeSchema) -> BoxStyle {
    BoxStyle {
        background_color: schema.effective_color().to_string(),
        width: Length::Percent(100.0),
        height: Length::Percent(100.0),
    }
}
