use serde::{Deserialize, Serialize};

use pagemark_core::Unit;

/// Unit configuration for the document target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderSettings {
    /// Unit the schemas are authored in.
    pub schema_unit: Unit,
    /// Unit the page reports its height in and draws with.
    pub page_unit: Unit,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            schema_unit: Unit::Millimeter,
            page_unit: Unit::Millimeter,
        }
    }
}

impl RenderSettings {
    /// Millimeter schemas drawn onto a point-based page.
    pub fn millimeters_on_points() -> Self {
        Self {
            schema_unit: Unit::Millimeter,
            page_unit: Unit::Point,
        }
    }

    /// Factor applied to schema lengths before conversion.
    pub fn scale_factor(&self) -> f64 {
        self.schema_unit.factor_to(self.page_unit)
    }
}
