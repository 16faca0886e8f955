use serde::{Deserialize, Serialize};

const MM_PER_INCH: f64 = 25.4;
const PT_PER_INCH: f64 = 72.0;

/// Length unit for schema values or page dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Millimeter,
    Point,
}

impl Unit {
    fn per_inch(self) -> f64 {
        match self {
            Unit::Millimeter => MM_PER_INCH,
            Unit::Point => PT_PER_INCH,
        }
    }

    /// Multiplier converting a length in `self` into `target`.
    pub fn factor_to(self, target: Unit) -> f64 {
        if self == target {
            return 1.0;
        }
        target.per_inch() / self.per_inch()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_unit_is_identity() {
        assert_eq!(Unit::Millimeter.factor_to(Unit::Millimeter), 1.0);
        assert_eq!(Unit::Point.factor_to(Unit::Point), 1.0);
    }

    #[test]
    fn test_millimeters_to_points() {
        let factor = Unit::Millimeter.factor_to(Unit::Point);
        assert!((25.4 * factor - 72.0).abs() < 1e-10);
        assert!((210.0 * factor - 595.2755905511812).abs() < 1e-9);
    }

    #[test]
    fn test_factors_are_reciprocal() {
        let there = Unit::Millimeter.factor_to(Unit::Point);
        let back = Unit::Point.factor_to(Unit::Millimeter);
        assert!((there * back - 1.0).abs() < 1e-12);
    }
}
