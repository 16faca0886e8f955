use std::collections::BTreeMap;

use pagemark_core::{ShapeKind, ShapeSchema};

use crate::field::{FieldMeta, FieldSpec, FieldType, LineField, Rule, Widget};
use crate::i18n::{Translate, FIELD_REQUIRED, HEX_COLOR_PROMPT, SCHEMAS_COLOR};
use crate::violation::{FieldViolation, ViolationKind};

/// Static declaration of a shape's editable fields and defaults.
#[derive(Debug, Clone, Copy)]
pub struct ShapeDescriptor {
    pub kind: ShapeKind,
    pub fields: &'static [FieldSpec],
    /// Initial content value for a new instance.
    pub default_value: &'static str,
}

const LINE_FIELDS: &[FieldSpec] = &[FieldSpec {
    field: LineField::Color,
    title_key: SCHEMAS_COLOR,
    field_type: FieldType::String,
    widget: Widget::Color,
    required: true,
    rules: &[Rule::HexColor {
        message_key: HEX_COLOR_PROMPT,
    }],
}];

pub static LINE_DESCRIPTOR: ShapeDescriptor = ShapeDescriptor {
    kind: ShapeKind::Line,
    fields: LINE_FIELDS,
    default_value: "",
};

impl ShapeDescriptor {
    /// Localized field metadata keyed by schema field name.
    pub fn prop_panel_schema(&self, i18n: &dyn Translate) -> BTreeMap<&'static str, FieldMeta> {
        self.fields
            .iter()
            .map(|spec| (spec.field.key(), spec.localize(i18n)))
            .collect()
    }

    /// Seed for a newly created instance.
    pub fn default_schema(&self) -> ShapeSchema {
        match self.kind {
            ShapeKind::Line => ShapeSchema::line(),
        }
    }

    pub fn field(&self, field: LineField) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.field == field)
    }

    /// Check `schema` the way the panel does before it reaches a renderer.
    pub fn validate(&self, schema: &ShapeSchema, i18n: &dyn Translate) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        for spec in self.fields {
            let key = spec.field.key();
            let value = spec.field.value(schema).filter(|v| !v.is_empty());
            let Some(value) = value else {
                if spec.required {
                    violations.push(FieldViolation::new(
                        key,
                        ViolationKind::Required,
                        i18n.translate(FIELD_REQUIRED),
                    ));
                }
                continue;
            };
            for rule in spec.rules {
                if !rule.accepts(value) {
                    violations.push(FieldViolation::new(
                        key,
                        ViolationKind::Pattern,
                        i18n.translate(rule.message_key()),
                    ));
                }
            }
        }

        for (key, size) in [("width", schema.width), ("height", schema.height)] {
            if size.is_nan() || size < 0.0 {
                violations.push(FieldViolation::new(
                    key,
                    ViolationKind::OutOfRange,
                    format!("{key} must be zero or greater, got {size}"),
                ));
            }
        }
        if !(0.0..=1.0).contains(&schema.opacity) {
            violations.push(FieldViolation::new(
                "opacity",
                ViolationKind::OutOfRange,
                format!("opacity must be between 0 and 1, got {}", schema.opacity),
            ));
        }

        if !violations.is_empty() {
            log::debug!(
                "{} validation issue(s) on '{}'",
                violations.len(),
                schema.label()
            );
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::RuleMeta;
    use crate::i18n::Catalog;
    use pagemark_core::{EndPosition, Point, StartPosition, DEFAULT_LINE_COLOR};

    #[test]
    fn test_prop_panel_schema() {
        let schema = LINE_DESCRIPTOR.prop_panel_schema(&Catalog::english());
        assert_eq!(schema.len(), 1);
        let color = &schema["color"];
        assert_eq!(color.title, "Color");
        assert_eq!(color.field_type, FieldType::String);
        assert_eq!(color.widget, Widget::Color);
        assert!(color.required);
        assert_eq!(
            color.rules,
            vec![RuleMeta {
                pattern: "^#[0-9A-Fa-f]{6}$".to_string(),
                message: "Please enter a valid hex color code.".to_string(),
            }]
        );
    }

    #[test]
    fn test_prop_panel_schema_json() {
        let lookup = |key: &str| format!("<{key}>");
        let schema = LINE_DESCRIPTOR.prop_panel_schema(&lookup);
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["color"]["title"], "<schemas.color>");
        assert_eq!(json["color"]["type"], "string");
        assert_eq!(json["color"]["widget"], "color");
        assert_eq!(json["color"]["rules"][0]["message"], "<hexColorPrompt>");
    }

    #[test]
    fn test_default_schema() {
        let s = LINE_DESCRIPTOR.default_schema();
        assert_eq!(s.kind, ShapeKind::Line);
        assert_eq!(s.position, Point::new(0.0, 0.0));
        assert_eq!(s.start_position, StartPosition::new(0.0, 0.0));
        assert_eq!(s.end_position, EndPosition::new(5.0, 5.0));
        assert_eq!((s.width, s.height, s.rotate, s.opacity), (5.0, 1.0, 0.0, 1.0));
        assert_eq!(s.color.as_deref(), Some(DEFAULT_LINE_COLOR));
        assert!(s.read_only);
        assert_eq!(LINE_DESCRIPTOR.default_value, "");
    }

    #[test]
    fn test_default_schema_is_valid() {
        let s = LINE_DESCRIPTOR.default_schema();
        assert!(LINE_DESCRIPTOR.validate(&s, &Catalog::english()).is_empty());
    }

    #[test]
    fn test_named_color_rejected() {
        let s = LINE_DESCRIPTOR.default_schema().with_color("purple");
        let violations = LINE_DESCRIPTOR.validate(&s, &Catalog::english());
        assert_eq!(
            violations,
            vec![FieldViolation::new(
                "color",
                ViolationKind::Pattern,
                "Please enter a valid hex color code.".to_string()
            )]
        );
    }

    #[test]
    fn test_missing_color_is_required() {
        let mut s = LINE_DESCRIPTOR.default_schema();
        s.color = Some(String::new());
        let violations = LINE_DESCRIPTOR.validate(&s, &Catalog::new());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::Required);
        assert_eq!(violations[0].message, FIELD_REQUIRED);
    }

    #[test]
    fn test_range_checks() {
        let mut s = LINE_DESCRIPTOR.default_schema();
        s.height = -1.0;
        s.opacity = 1.2;
        let kinds: Vec<_> = LINE_DESCRIPTOR
            .validate(&s, &Catalog::english())
            .into_iter()
            .map(|v| (v.field, v.kind))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("height".to_string(), ViolationKind::OutOfRange),
                ("opacity".to_string(), ViolationKind::OutOfRange),
            ]
        );
    }

    #[test]
    fn test_field_lookup() {
        let spec = LINE_DESCRIPTOR.field(LineField::Color).unwrap();
        assert_eq!(spec.title_key, SCHEMAS_COLOR);
    }
}
