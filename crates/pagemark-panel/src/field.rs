use serde::{Deserialize, Serialize};

use pagemark_core::{is_hex_color, ShapeSchema, HEX_COLOR_PATTERN};

use crate::i18n::Translate;

/// Fields of a line the property panel can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineField {
    Color,
}

impl LineField {
    pub fn key(self) -> &'static str {
        match self {
            LineField::Color => "color",
        }
    }

    /// Current value on `schema`; `None` when unset.
    pub fn value(self, schema: &ShapeSchema) -> Option<&str> {
        match self {
            LineField::Color => schema.color.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
}

/// Editing widget the panel renders for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Widget {
    Color,
}

/// Validation rule attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must be a `#RRGGBB` color.
    HexColor { message_key: &'static str },
}

impl Rule {
    pub fn pattern(&self) -> &'static str {
        match self {
            Rule::HexColor { .. } => HEX_COLOR_PATTERN,
        }
    }

    pub fn message_key(&self) -> &'static str {
        match self {
            Rule::HexColor { message_key } => *message_key,
        }
    }

    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Rule::HexColor { .. } => is_hex_color(value),
        }
    }
}

/// Compile-time description of one editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: LineField,
    pub title_key: &'static str,
    pub field_type: FieldType,
    pub widget: Widget,
    pub required: bool,
    pub rules: &'static [Rule],
}

/// A rule as the panel receives it: pattern plus localized message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMeta {
    pub pattern: String,
    pub message: String,
}

/// Localized field metadata handed to the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMeta {
    pub title: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub widget: Widget,
    pub required: bool,
    pub rules: Vec<RuleMeta>,
}

impl FieldSpec {
    pub fn localize(&self, i18n: &dyn Translate) -> FieldMeta {
        FieldMeta {
            title: i18n.translate(self.title_key),
            field_type: self.field_type,
            widget: self.widget,
            required: self.required,
            rules: self
                .rules
                .iter()
                .map(|rule| RuleMeta {
                    pattern: rule.pattern().to_string(),
                    message: i18n.translate(rule.message_key()),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_rule() {
        let rule = Rule::HexColor {
            message_key: "hexColorPrompt",
        };
        assert!(rule.accepts("#800080"));
        assert!(!rule.accepts("purple"));
        assert_eq!(rule.pattern(), "^#[0-9A-Fa-f]{6}$");
    }

    #[test]
    fn test_field_value() {
        let schema = ShapeSchema::line().with_color("#111111");
        assert_eq!(LineField::Color.value(&schema), Some("#111111"));
        assert_eq!(LineField::Color.key(), "color");
    }
}
