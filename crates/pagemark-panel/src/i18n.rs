use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Title of the color field.
pub const SCHEMAS_COLOR: &str = "schemas.color";
/// Message shown when a color does not match `#RRGGBB`.
pub const HEX_COLOR_PROMPT: &str = "hexColorPrompt";
/// Message shown when a required field is empty.
pub const FIELD_REQUIRED: &str = "fieldRequired";

/// Translation lookup injected by the property panel.
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Map-backed message catalog. Unknown keys translate to themselves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn english() -> Self {
        Self::new()
            .with(SCHEMAS_COLOR, "Color")
            .with(HEX_COLOR_PROMPT, "Please enter a valid hex color code.")
            .with(FIELD_REQUIRED, "This field is required.")
    }

    pub fn with(mut self, key: &str, message: &str) -> Self {
        self.messages.insert(key.to_string(), message.to_string());
        self
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let messages = serde_json::from_str(json)?;
        Ok(Self { messages })
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str) -> String {
        match self.messages.get(key) {
            Some(message) => message.clone(),
            None => {
                log::debug!("No translation for '{}'", key);
                key.to_string()
            }
        }
    }
}
