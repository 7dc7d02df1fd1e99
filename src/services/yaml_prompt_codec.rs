//! YAML encoding of prompt documents.

use serde_yaml::Value;

use crate::domain::{AppError, CatalogError, InterfaceType, Prompt};

/// Reads and writes prompts as YAML documents with a `type` discriminant field.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlPromptCodec;

impl YamlPromptCodec {
    pub fn decode(&self, text: &str) -> Result<Prompt, AppError> {
        let value: Value =
            serde_yaml::from_str(text).map_err(|e| AppError::DocumentParse(e.to_string()))?;

        let kind = value
            .get("type")
            .ok_or_else(|| AppError::DocumentParse("missing field `type`".to_string()))?;
        let kind = kind
            .as_str()
            .ok_or_else(|| AppError::DocumentParse("field `type` must be a string".to_string()))?;
        if kind.parse::<InterfaceType>().is_err() {
            return Err(CatalogError::UnsupportedInterfaceKind(kind.to_string()).into());
        }

        serde_yaml::from_value(value).map_err(|e| AppError::DocumentParse(e.to_string()))
    }

    pub fn encode(&self, prompt: &Prompt) -> Result<String, AppError> {
        serde_yaml::to_string(prompt).map_err(|e| AppError::DocumentParse(e.to_string()))
    }
}
