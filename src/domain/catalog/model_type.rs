//! Capability catalog domain model.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::parameters::coerce;
use crate::domain::prompt::ParameterValue;

use super::error::CatalogError;

/// How a model is driven: one free-text prompt or a list of turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceType {
    Chat,
    Completion,
}

impl InterfaceType {
    pub fn label(self) -> &'static str {
        match self {
            InterfaceType::Chat => "chat",
            InterfaceType::Completion => "completion",
        }
    }
}

impl fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InterfaceType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chat" => Ok(InterfaceType::Chat),
            "completion" => Ok(InterfaceType::Completion),
            _ => Err(CatalogError::UnsupportedInterfaceKind(s.to_string())),
        }
    }
}

/// Declared value type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    Number,
    String,
    Boolean,
    /// Stored as the raw text the host supplies; splitting is left to the host.
    Array,
}

impl ParameterKind {
    pub fn label(self) -> &'static str {
        match self {
            ParameterKind::Number => "number",
            ParameterKind::String => "string",
            ParameterKind::Boolean => "boolean",
            ParameterKind::Array => "array",
        }
    }

    /// Value used when enabling a parameter that has no catalog default.
    pub fn zero_value(self) -> ParameterValue {
        match self {
            ParameterKind::Number => ParameterValue::Number(0.0),
            ParameterKind::Boolean => ParameterValue::Boolean(false),
            ParameterKind::String | ParameterKind::Array => ParameterValue::String(String::new()),
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Catalog descriptor of one legal parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterType {
    pub name: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub kind: ParameterKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<ParameterValue>,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    #[serde(default)]
    pub is_min_value_exclusive: bool,
    #[serde(default)]
    pub is_max_value_exclusive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl ParameterType {
    pub fn new(name: impl Into<String>, kind: ParameterKind) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            kind,
            default_value: None,
            is_required: false,
            description: None,
            min_value: None,
            max_value: None,
            is_min_value_exclusive: false,
            is_max_value_exclusive: false,
            max_length: None,
        }
    }

    /// Catalog default, or the type's zero value.
    pub fn initial_value(&self) -> ParameterValue {
        self.default_value.clone().unwrap_or_else(|| self.kind.zero_value())
    }

    /// String parameters long enough to deserve a multi-line editor.
    pub fn is_multi_line(&self, threshold: usize) -> bool {
        self.kind == ParameterKind::String && self.max_length.is_some_and(|max| max > threshold)
    }
}

/// Catalog entry for one model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelType {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub interface_type: InterfaceType,
    /// Legal parameters, in display order.
    pub parameters: Vec<ParameterType>,
}

impl ModelType {
    pub fn parameter(&self, name: &str) -> Option<&ParameterType> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters.iter().map(|p| p.name.as_str()).collect()
    }
}

/// A vendor grouping of models, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogGroup {
    pub name: String,
    pub models: Vec<ModelType>,
}

/// Check catalog-wide integrity: model names are unique across groups,
/// parameter names are unique within each model, and every default is a
/// legal value of its own descriptor.
pub fn validate_groups(groups: &[CatalogGroup]) -> Result<(), CatalogError> {
    let mut group_names = HashSet::new();
    let mut model_names = HashSet::new();

    for group in groups {
        if group.name.trim().is_empty() {
            return Err(CatalogError::InvalidCatalog("group name must not be empty".into()));
        }
        if !group_names.insert(group.name.as_str()) {
            return Err(CatalogError::InvalidCatalog(format!(
                "Duplicate group '{}'",
                group.name
            )));
        }

        for model in &group.models {
            if !model_names.insert(model.name.as_str()) {
                return Err(CatalogError::InvalidCatalog(format!(
                    "Duplicate model '{}' in group '{}'",
                    model.name, group.name
                )));
            }

            let mut parameter_names = HashSet::new();
            for parameter in &model.parameters {
                if !parameter_names.insert(parameter.name.as_str()) {
                    return Err(CatalogError::InvalidCatalog(format!(
                        "Duplicate parameter '{}' in model '{}'",
                        parameter.name, model.name
                    )));
                }
                if let (Some(min), Some(max)) = (parameter.min_value, parameter.max_value) {
                    if min > max {
                        return Err(CatalogError::InvalidCatalog(format!(
                            "Parameter '{}' in model '{}' has min_value {} above max_value {}",
                            parameter.name, model.name, min, max
                        )));
                    }
                }
                if let Some(default) = &parameter.default_value {
                    validate_default(parameter, default).map_err(|reason| {
                        CatalogError::InvalidCatalog(format!(
                            "Default of parameter '{}' in model '{}' is invalid: {}",
                            parameter.name, model.name, reason
                        ))
                    })?;
                }
            }
        }
    }

    Ok(())
}

/// The default must already have the declared type; text such as `"0.5"` for
/// a number is not accepted here even though editor input would be coerced.
fn validate_default(parameter: &ParameterType, default: &ParameterValue) -> Result<(), String> {
    let coerced = coerce(parameter, default.clone()).map_err(|e| e.to_string())?;
    if &coerced != default {
        return Err(format!("expected a {} value, got '{}'", parameter.kind, default));
    }
    Ok(())
}
