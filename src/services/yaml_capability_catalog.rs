//! Capability catalog service - loads model groups from YAML.

use std::path::Path;

use include_dir::{Dir, include_dir};
use serde::Deserialize;

use crate::domain::{
    AppError, CatalogError, CatalogGroup, ModelType, ParameterType,
    catalog::validate_groups,
};
use crate::ports::CapabilityCatalog;

/// Embedded catalog directory, one YAML document per vendor group.
static CATALOG_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/catalog");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GroupDocument {
    group: String,
    #[serde(default)]
    models: Vec<ModelDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModelDocument {
    name: String,
    #[serde(default)]
    description: Option<String>,
    interface: String,
    #[serde(default)]
    parameters: Vec<ParameterType>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    groups: Vec<GroupDocument>,
}

impl GroupDocument {
    fn into_group(self) -> Result<CatalogGroup, CatalogError> {
        let models = self
            .models
            .into_iter()
            .map(|model| {
                Ok(ModelType {
                    interface_type: model.interface.parse()?,
                    name: model.name,
                    description: model.description,
                    parameters: model.parameters,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;
        Ok(CatalogGroup { name: self.group, models })
    }
}

/// Capability catalog backed by YAML group documents.
#[derive(Debug, Clone)]
pub struct YamlCapabilityCatalog {
    groups: Vec<CatalogGroup>,
}

impl YamlCapabilityCatalog {
    /// Load the catalog shipped with the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        let mut groups = Vec::new();

        for file in CATALOG_DIR.files() {
            let is_yaml = file
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == "yml" || ext == "yaml");
            if !is_yaml {
                continue;
            }

            let content = file.contents_utf8().ok_or_else(|| {
                CatalogError::InvalidCatalog(format!(
                    "{} is not valid UTF-8",
                    file.path().display()
                ))
            })?;
            let document: GroupDocument = serde_yaml::from_str(content).map_err(|e| {
                CatalogError::InvalidCatalog(format!("{}: {}", file.path().display(), e))
            })?;
            groups.push(document.into_group()?);
        }

        Self::from_groups(groups)
    }

    /// Parse a catalog document holding a `groups:` list.
    pub fn from_yaml_str(content: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_yaml::from_str(content)
            .map_err(|e| CatalogError::InvalidCatalog(e.to_string()))?;
        let groups = document
            .groups
            .into_iter()
            .map(GroupDocument::into_group)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_groups(groups)
    }

    /// Load an external catalog file.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::config_error(format!("Failed to read catalog {}: {}", path.display(), e))
        })?;
        Ok(Self::from_yaml_str(&content)?)
    }

    /// Build a catalog from already-parsed groups, ordered by group name.
    pub fn from_groups(mut groups: Vec<CatalogGroup>) -> Result<Self, CatalogError> {
        validate_groups(&groups)?;
        groups.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Self { groups })
    }

    pub fn all_groups(&self) -> &[CatalogGroup] {
        &self.groups
    }
}

impl CapabilityCatalog for YamlCapabilityCatalog {
    fn find_model(&self, name: &str) -> Option<(&str, &ModelType)> {
        self.groups.iter().find_map(|group| {
            group.models.iter().find(|m| m.name == name).map(|m| (group.name.as_str(), m))
        })
    }

    fn group_names(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.name.as_str()).collect()
    }

    fn group_models(&self, group: &str) -> Vec<&ModelType> {
        self.groups.iter().filter(|g| g.name == group).flat_map(|g| g.models.iter()).collect()
    }
}
