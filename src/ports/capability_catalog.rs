//! Capability catalog port definition.

use crate::domain::{CatalogError, InterfaceType, ModelType};

/// Read-only access to the capability catalog.
///
/// Implementations own the data; the core never mutates it.
pub trait CapabilityCatalog {
    /// Look up a model by name, returning the group that lists it.
    fn find_model(&self, name: &str) -> Option<(&str, &ModelType)>;

    /// All group names in catalog order.
    fn group_names(&self) -> Vec<&str>;

    /// Every model of `group`, in catalog order.
    fn group_models(&self, group: &str) -> Vec<&ModelType>;

    /// Models of `group` driven through `interface`, in catalog order.
    fn models(&self, group: &str, interface: InterfaceType) -> Vec<&ModelType> {
        self.group_models(group).into_iter().filter(|m| m.interface_type == interface).collect()
    }

    /// Groups owning at least one model of `interface`.
    fn groups(&self, interface: InterfaceType) -> Vec<&str> {
        self.group_names()
            .into_iter()
            .filter(|group| !self.models(group, interface).is_empty())
            .collect()
    }

    /// Like [`find_model`](Self::find_model), but a miss is an error.
    fn require_model(&self, name: &str) -> Result<(&str, &ModelType), CatalogError> {
        self.find_model(name).ok_or_else(|| CatalogError::ModelNotFound { name: name.to_string() })
    }

    /// First model of `interface` in the first group that has one.
    fn first_model(&self, interface: InterfaceType) -> Result<(&str, &ModelType), CatalogError> {
        self.group_names()
            .into_iter()
            .find_map(|group| self.models(group, interface).first().map(|model| (group, *model)))
            .ok_or(CatalogError::NoModelAvailable(interface))
    }
}
