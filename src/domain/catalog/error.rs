use super::model_type::InterfaceType;

/// Capability catalog lookup and integrity error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Model '{name}' not found in the capability catalog")]
    ModelNotFound { name: String },

    #[error("Model group '{name}' not found. Available: {available}")]
    GroupNotFound { name: String, available: String },

    #[error("Group '{group}' has no {interface} model")]
    NoModelForInterface { group: String, interface: InterfaceType },

    #[error("No {0} model in the capability catalog")]
    NoModelAvailable(InterfaceType),

    #[error("Unsupported interface kind '{0}': must be 'chat' or 'completion'")]
    UnsupportedInterfaceKind(String),

    #[error("Invalid capability catalog: {0}")]
    InvalidCatalog(String),
}
