use std::io;

use thiserror::Error;

use crate::domain::catalog::CatalogError;
use crate::domain::parameters::ParameterError;
use crate::domain::prompt::PromptEditError;

/// Library-wide error type for promptide operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration issue.
    #[error("{0}")]
    Configuration(String),

    /// Parameter validation or editing failed.
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// Catalog lookup or catalog data failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Prompt content edit failed.
    #[error(transparent)]
    PromptEdit(#[from] PromptEditError),

    /// Prompt document could not be decoded or encoded.
    #[error("Invalid prompt document: {0}")]
    DocumentParse(String),

    /// Prompt document already exists where a new one was requested.
    #[error("Prompt document '{0}' already exists (use --force to overwrite)")]
    DocumentExists(String),

    /// Prompt document not found.
    #[error("Prompt document '{0}' not found")]
    DocumentNotFound(String),

    /// Path escapes the document root.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// True for errors reporting that nothing needed to change.
    pub fn is_noop(&self) -> bool {
        matches!(self, AppError::Parameter(e) if e.is_noop())
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::Parameter(_)
            | AppError::PromptEdit(_)
            | AppError::DocumentParse(_)
            | AppError::PathTraversal(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::Catalog(CatalogError::InvalidCatalog(_))
            | AppError::Catalog(CatalogError::UnsupportedInterfaceKind(_)) => {
                io::ErrorKind::InvalidData
            }
            AppError::Catalog(_) | AppError::DocumentNotFound(_) => io::ErrorKind::NotFound,
            AppError::DocumentExists(_) => io::ErrorKind::AlreadyExists,
        }
    }
}
