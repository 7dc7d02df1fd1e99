use crate::app::config::PromptideConfig;
use crate::ports::{CapabilityCatalog, PromptDocumentStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: CapabilityCatalog, S: PromptDocumentStore> {
    catalog: C,
    documents: S,
    config: PromptideConfig,
}

impl<C: CapabilityCatalog, S: PromptDocumentStore> AppContext<C, S> {
    pub fn new(catalog: C, documents: S, config: PromptideConfig) -> Self {
        Self { catalog, documents, config }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Get a reference to the prompt document store.
    pub fn documents(&self) -> &S {
        &self.documents
    }

    pub fn config(&self) -> &PromptideConfig {
        &self.config
    }
}
