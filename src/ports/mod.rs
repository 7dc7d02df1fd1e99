mod capability_catalog;
mod prompt_document_store;

pub use capability_catalog::CapabilityCatalog;
pub use prompt_document_store::PromptDocumentStore;
