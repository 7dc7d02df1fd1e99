mod filesystem_document_store;
mod memory_document_store;
mod yaml_capability_catalog;
mod yaml_prompt_codec;

pub use filesystem_document_store::FilesystemDocumentStore;
pub use memory_document_store::MemoryDocumentStore;
pub use yaml_capability_catalog::YamlCapabilityCatalog;
pub use yaml_prompt_codec::YamlPromptCodec;
