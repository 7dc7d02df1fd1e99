//! promptide: edit completion and chat prompts against a model capability catalog.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::api::{GroupSummary, ModelSummary, PromptSummary, SlotSummary};
pub use app::config::PromptideConfig;
pub use domain::{
    AppError, CatalogError, Chat, Completion, ConversionLoss, Conversation, InterfaceType, Model,
    ModelSwitch, ModelType, Parameter, ParameterEngine, ParameterError, ParameterKind,
    ParameterType, ParameterValue, Prompt, PromptEditError,
};
pub use ports::{CapabilityCatalog, PromptDocumentStore};
pub use services::{
    FilesystemDocumentStore, MemoryDocumentStore, YamlCapabilityCatalog, YamlPromptCodec,
};
