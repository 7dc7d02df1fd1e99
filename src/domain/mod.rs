pub mod catalog;
pub mod error;
pub mod model_switch;
pub mod parameters;
pub mod prompt;

pub use catalog::{
    CatalogError, CatalogGroup, InterfaceType, ModelType, ParameterKind, ParameterType,
};
pub use error::AppError;
pub use model_switch::ModelSwitch;
pub use parameters::{ParameterEngine, ParameterError, ParameterSlot, ParameterSurface};
pub use prompt::{
    Chat, Completion, ConversionLoss, Conversation, Model, Parameter, ParameterValue, Prompt,
    PromptEditError, StructuredExamples,
};
