pub mod conversion;
pub mod editing;
pub mod error;
pub mod model;

pub use conversion::ConversionLoss;
pub use error::PromptEditError;
pub use model::{
    Chat, Completion, Conversation, Model, Parameter, ParameterValue, Prompt, StructuredExamples,
};
