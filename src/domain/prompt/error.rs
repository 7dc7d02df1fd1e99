use crate::domain::catalog::InterfaceType;

/// Prompt content edit error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptEditError {
    #[error("Index {index} is out of bounds for {len} turn(s)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Operation requires a {expected} prompt, but the prompt is a {actual} prompt")]
    WrongInterface { expected: InterfaceType, actual: InterfaceType },
}
