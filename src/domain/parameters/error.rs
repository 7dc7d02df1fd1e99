use std::fmt;

use crate::domain::catalog::ParameterKind;

/// Which numeric bound a value violated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeBound {
    Min { limit: f64, exclusive: bool },
    Max { limit: f64, exclusive: bool },
}

impl fmt::Display for RangeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeBound::Min { limit, exclusive: true } => write!(f, "must be greater than {}", limit),
            RangeBound::Min { limit, exclusive: false } => {
                write!(f, "must be greater than or equal to {}", limit)
            }
            RangeBound::Max { limit, exclusive: true } => write!(f, "must be less than {}", limit),
            RangeBound::Max { limit, exclusive: false } => {
                write!(f, "must be less than or equal to {}", limit)
            }
        }
    }
}

/// Parameter validation and editing error.
///
/// Every variant is recoverable: the caller keeps its prior prompt.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error("Parameter '{name}' is not supported by model '{model}'")]
    UnknownParameter { name: String, model: String },

    #[error("Parameter '{name}' is set more than once")]
    DuplicateParameter { name: String },

    #[error("Parameter '{name}' value {value} is out of range: {bound}")]
    OutOfRange { name: String, value: f64, bound: RangeBound },

    #[error("Parameter '{name}' is {length} characters long; at most {max_length} allowed")]
    TooLong { name: String, length: usize, max_length: usize },

    #[error("Parameter '{name}' expects a {expected} value, got '{raw}'")]
    InvalidValue { name: String, expected: ParameterKind, raw: String },

    #[error("Parameter '{name}' is required and cannot be removed")]
    RequiredParameterRemoval { name: String },

    #[error("Parameter '{name}' is already enabled")]
    AlreadyEnabled { name: String },

    #[error("Parameter '{name}' is not enabled")]
    NotEnabled { name: String },
}

impl ParameterError {
    /// Errors reporting that nothing needed to change.
    pub fn is_noop(&self) -> bool {
        matches!(self, ParameterError::NotEnabled { .. })
    }
}
