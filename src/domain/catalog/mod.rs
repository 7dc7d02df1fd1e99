//! Capability catalog: which models exist, how they are driven, and which
//! parameters they accept.

pub mod error;
pub mod model_type;

pub use error::CatalogError;
pub use model_type::{
    CatalogGroup, InterfaceType, ModelType, ParameterKind, ParameterType, validate_groups,
};
