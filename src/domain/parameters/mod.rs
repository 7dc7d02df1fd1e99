//! Parameter engine: the catalog-validated parameter surface of a prompt and
//! the operations that edit it.

pub mod coercion;
pub mod engine;
pub mod error;
pub mod surface;

pub use coercion::{coerce, validate};
pub use engine::ParameterEngine;
pub use error::{ParameterError, RangeBound};
pub use surface::{ParameterSlot, ParameterSurface};
