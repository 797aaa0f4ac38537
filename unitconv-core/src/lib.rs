//! unitconv core - Fundamental types
//!
//! This crate provides the core types shared by the unitconv crates:
//! - `Number`: exact decimal numbers
//! - `ErrorReport`: structured, serializable error reports

mod number;
mod error;

pub use number::{Number, NumberError};
pub use error::{ErrorReport, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Number, NumberError, ErrorReport};
    pub use crate::error::codes;
}
