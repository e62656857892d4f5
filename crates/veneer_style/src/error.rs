//! Style pipeline errors
//!
//! Errors exist only at the string boundary where bindings hand attribute
//! text in. The typed composition paths are total.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    #[error("invalid card variant: {0:?}")]
    InvalidVariant(String),

    #[error("invalid button size: {0:?}")]
    InvalidSize(String),
}
