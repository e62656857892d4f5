//! Design tokens
//!
//! Tokens are the atomic values of the design system. Only colors exist
//! today; the closed key set keeps every lookup total.

mod color;

pub use color::*;
