//! Veneer design tokens
//!
//! The token layer of the Veneer design system: a fixed palette of semantic
//! colors shared by every framework binding (the class-component, the
//! compiler-reactive component, and the custom element all read the same
//! constants instead of hand-duplicating hex literals).
//!
//! # Quick Start
//!
//! ```rust
//! use veneer_theme::{ColorToken, COLORS};
//!
//! let surface = COLORS.get(ColorToken::Surface);
//! assert_eq!(surface.as_str(), "#020617");
//! ```
//!
//! Tokens are compile-time constants. There is no runtime theming, no
//! overrides, and no state: the palette is defined once and read-only for
//! the process lifetime.

pub mod tokens;

pub use tokens::*;
