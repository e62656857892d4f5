//! Veneer style pipeline
//!
//! CSS-in-data style generation shared by every framework binding: pure
//! declarative tables derived from the [`veneer_theme`] palette, merged per
//! variant into one insertion-ordered property map and serialized into a
//! single declaration string.
//!
//! # Quick Start
//!
//! ```rust
//! use veneer_style::{compose_card_style, CardVariant};
//!
//! let style = compose_card_style(CardVariant::Elevated, true);
//! assert!(style.to_css().contains("cursor: pointer;"));
//! ```
//!
//! Everything here is a pure function over compile-time constants: no
//! caching, no state, safe to call from any thread. Bindings that apply
//! properties individually read [`ComposedStyle::properties`]; bindings
//! that inject a style string read [`ComposedStyle::to_css`]. Both views
//! come from the same merged map and can never disagree.

pub mod button;
pub mod card;
pub mod error;
pub mod map;
pub mod value;

pub use button::{
    button_base_style, button_kind_style, button_size_style, compose_button_style, ButtonKind,
    ButtonSize,
};
pub use card::{
    base_style, compose_card_style, description_style, interactive_style, title_style,
    variant_style, CardVariant, ComposedStyle,
};
pub use error::StyleError;
pub use map::StyleMap;
pub use value::StyleValue;
