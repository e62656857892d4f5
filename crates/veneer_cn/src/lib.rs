//! Veneer component contracts
//!
//! The shared contract each framework binding renders from: typed props,
//! CSS class derivation, and style resolution for the Card and Button
//! components. Bindings stay thin adapters - they forward these values
//! into their framework's template or attribute system instead of
//! hand-duplicating hex literals and class strings per framework.
//!
//! Rendering, lifecycle, and accessibility wiring belong to the bindings
//! themselves and are not modeled here.

pub mod components;

pub use components::{ButtonProps, CardProps};

// The enums bindings thread through props
pub use veneer_style::{ButtonKind, ButtonSize, CardVariant};
