//! Button style tables and composition
//!
//! Same layering scheme as the card pipeline: a shared base, a fragment
//! per kind (primary/secondary), and a fragment per size.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use veneer_theme::COLORS;

use crate::card::ComposedStyle;
use crate::error::StyleError;
use crate::map::StyleMap;

/// Visual kind of a button
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    Primary,
    #[default]
    Secondary,
}

impl ButtonKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ButtonKind::Primary => "primary",
            ButtonKind::Secondary => "secondary",
        }
    }
}

impl fmt::Display for ButtonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Button sizes, a closed set
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    /// Every size, in declaration order
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ButtonSize::Small => "small",
            ButtonSize::Medium => "medium",
            ButtonSize::Large => "large",
        }
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonSize {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(ButtonSize::Small),
            "medium" => Ok(ButtonSize::Medium),
            "large" => Ok(ButtonSize::Large),
            other => {
                tracing::debug!("rejected button size {other:?}");
                Err(StyleError::InvalidSize(other.to_string()))
            }
        }
    }
}

/// Properties every button gets, independent of kind and size
pub fn button_base_style() -> StyleMap {
    StyleMap::new()
        .with("fontFamily", "system-ui, sans-serif")
        .with("fontWeight", "600")
        .with("border", "none")
        .with("borderRadius", "0.25rem")
        .with("cursor", "pointer")
        .with("display", "inline-block")
        .with("lineHeight", "1")
        .with("transition", "all 0.2s")
}

/// Background, foreground, and hover treatment for one kind
pub fn button_kind_style(kind: ButtonKind) -> StyleMap {
    match kind {
        ButtonKind::Primary => StyleMap::new()
            .with("backgroundColor", COLORS.primary.as_str())
            .with("color", "white")
            .with(":hover", StyleMap::new().with("backgroundColor", "#0d9488")),
        ButtonKind::Secondary => StyleMap::new()
            .with("backgroundColor", COLORS.text.as_str())
            .with("color", "#1f2937")
            .with(":hover", StyleMap::new().with("backgroundColor", "#d1d5db")),
    }
}

/// Padding and font size for one size.
///
/// Every size defines the same two keys; only the values differ.
pub fn button_size_style(size: ButtonSize) -> StyleMap {
    match size {
        ButtonSize::Small => StyleMap::new()
            .with("padding", "0.5rem 1rem")
            .with("fontSize", "0.875rem"),
        ButtonSize::Medium => StyleMap::new()
            .with("padding", "0.75rem 1.5rem")
            .with("fontSize", "1rem"),
        ButtonSize::Large => StyleMap::new()
            .with("padding", "1rem 2rem")
            .with("fontSize", "1.125rem"),
    }
}

/// Merge base, kind, and size properties, in that precedence order.
pub fn compose_button_style(kind: ButtonKind, size: ButtonSize) -> ComposedStyle {
    tracing::trace!(kind = %kind, size = %size, "composing button style");
    let mut properties = button_base_style();
    properties.merge(&button_kind_style(kind));
    properties.merge(&button_size_style(size));
    ComposedStyle::new(properties)
}
