//! Button component contract

use serde::{Deserialize, Serialize};
use veneer_style::{compose_button_style, ButtonKind, ButtonSize, ComposedStyle, StyleMap};
use veneer_theme::COLORS;

/// Button props shared across all framework implementations
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonProps {
    /// Button label text
    pub label: String,
    /// Render as the primary (brand) button instead of the secondary one
    pub primary: bool,
    /// Button size
    pub size: ButtonSize,
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            label: "Button".to_string(),
            primary: false,
            size: ButtonSize::Medium,
        }
    }
}

impl ButtonProps {
    /// Create button props with a label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Render as the primary button
    pub fn primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    /// Set the size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// The style-table kind selected by the `primary` flag
    pub fn kind(&self) -> ButtonKind {
        if self.primary {
            ButtonKind::Primary
        } else {
            ButtonKind::Secondary
        }
    }

    /// CSS class list: the button class, its kind class, and its size class
    pub fn class_list(&self) -> Vec<String> {
        vec![
            "btn".to_string(),
            format!("btn-{}", self.kind()),
            format!("btn-{}", self.size),
        ]
    }

    /// Class list joined with single spaces, ready for a `class` attribute
    pub fn class_names(&self) -> String {
        self.class_list().join(" ")
    }

    /// CSS custom properties bindings set on the host element so their
    /// stylesheets resolve the shared palette.
    pub fn css_variables(&self) -> StyleMap {
        StyleMap::new()
            .with("--primary-color", COLORS.primary.as_str())
            .with("--text-color", COLORS.text.as_str())
    }

    /// The composed style for this button's kind and size
    pub fn style(&self) -> ComposedStyle {
        compose_button_style(self.kind(), self.size)
    }
}
