//! Card component contract

use serde::{Deserialize, Serialize};
use veneer_style::{compose_card_style, CardVariant, ComposedStyle, StyleMap};
use veneer_theme::COLORS;

/// Card props shared across all framework implementations
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardProps {
    /// Card title
    pub title: Option<String>,
    /// Card description/body content
    pub description: Option<String>,
    /// Visual treatment
    pub variant: CardVariant,
    /// Whether the card responds to pointer interaction
    pub clickable: bool,
}

impl CardProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the variant
    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Mark the card clickable
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    /// CSS class list: the card class, its variant class, and `clickable`
    /// when interactive.
    pub fn class_list(&self) -> Vec<String> {
        let mut classes = vec!["card".to_string(), format!("variant-{}", self.variant)];
        if self.clickable {
            classes.push("clickable".to_string());
        }
        classes
    }

    /// Class list joined with single spaces, ready for a `class` attribute
    pub fn class_names(&self) -> String {
        self.class_list().join(" ")
    }

    /// CSS custom properties bindings set on the host element so their
    /// stylesheets resolve the shared palette.
    pub fn css_variables(&self) -> StyleMap {
        StyleMap::new()
            .with("--surface-color", COLORS.surface.as_str())
            .with("--text-color", COLORS.text.as_str())
    }

    /// The composed style for this card's variant and interactivity
    pub fn style(&self) -> ComposedStyle {
        compose_card_style(self.variant, self.clickable)
    }
}
