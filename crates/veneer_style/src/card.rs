//! Card style tables and composition
//!
//! The card's look is three declarative fragments layered in a fixed
//! order: a base shared by every card, a per-variant border/shadow pair,
//! and an interactive fragment added only for clickable cards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use veneer_theme::COLORS;

use crate::error::StyleError;
use crate::map::StyleMap;

const ELEVATED_SHADOW: &str = "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)";
const HOVER_SHADOW: &str = "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)";

/// Card variants, a closed set
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    #[default]
    Default,
    Elevated,
    Outlined,
}

impl CardVariant {
    /// Every variant, in declaration order
    pub const ALL: [CardVariant; 3] = [
        CardVariant::Default,
        CardVariant::Elevated,
        CardVariant::Outlined,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            CardVariant::Default => "default",
            CardVariant::Elevated => "elevated",
            CardVariant::Outlined => "outlined",
        }
    }
}

impl fmt::Display for CardVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardVariant {
    type Err = StyleError;

    /// Accepts exactly the three lowercase variant names. Anything else is
    /// rejected rather than silently falling back to the default variant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(CardVariant::Default),
            "elevated" => Ok(CardVariant::Elevated),
            "outlined" => Ok(CardVariant::Outlined),
            other => {
                tracing::debug!("rejected card variant {other:?}");
                Err(StyleError::InvalidVariant(other.to_string()))
            }
        }
    }
}

/// Properties every card gets, independent of variant
pub fn base_style() -> StyleMap {
    StyleMap::new()
        .with("backgroundColor", COLORS.surface.as_str())
        .with("borderRadius", "0.5rem")
        .with("padding", "1.5rem")
        .with("transition", "all 0.2s ease")
        .with("color", COLORS.text.as_str())
}

/// Border and shadow treatment for one variant.
///
/// Every variant defines the same two keys, so composition is total and
/// the serialized key order never depends on the variant chosen.
pub fn variant_style(variant: CardVariant) -> StyleMap {
    match variant {
        CardVariant::Default => StyleMap::new().with("border", "none").with("boxShadow", "none"),
        CardVariant::Elevated => StyleMap::new()
            .with("border", "none")
            .with("boxShadow", ELEVATED_SHADOW),
        // The border alpha is the literal suffix "20" appended to the text
        // color's hex value, not a computed blend.
        CardVariant::Outlined => StyleMap::new()
            .with("border", format!("1px solid {}20", COLORS.text))
            .with("boxShadow", "none"),
    }
}

/// Properties added only for clickable cards: a pointer cursor plus the
/// hover bag, kept as a single nested entry.
pub fn interactive_style() -> StyleMap {
    let hover = StyleMap::new()
        .with("transform", "translateY(-2px)")
        .with("boxShadow", HOVER_SHADOW);
    StyleMap::new().with("cursor", "pointer").with(":hover", hover)
}

/// Typography for the card title
pub fn title_style() -> StyleMap {
    StyleMap::new()
        .with("fontSize", "1.25rem")
        .with("fontWeight", "600")
        .with("marginBottom", "0.5rem")
        .with("color", COLORS.text.as_str())
}

/// Typography for the card description
pub fn description_style() -> StyleMap {
    StyleMap::new()
        .with("fontSize", "0.875rem")
        .with("color", COLORS.text.as_str())
        .with("opacity", "0.8")
        .with("lineHeight", "1.5")
}

/// The merged property map for one composition, plus its serialized form.
///
/// Bindings that set properties individually read
/// [`properties`](Self::properties); bindings that inject a style string
/// read [`to_css`](Self::to_css). Both views derive from the same map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedStyle {
    properties: StyleMap,
}

impl ComposedStyle {
    pub(crate) fn new(properties: StyleMap) -> Self {
        Self { properties }
    }

    pub fn properties(&self) -> &StyleMap {
        &self.properties
    }

    pub fn into_properties(self) -> StyleMap {
        self.properties
    }

    pub fn to_css(&self) -> String {
        self.properties.to_css()
    }
}

impl fmt::Display for ComposedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Merge base, variant, and (for clickable cards) interactive properties,
/// in that precedence order.
pub fn compose_card_style(variant: CardVariant, clickable: bool) -> ComposedStyle {
    tracing::trace!(variant = %variant, clickable, "composing card style");
    let mut properties = base_style();
    properties.merge(&variant_style(variant));
    if clickable {
        properties.merge(&interactive_style());
    }
    ComposedStyle::new(properties)
}
