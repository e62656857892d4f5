//! Property values

use std::borrow::Cow;
use std::fmt;

use crate::map::StyleMap;

/// A CSS property value: either a value literal or a nested property map.
///
/// Nesting is one level deep only. The single nested shape in the design
/// system is the `:hover` bag of the interactive fragments; the fragment
/// constructors never put a [`StyleValue::Block`] inside another block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StyleValue {
    Literal(Cow<'static, str>),
    Block(StyleMap),
}

impl StyleValue {
    pub fn literal(value: impl Into<Cow<'static, str>>) -> Self {
        Self::Literal(value.into())
    }

    pub fn block(map: StyleMap) -> Self {
        Self::Block(map)
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            StyleValue::Literal(text) => Some(text),
            StyleValue::Block(_) => None,
        }
    }

    pub fn as_block(&self) -> Option<&StyleMap> {
        match self {
            StyleValue::Literal(_) => None,
            StyleValue::Block(map) => Some(map),
        }
    }
}

impl fmt::Display for StyleValue {
    /// A literal prints as its text. A block prints as the nested map's
    /// declaration string, so a serialized `:hover` entry carries a
    /// stringified map rather than nested CSS rules.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Literal(text) => f.write_str(text),
            StyleValue::Block(map) => write!(f, "{map}"),
        }
    }
}

impl From<&'static str> for StyleValue {
    fn from(value: &'static str) -> Self {
        Self::literal(value)
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::literal(value)
    }
}

impl From<StyleMap> for StyleValue {
    fn from(map: StyleMap) -> Self {
        Self::block(map)
    }
}
