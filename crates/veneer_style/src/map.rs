//! Insertion-ordered property maps

use std::fmt;

use indexmap::IndexMap;

use crate::value::StyleValue;

/// An insertion-ordered CSS property map.
///
/// Keys come from the closed set of camelCase property names used by the
/// style tables, never from runtime input. Overwriting an existing key
/// keeps its original position, so merge precedence can never reorder the
/// serialized output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: IndexMap<&'static str, StyleValue>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a property
    pub fn set(&mut self, key: &'static str, value: impl Into<StyleValue>) {
        self.entries.insert(key, value.into());
    }

    /// Builder form of [`set`](Self::set), for declaring table literals
    pub fn with(mut self, key: &'static str, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Overlay every entry of `other`; on key collision the incoming value
    /// wins but the key keeps its original position.
    pub fn merge(&mut self, other: &StyleMap) {
        for (&key, value) in &other.entries {
            self.entries.insert(key, value.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StyleValue)> + '_ {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    /// Serialize every entry as `<key>: <value>;` in insertion order,
    /// joined by single spaces.
    pub fn to_css(&self) -> String {
        let mut declarations = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            declarations.push(format!("{key}: {value};"));
        }
        declarations.join(" ")
    }
}

impl fmt::Display for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_in_insertion_order() {
        let map = StyleMap::new()
            .with("border", "none")
            .with("boxShadow", "none")
            .with("cursor", "pointer");
        assert_eq!(map.to_css(), "border: none; boxShadow: none; cursor: pointer;");
    }

    #[test]
    fn overwrite_keeps_the_original_position() {
        let mut map = StyleMap::new()
            .with("border", "none")
            .with("boxShadow", "none");
        map.set("border", "1px solid #e5e7eb20");
        assert_eq!(
            map.to_css(),
            "border: 1px solid #e5e7eb20; boxShadow: none;"
        );
    }

    #[test]
    fn merge_overlays_later_entries() {
        let mut base = StyleMap::new()
            .with("padding", "1.5rem")
            .with("boxShadow", "none");
        let overlay = StyleMap::new()
            .with("boxShadow", "0 1px 2px rgb(0 0 0 / 0.1)")
            .with("cursor", "pointer");
        base.merge(&overlay);

        assert_eq!(base.len(), 3);
        assert_eq!(
            base.get("boxShadow").and_then(|v| v.as_literal()),
            Some("0 1px 2px rgb(0 0 0 / 0.1)")
        );
        assert_eq!(
            base.to_css(),
            "padding: 1.5rem; boxShadow: 0 1px 2px rgb(0 0 0 / 0.1); cursor: pointer;"
        );
    }

    #[test]
    fn empty_map_serializes_to_an_empty_string() {
        assert_eq!(StyleMap::new().to_css(), "");
    }

    #[test]
    fn nested_block_serializes_as_a_stringified_map() {
        let hover = StyleMap::new().with("transform", "translateY(-2px)");
        let map = StyleMap::new().with("cursor", "pointer").with(":hover", hover);
        assert_eq!(
            map.to_css(),
            "cursor: pointer; :hover: transform: translateY(-2px);;"
        );
    }
}
