//! Relevant key sets: the theme facts a component's output depends on.

use std::collections::BTreeMap;

use crate::color::Color;

/// A primitive theme fact, compared by value.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyValue {
    Color(Color),
    Px(u32),
    Text(String),
    Flag(bool),
}

impl From<Color> for KeyValue {
    fn from(color: Color) -> Self {
        KeyValue::Color(color)
    }
}

impl From<u32> for KeyValue {
    fn from(px: u32) -> Self {
        KeyValue::Px(px)
    }
}

impl From<bool> for KeyValue {
    fn from(flag: bool) -> Self {
        KeyValue::Flag(flag)
    }
}

impl From<&str> for KeyValue {
    fn from(text: &str) -> Self {
        KeyValue::Text(text.to_string())
    }
}

impl From<String> for KeyValue {
    fn from(text: String) -> Self {
        KeyValue::Text(text)
    }
}

/// The subset of a theme a component reads, keyed by name.
///
/// Key sets are computed fresh for each comparison and never stored. Two
/// sets are equal when they hold the same keys with equal values; values are
/// primitives, so this is a shallow comparison.
///
/// ```rust
/// use themekit::{Color, RelevantKeys};
///
/// let a = RelevantKeys::new().with("focusColor", Color::WHITE).with("isRtl", false);
/// let b = RelevantKeys::new().with("isRtl", false).with("focusColor", Color::WHITE);
/// assert_eq!(a, b);
/// assert_ne!(a, b.clone().with("gutter", 16u32));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelevantKeys {
    entries: BTreeMap<&'static str, KeyValue>,
}

impl RelevantKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fact, returning the updated set for chaining.
    pub fn with(mut self, key: &'static str, value: impl Into<KeyValue>) -> Self {
        self.entries.insert(key, value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&KeyValue> {
        self.entries.get(key)
    }

    /// Reads a color fact by name.
    pub fn color(&self, key: &str) -> Option<Color> {
        match self.entries.get(key) {
            Some(KeyValue::Color(color)) => Some(*color),
            _ => None,
        }
    }

    /// Reads a pixel fact by name.
    pub fn px(&self, key: &str) -> Option<u32> {
        match self.entries.get(key) {
            Some(KeyValue::Px(px)) => Some(*px),
            _ => None,
        }
    }

    /// Reads a flag fact by name.
    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.entries.get(key) {
            Some(KeyValue::Flag(flag)) => Some(*flag),
            _ => None,
        }
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

    /// Name of the first key whose value differs, or that only one side has.
    pub fn first_difference(&self, other: &Self) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(key, value)| other.entries.get(*key) != Some(*value))
            .map(|(key, _)| *key)
            .or_else(|| {
                other
                    .entries
                    .keys()
                    .find(|key| !self.entries.contains_key(*key))
                    .copied()
            })
    }
}
