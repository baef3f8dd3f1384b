//! Retained-mode output tree.

use std::collections::BTreeMap;
use std::fmt;

use crate::color::Color;

/// A single style property value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Color(Color),
    Px(i32),
    Percent(u8),
    Number(f32),
    Text(String),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Color(color) => write!(f, "{}", color),
            StyleValue::Px(px) => write!(f, "{}px", px),
            StyleValue::Percent(pct) => write!(f, "{}%", pct),
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<Color> for StyleValue {
    fn from(color: Color) -> Self {
        StyleValue::Color(color)
    }
}

impl From<i32> for StyleValue {
    fn from(px: i32) -> Self {
        StyleValue::Px(px)
    }
}

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        StyleValue::Number(n)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n as f32)
    }
}

impl From<&str> for StyleValue {
    fn from(text: &str) -> Self {
        StyleValue::Text(text.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(text: String) -> Self {
        StyleValue::Text(text)
    }
}

/// Style properties of one node, in property-name order.
///
/// Caller-supplied overrides are layered with [`StyleMap::merge`]; later
/// maps win:
///
/// ```rust
/// use themekit::{StyleMap, StyleValue};
///
/// let base = StyleMap::new().set("padding", 16).set("position", "relative");
/// let merged = base.merge(&StyleMap::new().set("padding", 4));
/// assert_eq!(merged.get("padding"), Some(&StyleValue::Px(4)));
/// assert_eq!(merged.get("position"), Some(&StyleValue::Text("relative".into())));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    props: BTreeMap<&'static str, StyleValue>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the updated map for chaining.
    pub fn set(mut self, name: &'static str, value: impl Into<StyleValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &'static str, value: impl Into<StyleValue>) {
        self.props.insert(name, value.into());
    }

    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.props.get(name)
    }

    /// The `color` property, when it holds a color.
    pub fn color(&self) -> Option<Color> {
        match self.props.get("color") {
            Some(StyleValue::Color(color)) => Some(*color),
            _ => None,
        }
    }

    /// Returns a copy with `overrides` layered on top.
    pub fn merge(&self, overrides: &StyleMap) -> StyleMap {
        let mut merged = self.clone();
        for (name, value) in &overrides.props {
            merged.props.insert(*name, value.clone());
        }
        merged
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StyleValue)> {
        self.props.iter().map(|(name, value)| (*name, value))
    }
}

impl fmt::Display for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, value) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", name, value)?;
            first = false;
        }
        Ok(())
    }
}

/// An element in the rendered tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub tag: &'static str,
    pub style: StyleMap,
    pub attrs: BTreeMap<&'static str, String>,
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            style: StyleMap::new(),
            attrs: BTreeMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.insert(name, value.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Adds a child only when one is given.
    pub fn maybe_child(mut self, child: Option<Node>) -> Self {
        self.children.extend(child);
        self
    }

    /// Depth-first search for the first node with `tag`.
    pub fn find(&self, tag: &str) -> Option<&Node> {
        if self.tag == tag {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(tag))
    }

    /// Depth-first search for the first node whose `role` attribute matches.
    pub fn find_role(&self, role: &str) -> Option<&Node> {
        if self.attrs.get("role").map(String::as_str) == Some(role) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_role(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_value_display() {
        assert_eq!(StyleValue::Px(12).to_string(), "12px");
        assert_eq!(StyleValue::Percent(100).to_string(), "100%");
        assert_eq!(StyleValue::Number(0.6).to_string(), "0.6");
        assert_eq!(StyleValue::from(Color::WHITE).to_string(), "#ffffff");
    }

    #[test]
    fn test_style_map_display_is_ordered() {
        let style = StyleMap::new().set("width", 41).set("float", "left");
        assert_eq!(style.to_string(), "float: left; width: 41px");
    }

    #[test]
    fn test_merge_keeps_base_untouched() {
        let base = StyleMap::new().set("color", Color::BLACK);
        let merged = base.merge(&StyleMap::new().set("color", Color::WHITE));
        assert_eq!(base.color(), Some(Color::BLACK));
        assert_eq!(merged.color(), Some(Color::WHITE));
    }

    #[test]
    fn test_find_and_find_role() {
        let tree = Node::new("div")
            .child(Node::new("label").attr("role", "floating-label").text("Name"))
            .child(Node::new("input"));
        assert_eq!(tree.find("input").map(|n| n.tag), Some("input"));
        assert_eq!(
            tree.find_role("floating-label").and_then(|n| n.text.as_deref()),
            Some("Name")
        );
        assert!(tree.find("hr").is_none());
    }

    #[test]
    fn test_maybe_child() {
        let node = Node::new("div").maybe_child(None).maybe_child(Some(Node::new("span")));
        assert_eq!(node.children.len(), 1);
    }
}
