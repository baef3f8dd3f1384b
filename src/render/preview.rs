//! Terminal preview of rendered trees.
//!
//! Walks a [`Node`] tree and prints one line per text-bearing node, indented
//! by depth and colored with the node's `color` style. Useful for eyeballing
//! a theme without a graphical host.

use console::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::node::Node;

/// Options for [`preview`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Emit ANSI colors.
    pub use_color: bool,
    /// Maximum display width of a line, indentation included.
    pub max_width: usize,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            use_color: console::colors_enabled(),
            max_width: 80,
        }
    }
}

/// Renders `node` as indented, optionally colored text.
///
/// ```rust
/// use themekit::{preview, Node, PreviewOptions};
///
/// let tree = Node::new("div").child(Node::new("span").text("Save"));
/// let options = PreviewOptions { use_color: false, max_width: 40 };
/// assert_eq!(preview(&tree, options), "span: Save\n");
/// ```
pub fn preview(node: &Node, options: PreviewOptions) -> String {
    let mut out = String::new();
    write_node(node, 0, options, &mut out);
    out
}

fn write_node(node: &Node, depth: usize, options: PreviewOptions, out: &mut String) {
    let mut child_depth = depth;
    if let Some(text) = node.text.as_deref() {
        let indent = "  ".repeat(depth);
        let line = format!("{}: {}", node.tag, text);
        let budget = options.max_width.saturating_sub(indent.width());
        let line = truncate_to_width(&line, budget);

        out.push_str(&indent);
        match node.style.color() {
            Some(color) if options.use_color => {
                let style = Style::new().color256(color.to_ansi256()).force_styling(true);
                out.push_str(&style.apply_to(&line).to_string());
            }
            _ => out.push_str(&line),
        }
        out.push('\n');
        child_depth += 1;
    }
    for child in &node.children {
        write_node(child, child_depth, options, out);
    }
}

/// Cuts `s` to at most `max_width` columns, ending in `…` when shortened.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let limit = max_width.saturating_sub(1);
    let mut used = 0;
    let mut result = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        result.push(c);
        used += w;
    }
    result.push('…');
    result
}
