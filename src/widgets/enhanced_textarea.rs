//! Multi-line input used by the text field.

use crate::context::{ComponentDescriptor, RelevantKeys, ThemeRelevance};
use crate::render::{Component, Node, StyleMap};
use crate::theme::MuiTheme;

/// Pixel height of one text row.
pub const ROW_HEIGHT: i32 = 24;

/// Pixel height of `rows` text rows, at least one row, saturating at `i32::MAX`.
pub(crate) fn rows_height(rows: u32) -> i32 {
    i32::try_from(rows.max(1))
        .unwrap_or(i32::MAX)
        .saturating_mul(ROW_HEIGHT)
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnhancedTextareaProps {
    pub rows: u32,
    pub disabled: bool,
    pub value: Option<String>,
    pub textarea_style: StyleMap,
}

impl Default for EnhancedTextareaProps {
    fn default() -> Self {
        Self {
            rows: 1,
            disabled: false,
            value: None,
            textarea_style: StyleMap::new(),
        }
    }
}

/// A textarea that grows with its rows.
pub struct EnhancedTextarea;

fn relevant_keys(theme: &MuiTheme) -> RelevantKeys {
    RelevantKeys::new()
        .with("textColor", theme.text_field.text_color)
        .with("disabledTextColor", theme.text_field.disabled_text_color)
}

pub static ENHANCED_TEXTAREA: ComponentDescriptor =
    ComponentDescriptor::new("EnhancedTextarea").with_relevant_keys(relevant_keys);

impl ThemeRelevance for EnhancedTextarea {
    fn descriptor() -> &'static ComponentDescriptor {
        &ENHANCED_TEXTAREA
    }
}

impl Component for EnhancedTextarea {
    type Props = EnhancedTextareaProps;
    type State = ();

    fn initial_state(_props: &Self::Props) {}

    fn render(props: &Self::Props, _state: &(), theme: &MuiTheme) -> Node {
        let color = if props.disabled {
            theme.text_field.disabled_text_color
        } else {
            theme.text_field.text_color
        };
        let height = rows_height(props.rows);
        let style = StyleMap::new()
            .set("width", "100%")
            .set("height", height)
            .set("resize", "none")
            .set("color", color)
            .merge(&props.textarea_style);

        let mut node = Node::new("textarea")
            .style(style)
            .attr("rows", props.rows.to_string());
        if props.disabled {
            node = node.attr("disabled", "true");
        }
        if let Some(value) = &props.value {
            node = node.text(value.clone());
        }
        node
    }
}
