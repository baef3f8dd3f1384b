//! Single- or multi-line text input with hint, floating label and error text.

use tracing::warn;

use crate::color::Color;
use crate::context::{ComponentDescriptor, RelevantKeys, ThemeRelevance};
use crate::render::{Component, Mounted, Node, StyleMap, StyleValue};
use crate::theme::MuiTheme;

use super::enhanced_textarea::{
    rows_height, EnhancedTextarea, EnhancedTextareaProps, ENHANCED_TEXTAREA, ROW_HEIGHT,
};

const FLOATING_TRANSFORM: &str = "perspective(1px) scale(0.75) translate3d(2px, -28px, 0)";

#[derive(Debug, Clone, PartialEq)]
pub struct TextFieldProps {
    pub id: Option<String>,
    pub error_text: Option<String>,
    pub floating_label_text: Option<String>,
    pub hint_text: Option<String>,
    pub full_width: bool,
    pub multi_line: bool,
    pub rows: u32,
    pub disabled: bool,
    /// Controlled value. When set, the field's has-value flag follows it.
    pub value: Option<String>,
    pub default_value: Option<String>,
    pub style: StyleMap,
    pub input_style: StyleMap,
    pub error_style: StyleMap,
    pub floating_label_style: StyleMap,
    pub underline_style: StyleMap,
    pub underline_focus_style: StyleMap,
    pub underline_disabled_style: StyleMap,
}

impl Default for TextFieldProps {
    fn default() -> Self {
        Self {
            id: None,
            error_text: None,
            floating_label_text: None,
            hint_text: None,
            full_width: false,
            multi_line: false,
            rows: 1,
            disabled: false,
            value: None,
            default_value: None,
            style: StyleMap::new(),
            input_style: StyleMap::new(),
            error_style: StyleMap::new(),
            floating_label_style: StyleMap::new(),
            underline_style: StyleMap::new(),
            underline_focus_style: StyleMap::new(),
            underline_disabled_style: StyleMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFieldState {
    pub error_text: Option<String>,
    pub has_value: bool,
    pub is_focused: bool,
}

fn is_valid(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Text input whose colors come from the theme's text field roles.
///
/// Multi-line fields embed an [`EnhancedTextarea`], so its theme facts are
/// declared as a child dependency.
pub struct TextField;

/// The theme facts a text field reads.
struct Keys {
    floating_label_color: Color,
    focus_color: Color,
    border_color: Color,
    text_color: Color,
    disabled_text_color: Color,
    background_color: Color,
    hint_color: Color,
    error_color: Color,
    is_rtl: bool,
}

impl Keys {
    fn from_theme(theme: &MuiTheme) -> Self {
        let roles = &theme.text_field;
        Self {
            floating_label_color: roles.floating_label_color,
            focus_color: roles.focus_color,
            border_color: roles.border_color,
            text_color: roles.text_color,
            disabled_text_color: roles.disabled_text_color,
            background_color: roles.background_color,
            hint_color: roles.hint_color,
            error_color: roles.error_color,
            is_rtl: theme.is_rtl,
        }
    }
}

fn relevant_keys(theme: &MuiTheme) -> RelevantKeys {
    let keys = Keys::from_theme(theme);
    RelevantKeys::new()
        .with("floatingLabelColor", keys.floating_label_color)
        .with("focusColor", keys.focus_color)
        .with("borderColor", keys.border_color)
        .with("textColor", keys.text_color)
        .with("disabledTextColor", keys.disabled_text_color)
        .with("backgroundColor", keys.background_color)
        .with("hintColor", keys.hint_color)
        .with("errorColor", keys.error_color)
        .with("isRtl", keys.is_rtl)
}

static TEXT_FIELD_CHILDREN: [&ComponentDescriptor; 1] = [&ENHANCED_TEXTAREA];

pub static TEXT_FIELD: ComponentDescriptor = ComponentDescriptor::new("TextField")
    .with_relevant_keys(relevant_keys)
    .with_children(&TEXT_FIELD_CHILDREN);

impl ThemeRelevance for TextField {
    fn descriptor() -> &'static ComponentDescriptor {
        &TEXT_FIELD
    }
}

/// Computed styles for each part of a text field.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFieldStyles {
    pub root: StyleMap,
    pub error: StyleMap,
    pub hint: StyleMap,
    pub input: StyleMap,
    pub textarea: StyleMap,
    pub underline: StyleMap,
    pub underline_disabled: StyleMap,
    pub focus_underline: StyleMap,
    pub floating_label: StyleMap,
}

impl TextField {
    /// Derives every part's style from props, state and the theme.
    pub fn styles(
        props: &TextFieldProps,
        state: &TextFieldState,
        theme: &MuiTheme,
    ) -> TextFieldStyles {
        let keys = Keys::from_theme(theme);
        let has_floating_label = props.floating_label_text.is_some();
        let label_height = if has_floating_label { 72 } else { 48 };
        let height = rows_height(props.rows)
            .saturating_sub(ROW_HEIGHT)
            .saturating_add(label_height);

        let root = StyleMap::new()
            .set("fontSize", 16)
            .set("lineHeight", "24px")
            .set(
                "width",
                if props.full_width {
                    StyleValue::Percent(100)
                } else {
                    StyleValue::Px(256)
                },
            )
            .set("height", height)
            .set("display", "inline-block")
            .set("position", "relative")
            .set("fontFamily", theme.raw_theme.font_family.clone());

        let error = StyleMap::new()
            .set("position", "relative")
            .set("bottom", 5)
            .set("fontSize", 12)
            .set("lineHeight", "12px")
            .set("color", keys.error_color)
            .merge(&props.error_style);

        let mut hint = StyleMap::new()
            .set("position", "absolute")
            .set("lineHeight", "22px")
            .set("opacity", 1.0)
            .set("color", keys.hint_color)
            .set("bottom", 12)
            .set("zIndex", 1.0);

        let mut input = StyleMap::new()
            .set("padding", 0)
            .set("position", "relative")
            .set("width", StyleValue::Percent(100))
            .set("height", StyleValue::Percent(100))
            .set("border", "none")
            .set("outline", "none")
            .set("backgroundColor", keys.background_color)
            .set(
                "color",
                if props.disabled {
                    keys.disabled_text_color
                } else {
                    keys.text_color
                },
            )
            .set("font", "inherit");

        let underline = StyleMap::new()
            .set("border", "none")
            .set("borderBottom", format!("solid 1px {}", keys.border_color))
            .set("position", "absolute")
            .set("width", StyleValue::Percent(100))
            .set("bottom", 8)
            .set("margin", 0)
            .set("boxSizing", "content-box")
            .set("height", 0)
            .merge(&props.underline_style);

        let underline_disabled = StyleMap::new()
            .set("position", "absolute")
            .set("width", StyleValue::Percent(100))
            .set("overflow", "hidden")
            .set("userSelect", "none")
            .set("cursor", "default")
            .set("bottom", 8)
            .set("borderBottom", format!("dotted 2px {}", keys.disabled_text_color))
            .merge(&props.underline_disabled_style);

        let underline_focus = StyleMap::new()
            .set("borderBottom", "solid 2px")
            .set("borderColor", keys.focus_color)
            .set("transform", "scaleX(0)");

        let mut floating_label = hint.merge(
            &StyleMap::new()
                .set("lineHeight", "22px")
                .set("top", 38)
                .set("bottom", "none")
                .set("opacity", 1.0)
                .set("transform", "scale(1) translate3d(0, 0, 0)")
                .set("transformOrigin", if keys.is_rtl { "right top" } else { "left top" }),
        );

        let textarea = input.merge(
            &StyleMap::new()
                .set("marginTop", if has_floating_label { 36 } else { 12 })
                .set("marginBottom", if has_floating_label { -36 } else { -12 })
                .set("boxSizing", "border-box")
                .set("font", "inherit"),
        );

        let mut focus_underline = underline
            .merge(&underline_focus)
            .merge(&props.underline_focus_style);

        if state.is_focused {
            floating_label.insert("color", keys.focus_color);
            floating_label.insert("transform", FLOATING_TRANSFORM);
            focus_underline.insert("transform", "scaleX(1)");
        }

        if state.has_value {
            let label_color = if props.disabled {
                keys.disabled_text_color
            } else {
                keys.floating_label_color
            };
            floating_label.insert("color", label_color.fade(0.5));
            floating_label.insert("transform", FLOATING_TRANSFORM);
            hint.insert("opacity", 0.0);
        }

        if has_floating_label {
            hint.insert("opacity", 0.0);
            input.insert("boxSizing", "border-box");
            if state.is_focused && !state.has_value {
                hint.insert("opacity", 1.0);
            }
        }

        if let Some(height) = props.style.get("height") {
            hint.insert("lineHeight", height.clone());
        }

        if state.error_text.is_some() && state.is_focused {
            floating_label.insert("color", keys.error_color);
        }

        if has_floating_label && !props.multi_line {
            input.insert("marginTop", 14);
        }

        if state.error_text.is_some() {
            focus_underline.insert("borderColor", keys.error_color);
            focus_underline.insert("transform", "scaleX(1)");
        }

        TextFieldStyles {
            root: root.merge(&props.style),
            error,
            hint,
            input: input.merge(&props.input_style),
            textarea,
            underline,
            underline_disabled,
            focus_underline,
            floating_label: floating_label.merge(&props.floating_label_style),
        }
    }
}

impl Component for TextField {
    type Props = TextFieldProps;
    type State = TextFieldState;

    fn initial_state(props: &TextFieldProps) -> TextFieldState {
        TextFieldState {
            error_text: props.error_text.clone(),
            has_value: is_valid(props.value.as_deref()) || is_valid(props.default_value.as_deref()),
            is_focused: false,
        }
    }

    fn receive_props(state: &mut TextFieldState, current: &TextFieldProps, next: &TextFieldProps) {
        state.error_text = next.error_text.clone();
        if next.value.is_some() {
            state.has_value = is_valid(next.value.as_deref());
        } else if next.default_value != current.default_value {
            state.has_value = is_valid(next.default_value.as_deref());
        }
    }

    fn render(props: &TextFieldProps, state: &TextFieldState, theme: &MuiTheme) -> Node {
        let styles = Self::styles(props, state, theme);
        let input_id = props.id.clone().unwrap_or_else(|| "text-field".to_string());

        let floating_label = props.floating_label_text.as_ref().map(|text| {
            Node::new("label")
                .style(styles.floating_label.clone())
                .attr("role", "floating-label")
                .attr("for", input_id.clone())
                .text(text.clone())
        });

        let hint = props.hint_text.as_ref().map(|text| {
            Node::new("div")
                .style(styles.hint.clone())
                .attr("role", "hint")
                .text(text.clone())
        });

        let input = if props.multi_line {
            let textarea_props = EnhancedTextareaProps {
                rows: props.rows,
                disabled: props.disabled,
                value: props.value.clone(),
                textarea_style: styles.textarea.clone(),
            };
            EnhancedTextarea::render(&textarea_props, &(), theme)
        } else {
            let mut node = Node::new("input")
                .style(styles.input.clone())
                .attr("type", "text");
            if props.disabled {
                node = node.attr("disabled", "true");
            }
            if let Some(value) = &props.value {
                node = node.attr("value", value.clone());
            }
            node
        };
        let input = input.attr("id", input_id).attr("role", "input");

        let underline = if props.disabled {
            Node::new("div")
                .style(styles.underline_disabled.clone())
                .attr("role", "underline")
        } else {
            Node::new("hr")
                .style(styles.underline.clone())
                .attr("role", "underline")
        };

        let focus_underline = Node::new("hr")
            .style(styles.focus_underline.clone())
            .attr("role", "focus-underline");

        let error = state.error_text.as_ref().map(|text| {
            Node::new("div")
                .style(styles.error.clone())
                .attr("role", "error")
                .text(text.clone())
        });

        Node::new("div")
            .style(styles.root)
            .maybe_child(floating_label)
            .maybe_child(hint)
            .child(input)
            .child(underline)
            .child(focus_underline)
            .maybe_child(error)
    }
}

impl Mounted<TextField> {
    /// Marks the field focused. Disabled fields ignore focus.
    pub fn focus(&mut self) -> bool {
        if self.props().disabled {
            return false;
        }
        self.set_state(|s| s.is_focused = true)
    }

    pub fn blur(&mut self) -> bool {
        self.set_state(|s| s.is_focused = false)
    }

    /// Records user input into an uncontrolled field.
    pub fn change(&mut self, value: &str) -> bool {
        let has_value = is_valid(Some(value));
        self.set_state(|s| s.has_value = has_value)
    }

    /// Sets error text on a field whose error text is not a prop.
    pub fn set_error_text(&mut self, error_text: Option<String>) -> bool {
        if self.props().error_text.is_some() {
            warn!("cannot set error text on a text field whose error text is a prop");
            return false;
        }
        self.set_state(|s| s.error_text = error_text)
    }

    /// Empties an uncontrolled field.
    pub fn clear_value(&mut self) -> bool {
        if self.props().value.is_some() {
            warn!("cannot clear a controlled text field");
            return false;
        }
        self.set_state(|s| s.has_value = false)
    }
}
