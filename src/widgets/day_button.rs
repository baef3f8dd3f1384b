//! A single day cell of the date picker calendar.

use crate::context::{ComponentDescriptor, ThemeRelevance};
use crate::render::{Component, Mounted, Node, StyleMap, StyleValue};
use crate::theme::MuiTheme;

/// A calendar date without time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl CalendarDate {
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayButtonProps {
    /// `None` renders an empty spacer cell.
    pub date: Option<CalendarDate>,
    /// The current date, for highlighting today.
    pub today: Option<CalendarDate>,
    pub selected: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DayButtonState {
    pub hover: bool,
}

/// Day cell. Declares no theme facts, so every new theme re-renders it.
pub struct DayButton;

pub static DAY_BUTTON: ComponentDescriptor = ComponentDescriptor::new("DayButton");

impl ThemeRelevance for DayButton {
    fn descriptor() -> &'static ComponentDescriptor {
        &DAY_BUTTON
    }
}

impl Component for DayButton {
    type Props = DayButtonProps;
    type State = DayButtonState;

    fn initial_state(_props: &DayButtonProps) -> DayButtonState {
        DayButtonState::default()
    }

    fn render(props: &DayButtonProps, state: &DayButtonState, theme: &MuiTheme) -> Node {
        let mut root = StyleMap::new()
            .set("boxSizing", "border-box")
            .set("position", "relative")
            .set("float", "left")
            .set("width", 41)
            .set("padding", "4px 2px");

        let Some(date) = props.date else {
            return Node::new("span").style(root);
        };

        let roles = &theme.date_picker;
        let mut label = StyleMap::new()
            .set("position", "relative")
            .set("color", theme.raw_theme.palette.text_color);
        let mut circle = StyleMap::new()
            .set("position", "absolute")
            .set("height", 36)
            .set("width", 36)
            .set("top", 2)
            .set("opacity", 0.0)
            .set("borderRadius", StyleValue::Percent(50))
            .set("transform", "scale(0)")
            .set("backgroundColor", roles.select_color);

        if state.hover {
            label.insert("color", roles.select_text_color);
            circle.insert("opacity", 0.6);
            circle.insert("transform", "scale(1)");
        }

        if props.selected {
            label.insert("color", roles.select_text_color);
            circle.insert("opacity", 1.0);
            circle.insert("transform", "scale(1)");
        } else if props.disabled {
            root.insert("opacity", 0.6);
        }

        if props.today == Some(date) && !props.selected {
            label.insert("color", roles.color);
        }

        let mut button = Node::new("button")
            .style(root)
            .child(Node::new("div").style(circle).attr("role", "selection"))
            .child(
                Node::new("span")
                    .style(label)
                    .attr("role", "label")
                    .text(date.day.to_string()),
            );
        if props.disabled {
            button = button.attr("disabled", "true");
        }
        button
    }
}

impl Mounted<DayButton> {
    pub fn mouse_enter(&mut self) -> bool {
        if self.props().disabled {
            return false;
        }
        self.set_state(|s| s.hover = true)
    }

    pub fn mouse_leave(&mut self) -> bool {
        if self.props().disabled {
            return false;
        }
        self.set_state(|s| s.hover = false)
    }

    /// The date a tap selects, or `None` for disabled and spacer cells.
    pub fn tap(&self) -> Option<CalendarDate> {
        if self.props().disabled {
            return None;
        }
        self.props().date
    }
}
