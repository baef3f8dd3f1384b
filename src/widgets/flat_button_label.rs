//! The label inside a flat button.

use crate::context::{ComponentDescriptor, RelevantKeys, ThemeRelevance};
use crate::render::{Component, Node, StyleMap};
use crate::theme::MuiTheme;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatButtonLabelProps {
    pub label: String,
    pub style: StyleMap,
}

impl FlatButtonLabelProps {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: StyleMap::new(),
        }
    }
}

/// Padded text label. Reads only the narrow desktop gutter.
pub struct FlatButtonLabel;

fn relevant_keys(theme: &MuiTheme) -> RelevantKeys {
    RelevantKeys::new().with(
        "spacingDesktopGutterLess",
        theme.raw_theme.spacing.desktop_gutter_less,
    )
}

pub static FLAT_BUTTON_LABEL: ComponentDescriptor =
    ComponentDescriptor::new("FlatButtonLabel").with_relevant_keys(relevant_keys);

impl ThemeRelevance for FlatButtonLabel {
    fn descriptor() -> &'static ComponentDescriptor {
        &FLAT_BUTTON_LABEL
    }
}

impl Component for FlatButtonLabel {
    type Props = FlatButtonLabelProps;
    type State = ();

    fn initial_state(_props: &Self::Props) {}

    fn render(props: &Self::Props, _state: &(), theme: &MuiTheme) -> Node {
        let gutter = relevant_keys(theme)
            .px("spacingDesktopGutterLess")
            .unwrap_or_default();
        let root = StyleMap::new()
            .set("position", "relative")
            .set("padding", format!("0 {}px", gutter));

        Node::new("span")
            .style(root.merge(&props.style))
            .text(props.label.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::render::{Mounted, StyleValue};
    use crate::resolver::RenderEnv;
    use crate::theme::RawTheme;
    use std::sync::Arc;

    #[test]
    fn test_padding_follows_gutter() {
        let props = FlatButtonLabelProps::new("OK");
        let label = Mounted::<FlatButtonLabel>::mount(props, &RenderEnv::new());
        assert_eq!(
            label.output().style.get("padding"),
            Some(&StyleValue::Text("0 16px".into()))
        );
        assert_eq!(label.output().text.as_deref(), Some("OK"));
    }

    #[test]
    fn test_caller_style_overrides() {
        let props = FlatButtonLabelProps {
            label: "OK".into(),
            style: StyleMap::new().set("padding", 0),
        };
        let label = Mounted::<FlatButtonLabel>::mount(props, &RenderEnv::new());
        assert_eq!(label.output().style.get("padding"), Some(&StyleValue::Px(0)));
    }

    #[test]
    fn test_palette_change_is_skipped_gutter_change_is_not() {
        let base = Arc::new(MuiTheme::resolve(RawTheme::light()));
        let props = FlatButtonLabelProps::new("OK");
        let env = RenderEnv::with_theme(Arc::clone(&base));
        let mut label = Mounted::<FlatButtonLabel>::mount(props.clone(), &env);

        let recolored = Arc::new(base.modify_raw_theme_palette(|p| p.text_color = Color::BLACK));
        assert!(!label.update(props.clone(), &RenderEnv::with_theme(recolored)));

        let roomy = Arc::new(base.modify_raw_theme_spacing(|s| s.desktop_gutter_less = 24));
        assert!(label.update(props, &RenderEnv::with_theme(roomy)));
        assert_eq!(
            label.output().style.get("padding"),
            Some(&StyleValue::Text("0 24px".into()))
        );
    }
}
