//! End-to-end update scenarios.
//!
//! These tests drive widgets through mount and update cycles the way a host
//! runtime would, checking that theme changes re-render exactly when a
//! widget's declared facts change.

use std::sync::Arc;

use themekit::{
    default_theme, initial_theme, keys_equal, resolve_effective_theme, should_update, Color,
    ComponentDescriptor, FlatButtonLabel, FlatButtonLabelProps, Mounted, MuiTheme, RawTheme,
    RelevantKeys, RenderEnv, StyleValue, TextField, TextFieldProps, UpdateDecision, UpdateFrame,
};

fn gutter_keys(theme: &MuiTheme) -> RelevantKeys {
    RelevantKeys::new().with("gutter", theme.raw_theme.spacing.desktop_gutter_less)
}

fn ink_keys(theme: &MuiTheme) -> RelevantKeys {
    RelevantKeys::new().with("ink", theme.raw_theme.palette.text_color)
}

static INK: ComponentDescriptor = ComponentDescriptor::new("Ink").with_relevant_keys(ink_keys);
static CARD_CHILDREN: [&ComponentDescriptor; 1] = [&INK];
static CARD: ComponentDescriptor = ComponentDescriptor::new("Card")
    .with_relevant_keys(gutter_keys)
    .with_children(&CARD_CHILDREN);

fn env(theme: &Arc<MuiTheme>) -> RenderEnv {
    RenderEnv::with_theme(Arc::clone(theme))
}

#[test]
fn test_mount_without_context_sticks_to_default() {
    let first = initial_theme(None);
    assert!(Arc::ptr_eq(&first, &default_theme()));

    let second = resolve_effective_theme(None, &first);
    assert!(Arc::ptr_eq(&second, &first));

    let mut field = Mounted::<TextField>::mount(TextFieldProps::default(), &RenderEnv::new());
    assert!(!field.update(TextFieldProps::default(), &RenderEnv::new()));
    assert!(Arc::ptr_eq(field.theme(), &default_theme()));
}

#[test]
fn test_context_theme_always_wins_over_default() {
    let lookalike = Arc::new(MuiTheme::resolve(RawTheme::light()));
    assert_eq!(lookalike.text_field, default_theme().text_field);

    let field = Mounted::<TextField>::mount(TextFieldProps::default(), &env(&lookalike));
    assert!(Arc::ptr_eq(field.theme(), &lookalike));
}

#[test]
fn test_irrelevant_token_change_skips() {
    let t1 = Arc::new(MuiTheme::resolve(RawTheme::light()));
    let t2 = Arc::new(t1.modify_raw_theme_spacing(|s| s.desktop_toolbar_height = 64));

    let mut field = Mounted::<TextField>::mount(TextFieldProps::default(), &env(&t1));
    assert!(!field.update(TextFieldProps::default(), &env(&t2)));
    assert_eq!(field.last_decision(), Some(UpdateDecision::Unchanged));
    // The skipped update still adopts the new theme for later renders.
    assert!(Arc::ptr_eq(field.theme(), &t2));
}

#[test]
fn test_relevant_token_change_renders() {
    let t1 = Arc::new(MuiTheme::resolve(RawTheme::light()));
    let pink = Color::rgb(0xe9, 0x1e, 0x63);
    let t2 = Arc::new(t1.modify_raw_theme_palette(|p| p.primary1_color = pink));

    let mut field = Mounted::<TextField>::mount(TextFieldProps::default(), &env(&t1));
    assert!(field.update(TextFieldProps::default(), &env(&t2)));
    assert_eq!(field.last_decision(), Some(UpdateDecision::RelevantKeysChanged));
    assert_eq!(field.render_count(), 2);
}

#[test]
fn test_removed_context_renders_and_keeps_theme() {
    let t1 = Arc::new(MuiTheme::resolve(RawTheme::dark()));
    let props = FlatButtonLabelProps::new("Cancel");

    let mut label = Mounted::<FlatButtonLabel>::mount(props.clone(), &env(&t1));
    assert!(label.update(props, &RenderEnv::new()));
    assert_eq!(label.last_decision(), Some(UpdateDecision::ThemePresenceChanged));
    assert!(Arc::ptr_eq(label.theme(), &t1));
}

#[test]
fn test_context_applied_after_default_renders() {
    let props = FlatButtonLabelProps::new("Ok");
    let mut label = Mounted::<FlatButtonLabel>::mount(props.clone(), &RenderEnv::new());

    let applied = Arc::new(MuiTheme::resolve(RawTheme::light()));
    assert!(label.update(props, &env(&applied)));
    assert!(Arc::ptr_eq(label.theme(), &applied));
}

#[test]
fn test_static_context_skips_even_relevant_changes() {
    let frozen = default_theme();
    let next = Arc::new(frozen.modify_raw_theme_spacing(|s| s.desktop_gutter_less = 2));
    let props = FlatButtonLabelProps::new("Ok");

    let mut label = Mounted::<FlatButtonLabel>::mount(props.clone(), &env(&frozen));
    assert!(!label.update(props.clone(), &env(&next)));
    assert_eq!(label.last_decision(), Some(UpdateDecision::StaticTheme));

    // The new theme is adopted, but the output keeps the old gutter until
    // the next render.
    assert!(Arc::ptr_eq(label.theme(), &next));
    let padding =
        |label: &Mounted<FlatButtonLabel>| label.output().style.get("padding").cloned();
    assert_eq!(padding(&label), Some(StyleValue::Text("0 16px".into())));

    let renamed = FlatButtonLabelProps::new("Done");
    assert!(label.update(renamed, &env(&next)));
    assert_eq!(padding(&label), Some(StyleValue::Text("0 2px".into())));
}

#[test]
fn test_child_descriptor_failure_propagates() {
    let a = MuiTheme::resolve(RawTheme::light());
    let b = a.modify_raw_theme_palette(|p| p.text_color = Color::rgb(20, 20, 20));
    assert_eq!(gutter_keys(&a), gutter_keys(&b));
    assert!(!keys_equal(&CARD, Some(&a), Some(&b)));

    let (props, state) = ((), ());
    assert!(should_update(
        &CARD,
        &UpdateFrame::new(&props, &state, Some(&a)),
        &UpdateFrame::new(&props, &state, Some(&b)),
    ));
}

#[test]
fn test_child_env_passes_theme_down_unchanged() {
    let t1 = Arc::new(MuiTheme::resolve(RawTheme::dark()));
    let parent = Mounted::<TextField>::mount(TextFieldProps::default(), &env(&t1));

    let props = FlatButtonLabelProps::new("Go");
    let child = Mounted::<FlatButtonLabel>::mount(props, &parent.child_env());
    assert!(Arc::ptr_eq(child.theme(), &t1));
}
