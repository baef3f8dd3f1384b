//! The update gate: decides whether a component must re-render.

use tracing::trace;

use crate::theme::MuiTheme;

use super::compare::keys_equal;
use super::descriptor::ComponentDescriptor;

/// Everything the gate compares for one side of an update.
#[derive(Debug)]
pub struct UpdateFrame<'a, P, S> {
    pub props: &'a P,
    pub state: &'a S,
    /// The theme received from the render environment, not the effective one.
    pub theme: Option<&'a MuiTheme>,
}

impl<'a, P, S> UpdateFrame<'a, P, S> {
    pub fn new(props: &'a P, state: &'a S, theme: Option<&'a MuiTheme>) -> Self {
        Self {
            props,
            state,
            theme,
        }
    }
}

impl<P, S> Clone for UpdateFrame<'_, P, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P, S> Copy for UpdateFrame<'_, P, S> {}

/// Which rule settled an update decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateDecision {
    PropsChanged,
    StateChanged,
    /// A theme appeared or disappeared.
    ThemePresenceChanged,
    /// The current theme is a static default; relevance is not checked.
    StaticTheme,
    RelevantKeysChanged,
    /// The component declares no theme facts and the theme instance changed.
    UndeclaredRelevance,
    Unchanged,
}

impl UpdateDecision {
    pub fn requires_render(self) -> bool {
        matches!(
            self,
            UpdateDecision::PropsChanged
                | UpdateDecision::StateChanged
                | UpdateDecision::ThemePresenceChanged
                | UpdateDecision::RelevantKeysChanged
                | UpdateDecision::UndeclaredRelevance
        )
    }
}

/// Runs the gate's rules in order and reports the one that decided.
///
/// Order matters: props, then state, then theme presence, then the static
/// fast path, then the relevant-key walk. The key walk only runs when both
/// themes are present or both are absent.
///
/// A descriptor that declares nothing cannot prove a theme change
/// irrelevant, so any change of theme instance re-renders it.
pub fn decide<P: PartialEq, S: PartialEq>(
    descriptor: &ComponentDescriptor,
    current: &UpdateFrame<'_, P, S>,
    next: &UpdateFrame<'_, P, S>,
) -> UpdateDecision {
    let decision = if current.props != next.props {
        UpdateDecision::PropsChanged
    } else if current.state != next.state {
        UpdateDecision::StateChanged
    } else if current.theme.is_some() != next.theme.is_some() {
        UpdateDecision::ThemePresenceChanged
    } else if current.theme.is_some_and(MuiTheme::is_static) {
        UpdateDecision::StaticTheme
    } else if descriptor.declares_nothing() && !same_instance(current.theme, next.theme) {
        UpdateDecision::UndeclaredRelevance
    } else if !keys_equal(descriptor, current.theme, next.theme) {
        UpdateDecision::RelevantKeysChanged
    } else {
        UpdateDecision::Unchanged
    };

    trace!(component = descriptor.name(), ?decision, "update gate");
    decision
}

fn same_instance(current: Option<&MuiTheme>, next: Option<&MuiTheme>) -> bool {
    match (current, next) {
        (Some(current), Some(next)) => std::ptr::eq(current, next),
        (None, None) => true,
        _ => false,
    }
}

/// Whether a component must re-render. `true` means render.
///
/// ```rust
/// use themekit::{should_update, ComponentDescriptor, MuiTheme, RawTheme, UpdateFrame};
///
/// static OPAQUE: ComponentDescriptor = ComponentDescriptor::new("Opaque");
///
/// let theme = MuiTheme::resolve(RawTheme::light());
/// let (props, state) = ("label", 0);
///
/// // A theme appearing always re-renders.
/// assert!(should_update(
///     &OPAQUE,
///     &UpdateFrame::new(&props, &state, None),
///     &UpdateFrame::new(&props, &state, Some(&theme)),
/// ));
/// // Same inputs never do.
/// assert!(!should_update(
///     &OPAQUE,
///     &UpdateFrame::new(&props, &state, Some(&theme)),
///     &UpdateFrame::new(&props, &state, Some(&theme)),
/// ));
/// ```
pub fn should_update<P: PartialEq, S: PartialEq>(
    descriptor: &ComponentDescriptor,
    current: &UpdateFrame<'_, P, S>,
    next: &UpdateFrame<'_, P, S>,
) -> bool {
    decide(descriptor, current, next).requires_render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::context::RelevantKeys;
    use crate::theme::RawTheme;
    use proptest::prelude::*;

    fn text_keys(theme: &MuiTheme) -> RelevantKeys {
        RelevantKeys::new().with("text", theme.raw_theme.palette.text_color)
    }

    fn exploding_keys(_: &MuiTheme) -> RelevantKeys {
        panic!("relevant keys must not be computed");
    }

    static TEXT: ComponentDescriptor =
        ComponentDescriptor::new("Text").with_relevant_keys(text_keys);
    static BARE: ComponentDescriptor = ComponentDescriptor::new("Bare");
    static EXPLODING: ComponentDescriptor =
        ComponentDescriptor::new("Exploding").with_relevant_keys(exploding_keys);

    #[derive(Debug, Clone, PartialEq)]
    struct Props {
        label: String,
        disabled: bool,
    }

    fn props(label: &str) -> Props {
        Props {
            label: label.to_string(),
            disabled: false,
        }
    }

    fn light() -> MuiTheme {
        MuiTheme::resolve(RawTheme::light())
    }

    #[test]
    fn test_props_change_wins() {
        let t = light();
        let (a, b) = (props("a"), props("b"));
        let d = decide(
            &EXPLODING,
            &UpdateFrame::new(&a, &(), Some(&t)),
            &UpdateFrame::new(&b, &(), Some(&t)),
        );
        assert_eq!(d, UpdateDecision::PropsChanged);
    }

    #[test]
    fn test_state_change() {
        let p = props("a");
        let d = decide(
            &TEXT,
            &UpdateFrame::new(&p, &1u8, None),
            &UpdateFrame::new(&p, &2u8, None),
        );
        assert_eq!(d, UpdateDecision::StateChanged);
    }

    #[test]
    fn test_presence_change_beats_vacuous_keys() {
        let t = light();
        let p = props("a");
        assert!(keys_equal(&BARE, None, Some(&t)));
        assert_eq!(
            decide(
                &BARE,
                &UpdateFrame::new(&p, &(), None),
                &UpdateFrame::new(&p, &(), Some(&t)),
            ),
            UpdateDecision::ThemePresenceChanged
        );
        assert_eq!(
            decide(
                &BARE,
                &UpdateFrame::new(&p, &(), Some(&t)),
                &UpdateFrame::new(&p, &(), None),
            ),
            UpdateDecision::ThemePresenceChanged
        );
    }

    #[test]
    fn test_presence_change_never_computes_keys() {
        let t = light();
        let p = props("a");
        assert!(should_update(
            &EXPLODING,
            &UpdateFrame::new(&p, &(), Some(&t)),
            &UpdateFrame::new(&p, &(), None),
        ));
    }

    #[test]
    fn test_static_theme_skips_relevance() {
        let current = light().into_static();
        let next = light().modify_raw_theme_palette(|p| p.text_color = Color::BLACK);
        let p = props("a");
        assert_eq!(
            decide(
                &EXPLODING,
                &UpdateFrame::new(&p, &(), Some(&current)),
                &UpdateFrame::new(&p, &(), Some(&next)),
            ),
            UpdateDecision::StaticTheme
        );
    }

    #[test]
    fn test_relevant_and_irrelevant_changes() {
        let a = light();
        let irrelevant = a.modify_raw_theme_spacing(|s| s.desktop_gutter = 40);
        let relevant = a.modify_raw_theme_palette(|p| p.text_color = Color::BLACK);
        let p = props("a");
        let before = UpdateFrame::new(&p, &(), Some(&a));

        let skipped = UpdateFrame::new(&p, &(), Some(&irrelevant));
        let rendered = UpdateFrame::new(&p, &(), Some(&relevant));

        assert!(!should_update(&TEXT, &before, &skipped));
        assert!(should_update(&TEXT, &before, &rendered));
    }

    #[test]
    fn test_bare_descriptor_rerenders_on_new_theme() {
        let a = light();
        let b = light();
        let p = props("a");
        assert!(keys_equal(&BARE, Some(&a), Some(&b)));
        assert_eq!(
            decide(
                &BARE,
                &UpdateFrame::new(&p, &(), Some(&a)),
                &UpdateFrame::new(&p, &(), Some(&b)),
            ),
            UpdateDecision::UndeclaredRelevance
        );
    }

    #[test]
    fn test_bare_descriptor_skips_same_instance() {
        let a = light();
        let p = props("a");
        assert_eq!(
            decide(
                &BARE,
                &UpdateFrame::new(&p, &(), Some(&a)),
                &UpdateFrame::new(&p, &(), Some(&a)),
            ),
            UpdateDecision::Unchanged
        );
    }

    #[test]
    fn test_bare_descriptor_static_theme_still_skips() {
        let a = light().into_static();
        let b = light();
        let p = props("a");
        assert_eq!(
            decide(
                &BARE,
                &UpdateFrame::new(&p, &(), Some(&a)),
                &UpdateFrame::new(&p, &(), Some(&b)),
            ),
            UpdateDecision::StaticTheme
        );
    }

    #[test]
    #[should_panic(expected = "broken relevant keys")]
    fn test_key_function_panic_reaches_caller() {
        fn broken_keys(_: &MuiTheme) -> RelevantKeys {
            panic!("broken relevant keys");
        }
        static BROKEN: ComponentDescriptor =
            ComponentDescriptor::new("Broken").with_relevant_keys(broken_keys);

        let a = light();
        let b = MuiTheme::resolve(RawTheme::dark());
        let p = props("a");
        should_update(
            &BROKEN,
            &UpdateFrame::new(&p, &(), Some(&a)),
            &UpdateFrame::new(&p, &(), Some(&b)),
        );
    }

    #[test]
    fn test_both_absent_is_unchanged() {
        let p = props("a");
        assert!(!should_update(
            &EXPLODING,
            &UpdateFrame::new(&p, &(), None),
            &UpdateFrame::new(&p, &(), None),
        ));
    }

    fn theme_strategy() -> impl Strategy<Value = Option<MuiTheme>> {
        prop_oneof![
            Just(None),
            Just(Some(MuiTheme::resolve(RawTheme::light()))),
            Just(Some(MuiTheme::resolve(RawTheme::dark()))),
            Just(Some(MuiTheme::resolve(RawTheme::light()).into_static())),
        ]
    }

    proptest! {
        #[test]
        fn prop_unequal_props_always_render(
            a in "[a-z]{0,6}",
            b in "[a-z]{0,6}",
            ta in theme_strategy(),
            tb in theme_strategy(),
        ) {
            prop_assume!(a != b);
            let (pa, pb) = (props(&a), props(&b));
            prop_assert!(should_update(
                &TEXT,
                &UpdateFrame::new(&pa, &(), ta.as_ref()),
                &UpdateFrame::new(&pb, &(), tb.as_ref()),
            ));
        }

        #[test]
        fn prop_unequal_state_always_renders(
            sa in any::<u16>(),
            sb in any::<u16>(),
            ta in theme_strategy(),
            tb in theme_strategy(),
        ) {
            prop_assume!(sa != sb);
            let p = props("same");
            prop_assert!(should_update(
                &TEXT,
                &UpdateFrame::new(&p, &sa, ta.as_ref()),
                &UpdateFrame::new(&p, &sb, tb.as_ref()),
            ));
        }

        #[test]
        fn prop_presence_asymmetry_always_renders(
            t in theme_strategy(),
            flip in any::<bool>(),
        ) {
            prop_assume!(t.is_some());
            let p = props("same");
            let (current, next) = if flip {
                (t.as_ref(), None)
            } else {
                (None, t.as_ref())
            };
            prop_assert!(should_update(
                &BARE,
                &UpdateFrame::new(&p, &(), current),
                &UpdateFrame::new(&p, &(), next),
            ));
        }
    }
}
