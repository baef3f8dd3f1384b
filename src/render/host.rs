//! Component instances and the update loop that drives them.

use std::sync::Arc;

use tracing::trace;

use crate::context::{decide, ThemeRelevance, UpdateDecision, UpdateFrame};
use crate::resolver::{initial_theme, resolve_effective_theme, RenderEnv};
use crate::theme::MuiTheme;

use super::node::Node;

/// A themeable widget type.
///
/// Component types are stateless; instance data lives in [`Mounted`]. A
/// component renders from its props, its state and its effective theme only.
pub trait Component: ThemeRelevance {
    type Props: PartialEq;
    type State: PartialEq + Clone;

    fn initial_state(props: &Self::Props) -> Self::State;

    /// Adjusts state before an update with new props is considered.
    fn receive_props(_state: &mut Self::State, _current: &Self::Props, _next: &Self::Props) {}

    fn render(props: &Self::Props, state: &Self::State, theme: &MuiTheme) -> Node;
}

/// A live component instance.
///
/// Each update runs [`decide`] with the previous and next props, state and
/// context theme, and renders only when the gate says so.
pub struct Mounted<C: Component> {
    props: C::Props,
    state: C::State,
    context: Option<Arc<MuiTheme>>,
    theme: Arc<MuiTheme>,
    output: Node,
    renders: usize,
    last_decision: Option<UpdateDecision>,
}

impl<C: Component> Mounted<C> {
    /// Creates the instance and renders it once.
    pub fn mount(props: C::Props, env: &RenderEnv) -> Self {
        let state = C::initial_state(&props);
        let context = env.theme().cloned();
        let theme = initial_theme(context.as_ref());
        let output = C::render(&props, &state, &theme);
        trace!(component = C::descriptor().name(), "mounted");
        Self {
            props,
            state,
            context,
            theme,
            output,
            renders: 1,
            last_decision: None,
        }
    }

    /// Applies new props and a new environment from the parent.
    ///
    /// Returns whether the component re-rendered.
    pub fn update(&mut self, next_props: C::Props, env: &RenderEnv) -> bool {
        let mut next_state = self.state.clone();
        C::receive_props(&mut next_state, &self.props, &next_props);

        let next_context = env.theme().cloned();
        let next_theme = resolve_effective_theme(next_context.as_ref(), &self.theme);

        let decision = decide(
            C::descriptor(),
            &UpdateFrame::new(&self.props, &self.state, self.context.as_deref()),
            &UpdateFrame::new(&next_props, &next_state, next_context.as_deref()),
        );

        self.props = next_props;
        self.state = next_state;
        self.context = next_context;
        self.theme = next_theme;
        self.commit(decision)
    }

    /// Changes state in place, keeping props and environment.
    ///
    /// Returns whether the component re-rendered.
    pub fn set_state(&mut self, change: impl FnOnce(&mut C::State)) -> bool {
        let mut next_state = self.state.clone();
        change(&mut next_state);

        let theme = self.context.as_deref();
        let decision = decide(
            C::descriptor(),
            &UpdateFrame::new(&self.props, &self.state, theme),
            &UpdateFrame::new(&self.props, &next_state, theme),
        );

        self.state = next_state;
        self.commit(decision)
    }

    fn commit(&mut self, decision: UpdateDecision) -> bool {
        self.last_decision = Some(decision);
        if !decision.requires_render() {
            return false;
        }
        self.output = C::render(&self.props, &self.state, &self.theme);
        self.renders += 1;
        true
    }

    pub fn props(&self) -> &C::Props {
        &self.props
    }

    pub fn state(&self) -> &C::State {
        &self.state
    }

    /// The effective theme, used by the next render.
    ///
    /// Updates store the new effective theme even when they skip rendering.
    /// A skip decided by [`UpdateDecision::StaticTheme`] never compares
    /// relevant keys, so [`output`](Self::output) may still reflect the
    /// previous theme's facts until something else triggers a render.
    pub fn theme(&self) -> &Arc<MuiTheme> {
        &self.theme
    }

    /// The most recently rendered tree.
    pub fn output(&self) -> &Node {
        &self.output
    }

    /// Number of renders, including the one at mount.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Why the last update did or did not render.
    pub fn last_decision(&self) -> Option<UpdateDecision> {
        self.last_decision
    }

    /// The environment this instance hands to its children.
    pub fn child_env(&self) -> RenderEnv {
        RenderEnv::with_theme(Arc::clone(&self.theme))
    }
}
