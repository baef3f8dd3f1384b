//! Effective theme resolution and the render environment.
//!
//! Themes flow down the component tree explicitly: every render receives a
//! [`RenderEnv`] from its parent, and a component re-exposes its own
//! effective theme to its children. The nearest ancestor that supplied a
//! theme wins; with no theme anywhere, components fall back to the
//! memoized [`default_theme`].

use std::sync::Arc;

use crate::theme::{default_theme, MuiTheme};

/// Picks the effective theme when new inputs arrive.
///
/// An inherited theme always wins, even when it equals the previous one.
/// Without one, the previous effective theme is kept as is.
///
/// ```rust
/// use std::sync::Arc;
/// use themekit::{resolve_effective_theme, MuiTheme, RawTheme};
///
/// let previous = themekit::default_theme();
/// let inherited = Arc::new(MuiTheme::resolve(RawTheme::dark()));
///
/// let picked = resolve_effective_theme(Some(&inherited), &previous);
/// assert!(Arc::ptr_eq(&picked, &inherited));
///
/// let kept = resolve_effective_theme(None, &picked);
/// assert!(Arc::ptr_eq(&kept, &inherited));
/// ```
pub fn resolve_effective_theme(
    inherited: Option<&Arc<MuiTheme>>,
    previous: &Arc<MuiTheme>,
) -> Arc<MuiTheme> {
    Arc::clone(inherited.unwrap_or(previous))
}

/// The effective theme of a newly created component.
pub fn initial_theme(inherited: Option<&Arc<MuiTheme>>) -> Arc<MuiTheme> {
    inherited.map_or_else(default_theme, Arc::clone)
}

/// Values handed from a parent to the children it renders.
#[derive(Debug, Clone, Default)]
pub struct RenderEnv {
    theme: Option<Arc<MuiTheme>>,
}

impl RenderEnv {
    /// An environment with no theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// An environment carrying `theme`.
    pub fn with_theme(theme: Arc<MuiTheme>) -> Self {
        Self { theme: Some(theme) }
    }

    /// The theme supplied by the nearest ancestor, if any.
    pub fn theme(&self) -> Option<&Arc<MuiTheme>> {
        self.theme.as_ref()
    }
}
