//! Static per-component metadata for update skipping.

use std::fmt;

use crate::theme::MuiTheme;

use super::keys::RelevantKeys;

/// Computes the facts a component reads from a theme.
pub type RelevantKeysFn = fn(&MuiTheme) -> RelevantKeys;

/// What a component type declares about its theme dependencies.
///
/// Descriptors are defined once per component type, usually as a `static`,
/// and are read-only afterwards. A descriptor that declares nothing opts out
/// of precise skipping: the update gate then re-renders on any theme change
/// it cannot prove irrelevant.
///
/// ```rust
/// use themekit::{ComponentDescriptor, MuiTheme, RelevantKeys};
///
/// fn label_keys(theme: &MuiTheme) -> RelevantKeys {
///     RelevantKeys::new().with("gutter", theme.raw_theme.spacing.desktop_gutter_less)
/// }
///
/// static LABEL: ComponentDescriptor =
///     ComponentDescriptor::new("Label").with_relevant_keys(label_keys);
/// static CARD_CHILDREN: [&ComponentDescriptor; 1] = [&LABEL];
/// static CARD: ComponentDescriptor =
///     ComponentDescriptor::new("Card").with_children(&CARD_CHILDREN);
///
/// assert_eq!(CARD.children()[0].name(), "Label");
/// ```
pub struct ComponentDescriptor {
    name: &'static str,
    relevant_keys: Option<RelevantKeysFn>,
    children: &'static [&'static ComponentDescriptor],
}

impl ComponentDescriptor {
    /// A descriptor with no declarations.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            relevant_keys: None,
            children: &[],
        }
    }

    pub const fn with_relevant_keys(mut self, relevant_keys: RelevantKeysFn) -> Self {
        self.relevant_keys = Some(relevant_keys);
        self
    }

    /// Declares nested component types whose theme facts also matter.
    pub const fn with_children(
        mut self,
        children: &'static [&'static ComponentDescriptor],
    ) -> Self {
        self.children = children;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn relevant_keys(&self) -> Option<RelevantKeysFn> {
        self.relevant_keys
    }

    pub fn children(&self) -> &'static [&'static ComponentDescriptor] {
        self.children
    }

    /// True when neither relevant keys nor children are declared.
    pub fn declares_nothing(&self) -> bool {
        self.relevant_keys.is_none() && self.children.is_empty()
    }
}

// Children are listed by name so a (misconfigured) cyclic graph still prints.
impl fmt::Debug for ComponentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let children: Vec<&str> = self.children.iter().map(|c| c.name).collect();
        f.debug_struct("ComponentDescriptor")
            .field("name", &self.name)
            .field("relevant_keys", &self.relevant_keys.is_some())
            .field("children", &children)
            .finish()
    }
}

/// Capability of a component type that takes part in update skipping.
pub trait ThemeRelevance {
    fn descriptor() -> &'static ComponentDescriptor;
}
