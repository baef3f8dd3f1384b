//! Relevant-key comparison across a descriptor graph.

use tracing::trace;

use crate::theme::MuiTheme;

use super::descriptor::ComponentDescriptor;

/// Whether two themes agree on every fact `descriptor` declares.
///
/// The descriptor's own relevant keys are compared first; then each declared
/// child is checked against the same pair of themes. Any mismatch returns
/// `false` immediately. A descriptor that declares nothing is vacuously
/// equal; callers decide whether that is enough to skip work.
///
/// The relevant-key function is never called with a missing theme. When
/// both themes are absent the keys are equal without calling it. When only
/// one is absent there is nothing to compare against and the result is
/// `false`.
pub fn keys_equal(
    descriptor: &ComponentDescriptor,
    current: Option<&MuiTheme>,
    next: Option<&MuiTheme>,
) -> bool {
    if let Some(relevant_keys) = descriptor.relevant_keys() {
        match (current, next) {
            (None, None) => {}
            (Some(current), Some(next)) => {
                let current_keys = relevant_keys(current);
                let next_keys = relevant_keys(next);
                if current_keys != next_keys {
                    trace!(
                        component = descriptor.name(),
                        key = current_keys.first_difference(&next_keys),
                        "relevant theme key changed"
                    );
                    return false;
                }
            }
            _ => return false,
        }
    }

    descriptor
        .children()
        .iter()
        .all(|child| keys_equal(child, current, next))
}
