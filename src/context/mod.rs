//! Context-aware update skipping.
//!
//! A component is pure under its relevant context: given equal props, equal
//! state and a theme that agrees on every fact the component (and its
//! declared children) reads, its output cannot change. This module provides
//! the pieces that decide that:
//!
//! - [`RelevantKeys`]: the theme facts one component reads
//! - [`ComponentDescriptor`]: static per-type declarations
//! - [`keys_equal`]: recursive relevant-key comparison
//! - [`should_update`]: the full gate, consumed by the render host
//! - [`DescriptorRegistry`]: type-indexed, cycle-checked descriptors

mod compare;
mod descriptor;
mod gate;
mod keys;
mod registry;

pub use compare::keys_equal;
pub use descriptor::{ComponentDescriptor, RelevantKeysFn, ThemeRelevance};
pub use gate::{decide, should_update, UpdateDecision, UpdateFrame};
pub use keys::{KeyValue, RelevantKeys};
pub use registry::{validate_descriptor, DescriptorRegistry};
