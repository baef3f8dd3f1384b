//! Rendering: the retained output tree, the component host and a terminal
//! preview.

mod host;
mod node;
mod preview;

pub use host::{Component, Mounted};
pub use node::{Node, StyleMap, StyleValue};
pub use preview::{preview, PreviewOptions};
