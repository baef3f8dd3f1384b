//! Error types for theme loading and descriptor registration.
//!
//! The update gate itself never fails. These errors cover the edges around
//! it: reading author-supplied theme files and validating the static
//! descriptor graph before it is used.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a CSS color literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color literal '{literal}'")]
pub struct ColorParseError {
    /// The text that failed to parse.
    pub literal: String,
}

impl ColorParseError {
    pub(crate) fn new(literal: &str) -> Self {
        Self {
            literal: literal.to_string(),
        }
    }
}

/// Error returned when loading a raw theme from text or disk.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The JSON source was malformed or did not match the theme shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// The YAML source was malformed or did not match the theme shape.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The theme file could not be read.
    #[error("failed to read theme '{}': {source}", path.display())]
    Io {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The file extension does not name a supported format.
    #[error("unsupported theme format '{0}'")]
    UnsupportedFormat(String),
}

/// Error returned when registering component descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A descriptor reaches itself through its declared children.
    #[error("cycle detected in component children: {}", path.join(" -> "))]
    CycleDetected {
        /// Descriptor names along the cycle, first and last equal
        path: Vec<String>,
    },
    /// Two different component types registered the same descriptor name.
    #[error("component descriptor '{name}' is already registered")]
    Duplicate {
        /// The clashing descriptor name
        name: String,
    },
}
