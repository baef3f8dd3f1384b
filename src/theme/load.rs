//! Loading raw themes from JSON or YAML.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ThemeError;

use super::raw::RawTheme;

impl RawTheme {
    /// Parses a raw theme from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a raw theme from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads a raw theme file, picking the format from its extension.
    ///
    /// `.json`, `.yaml` and `.yml` are recognized.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(theme.path = %path.display(), "loading raw theme");
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            Some("yaml" | "yml") => Self::from_yaml(&content),
            other => Err(ThemeError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }

    /// Serializes this raw theme as pretty JSON.
    pub fn to_json(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
