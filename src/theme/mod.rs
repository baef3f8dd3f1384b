//! Theme system: raw design tokens, resolved themes and defaults.
//!
//! This module provides:
//!
//! - [`RawTheme`]: author-supplied tokens (spacing, font family, palette)
//! - [`MuiTheme`]: tokens expanded into per-component style roles
//! - [`default_theme`]: the memoized process-wide fallback theme
//! - [`ColorMode`]: light or dark, for picking a built-in default
//!
//! Raw themes can be loaded from JSON or YAML with
//! [`RawTheme::from_file`].

mod default;
mod load;
mod mui;
mod raw;

pub use default::{
    adaptive_default_theme, default_theme, default_theme_for, detect_color_mode,
    set_color_mode_detector, ColorMode,
};
pub use mui::{DatePickerTheme, FlatButtonTheme, MuiTheme, TextFieldTheme};
pub use raw::{Palette, RawTheme, Spacing};
