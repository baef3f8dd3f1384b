//! # Themekit - themeable widgets that only re-render when it matters
//!
//! Themekit renders widgets into a retained [`Node`] tree, styles them from a
//! theme handed down the tree, and skips re-rendering a widget whenever
//! nothing it actually reads has changed.
//!
//! ## Themes
//!
//! A [`RawTheme`] holds design tokens: spacing, font family and palette.
//! [`MuiTheme::resolve`] expands it into per-component style roles. Themes are
//! immutable `Arc` snapshots; to change one, build a new one:
//!
//! ```rust
//! use std::sync::Arc;
//! use themekit::{Color, MuiTheme, RawTheme};
//!
//! let base = Arc::new(MuiTheme::resolve(RawTheme::light()));
//! let branded = Arc::new(base.modify_raw_theme_palette(|p| {
//!     p.primary1_color = Color::rgb(0x67, 0x3a, 0xb7);
//! }));
//! assert_eq!(branded.text_field.focus_color, Color::rgb(0x67, 0x3a, 0xb7));
//! ```
//!
//! A widget with no theme above it uses [`default_theme`], built once per
//! process and marked static.
//!
//! ## Update skipping
//!
//! Each widget type declares a [`ComponentDescriptor`]: the theme facts it
//! reads ([`RelevantKeys`]) and the nested widget types whose facts also
//! matter. [`should_update`] re-renders only when props or state changed, a
//! theme appeared or disappeared, or a declared fact changed:
//!
//! ```rust
//! use std::sync::Arc;
//! use themekit::{
//!     Color, FlatButtonLabel, FlatButtonLabelProps, Mounted, MuiTheme, RawTheme, RenderEnv,
//! };
//!
//! let theme = Arc::new(MuiTheme::resolve(RawTheme::light()));
//! let props = FlatButtonLabelProps::new("Save");
//! let env = RenderEnv::with_theme(theme.clone());
//! let mut label = Mounted::<FlatButtonLabel>::mount(props.clone(), &env);
//!
//! // The label reads only spacing, so a palette change is skipped.
//! let recolored = Arc::new(theme.modify_raw_theme_palette(|p| p.text_color = Color::BLACK));
//! assert!(!label.update(props, &RenderEnv::with_theme(recolored)));
//! assert_eq!(label.render_count(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`theme`]: raw and resolved themes, defaults, loading from JSON/YAML
//! - [`context`]: relevant keys, descriptors, the comparator and the gate
//! - [`resolver`]: effective theme selection and [`RenderEnv`]
//! - [`render`]: [`Node`] trees, the [`Mounted`] host, terminal [`preview`]
//! - [`widgets`]: text field, textarea, flat button label, date picker day

pub mod color;
pub mod context;
pub mod error;
pub mod render;
pub mod resolver;
pub mod theme;
pub mod widgets;

pub use color::Color;
pub use context::{
    decide, keys_equal, should_update, validate_descriptor, ComponentDescriptor,
    DescriptorRegistry, KeyValue, RelevantKeys, RelevantKeysFn, ThemeRelevance,
    UpdateDecision, UpdateFrame,
};
pub use error::{ColorParseError, RegistryError, ThemeError};
pub use render::{preview, Component, Mounted, Node, PreviewOptions, StyleMap, StyleValue};
pub use resolver::{initial_theme, resolve_effective_theme, RenderEnv};
pub use theme::{
    adaptive_default_theme, default_theme, default_theme_for, detect_color_mode,
    set_color_mode_detector, ColorMode, DatePickerTheme, FlatButtonTheme, MuiTheme, Palette,
    RawTheme, Spacing, TextFieldTheme,
};
pub use widgets::{
    register_builtin, CalendarDate, DayButton, DayButtonProps, EnhancedTextarea,
    EnhancedTextareaProps, FlatButtonLabel, FlatButtonLabelProps, TextField, TextFieldProps,
    TextFieldState,
};
