//! Process-wide default themes.
//!
//! Components that find no theme in their render environment fall back to a
//! default built from a built-in raw theme. Each default is built at most
//! once and lives for the rest of the process.

use std::sync::{Arc, Mutex};

use dark_light::{detect as detect_os_mode, Mode as OsMode};
use once_cell::sync::Lazy;
use tracing::debug;

use super::mui::MuiTheme;
use super::raw::RawTheme;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// The built-in raw theme for this mode.
    pub fn raw_theme(self) -> RawTheme {
        match self {
            ColorMode::Light => RawTheme::light(),
            ColorMode::Dark => RawTheme::dark(),
        }
    }
}

fn build_default(mode: ColorMode) -> Arc<MuiTheme> {
    debug!(theme.mode = ?mode, "building default theme");
    Arc::new(MuiTheme::resolve(mode.raw_theme()).into_static())
}

static LIGHT_DEFAULT: Lazy<Arc<MuiTheme>> = Lazy::new(|| build_default(ColorMode::Light));
static DARK_DEFAULT: Lazy<Arc<MuiTheme>> = Lazy::new(|| build_default(ColorMode::Dark));

/// The default theme: the light raw theme, resolved and marked static.
///
/// Every call returns the same instance.
///
/// ```rust
/// use std::sync::Arc;
///
/// let a = themekit::default_theme();
/// let b = themekit::default_theme();
/// assert!(Arc::ptr_eq(&a, &b));
/// assert!(a.is_static());
/// ```
pub fn default_theme() -> Arc<MuiTheme> {
    default_theme_for(ColorMode::Light)
}

/// The memoized default theme for a color mode.
pub fn default_theme_for(mode: ColorMode) -> Arc<MuiTheme> {
    match mode {
        ColorMode::Light => Arc::clone(&*LIGHT_DEFAULT),
        ColorMode::Dark => Arc::clone(&*DARK_DEFAULT),
    }
}

/// The memoized default theme for the currently detected color mode.
pub fn adaptive_default_theme() -> Arc<MuiTheme> {
    default_theme_for(detect_color_mode())
}

type ColorModeDetector = fn() -> ColorMode;

static COLOR_MODE_DETECTOR: Lazy<Mutex<ColorModeDetector>> =
    Lazy::new(|| Mutex::new(os_color_mode));

/// Overrides how [`adaptive_default_theme`] decides between light and dark.
///
/// Useful in tests, or to pin a mode regardless of OS settings.
pub fn set_color_mode_detector(detector: ColorModeDetector) {
    debug!("color mode detector overridden");
    let mut guard = COLOR_MODE_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Runs the current color mode detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = COLOR_MODE_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_color_mode() -> ColorMode {
    match detect_os_mode() {
        OsMode::Dark => ColorMode::Dark,
        OsMode::Light => ColorMode::Light,
    }
}
