//! Raw design tokens authored by theme writers.

use serde::{Deserialize, Serialize};

use crate::color::{swatch, Color};

/// Spacing tokens, in pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Spacing {
    pub icon_size: u32,
    pub desktop_gutter: u32,
    pub desktop_gutter_more: u32,
    pub desktop_gutter_less: u32,
    pub desktop_gutter_mini: u32,
    pub desktop_keyline_increment: u32,
    pub desktop_drop_down_menu_item_height: u32,
    pub desktop_drop_down_menu_font_size: u32,
    pub desktop_left_nav_menu_item_height: u32,
    pub desktop_subheader_height: u32,
    pub desktop_toolbar_height: u32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            icon_size: 24,
            desktop_gutter: 24,
            desktop_gutter_more: 32,
            desktop_gutter_less: 16,
            desktop_gutter_mini: 8,
            desktop_keyline_increment: 64,
            desktop_drop_down_menu_item_height: 32,
            desktop_drop_down_menu_font_size: 15,
            desktop_left_nav_menu_item_height: 48,
            desktop_subheader_height: 48,
            desktop_toolbar_height: 56,
        }
    }
}

/// Palette tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Palette {
    pub primary1_color: Color,
    pub primary2_color: Color,
    pub primary3_color: Color,
    pub accent1_color: Color,
    pub accent2_color: Color,
    pub accent3_color: Color,
    pub text_color: Color,
    pub alternate_text_color: Color,
    pub canvas_color: Color,
    pub border_color: Color,
    pub disabled_color: Color,
    pub picker_header_color: Color,
    pub clock_circle_color: Color,
    pub shadow_color: Color,
}

impl Palette {
    /// Palette of the light raw theme.
    pub fn light() -> Self {
        Self {
            primary1_color: swatch::CYAN_500,
            primary2_color: swatch::CYAN_700,
            primary3_color: swatch::LIGHT_BLACK,
            accent1_color: swatch::PINK_A200,
            accent2_color: swatch::GREY_100,
            accent3_color: swatch::GREY_500,
            text_color: swatch::DARK_BLACK,
            alternate_text_color: swatch::FULL_WHITE,
            canvas_color: swatch::FULL_WHITE,
            border_color: swatch::GREY_300,
            disabled_color: swatch::DARK_BLACK.fade(0.3),
            picker_header_color: swatch::CYAN_500,
            clock_circle_color: swatch::DARK_BLACK.fade(0.07),
            shadow_color: swatch::FULL_BLACK,
        }
    }

    /// Palette of the dark raw theme.
    pub fn dark() -> Self {
        Self {
            primary1_color: swatch::CYAN_700,
            primary2_color: swatch::CYAN_700,
            primary3_color: swatch::GREY_600,
            accent1_color: swatch::PINK_A200,
            accent2_color: swatch::PINK_A400,
            accent3_color: swatch::PINK_A100,
            text_color: swatch::FULL_WHITE,
            alternate_text_color: swatch::CHARCOAL,
            canvas_color: swatch::CHARCOAL,
            border_color: swatch::FULL_WHITE.fade(0.3),
            disabled_color: swatch::FULL_WHITE.fade(0.3),
            picker_header_color: swatch::FULL_WHITE.fade(0.12),
            clock_circle_color: swatch::FULL_WHITE.fade(0.12),
            shadow_color: swatch::FULL_BLACK,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

/// Author-supplied design tokens: spacing, font family and palette.
///
/// A raw theme is never mutated once handed to [`MuiTheme::resolve`]. The
/// theme manager methods on [`MuiTheme`] clone it and build a new theme.
///
/// Fields missing from a loaded file take the light theme's values:
///
/// ```rust
/// use themekit::{Color, RawTheme};
///
/// let raw = RawTheme::from_yaml("palette:\n  primary1Color: '#ff0000'\n").unwrap();
/// assert_eq!(raw.palette.primary1_color, Color::rgb(255, 0, 0));
/// assert_eq!(raw.spacing.desktop_gutter_less, 16);
/// ```
///
/// [`MuiTheme::resolve`]: crate::MuiTheme::resolve
/// [`MuiTheme`]: crate::MuiTheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawTheme {
    pub spacing: Spacing,
    pub font_family: String,
    pub palette: Palette,
}

impl RawTheme {
    /// The light raw theme, used as the process-wide default.
    pub fn light() -> Self {
        Self {
            spacing: Spacing::default(),
            font_family: "Roboto, sans-serif".to_string(),
            palette: Palette::light(),
        }
    }

    /// The dark raw theme.
    pub fn dark() -> Self {
        Self {
            palette: Palette::dark(),
            ..Self::light()
        }
    }
}

impl Default for RawTheme {
    fn default() -> Self {
        Self::light()
    }
}
