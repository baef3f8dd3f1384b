//! Resolved themes consumed by widgets.

use std::sync::Arc;

use crate::color::{swatch, Color};

use super::raw::{Palette, RawTheme, Spacing};

/// Style roles of the text field family.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFieldTheme {
    pub text_color: Color,
    pub hint_color: Color,
    pub floating_label_color: Color,
    pub disabled_text_color: Color,
    pub error_color: Color,
    pub focus_color: Color,
    pub background_color: Color,
    pub border_color: Color,
}

/// Style roles of the date picker family.
#[derive(Debug, Clone, PartialEq)]
pub struct DatePickerTheme {
    pub color: Color,
    pub text_color: Color,
    pub calendar_text_color: Color,
    pub select_color: Color,
    pub select_text_color: Color,
}

/// Style roles of flat buttons.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatButtonTheme {
    pub color: Color,
    pub text_color: Color,
    pub primary_text_color: Color,
    pub secondary_text_color: Color,
}

/// A theme expanded from a [`RawTheme`] into per-component style roles.
///
/// Themes are immutable snapshots shared through `Arc`. Changing anything
/// produces a new theme:
///
/// ```rust
/// use themekit::{MuiTheme, RawTheme};
///
/// let base = MuiTheme::resolve(RawTheme::light());
/// let rtl = base.with_rtl(true);
/// assert!(!base.is_rtl);
/// assert!(rtl.is_rtl);
/// assert_eq!(base.text_field, rtl.text_field);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MuiTheme {
    pub raw_theme: Arc<RawTheme>,
    pub is_rtl: bool,
    pub text_field: TextFieldTheme,
    pub date_picker: DatePickerTheme,
    pub flat_button: FlatButtonTheme,
    is_static: bool,
}

impl MuiTheme {
    /// Expands raw tokens into component style roles.
    ///
    /// Pure and deterministic. The result does not carry the static marker.
    pub fn resolve(raw: impl Into<Arc<RawTheme>>) -> Self {
        let raw = raw.into();
        let palette = &raw.palette;

        let text_field = TextFieldTheme {
            text_color: palette.text_color,
            hint_color: palette.disabled_color,
            floating_label_color: palette.text_color,
            disabled_text_color: palette.disabled_color,
            error_color: swatch::RED_500,
            focus_color: palette.primary1_color,
            background_color: Color::TRANSPARENT,
            border_color: palette.border_color,
        };
        let date_picker = DatePickerTheme {
            color: palette.primary1_color,
            text_color: palette.alternate_text_color,
            calendar_text_color: palette.text_color,
            select_color: palette.primary2_color,
            select_text_color: palette.alternate_text_color,
        };
        let flat_button = FlatButtonTheme {
            color: Color::TRANSPARENT,
            text_color: palette.text_color,
            primary_text_color: palette.accent1_color,
            secondary_text_color: palette.primary1_color,
        };

        Self {
            raw_theme: raw,
            is_rtl: false,
            text_field,
            date_picker,
            flat_button,
            is_static: false,
        }
    }

    /// Marks this theme as a process-wide default that never changes.
    ///
    /// Update gates skip relevance checks entirely for static themes.
    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Whether this theme carries the static-default marker.
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Returns a copy with the right-to-left flag set.
    pub fn with_rtl(&self, is_rtl: bool) -> Self {
        Self {
            is_rtl,
            is_static: false,
            ..self.clone()
        }
    }

    /// Rebuilds the theme from a different raw theme, keeping the RTL flag.
    pub fn modify_raw_theme(&self, raw: RawTheme) -> Self {
        Self {
            is_rtl: self.is_rtl,
            ..Self::resolve(raw)
        }
    }

    /// Rebuilds the theme after editing a copy of the raw palette.
    pub fn modify_raw_theme_palette(&self, edit: impl FnOnce(&mut Palette)) -> Self {
        let mut raw = RawTheme::clone(&self.raw_theme);
        edit(&mut raw.palette);
        self.modify_raw_theme(raw)
    }

    /// Rebuilds the theme after editing a copy of the raw spacing.
    pub fn modify_raw_theme_spacing(&self, edit: impl FnOnce(&mut Spacing)) -> Self {
        let mut raw = RawTheme::clone(&self.raw_theme);
        edit(&mut raw.spacing);
        self.modify_raw_theme(raw)
    }

    /// Rebuilds the theme with a different font family.
    pub fn modify_raw_theme_font_family(&self, font_family: impl Into<String>) -> Self {
        let raw = RawTheme {
            font_family: font_family.into(),
            ..RawTheme::clone(&self.raw_theme)
        };
        self.modify_raw_theme(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_maps_palette_roles() {
        let theme = MuiTheme::resolve(RawTheme::light());
        let palette = &theme.raw_theme.palette;
        assert_eq!(theme.text_field.focus_color, palette.primary1_color);
        assert_eq!(theme.text_field.hint_color, palette.disabled_color);
        assert_eq!(theme.date_picker.select_color, palette.primary2_color);
        assert_eq!(theme.flat_button.primary_text_color, palette.accent1_color);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        assert_eq!(
            MuiTheme::resolve(RawTheme::dark()),
            MuiTheme::resolve(RawTheme::dark())
        );
    }

    #[test]
    fn test_resolved_theme_is_not_static() {
        let theme = MuiTheme::resolve(RawTheme::light());
        assert!(!theme.is_static());
        assert!(theme.into_static().is_static());
    }

    #[test]
    fn test_modifications_drop_static_marker() {
        let frozen = MuiTheme::resolve(RawTheme::light()).into_static();
        assert!(!frozen.with_rtl(true).is_static());
        assert!(!frozen.modify_raw_theme_font_family("Inter").is_static());
    }

    #[test]
    fn test_modify_palette_leaves_original_untouched() {
        let base = MuiTheme::resolve(RawTheme::light());
        let red = base.modify_raw_theme_palette(|p| p.primary1_color = swatch::RED_500);
        assert_eq!(red.text_field.focus_color, swatch::RED_500);
        assert_eq!(base.text_field.focus_color, swatch::CYAN_500);
    }

    #[test]
    fn test_modify_keeps_rtl() {
        let rtl = MuiTheme::resolve(RawTheme::light()).with_rtl(true);
        let wider = rtl.modify_raw_theme_spacing(|s| s.desktop_gutter_less = 20);
        assert!(wider.is_rtl);
        assert_eq!(wider.raw_theme.spacing.desktop_gutter_less, 20);
    }

    #[test]
    fn test_modify_font_family() {
        let base = MuiTheme::resolve(RawTheme::light());
        let inter = base.modify_raw_theme_font_family("Inter");
        assert_eq!(inter.raw_theme.font_family, "Inter");
        assert_eq!(inter.text_field, base.text_field);
    }
}
