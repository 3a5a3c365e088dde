//! Style resolution for sections.
//!
//! Every visual attribute of a rendered section comes from one of four
//! places, in order: the section's explicit override, a direction-aware
//! default, a theme-aware default, and finally a fixed fallback.
//! Direction and theme are passed in explicitly through [`StyleContext`]
//! so resolution stays a pure function of its inputs.

mod resolved;

pub use resolved::{
    ResolvedImage, ResolvedSection, ResolvedTypography, resolve_image, resolve_section,
    resolve_text, resolve_title,
};

use crate::section::TextAlign;

/// Fallback font family for titles and text.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";
/// Title font size in pixels.
pub const DEFAULT_TITLE_FONT_SIZE: f64 = 20.0;
/// Body text font size in pixels.
pub const DEFAULT_TEXT_FONT_SIZE: f64 = 14.0;
/// Image width and height when not overridden.
pub const DEFAULT_IMAGE_SIZE: f64 = 220.0;
/// Border radius that makes a square image render as a circle.
pub const CIRCLE_BORDER_RADIUS: f64 = 999.0;

/// Layout direction of the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub const fn from_rtl(rtl: bool) -> Self {
        if rtl { Self::Rtl } else { Self::Ltr }
    }

    /// Value for the `dir` attribute of the document root.
    pub const fn as_html(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    /// Text alignment used when a title or text has no explicit alignment.
    pub const fn default_text_align(self) -> TextAlign {
        match self {
            Self::Ltr => TextAlign::Left,
            Self::Rtl => TextAlign::Right,
        }
    }
}

/// Color scheme reported by the platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// Theme actually applied to the generated document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Dark styling applies only when dark mode is enabled and the platform
    /// is in its dark scheme.
    pub const fn from_signals(dark_mode_enabled: bool, scheme: ColorScheme) -> Self {
        match (dark_mode_enabled, scheme) {
            (true, ColorScheme::Dark) => Self::Dark,
            _ => Self::Light,
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Default foreground color for titles and text.
    pub const fn foreground(self) -> &'static str {
        match self {
            Self::Light => "#000",
            Self::Dark => "#fff",
        }
    }
}

/// Inputs the resolver needs besides the section itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleContext {
    pub direction: Direction,
    pub theme: Theme,
}

impl StyleContext {
    pub const fn new(direction: Direction, theme: Theme) -> Self {
        Self { direction, theme }
    }
}

/// Format a length in CSS pixels.
pub fn px(value: f64) -> String {
    format!("{value}px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_needs_both_signals() {
        assert_eq!(Theme::from_signals(true, ColorScheme::Dark), Theme::Dark);
        assert_eq!(Theme::from_signals(false, ColorScheme::Dark), Theme::Light);
        assert_eq!(Theme::from_signals(true, ColorScheme::Light), Theme::Light);
        assert_eq!(Theme::from_signals(false, ColorScheme::Light), Theme::Light);
    }

    #[test]
    fn test_direction_defaults() {
        assert_eq!(Direction::from_rtl(true).as_html(), "rtl");
        assert_eq!(Direction::Ltr.default_text_align(), TextAlign::Left);
        assert_eq!(Direction::Rtl.default_text_align(), TextAlign::Right);
    }

    #[test]
    fn test_px_formats_whole_and_fractional() {
        assert_eq!(px(14.0), "14px");
        assert_eq!(px(12.5), "12.5px");
        assert_eq!(px(0.0), "0px");
    }
}
