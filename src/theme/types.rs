//! Theme value types.

use ratatui::style::Color;

/// Application palette used by rendering code.
///
/// All colors are [`ratatui::style::Color`] values, grouped into canvas
/// backgrounds, text tiers, and semantic accents for the status tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Primary background for the canvas.
    pub base: Color,
    /// Background for panels and the form modal.
    pub panel: Color,
    /// Border lines.
    pub border: Color,
    /// Primary foreground text.
    pub text: Color,
    /// Secondary, low-emphasis text.
    pub muted: Color,
    /// Selection and interactive highlight accent.
    pub accent: Color,
    /// Healthy/normal state.
    pub ok: Color,
    /// Attention state (expiring soon, low stock).
    pub warn: Color,
    /// Danger state (expired, critical stock).
    pub danger: Color,
    /// Safety badge color (CCP / high-risk rows).
    pub badge: Color,
}

/// Light or dark palette preference.
///
/// Persisted as a string in the theme conf file; anything unrecognized
/// degrades to light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light palette (the default).
    #[default]
    Light,
    /// Dark palette.
    Dark,
}

impl ThemeMode {
    /// Return the string key used in the conf file for this mode.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a mode from its conf key (case-insensitive).
    ///
    /// Output: `Some(mode)` on a recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Flip between light and dark.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}
