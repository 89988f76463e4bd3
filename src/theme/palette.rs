//! The two built-in palettes.

use ratatui::style::Color;

use super::types::{Theme, ThemeMode};

/// Construct a [`Color::Rgb`] from an 8-bit RGB triplet.
const fn hex(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Dark palette.
const fn dark() -> Theme {
    Theme {
        base: hex((0x1e, 0x1e, 0x2e)),
        panel: hex((0x18, 0x18, 0x25)),
        border: hex((0x45, 0x47, 0x5a)),
        text: hex((0xcd, 0xd6, 0xf4)),
        muted: hex((0xa6, 0xad, 0xc8)),
        accent: hex((0x74, 0xc7, 0xec)),
        ok: hex((0xa6, 0xe3, 0xa1)),
        warn: hex((0xf9, 0xe2, 0xaf)),
        danger: hex((0xf3, 0x8b, 0xa8)),
        badge: hex((0xcb, 0xa6, 0xf7)),
    }
}

/// Light palette (the default).
const fn light() -> Theme {
    Theme {
        base: hex((0xef, 0xf1, 0xf5)),
        panel: hex((0xe6, 0xe9, 0xef)),
        border: hex((0xac, 0xb0, 0xbe)),
        text: hex((0x4c, 0x4f, 0x69)),
        muted: hex((0x6c, 0x6f, 0x85)),
        accent: hex((0x20, 0x9f, 0xb5)),
        ok: hex((0x40, 0xa0, 0x2b)),
        warn: hex((0xdf, 0x8e, 0x1d)),
        danger: hex((0xd2, 0x0f, 0x39)),
        badge: hex((0x88, 0x39, 0xef)),
    }
}

/// Return the palette for `mode`.
#[must_use]
pub const fn palette(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => dark(),
        ThemeMode::Light => light(),
    }
}

#[cfg(test)]
mod tests {
    use super::palette;
    use crate::theme::ThemeMode;

    #[test]
    /// What: The two palettes are distinct and stable per mode
    ///
    /// - Input: Both theme modes
    /// - Output: Different base colors; same mode always yields same palette
    fn palettes_are_distinct_and_stable() {
        let dark = palette(ThemeMode::Dark);
        let light = palette(ThemeMode::Light);
        assert_ne!(dark.base, light.base);
        assert_eq!(palette(ThemeMode::Dark), dark);
    }
}
