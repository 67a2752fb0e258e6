// Theme configuration
// Two built-in variants; the UI layer maps these to its own color type

use serde::Deserialize;

use crate::Color;

/// Which built-in theme to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

/// Semantic colors for the grid screen. `warning_bg` is shared by
/// selected rows and rows with a rejected min entry.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub title_bg: Color,
    pub title_fg: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub warning_bg: Color,
    pub warning_fg: Color,
    pub cursor_bg: Color,
    pub cursor_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub text: Color,
    pub text_dim: Color,
}

impl Theme {
    /// Built-in dark theme
    pub const fn dark() -> Self {
        Theme {
            title_bg: Color::from_hex(0x0891b2),
            title_fg: Color::from_hex(0x020617),
            header_bg: Color::from_hex(0x1e293b),
            header_fg: Color::from_hex(0x7dd3fc),
            warning_bg: Color::from_hex(0x7f1d1d),
            warning_fg: Color::from_hex(0xfecaca),
            cursor_bg: Color::from_hex(0xf1f5f9),
            cursor_fg: Color::from_hex(0x020617),
            status_bg: Color::from_hex(0x334155),
            status_fg: Color::from_hex(0xf1f5f9),
            text: Color::from_hex(0xe2e8f0),
            text_dim: Color::from_hex(0x64748b),
        }
    }

    /// Built-in light theme
    pub const fn light() -> Self {
        Theme {
            title_bg: Color::from_hex(0x06b6d4),
            title_fg: Color::from_hex(0x020617),
            header_bg: Color::from_hex(0xe2e8f0),
            header_fg: Color::from_hex(0x0c4a6e),
            warning_bg: Color::from_hex(0xfecaca),
            warning_fg: Color::from_hex(0x7f1d1d),
            cursor_bg: Color::from_hex(0x0f172a),
            cursor_fg: Color::from_hex(0xf8fafc),
            status_bg: Color::from_hex(0xcbd5e1),
            status_fg: Color::from_hex(0x0f172a),
            text: Color::from_hex(0x1e293b),
            text_dim: Color::from_hex(0x64748b),
        }
    }

    pub fn from_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }
}
