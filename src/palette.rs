//! Color palette
//!
//! Colors are stored as RGBA and converted to CSS strings at draw time.

use serde::{Deserialize, Serialize};

/// An RGBA color. Alpha is 0.0 (transparent) to 1.0 (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    /// Opaque color from a `0xRRGGBB` literal
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
            a: 1.0,
        }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string: `#rrggbb` when opaque, `rgba(...)` otherwise
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Brick colors, top row first
pub const BRICK_ROW_COLORS: [Color; 5] = [
    Color::hex(0xFF5252), // Red
    Color::hex(0xFF9800), // Orange
    Color::hex(0xFFEB3B), // Yellow
    Color::hex(0x66BB6A), // Green
    Color::hex(0x42A5F5), // Blue
];

/// Used for any row past the palette
pub const BRICK_FALLBACK: Color = Color::hex(0x9C27B0);

pub const BRICK_OUTLINE: Color = Color::hex(0x222222);
pub const PADDLE: Color = Color::hex(0x4361EE);
pub const BALL: Color = Color::hex(0xFFFFFF);
pub const TEXT: Color = Color::hex(0xFFFFFF);
pub const WELCOME_BACKGROUND: Color = Color::hex(0x222222);
pub const PAUSE_SHADE: Color = Color::rgba(0, 0, 0, 0.5);
pub const GAME_OVER_TEXT: Color = Color::hex(0xFF5252);
pub const WIN_TEXT: Color = Color::hex(0x4CAF50);

/// Color for a brick in the given row
pub fn brick_color(row: usize) -> Color {
    BRICK_ROW_COLORS.get(row).copied().unwrap_or(BRICK_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_strings() {
        assert_eq!(Color::hex(0xFF5252).to_css(), "#ff5252");
        assert_eq!(PAUSE_SHADE.to_css(), "rgba(0, 0, 0, 0.5)");
    }

    #[test]
    fn test_row_colors() {
        assert_eq!(brick_color(0), Color::hex(0xFF5252));
        assert_eq!(brick_color(4), Color::hex(0x42A5F5));
        assert_eq!(brick_color(5), BRICK_FALLBACK);
        assert_eq!(brick_color(99), BRICK_FALLBACK);
    }
}
