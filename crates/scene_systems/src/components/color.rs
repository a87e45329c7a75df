//! Scene color state: background, alpha and tint

use thiserror::Error;

/// Invalid color input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid hex color: '{0}'")]
pub struct ColorParseError(pub String);

/// Background color, alpha and tint of a scene
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    /// Clear color as RGBA in `[0, 1]`
    pub background: [f32; 4],
    /// Tint multiplied into everything the scene draws (RGB)
    pub tint: [f32; 3],
    alpha: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self {
            background: [0.0, 0.0, 0.0, 0.0],
            tint: [1.0, 1.0, 1.0],
            alpha: 1.0,
        }
    }
}

impl Color {
    /// Transparent background, no tint, opaque
    pub fn new() -> Self {
        Self::default()
    }

    /// Scene alpha
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Set scene alpha, clamped to `[0, 1]`
    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    /// Set the background from RGBA components in `[0, 1]`
    pub fn set_background(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.background = [r, g, b, a].map(|c| c.clamp(0.0, 1.0));
    }

    /// Set an opaque background from `#rrggbb` (leading `#` optional)
    pub fn set_background_hex(&mut self, hex: &str) -> Result<(), ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| f32::from(v) / 255.0)
                .map_err(|_| ColorParseError(hex.to_string()))
        };

        self.background = [channel(0..2)?, channel(2..4)?, channel(4..6)?, 1.0];
        Ok(())
    }
}
