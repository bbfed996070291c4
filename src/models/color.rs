//! RGBA color used by the note color settings.

use crate::codec::CodecError;

/// RGBA color, channels in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);

    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Convert from hex u32 (0xRRGGBB)
    pub fn from_hex(hex: u32) -> Self {
        Self::from_rgb8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Parses `#RGB`, `#RRGGBB` or `#RRGGBBAA`. The `#` is optional and
    /// digits are case-insensitive. Alpha is opaque unless given.
    pub fn parse_hex(text: &str) -> Result<Self, CodecError> {
        let invalid = || CodecError::InvalidColor(text.to_owned());
        let digits = text.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        let nibble = |i: usize| {
            u8::from_str_radix(&digits[i..i + 1], 16)
                .map(|n| n * 17)
                .map_err(|_| invalid())
        };

        match digits.len() {
            3 => Ok(Self::from_rgb8(nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Ok(Self::from_rgb8(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(invalid()),
        }
    }

    /// `#RRGGBB`, uppercase. Alpha is dropped.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b)
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

fn channel_to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
