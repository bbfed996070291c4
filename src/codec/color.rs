//! Colors persist as `#RRGGBB` strings.
//!
//! A string that is not a valid hex color decodes to opaque white.

use crate::codec::{CodecError, describe};
use crate::models::color::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Parses a hex color, falling back to white (and logging) on failure.
pub fn decode_color_str(text: &str) -> Color {
    match Color::parse_hex(text) {
        Ok(color) => color,
        Err(e) => {
            log::error!("Incorrect color data: {}", e);
            Color::WHITE
        }
    }
}

/// Decodes a color from an arbitrary JSON value. Non-string values are
/// rejected; strings always produce a color.
pub fn try_decode_color(value: &Value) -> Result<Color, CodecError> {
    match value {
        Value::String(text) => Ok(decode_color_str(text)),
        other => Err(CodecError::UnexpectedValue {
            expected: "hex color string",
            found: describe(other),
        }),
    }
}

pub fn encode_color(color: &Color) -> String {
    color.to_hex()
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode_color(self))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let payload = Value::deserialize(deserializer)?;
        Ok(try_decode_color(&payload).unwrap_or_else(|e| {
            log::error!("Incorrect color data: {}", e);
            Color::WHITE
        }))
    }
}
