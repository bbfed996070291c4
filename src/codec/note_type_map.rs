//! Codec for [`NoteTypeMap`] fields.
//!
//! On the wire a map is a JSON object keyed by the stringified integer
//! value of each note type, in canonical order. Each entry carries the
//! element's scalar encoding as a string:
//!
//! ```json
//! {"0": "2", "1": "2", "2": "2", "3": "2", "4": "2", "5": "1"}
//! ```
//!
//! Decoding is all-or-nothing. A missing key, a payload that is not an
//! object, or an entry that cannot be decoded yields an empty map and
//! an error log; keys that did parse are discarded too. Extra keys are
//! ignored.

use crate::codec::color::{encode_color, try_decode_color};
use crate::codec::{CodecError, describe};
use crate::models::color::Color;
use crate::models::note_type::NoteTypeMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::{Map, Value};

/// Element type storable in a persisted [`NoteTypeMap`].
pub trait NoteValue: Sized {
    /// Scalar encoding carried as the entry's string value.
    fn encode_value(&self) -> String;

    fn decode_value(value: &Value) -> Result<Self, CodecError>;
}

impl NoteValue for i32 {
    fn encode_value(&self) -> String {
        self.to_string()
    }

    fn decode_value(value: &Value) -> Result<Self, CodecError> {
        let parsed = match value {
            Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
            Value::String(s) => s.trim().parse::<i32>().ok(),
            _ => None,
        };
        parsed.ok_or_else(|| CodecError::UnexpectedValue {
            expected: "integer",
            found: describe(value),
        })
    }
}

impl NoteValue for Color {
    fn encode_value(&self) -> String {
        encode_color(self)
    }

    /// Accepts `"#RRGGBB"` as well as the JSON-quoted `"\"#RRGGBB\""`
    /// form written by older clients.
    fn decode_value(value: &Value) -> Result<Self, CodecError> {
        if let Value::String(s) = value {
            if s.trim_start().starts_with('"') {
                let inner: Value =
                    serde_json::from_str(s).map_err(|_| CodecError::UnexpectedValue {
                        expected: "hex color string",
                        found: describe(value),
                    })?;
                return try_decode_color(&inner);
            }
        }
        try_decode_color(value)
    }
}

pub fn serialize<S, T>(map: &NoteTypeMap<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: NoteValue,
{
    let mut out = serializer.serialize_map(Some(map.len()))?;
    for (note_type, value) in map.iter() {
        out.serialize_entry(&note_type.key(), &value.encode_value())?;
    }
    out.end()
}

pub fn deserialize<'de, D, T>(deserializer: D) -> Result<NoteTypeMap<T>, D::Error>
where
    D: Deserializer<'de>,
    T: NoteValue,
{
    let payload = Value::deserialize(deserializer)?;
    Ok(decode(&payload))
}

/// Lenient decode: any failure is logged and yields an empty map.
pub fn decode<T: NoteValue>(payload: &Value) -> NoteTypeMap<T> {
    match try_decode(payload) {
        Ok(map) => map,
        Err(e) => {
            log::error!("Incorrect data: {} ({})", payload, e);
            NoteTypeMap::empty()
        }
    }
}

/// Strict decode. Also accepts a string holding the JSON object.
pub fn try_decode<T: NoteValue>(payload: &Value) -> Result<NoteTypeMap<T>, CodecError> {
    let reparsed;
    let object: &Map<String, Value> = match payload {
        Value::Object(object) => object,
        Value::String(text) => {
            reparsed = serde_json::from_str::<Value>(text).map_err(|_| CodecError::NotAnObject)?;
            reparsed.as_object().ok_or(CodecError::NotAnObject)?
        }
        _ => return Err(CodecError::NotAnObject),
    };

    NoteTypeMap::try_from_fn(|note_type| {
        let raw = object
            .get(&note_type.key())
            .ok_or(CodecError::MissingKey { note_type })?;
        T::decode_value(raw).map_err(|e| CodecError::InvalidEntry {
            note_type,
            source: Box::new(e),
        })
    })
}
