//! Field codecs for the persisted settings document.
//!
//! Each codec is a serde `with` module wired explicitly onto the fields
//! that need it. Decoding never fails a load: a malformed payload is
//! logged and replaced by a safe default so the rest of the record
//! still loads.

pub mod color;
pub mod enum_set;
pub mod error;
pub mod int_enum;
pub mod note_type_map;

pub use enum_set::{SymbolicEnum, decode_enum_set, encode_enum_set};
pub use error::CodecError;
pub use note_type_map::NoteValue;

use serde_json::Value;

/// Short description of a JSON value for error messages.
pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "array".to_owned(),
        Value::Object(_) => "object".to_owned(),
    }
}
