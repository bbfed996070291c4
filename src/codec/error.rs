//! Decode failures raised by the per-field codecs.
//!
//! These never escape a settings load: every codec recovers locally,
//! logs the error and substitutes a safe default.

use crate::models::note_type::NoteType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("expected a JSON object keyed by note type value")]
    NotAnObject,

    #[error("missing entry for note type {note_type} (key \"{}\")", .note_type.key())]
    MissingKey { note_type: NoteType },

    #[error("invalid entry for note type {note_type}: {source}")]
    InvalidEntry {
        note_type: NoteType,
        source: Box<CodecError>,
    },

    #[error("expected {expected}, found {found}")]
    UnexpectedValue {
        expected: &'static str,
        found: String,
    },

    #[error("invalid hex color {0:?}")]
    InvalidColor(String),

    #[error("unknown {kind} value {value}")]
    UnknownDiscriminant { kind: &'static str, value: i32 },

    #[error("unknown {kind} name {name:?}")]
    UnknownName { kind: &'static str, name: String },
}
