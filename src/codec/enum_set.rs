//! Sets of enum members persisted as one comma-joined string of
//! symbolic names, e.g. `"Click,Flick"`.
//!
//! A single unknown token discards the whole set.

use crate::codec::describe;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;
use std::collections::BTreeSet;

/// Enum with stable symbolic member names.
pub trait SymbolicEnum: Copy + Ord {
    /// Type name used in error messages.
    const KIND: &'static str;

    fn name(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self>;
}

/// Joins member names with `,` in declaration order.
pub fn encode_enum_set<E: SymbolicEnum>(set: &BTreeSet<E>) -> String {
    set.iter()
        .map(|member| member.name())
        .collect::<Vec<_>>()
        .join(",")
}

/// Splits on `,` and parses every token. Any unknown token yields an
/// empty set and an error log. The empty string is the empty set.
pub fn decode_enum_set<E: SymbolicEnum>(data: &str) -> BTreeSet<E> {
    if data.is_empty() {
        return BTreeSet::new();
    }
    match data
        .split(',')
        .map(E::from_name)
        .collect::<Option<BTreeSet<E>>>()
    {
        Some(set) => set,
        None => {
            log::error!("Incorrect data for {} set: {:?}", E::KIND, data);
            BTreeSet::new()
        }
    }
}

pub fn serialize<S, E>(set: &BTreeSet<E>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    E: SymbolicEnum,
{
    serializer.serialize_str(&encode_enum_set(set))
}

pub fn deserialize<'de, D, E>(deserializer: D) -> Result<BTreeSet<E>, D::Error>
where
    D: Deserializer<'de>,
    E: SymbolicEnum,
{
    match Value::deserialize(deserializer)? {
        Value::String(data) => Ok(decode_enum_set(&data)),
        other => {
            log::error!(
                "Incorrect data for {} set: expected string, found {}",
                E::KIND,
                describe(&other)
            );
            Ok(BTreeSet::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mods::Mod;
    use crate::models::note_type::NoteType;
    use crate::test_support::capture_errors;
    use serde::Serialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Filter {
        #[serde(with = "crate::codec::enum_set")]
        note_types: BTreeSet<NoteType>,
    }

    #[test]
    fn test_encode_in_declaration_order() {
        let set = BTreeSet::from([NoteType::Flick, NoteType::Click]);
        assert_eq!(encode_enum_set(&set), "Click,Flick");
        assert_eq!(encode_enum_set::<NoteType>(&BTreeSet::new()), "");
    }

    #[test]
    fn test_decode() {
        let set: BTreeSet<NoteType> = decode_enum_set("Click,Flick");
        assert_eq!(set, BTreeSet::from([NoteType::Click, NoteType::Flick]));

        let mods: BTreeSet<Mod> = decode_enum_set("FlipX,Hard,FlipX");
        assert_eq!(mods, BTreeSet::from([Mod::Hard, Mod::FlipX]));
    }

    #[test]
    fn test_single_bad_token_discards_set() {
        let (set, errors) = capture_errors(|| decode_enum_set::<NoteType>("Click,Bogus"));
        assert!(set.is_empty());
        assert_eq!(errors.len(), 1);

        let set: BTreeSet<NoteType> = decode_enum_set("Click,");
        assert!(set.is_empty());

        let set: BTreeSet<NoteType> = decode_enum_set("Click, Flick");
        assert!(set.is_empty());
    }

    #[test]
    fn test_empty_string_is_empty_set() {
        let (set, errors) = capture_errors(|| decode_enum_set::<Mod>(""));
        assert!(set.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_serde_field() {
        let filter = Filter {
            note_types: BTreeSet::from([NoteType::Hold, NoteType::DragHead]),
        };
        let json = serde_json::to_string(&filter).unwrap();
        assert_eq!(json, r#"{"note_types":"DragHead,Hold"}"#);
        assert_eq!(serde_json::from_str::<Filter>(&json).unwrap(), filter);

        let broken: Filter = serde_json::from_str(r#"{"note_types":"Hold,Nope"}"#).unwrap();
        assert!(broken.note_types.is_empty());

        let wrong_shape: Filter = serde_json::from_str(r#"{"note_types":[0,1]}"#).unwrap();
        assert!(wrong_shape.note_types.is_empty());
    }
}
