//! Lenient decoding for integer-persisted enum fields.
//!
//! An unknown integer (e.g. a member added by a newer client) resets the
//! field to its default instead of failing the whole document. In lists
//! the unknown members are dropped.

use crate::codec::{CodecError, describe};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt::Display;

/// Strict decode of one member from a JSON value.
pub fn try_decode<E>(value: &Value) -> Result<E, CodecError>
where
    E: TryFrom<i32, Error = CodecError>,
{
    let number = value
        .as_i64()
        .and_then(|v| i32::try_from(v).ok())
        .ok_or_else(|| CodecError::UnexpectedValue {
            expected: "integer",
            found: describe(value),
        })?;
    E::try_from(number)
}

/// `deserialize_with` for a single enum field. Falls back to
/// `E::default()` and logs on an unknown or malformed value.
pub fn deserialize<'de, D, E>(deserializer: D) -> Result<E, D::Error>
where
    D: Deserializer<'de>,
    E: TryFrom<i32, Error = CodecError> + Default + Display,
{
    let payload = Value::deserialize(deserializer)?;
    Ok(try_decode(&payload).unwrap_or_else(|e| {
        let fallback = E::default();
        log::error!("Incorrect data: {} ({}), using {}", payload, e, fallback);
        fallback
    }))
}

/// `deserialize_with` for a list of enum members. Unknown members are
/// dropped; a payload that is not an array yields an empty list.
pub fn deserialize_vec<'de, D, E>(deserializer: D) -> Result<Vec<E>, D::Error>
where
    D: Deserializer<'de>,
    E: TryFrom<i32, Error = CodecError>,
{
    let payload = Value::deserialize(deserializer)?;
    let Value::Array(items) = &payload else {
        log::error!("Incorrect data: expected array, found {}", describe(&payload));
        return Ok(Vec::new());
    };

    Ok(items
        .iter()
        .filter_map(|item| match try_decode(item) {
            Ok(member) => Some(member),
            Err(e) => {
                log::error!("Dropping list entry {}: {}", item, e);
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mods::Mod;
    use crate::models::settings::{HoldHitSoundTiming, LevelSort};
    use crate::test_support::capture_errors;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(deserialize_with = "crate::codec::int_enum::deserialize")]
        sort: LevelSort,
        #[serde(deserialize_with = "crate::codec::int_enum::deserialize_vec")]
        mods: Vec<Mod>,
    }

    #[test]
    fn test_known_values_decode() {
        let row: Row = serde_json::from_str(r#"{"sort": 0, "mods": [4, 8]}"#).unwrap();
        assert_eq!(row.sort, LevelSort::Title);
        assert_eq!(row.mods, vec![Mod::Hard, Mod::FlipX]);
    }

    #[test]
    fn test_unknown_value_falls_back_to_default() {
        let (row, errors) =
            capture_errors(|| serde_json::from_str::<Row>(r#"{"sort": 7, "mods": []}"#).unwrap());
        assert_eq!(row.sort, LevelSort::default());
        assert_eq!(errors.len(), 1);

        let row: Row = serde_json::from_str(r#"{"sort": "title", "mods": []}"#).unwrap();
        assert_eq!(row.sort, LevelSort::AddedDate);
    }

    #[test]
    fn test_unknown_list_members_are_dropped() {
        let (row, errors) = capture_errors(|| {
            serde_json::from_str::<Row>(r#"{"sort": 2, "mods": [0, 99, "x", 14]}"#).unwrap()
        });
        assert_eq!(row.mods, vec![Mod::Fast, Mod::AutoFlick]);
        assert_eq!(errors.len(), 2);

        let row: Row = serde_json::from_str(r#"{"sort": 2, "mods": 3}"#).unwrap();
        assert!(row.mods.is_empty());
    }

    #[test]
    fn test_strict_decode() {
        assert_eq!(
            try_decode::<HoldHitSoundTiming>(&json!(1)).unwrap(),
            HoldHitSoundTiming::End
        );
        assert!(try_decode::<HoldHitSoundTiming>(&json!(3)).is_err());
        assert!(try_decode::<HoldHitSoundTiming>(&json!(1.5)).is_err());
    }
}
