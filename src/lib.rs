//! Local player settings for the rhythm game client.
//!
//! [`PlayerSettings`] is the versioned record for one profile. It persists
//! as JSON through the field codecs in [`codec`], which recover from
//! corrupt data instead of failing the load. [`SettingsStore`] ties a
//! record to its file on disk.

pub mod codec;
pub mod models;
pub mod store;

#[cfg(test)]
mod test_support;

pub use models::{
    Color, GraphicsQuality, HoldHitSoundTiming, LevelSort, Mod, NoteType, NoteTypeMap, Platform,
    PlatformDefaults, PlayerSettings,
};
pub use store::{SettingsError, SettingsStore};
