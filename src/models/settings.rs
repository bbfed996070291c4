//! The local player settings record.
//!
//! One instance per local profile, persisted as a JSON object whose keys
//! are the field names below. Fields absent from a stored document keep
//! their defaults.

use crate::codec::{int_enum, note_type_map};
use crate::models::color::Color;
use crate::models::mods::Mod;
use crate::models::note_type::{NoteType, NoteTypeMap};
use crate::models::platform::{Platform, PlatformDefaults};
use crate::store::SettingsError;
use serde::{Deserialize, Serialize};

int_enum! {
    pub enum GraphicsQuality {
        Low = 0,
        Medium = 1,
        High = 2,
    }
}

int_enum! {
    /// When the hit sound plays for hold notes.
    pub enum HoldHitSoundTiming {
        Begin = 0,
        End = 1,
        Both = 2,
    }
}

int_enum! {
    /// Sort order of the local level list.
    pub enum LevelSort {
        Title = 0,
        Difficulty = 1,
        AddedDate = 2,
        PlayedDate = 3,
        PlayCount = 4,
    }
}

impl Default for GraphicsQuality {
    fn default() -> Self {
        PlatformDefaults::current().graphics_quality
    }
}

impl Default for HoldHitSoundTiming {
    fn default() -> Self {
        HoldHitSoundTiming::Both
    }
}

impl Default for LevelSort {
    fn default() -> Self {
        LevelSort::AddedDate
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Opaque, owned by the migration logic.
    pub schema_version: i32,

    pub language: i32,
    pub play_ranked: bool,
    #[serde(deserialize_with = "int_enum::deserialize_vec")]
    pub enabled_mods: Vec<Mod>,
    pub display_boundaries: bool,
    pub display_early_late_indicators: bool,

    // Per note type
    #[serde(with = "note_type_map")]
    pub hitbox_sizes: NoteTypeMap<i32>,
    #[serde(with = "note_type_map")]
    pub note_ring_colors: NoteTypeMap<Color>,
    #[serde(with = "note_type_map")]
    pub note_fill_colors: NoteTypeMap<Color>,
    #[serde(with = "note_type_map")]
    pub note_fill_colors_alt: NoteTypeMap<Color>,

    #[serde(deserialize_with = "int_enum::deserialize")]
    pub hold_hit_sound_timing: HoldHitSoundTiming,

    pub note_size: f32, // -0.5 to 0.5
    pub horizontal_margin: i32, // 1 to 5
    pub vertical_margin: i32, // 1 to 5
    pub cover_opacity: f32, // 0.0 to 1.0
    pub music_volume: f32, // 0.0 to 1.0
    pub sound_effects_volume: f32, // 0.0 to 1.0
    pub hit_sound: String,
    pub hit_taptic_feedback: bool,
    pub display_storyboard_effects: bool,
    #[serde(deserialize_with = "int_enum::deserialize")]
    pub graphics_quality: GraphicsQuality,
    /// Seconds.
    pub base_note_offset: f32,
    /// Seconds, added on top of the base offset while headphones are in.
    pub headset_note_offset: f32,
    pub clear_effects_size: f32, // -0.5 to 0.5
    pub display_profiler: bool,
    pub display_note_ids: bool,
    #[serde(deserialize_with = "int_enum::deserialize")]
    pub local_level_sort: LevelSort,
    /// -1 lets the audio backend pick.
    pub android_dsp_buffer_size: i32,
    pub local_level_sort_is_ascending: bool,
}

impl PlayerSettings {
    /// Defaults for the given platform.
    pub fn for_platform(platform: Platform) -> Self {
        let platform_defaults = PlatformDefaults::for_platform(platform);

        Self {
            schema_version: 0,
            language: 0,
            play_ranked: true,
            enabled_mods: Vec::new(),
            display_boundaries: false,
            display_early_late_indicators: true,
            hitbox_sizes: NoteTypeMap::from_fn(|note_type| match note_type {
                NoteType::Flick => 1,
                _ => 2,
            }),
            note_ring_colors: NoteTypeMap::filled(Color::from_hex(0xFFFFFF)),
            note_fill_colors: NoteTypeMap::from_fn(|note_type| match note_type {
                NoteType::Click | NoteType::Hold | NoteType::Flick => Color::from_hex(0x35A7FF),
                NoteType::DragHead | NoteType::DragChild => Color::from_hex(0x39E59E),
                NoteType::LongHold => Color::from_hex(0xF2C85A),
            }),
            note_fill_colors_alt: NoteTypeMap::from_fn(|note_type| match note_type {
                NoteType::Click | NoteType::Hold | NoteType::Flick => Color::from_hex(0xFF5964),
                NoteType::DragHead | NoteType::DragChild => Color::from_hex(0x39E59E),
                NoteType::LongHold => Color::from_hex(0xF2C85A),
            }),
            hold_hit_sound_timing: HoldHitSoundTiming::Both,
            note_size: 0.0,
            horizontal_margin: 3,
            vertical_margin: 3,
            cover_opacity: 0.15,
            music_volume: 0.85,
            sound_effects_volume: 1.0,
            hit_sound: "none".to_owned(),
            hit_taptic_feedback: true,
            display_storyboard_effects: true,
            graphics_quality: platform_defaults.graphics_quality,
            base_note_offset: platform_defaults.base_note_offset,
            headset_note_offset: -0.05,
            clear_effects_size: 0.0,
            display_profiler: false,
            display_note_ids: false,
            local_level_sort: LevelSort::AddedDate,
            android_dsp_buffer_size: -1,
            local_level_sort_is_ascending: false,
        }
    }

    /// Parses a settings document.
    ///
    /// Fails only when the text is not a JSON object of the record's
    /// shape. Malformed note type mappings and colors are recovered
    /// field by field.
    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Fill color for a note, from the alternate palette when `alt` is set.
    pub fn fill_color(&self, note_type: NoteType, alt: bool) -> Option<Color> {
        let palette = if alt {
            &self.note_fill_colors_alt
        } else {
            &self.note_fill_colors
        };
        palette.get(note_type).copied()
    }
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self::for_platform(Platform::current())
    }
}
