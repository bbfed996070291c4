//! Host platform and the defaults that depend on it.

use crate::models::settings::GraphicsQuality;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
    Desktop,
}

impl Platform {
    /// Platform this binary was compiled for.
    pub const fn current() -> Self {
        if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_os = "ios") {
            Platform::Ios
        } else {
            Platform::Desktop
        }
    }
}

/// Settings defaults that differ between platforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformDefaults {
    pub platform: Platform,
    pub graphics_quality: GraphicsQuality,
    /// Seconds.
    pub base_note_offset: f32,
}

/// Indexed by `Platform` discriminant.
const PLATFORM_DEFAULTS: [PlatformDefaults; 3] = [
    PlatformDefaults {
        platform: Platform::Android,
        graphics_quality: GraphicsQuality::Medium,
        base_note_offset: 0.2,
    },
    PlatformDefaults {
        platform: Platform::Ios,
        graphics_quality: GraphicsQuality::High,
        base_note_offset: 0.1,
    },
    PlatformDefaults {
        platform: Platform::Desktop,
        graphics_quality: GraphicsQuality::High,
        base_note_offset: 0.1,
    },
];

impl PlatformDefaults {
    pub fn for_platform(platform: Platform) -> &'static PlatformDefaults {
        &PLATFORM_DEFAULTS[platform as usize]
    }

    pub fn current() -> &'static PlatformDefaults {
        Self::for_platform(Platform::current())
    }
}
