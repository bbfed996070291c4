//! Settings data model: note types, colors, gameplay enums and the
//! `PlayerSettings` record itself.

/// Declares a closed enumeration persisted as its integer value.
///
/// Declaration order is the canonical order: it drives `ALL`, `Ord`
/// and the integer keys used on the wire.
macro_rules! int_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(into = "i32", try_from = "i32")]
        $vis enum $name {
            $( $(#[$vmeta])* $variant = $value, )+
        }

        impl $name {
            /// Number of members.
            pub const COUNT: usize = [$(stringify!($variant)),+].len();

            /// Every member in declaration order.
            pub const ALL: [$name; Self::COUNT] = [$($name::$variant),+];

            /// Integer value as persisted.
            pub const fn value(self) -> i32 {
                self as i32
            }

            pub fn from_value(value: i32) -> Option<Self> {
                match value {
                    $( $value => Some($name::$variant), )+
                    _ => None,
                }
            }

            /// Symbolic name, as used by the enum-set codec.
            pub const fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant), )+
                }
            }
        }

        impl From<$name> for i32 {
            fn from(member: $name) -> i32 {
                member.value()
            }
        }

        impl TryFrom<i32> for $name {
            type Error = $crate::codec::CodecError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::from_value(value).ok_or($crate::codec::CodecError::UnknownDiscriminant {
                    kind: stringify!($name),
                    value,
                })
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::codec::CodecError;

            fn from_str(name: &str) -> Result<Self, Self::Err> {
                match name {
                    $( stringify!($variant) => Ok($name::$variant), )+
                    _ => Err($crate::codec::CodecError::UnknownName {
                        kind: stringify!($name),
                        name: name.to_owned(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl $crate::codec::SymbolicEnum for $name {
            const KIND: &'static str = stringify!($name);

            fn name(self) -> &'static str {
                $name::name(self)
            }

            fn from_name(name: &str) -> Option<Self> {
                name.parse().ok()
            }
        }
    };
}

pub mod color;
pub mod mods;
pub mod note_type;
pub mod platform;
pub mod settings;

pub use color::Color;
pub use mods::Mod;
pub use note_type::{NoteType, NoteTypeMap};
pub use platform::{Platform, PlatformDefaults};
pub use settings::{GraphicsQuality, HoldHitSoundTiming, LevelSort, PlayerSettings};
