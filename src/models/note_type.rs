//! Note categories and the dense per-note-type table used by the
//! hitbox and color settings.

use std::ops::Index;

int_enum! {
    /// Gameplay note category.
    pub enum NoteType {
        /// Tap note.
        Click = 0,
        /// First note of a drag chain.
        DragHead = 1,
        /// Following notes of a drag chain.
        DragChild = 2,
        /// Press and hold.
        Hold = 3,
        /// Hold spanning several scanline pages.
        LongHold = 4,
        /// Swipe note.
        Flick = 5,
    }
}

impl NoteType {
    /// Key used for this note type in persisted mappings: its integer
    /// value as a string (`"0"` for `Click`).
    pub fn key(self) -> String {
        self.value().to_string()
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One value per [`NoteType`], stored as a fixed-size table indexed by
/// the note type's ordinal.
///
/// A map is either full (exactly one entry per note type) or empty.
/// The empty state only arises when a persisted mapping could not be
/// decoded; it cannot be partially filled.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteTypeMap<T> {
    slots: Option<[T; NoteType::COUNT]>,
}

impl<T> NoteTypeMap<T> {
    /// Builds a full map by evaluating `f` for each note type in
    /// canonical order.
    pub fn from_fn(f: impl FnMut(NoteType) -> T) -> Self {
        Self {
            slots: Some(NoteType::ALL.map(f)),
        }
    }

    /// Fallible version of [`NoteTypeMap::from_fn`]; stops at the first error.
    pub fn try_from_fn<E>(f: impl FnMut(NoteType) -> Result<T, E>) -> Result<Self, E> {
        let values = NoteType::ALL
            .into_iter()
            .map(f)
            .collect::<Result<Vec<T>, E>>()?;
        Ok(Self {
            slots: values.try_into().ok(),
        })
    }

    pub const fn empty() -> Self {
        Self { slots: None }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_none()
    }

    /// Number of entries: zero or one per note type.
    pub fn len(&self) -> usize {
        if self.is_empty() { 0 } else { NoteType::COUNT }
    }

    pub fn get(&self, note_type: NoteType) -> Option<&T> {
        self.slots.as_ref().map(|slots| &slots[note_type.index()])
    }

    pub fn get_mut(&mut self, note_type: NoteType) -> Option<&mut T> {
        self.slots.as_mut().map(|slots| &mut slots[note_type.index()])
    }

    /// Replaces the entry for `note_type`. Returns `false` (and stores
    /// nothing) when the map is empty.
    pub fn set(&mut self, note_type: NoteType, value: T) -> bool {
        match self.get_mut(note_type) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Entries in canonical note type order.
    pub fn iter(&self) -> impl Iterator<Item = (NoteType, &T)> {
        self.slots
            .iter()
            .flat_map(|slots| NoteType::ALL.into_iter().zip(slots.iter()))
    }
}

impl<T: Clone> NoteTypeMap<T> {
    /// Full map holding `value` for every note type.
    pub fn filled(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}

impl<T> Index<NoteType> for NoteTypeMap<T> {
    type Output = T;

    /// Panics on an empty map.
    fn index(&self, note_type: NoteType) -> &T {
        match self.get(note_type) {
            Some(value) => value,
            None => panic!("no {note_type} entry in an empty note type map"),
        }
    }
}
