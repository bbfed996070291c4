//! Gameplay modifiers a player can enable before a run.

int_enum! {
    /// Gameplay modifier.
    pub enum Mod {
        Fast = 0,
        Slow = 1,
        HideScanline = 2,
        HideNotes = 3,
        Hard = 4,
        ExHard = 5,
        AP = 6,
        FC = 7,
        FlipX = 8,
        FlipY = 9,
        FlipAll = 10,
        Auto = 11,
        AutoDrag = 12,
        AutoHold = 13,
        AutoFlick = 14,
    }
}
