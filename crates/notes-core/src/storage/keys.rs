//! Storage keys shared by every surface

/// Synced bucket: array of notes
pub const NOTES: &str = "notes";
/// Synced bucket: settings record
pub const SETTINGS: &str = "settings";
/// Local bucket: quick-capture history
pub const NOTE_HISTORY: &str = "noteHistory";
