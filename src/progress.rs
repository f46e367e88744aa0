//! Progress persistence.
//!
//! The game keeps its progress in a caller-owned string key–value store
//! (the web build used browser local storage). This module defines the
//! documented keys, the defaults when a key is missing or malformed, and
//! the JSON snapshot format for explicit save/load - the medium itself is
//! behind the [`ProgressStore`] trait.
//!
//! Sound preference lives here as an explicit [`Settings`] value handed to
//! the presentation layer, not as global state.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Documented store keys. Persisting anything else is the caller's affair.
pub mod keys {
    /// Current level (decimal integer).
    pub const LEVEL: &str = "rc_level";
    /// Total puzzles solved (decimal integer).
    pub const SOLVED: &str = "rc_solved";
    /// `"true"`/`"false"`; anything but `"false"` reads as enabled.
    pub const SOUND_ENABLED: &str = "rc_sound_enabled";
    /// Present (any value) once the tutorial has been dismissed.
    pub const TUTORIAL_SEEN: &str = "rc_tutorial_seen";
    /// JSON [`SaveData`](super::SaveData) snapshot.
    pub const SAVED_GAME: &str = "rc_saved_game";
}

/// String key–value store the caller provides.
pub trait ProgressStore {
    /// Read a key, `None` if absent.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a key.
    fn set(&mut self, key: &str, value: &str);
    /// Delete a key; absent keys are fine.
    fn remove(&mut self, key: &str);
}

/// In-memory store, for tests and headless use.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Player progress: level reached and puzzles solved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Current level, starts at 1.
    pub level: u32,
    /// Lifetime solved count.
    pub puzzles_solved: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            level: 1,
            puzzles_solved: 0,
        }
    }
}

impl Progress {
    /// Load from the store. Missing or malformed values fall back to the
    /// defaults (level 1, nothing solved) rather than erroring; a corrupt
    /// store is indistinguishable from a fresh one.
    #[must_use]
    pub fn load(store: &dyn ProgressStore) -> Self {
        let defaults = Self::default();
        Self {
            level: read_u32(store, keys::LEVEL).unwrap_or(defaults.level),
            puzzles_solved: read_u32(store, keys::SOLVED).unwrap_or(defaults.puzzles_solved),
        }
    }

    /// Write both fields to the store.
    pub fn save(&self, store: &mut dyn ProgressStore) {
        store.set(keys::LEVEL, &self.level.to_string());
        store.set(keys::SOLVED, &self.puzzles_solved.to_string());
    }

    /// Remove all progress keys, including the tutorial-seen marker.
    pub fn reset(store: &mut dyn ProgressStore) {
        store.remove(keys::LEVEL);
        store.remove(keys::SOLVED);
        store.remove(keys::TUTORIAL_SEEN);
    }
}

fn read_u32(store: &dyn ProgressStore, key: &str) -> Option<u32> {
    store.get(key)?.parse().ok()
}

/// Presentation-layer settings, persisted alongside progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Sound effects and music toggle.
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { sound_enabled: true }
    }
}

impl Settings {
    /// Load from the store; sound defaults on unless explicitly `"false"`.
    #[must_use]
    pub fn load(store: &dyn ProgressStore) -> Self {
        let sound_enabled = store
            .get(keys::SOUND_ENABLED)
            .map_or(true, |value| value != "false");
        Self { sound_enabled }
    }

    /// Write to the store.
    pub fn save(&self, store: &mut dyn ProgressStore) {
        store.set(keys::SOUND_ENABLED, if self.sound_enabled { "true" } else { "false" });
    }
}

/// Explicit save-game snapshot, stored as JSON under
/// [`keys::SAVED_GAME`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    /// Level at save time.
    pub level: u32,
    /// Solved count at save time.
    pub puzzles_solved: u32,
    /// Sound preference at save time. Older snapshots may omit it.
    #[serde(default = "default_sound_enabled")]
    pub sound_enabled: bool,
    /// Caller-supplied timestamp (ISO 8601 in the original game). Opaque
    /// here; the crate never parses it.
    pub timestamp: String,
}

fn default_sound_enabled() -> bool {
    true
}

impl SaveData {
    /// Serialize and write the snapshot.
    ///
    /// Serialization of these fields cannot fail in practice; the `Result`
    /// is kept so format changes surface instead of panicking.
    pub fn write(&self, store: &mut dyn ProgressStore) -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(self)?;
        store.set(keys::SAVED_GAME, &json);
        Ok(())
    }

    /// Read and decode the snapshot.
    ///
    /// `Ok(None)` when no snapshot exists; `Err` when one exists but does
    /// not decode, so the caller can tell "nothing saved" from "corrupt
    /// save" and message accordingly.
    pub fn read(store: &dyn ProgressStore) -> Result<Option<SaveData>, serde_json::Error> {
        match store.get(keys::SAVED_GAME) {
            Some(json) => serde_json::from_str(&json).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_store_defaults() {
        let store = MemoryStore::new();

        assert_eq!(Progress::load(&store), Progress::default());
        assert_eq!(Settings::load(&store), Settings::default());
        assert_eq!(SaveData::read(&store).unwrap(), None);
    }

    #[test]
    fn test_progress_round_trip() {
        let mut store = MemoryStore::new();
        let progress = Progress {
            level: 12,
            puzzles_solved: 34,
        };

        progress.save(&mut store);
        assert_eq!(Progress::load(&store), progress);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let mut store = MemoryStore::new();
        store.set(keys::LEVEL, "not a number");
        store.set(keys::SOLVED, "-3");

        assert_eq!(Progress::load(&store), Progress::default());
    }

    #[test]
    fn test_reset_clears_keys() {
        let mut store = MemoryStore::new();
        Progress {
            level: 5,
            puzzles_solved: 9,
        }
        .save(&mut store);
        store.set(keys::TUTORIAL_SEEN, "true");

        Progress::reset(&mut store);

        assert_eq!(store.get(keys::LEVEL), None);
        assert_eq!(store.get(keys::SOLVED), None);
        assert_eq!(store.get(keys::TUTORIAL_SEEN), None);
    }

    #[test]
    fn test_settings_only_false_disables() {
        let mut store = MemoryStore::new();

        store.set(keys::SOUND_ENABLED, "false");
        assert!(!Settings::load(&store).sound_enabled);

        store.set(keys::SOUND_ENABLED, "garbage");
        assert!(Settings::load(&store).sound_enabled);
    }

    #[test]
    fn test_settings_round_trip() {
        let mut store = MemoryStore::new();
        let settings = Settings {
            sound_enabled: false,
        };

        settings.save(&mut store);
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut store = MemoryStore::new();
        let save = SaveData {
            level: 7,
            puzzles_solved: 21,
            sound_enabled: false,
            timestamp: "2026-08-30T12:00:00Z".to_string(),
        };

        save.write(&mut store).unwrap();
        assert_eq!(SaveData::read(&store).unwrap(), Some(save));
    }

    #[test]
    fn test_snapshot_missing_sound_defaults_on() {
        let mut store = MemoryStore::new();
        store.set(
            keys::SAVED_GAME,
            r#"{"level":2,"puzzles_solved":1,"timestamp":"t"}"#,
        );

        let save = SaveData::read(&store).unwrap().unwrap();
        assert!(save.sound_enabled);
    }

    #[test]
    fn test_corrupt_snapshot_is_an_error() {
        let mut store = MemoryStore::new();
        store.set(keys::SAVED_GAME, "{not json");

        assert!(SaveData::read(&store).is_err());
    }
}
