use eframe::Storage;
use std::collections::{HashMap, HashSet};

use crate::error::StoreResult;
use crate::sketch::Sketch;

/// Storage key holding every saved sketch
pub const DEFAULT_SLOT: &str = "Sketches";

/// Keeps the whole sketch collection under a single storage key.
///
/// Reads and writes always cover the full collection. Decode and encode
/// failures never reach the caller: a broken slot reads as empty and a
/// failed write leaves the slot as it was.
#[derive(Debug, Clone)]
pub struct SketchStore {
    slot: String,
}

impl Default for SketchStore {
    fn default() -> Self {
        Self::new(DEFAULT_SLOT)
    }
}

impl SketchStore {
    pub fn new(slot: impl Into<String>) -> Self {
        Self { slot: slot.into() }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// All saved sketches, or none if the slot is absent or unreadable
    pub fn load_all(&self, storage: &dyn Storage) -> Vec<Sketch> {
        match self.try_load_all(storage) {
            Ok(sketches) => sketches,
            Err(err) => {
                log::warn!("Ignoring unreadable sketch data in '{}': {}", self.slot, err);
                Vec::new()
            }
        }
    }

    /// Replace the stored collection in one write
    pub fn save_all(&self, storage: &mut dyn Storage, sketches: &[Sketch]) {
        if let Err(err) = self.try_save_all(storage, sketches) {
            log::warn!("Failed to save sketches to '{}': {}", self.slot, err);
        }
    }

    pub fn try_load_all(&self, storage: &dyn Storage) -> StoreResult<Vec<Sketch>> {
        let Some(json) = storage.get_string(&self.slot) else {
            return Ok(Vec::new());
        };
        let sketches: Vec<Sketch> = serde_json::from_str(&json)?;
        Ok(dedup_by_id(sketches))
    }

    pub fn try_save_all(&self, storage: &mut dyn Storage, sketches: &[Sketch]) -> StoreResult<()> {
        // Encode fully before touching the slot
        let json = serde_json::to_string(sketches)?;
        storage.set_string(&self.slot, json);
        storage.flush();
        log::debug!("Stored {} sketches in '{}'", sketches.len(), self.slot);
        Ok(())
    }
}

fn dedup_by_id(sketches: Vec<Sketch>) -> Vec<Sketch> {
    let mut seen = HashSet::with_capacity(sketches.len());
    let total = sketches.len();
    let unique: Vec<Sketch> = sketches
        .into_iter()
        .filter(|sketch| seen.insert(sketch.id()))
        .collect();
    if unique.len() != total {
        log::warn!(
            "Dropped {} sketches with duplicate ids",
            total - unique.len()
        );
    }
    unique
}

/// In-memory key-value storage, for tests and runs without a storage backend
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set_string` calls seen so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Storage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.writes += 1;
        self.values.insert(key.to_owned(), value);
    }

    fn flush(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sketch::SketchId;
    use egui::Pos2;

    fn sample(title: &str) -> Sketch {
        Sketch::new(
            SketchId::new(),
            title.to_owned(),
            vec![Pos2::new(360.0, 200.0), Pos2::new(410.0, 200.0)],
        )
    }

    #[test]
    fn test_missing_slot_is_empty() {
        let storage = MemoryStorage::new();
        assert!(SketchStore::default().load_all(&storage).is_empty());
    }

    #[test]
    fn test_malformed_slot_is_empty() {
        let mut storage = MemoryStorage::new();
        storage.set_string(DEFAULT_SLOT, "{not json".into());
        let store = SketchStore::default();
        assert!(store.try_load_all(&storage).is_err());
        assert!(store.load_all(&storage).is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let mut storage = MemoryStorage::new();
        let store = SketchStore::default();
        let sketches = vec![sample("b"), sample("a")];

        store.save_all(&mut storage, &sketches);
        assert_eq!(storage.writes(), 1);
        assert_eq!(store.load_all(&storage), sketches);
    }

    #[test]
    fn test_resave_of_loaded_collection_changes_nothing() {
        let mut storage = MemoryStorage::new();
        let store = SketchStore::default();
        store.save_all(&mut storage, &[sample("one"), sample("two")]);
        let raw = storage.get_string(DEFAULT_SLOT);

        let loaded = store.load_all(&storage);
        store.save_all(&mut storage, &loaded);
        assert_eq!(storage.get_string(DEFAULT_SLOT), raw);
        assert_eq!(store.load_all(&storage), loaded);
    }

    #[test]
    fn test_duplicate_ids_collapse_on_load() {
        let mut storage = MemoryStorage::new();
        let store = SketchStore::default();
        let first = sample("first");
        let twin = Sketch::new(first.id(), "twin".into(), Vec::new());
        store.save_all(&mut storage, &[first.clone(), twin]);

        assert_eq!(store.load_all(&storage), vec![first]);
    }

    #[test]
    fn test_slots_are_independent() {
        let mut storage = MemoryStorage::new();
        SketchStore::new("left").save_all(&mut storage, &[sample("x")]);
        assert!(SketchStore::new("right").load_all(&storage).is_empty());
        assert_eq!(SketchStore::new("left").load_all(&storage).len(), 1);
    }
}
