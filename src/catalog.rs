use eframe::Storage;

use crate::sketch::{Sketch, SketchId, SketchSummary};
use crate::store::SketchStore;

/// Read side of the saved sketches, plus deletion
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    store: SketchStore,
}

impl Catalog {
    pub fn new(store: SketchStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SketchStore {
        &self.store
    }

    /// Saved sketches ordered by title (case-sensitive, ties keep stored order)
    pub fn list(&self, storage: &dyn Storage) -> Vec<Sketch> {
        let mut sketches = self.store.load_all(storage);
        sketches.sort_by(|a, b| a.title().cmp(b.title()));
        sketches
    }

    pub fn summaries(&self, storage: &dyn Storage) -> Vec<(SketchId, SketchSummary)> {
        self.list(storage)
            .iter()
            .map(|sketch| (sketch.id(), sketch.summary()))
            .collect()
    }

    pub fn find(&self, storage: &dyn Storage, id: SketchId) -> Option<Sketch> {
        self.store
            .load_all(storage)
            .into_iter()
            .find(|sketch| sketch.id() == id)
    }

    /// Remove the sketch with `id`. Returns how many entries were dropped;
    /// an unknown id writes nothing.
    pub fn delete(&self, storage: &mut dyn Storage, id: SketchId) -> usize {
        let mut sketches = self.store.load_all(storage);
        let before = sketches.len();
        sketches.retain(|sketch| sketch.id() != id);
        let removed = before - sketches.len();
        if removed > 0 {
            self.store.save_all(storage, &sketches);
            log::info!("Deleted sketch {}", id);
        }
        removed
    }
}
