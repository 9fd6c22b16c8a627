//! One editing session over a single draft.
//!
//! A session starts either from a persisted sketch (edit) or from a single
//! point at the surface center (new). Saving overwrites the persisted entry
//! with the same identity, or appends a new entry the first time a new draft
//! is saved. Leaving a dirty session is only allowed after the caller has
//! asked the user; nothing is ever saved implicitly.

use eframe::Storage;
use egui::Pos2;

use crate::error::SaveError;
use crate::sketch::{DraftOrigin, Sketch, SketchId, validate_title};
use crate::store::SketchStore;
use crate::stroke::{Axis, StrokeAccumulator, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Empty,
    Drawing,
    Saved,
}

/// What the navigation layer should do when the user asks to go back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDecision {
    /// Nothing unsaved, leave right away
    Leave,
    /// Unsaved points; confirm before calling [`Session::discard`]
    ConfirmDiscard,
}

#[derive(Debug, Clone)]
struct Draft {
    origin: DraftOrigin,
    title: String,
    stroke: StrokeAccumulator,
}

#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
    draft: Option<Draft>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin editing `existing`, or a fresh draft when `None`
    pub fn start(&mut self, existing: Option<Sketch>, surface: Surface) {
        let draft = match existing {
            Some(sketch) => {
                log::debug!("Editing sketch {} '{}'", sketch.id(), sketch.title());
                Draft {
                    origin: DraftOrigin::Existing(sketch.id()),
                    title: sketch.title().to_owned(),
                    stroke: StrokeAccumulator::resume(surface, sketch.points().to_vec()),
                }
            }
            None => {
                log::debug!("Starting a new sketch");
                Draft {
                    origin: DraftOrigin::New,
                    title: String::new(),
                    stroke: StrokeAccumulator::begin(surface, surface.center()),
                }
            }
        };
        self.draft = Some(draft);
        self.state = SessionState::Drawing;
    }

    /// Apply one knob delta. Ignored when no session is running.
    pub fn move_cursor(&mut self, axis: Axis, delta: f32) -> Option<Pos2> {
        let draft = self.draft.as_mut()?;
        let cursor = draft.stroke.move_cursor(axis, delta);
        self.state = SessionState::Drawing;
        Some(cursor)
    }

    pub fn request_clear(&mut self) {
        if let Some(draft) = self.draft.as_mut() {
            draft.stroke.clear();
            self.state = SessionState::Drawing;
        }
    }

    /// Update the clamp bounds after the canvas changed size
    pub fn set_surface(&mut self, surface: Surface) {
        if let Some(draft) = self.draft.as_mut() {
            draft.stroke.set_surface(surface);
        }
    }

    /// Validate `title` and persist the draft under it.
    ///
    /// An edited sketch replaces its stored entry in place; a new draft is
    /// appended with a fresh id, which it keeps for later saves. A rejected
    /// title leaves both the store and the draft untouched.
    pub fn request_save(
        &mut self,
        title: &str,
        store: &SketchStore,
        storage: &mut dyn Storage,
    ) -> Result<Sketch, SaveError> {
        let draft = self.draft.as_mut().ok_or(SaveError::NotStarted)?;
        let title = validate_title(title)?;

        let mut sketches = store.load_all(storage);
        let saved = match draft.origin {
            DraftOrigin::Existing(id) => {
                let sketch = Sketch::new(id, title, draft.stroke.points().to_vec());
                match sketches.iter_mut().find(|s| s.id() == id) {
                    Some(slot) => *slot = sketch.clone(),
                    None => {
                        log::warn!("Sketch {} vanished from the store, saving it again", id);
                        sketches.push(sketch.clone());
                    }
                }
                sketch
            }
            DraftOrigin::New => {
                let sketch = Sketch::new(SketchId::new(), title, draft.stroke.points().to_vec());
                sketches.push(sketch.clone());
                sketch
            }
        };
        store.save_all(storage, &sketches);

        log::info!("Saved sketch {} '{}' ({} points)", saved.id(), saved.title(), saved.points().len());
        draft.origin = DraftOrigin::Existing(saved.id());
        draft.title = saved.title().to_owned();
        draft.stroke.mark_clean();
        self.state = SessionState::Saved;
        Ok(saved)
    }

    pub fn request_exit(&self) -> ExitDecision {
        if self.is_dirty() {
            ExitDecision::ConfirmDiscard
        } else {
            ExitDecision::Leave
        }
    }

    /// Drop the draft without saving
    pub fn discard(&mut self) {
        if self.is_dirty() {
            log::debug!("Discarding unsaved sketch");
        }
        self.draft = None;
        self.state = SessionState::Empty;
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.draft.as_ref().is_some_and(|d| d.stroke.is_dirty())
    }

    pub fn origin(&self) -> Option<DraftOrigin> {
        self.draft.as_ref().map(|d| d.origin)
    }

    /// Title of the sketch as last loaded or saved, empty for a new draft
    pub fn title(&self) -> &str {
        self.draft.as_ref().map_or("", |d| d.title.as_str())
    }

    pub fn points(&self) -> &[Pos2] {
        match &self.draft {
            Some(draft) => draft.stroke.points(),
            None => &[],
        }
    }

    pub fn cursor(&self) -> Option<Pos2> {
        self.draft.as_ref().map(|d| d.stroke.cursor())
    }

    pub fn surface(&self) -> Option<Surface> {
        self.draft.as_ref().map(|d| d.stroke.surface())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;

    fn surface() -> Surface {
        Surface::new(720.0, 400.0)
    }

    #[test]
    fn test_state_transitions() {
        let mut storage = MemoryStorage::new();
        let store = SketchStore::default();
        let mut session = Session::new();
        assert_eq!(session.state(), SessionState::Empty);

        session.start(None, surface());
        assert_eq!(session.state(), SessionState::Drawing);
        assert!(!session.is_dirty());

        session.move_cursor(Axis::Vertical, 3.0);
        assert!(session.is_dirty());

        session.request_save("Loop", &store, &mut storage).unwrap();
        assert_eq!(session.state(), SessionState::Saved);
        assert!(!session.is_dirty());

        session.move_cursor(Axis::Horizontal, 1.0);
        assert_eq!(session.state(), SessionState::Drawing);

        session.discard();
        assert_eq!(session.state(), SessionState::Empty);
        assert_eq!(session.origin(), None);
    }

    #[test]
    fn test_save_without_session() {
        let mut storage = MemoryStorage::new();
        let mut session = Session::new();
        let result = session.request_save("Loop", &SketchStore::default(), &mut storage);
        assert_eq!(result, Err(SaveError::NotStarted));
        assert_eq!(storage.writes(), 0);
    }

    #[test]
    fn test_new_draft_keeps_its_id_after_first_save() {
        let mut storage = MemoryStorage::new();
        let store = SketchStore::default();
        let mut session = Session::new();
        session.start(None, surface());
        assert_eq!(session.origin(), Some(DraftOrigin::New));

        let first = session.request_save("One", &store, &mut storage).unwrap();
        assert_eq!(session.origin(), Some(DraftOrigin::Existing(first.id())));
        assert_eq!(session.title(), "One");

        session.move_cursor(Axis::Horizontal, 4.0);
        let second = session.request_save("Two", &store, &mut storage).unwrap();
        assert_eq!(first.id(), second.id());
        assert_eq!(store.load_all(&storage), vec![second]);
    }

    #[test]
    fn test_clear_marks_dirty() {
        let mut session = Session::new();
        session.start(None, surface());
        session.request_clear();
        assert!(session.is_dirty());
        assert_eq!(session.points(), &[surface().center()]);
        assert_eq!(session.request_exit(), ExitDecision::ConfirmDiscard);
    }

    #[test]
    fn test_idle_session_ignores_input() {
        let mut session = Session::new();
        assert_eq!(session.move_cursor(Axis::Horizontal, 1.0), None);
        session.request_clear();
        assert!(session.points().is_empty());
        assert_eq!(session.request_exit(), ExitDecision::Leave);
    }
}
