use eframe::Storage;

use crate::catalog::Catalog;
use crate::components::Knob;
use crate::config::SketchConfig;
use crate::panels;
use crate::session::{ExitDecision, Session};
use crate::sketch::{DraftOrigin, SketchId, SketchSummary};
use crate::store::{MemoryStorage, SketchStore};
use crate::stroke::{Axis, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Catalog,
    Sketch,
}

/// Everything a screen can ask the app to do
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    NewSketch,
    OpenCatalog,
    GoHome,
    Edit(SketchId),
    Delete(SketchId),
    Knob(Axis, f32),
    Resize(Surface),
    Clear,
    OpenSavePrompt,
    CancelSave,
    Save,
    Back,
    ConfirmDiscard,
    CancelExit,
}

/// Title entry shown while saving
#[derive(Debug, Clone, Default)]
pub struct SavePrompt {
    pub title: String,
    pub error: Option<String>,
}

/// Screen and dialog state, handed explicitly to the panels
pub struct Navigation {
    pub screen: Screen,
    pub session: Session,
    pub catalog: Catalog,
    pub rows: Vec<(SketchId, SketchSummary)>,
    pub save_prompt: Option<SavePrompt>,
    pub confirm_exit: bool,
    pub knobs: [Knob; 2],
    new_surface: Surface,
}

impl Navigation {
    pub fn new(config: &SketchConfig) -> Self {
        Self {
            screen: Screen::Home,
            session: Session::new(),
            catalog: Catalog::new(SketchStore::new(config.storage_key.clone())),
            rows: Vec::new(),
            save_prompt: None,
            confirm_exit: false,
            knobs: [Knob::new(Axis::Horizontal), Knob::new(Axis::Vertical)],
            new_surface: config.default_surface(),
        }
    }

    pub fn apply(&mut self, action: AppAction, storage: &mut dyn Storage) {
        match action {
            AppAction::NewSketch => {
                self.session.start(None, self.new_surface);
                self.screen = Screen::Sketch;
            }
            AppAction::OpenCatalog => {
                self.refresh_rows(storage);
                self.screen = Screen::Catalog;
            }
            AppAction::GoHome => self.screen = Screen::Home,
            AppAction::Edit(id) => match self.catalog.find(storage, id) {
                Some(sketch) => {
                    let surface = self.session.surface().unwrap_or(self.new_surface);
                    self.session.start(Some(sketch), surface);
                    self.screen = Screen::Sketch;
                }
                None => self.refresh_rows(storage),
            },
            AppAction::Delete(id) => {
                self.catalog.delete(storage, id);
                self.refresh_rows(storage);
            }
            AppAction::Knob(axis, delta) => {
                self.session.move_cursor(axis, delta);
            }
            AppAction::Resize(surface) => {
                self.new_surface = surface;
                // An untouched new draft follows the canvas center
                let untouched = self.session.origin() == Some(DraftOrigin::New)
                    && !self.session.is_dirty()
                    && self.session.points().len() == 1;
                if untouched {
                    self.session.start(None, surface);
                } else {
                    self.session.set_surface(surface);
                }
            }
            AppAction::Clear => self.session.request_clear(),
            AppAction::OpenSavePrompt => {
                self.save_prompt = Some(SavePrompt {
                    title: self.session.title().to_owned(),
                    error: None,
                });
            }
            AppAction::CancelSave => self.save_prompt = None,
            AppAction::Save => {
                let Some(prompt) = self.save_prompt.as_mut() else {
                    return;
                };
                let store = self.catalog.store();
                match self.session.request_save(&prompt.title, store, storage) {
                    Ok(_) => self.save_prompt = None,
                    Err(err) => prompt.error = Some(err.to_string()),
                }
            }
            AppAction::Back => match self.session.request_exit() {
                ExitDecision::Leave => self.leave_sketch(),
                ExitDecision::ConfirmDiscard => self.confirm_exit = true,
            },
            AppAction::ConfirmDiscard => self.leave_sketch(),
            AppAction::CancelExit => self.confirm_exit = false,
        }
    }

    fn leave_sketch(&mut self) {
        self.session.discard();
        self.save_prompt = None;
        self.confirm_exit = false;
        self.screen = Screen::Home;
    }

    fn refresh_rows(&mut self, storage: &dyn Storage) {
        self.rows = self.catalog.summaries(storage);
    }
}

pub struct SketchApp {
    config: SketchConfig,
    nav: Navigation,
    // Used when eframe runs without persistence
    fallback_storage: MemoryStorage,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = SketchConfig::load(cc.storage);
        if cc.storage.is_none() {
            log::warn!("No persistent storage available, sketches are kept in memory only");
        }
        Self::with_config(config)
    }

    pub fn with_config(config: SketchConfig) -> Self {
        Self {
            nav: Navigation::new(&config),
            config,
            fallback_storage: MemoryStorage::new(),
        }
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let actions = match self.nav.screen {
            Screen::Home => panels::home_panel(ctx),
            Screen::Catalog => panels::catalog_panel(&self.nav, ctx),
            Screen::Sketch => panels::sketch_panel(&mut self.nav, ctx, self.config.knob_sensitivity),
        };
        if actions.is_empty() {
            return;
        }

        let storage: &mut dyn Storage = match frame.storage_mut() {
            Some(storage) => storage,
            None => &mut self.fallback_storage,
        };
        for action in actions {
            self.nav.apply(action, storage);
        }
    }
}
