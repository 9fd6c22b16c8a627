#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod panels;
pub mod session;
pub mod sketch;
pub mod store;
pub mod stroke;

pub use app::SketchApp;
pub use catalog::Catalog;
pub use config::SketchConfig;
pub use error::{SaveError, StoreError, TitleError};
pub use session::{ExitDecision, Session, SessionState};
pub use sketch::{DraftOrigin, Sketch, SketchId, SketchSummary};
pub use store::{MemoryStorage, SketchStore};
pub use stroke::{Axis, StrokeAccumulator, Surface};
