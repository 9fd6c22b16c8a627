use egui::Pos2;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::TitleError;

/// Longest title accepted, counted in characters after trimming
pub const MAX_TITLE_LEN: usize = 25;

/// Identity of a persisted sketch. Assigned once, on first save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SketchId(Uuid);

impl SketchId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SketchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SketchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Whether a draft is new or was loaded from a persisted sketch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftOrigin {
    New,
    Existing(SketchId),
}

/// A saved sketch: one continuous line plus a title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sketch {
    id: SketchId,
    title: String,
    points: Vec<Pos2>,
}

impl Sketch {
    /// Build a sketch from an already validated title
    pub(crate) fn new(id: SketchId, title: String, points: Vec<Pos2>) -> Self {
        Self { id, title, points }
    }

    pub fn id(&self) -> SketchId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    /// Where the cursor resumes when this sketch is edited again
    pub fn last_point(&self) -> Option<Pos2> {
        self.points.last().copied()
    }

    pub fn summary(&self) -> SketchSummary {
        SketchSummary {
            title: self.title.clone(),
            point_count: self.points.len(),
            // Whole pixels, truncated toward zero like the catalog row always showed
            last_point: self
                .last_point()
                .map(|p| (p.x.trunc() as i64, p.y.trunc() as i64)),
        }
    }
}

/// What a catalog row shows for one sketch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SketchSummary {
    pub title: String,
    pub point_count: usize,
    pub last_point: Option<(i64, i64)>,
}

/// Trim a raw title and check it against the length rules.
///
/// Returns the trimmed title that gets stored.
pub fn validate_title(raw: &str) -> Result<String, TitleError> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();
    if len == 0 {
        return Err(TitleError::Empty);
    }
    if len > MAX_TITLE_LEN {
        return Err(TitleError::TooLong {
            len,
            max: MAX_TITLE_LEN,
        });
    }
    Ok(trimmed.to_owned())
}
