use thiserror::Error;

/// Reasons a sketch title is refused before anything is written
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleError {
    #[error("title is empty")]
    Empty,

    #[error("title is {len} characters long, at most {max} are allowed")]
    TooLong { len: usize, max: usize },
}

/// Errors raised while encoding or decoding the sketch collection
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to (de)serialize sketches: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors a save request can report back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("Sketch was not saved: {0}")]
    InvalidTitle(#[from] TitleError),

    #[error("No sketch is being edited")]
    NotStarted,
}
