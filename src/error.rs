use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Failure of a whole feed batch
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("feed envelope malformed: {0}")]
    EnvelopeMalformed(String),

    #[error("feed payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Identifies an entry in diagnostics: its raw id when readable, otherwise
/// its index in the unfiltered `feed_items` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryMarker {
    Id(String),
    Position(usize),
}

impl fmt::Display for EntryMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryMarker::Id(id) => write!(f, "id {}", id),
            EntryMarker::Position(position) => write!(f, "position {}", position),
        }
    }
}

/// Why a single entry could not become a listing
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntryFailure {
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("field `{field}` is not an integer: {raw:?}")]
    NotAnInteger { field: &'static str, raw: String },

    #[error("field `{field}` is not a date-time: {raw:?}")]
    BadTimestamp { field: &'static str, raw: String },
}

/// Per-entry failure descriptor, collected beside the listing set
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("entry malformed ({marker}): {reason}")]
pub struct EntryError {
    pub marker: EntryMarker,
    pub reason: EntryFailure,
}

impl EntryError {
    pub fn new(marker: EntryMarker, reason: EntryFailure) -> Self {
        Self { marker, reason }
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
