use serde::{Deserialize, Serialize};

use crate::poster;
use crate::search::SearchResult;

/// Payload for appending one entry to the shared list. Every contract
/// field is serialized even when absent (`null`) so the body matches what
/// the server validates against; only the free-text note is omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewEntry {
    pub title: String,
    pub imdb_id: Option<String>,
    pub added_by: String,
    pub poster_url: Option<String>,
    pub year: Option<String>,
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewEntry {
    /// Build a submission from a chosen search result, attributed to
    /// `added_by`. The poster goes through sentinel normalization.
    pub fn from_search_result(result: &SearchResult, added_by: &str) -> Self {
        Self {
            title: result.title.clone(),
            imdb_id: result.imdb_id.clone(),
            added_by: added_by.to_string(),
            poster_url: poster::normalize(result.poster_url.as_deref()),
            year: result.year.clone(),
            media_type: result.media_type.clone(),
            notes: None,
        }
    }

    /// Attach a note, ignoring blank input.
    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.notes = note.filter(|text| !text.trim().is_empty());
        self
    }
}
