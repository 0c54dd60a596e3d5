use async_trait::async_trait;
use watchlist_models::{MovieEntry, NewEntry, SearchResponse};

use crate::error::ApiError;

/// The one external collaborator: the shared-list server. A trait so the
/// flows and the CLI can run against a test double.
#[async_trait]
pub trait SharedListBackend: Send + Sync {
    /// Read the whole shared list, in server order.
    async fn fetch_entries(&self) -> Result<Vec<MovieEntry>, ApiError>;

    /// Search the server's metadata provider. `media_type` narrows the
    /// search when present.
    async fn search(
        &self,
        query: &str,
        media_type: Option<&str>,
    ) -> Result<SearchResponse, ApiError>;

    /// Append one entry to the shared list.
    async fn add_entry(&self, entry: &NewEntry) -> Result<(), ApiError>;

    /// Liveness probe.
    async fn health(&self) -> Result<(), ApiError>;
}
