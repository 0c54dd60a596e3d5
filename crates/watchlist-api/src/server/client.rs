use async_trait::async_trait;
use reqwest::Client;
use watchlist_models::{MovieEntry, NewEntry, SearchResponse};

use crate::error::ApiError;
use crate::server::api;
use crate::traits::SharedListBackend;

/// reqwest-backed client for the shared-list server. One instance per
/// process; requests run one at a time from whichever command is active,
/// with no timeout beyond the transport's defaults.
#[derive(Debug, Clone)]
pub struct ServerClient {
    client: Client,
    base_url: String,
}

impl ServerClient {
    /// `base_url` may carry a trailing slash; it is stripped so paths
    /// join cleanly.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SharedListBackend for ServerClient {
    async fn fetch_entries(&self) -> Result<Vec<MovieEntry>, ApiError> {
        api::fetch_entries(&self.client, &self.base_url).await
    }

    async fn search(
        &self,
        query: &str,
        media_type: Option<&str>,
    ) -> Result<SearchResponse, ApiError> {
        api::search(&self.client, &self.base_url, query, media_type).await
    }

    async fn add_entry(&self, entry: &NewEntry) -> Result<(), ApiError> {
        api::add_entry(&self.client, &self.base_url, entry).await
    }

    async fn health(&self) -> Result<(), ApiError> {
        api::health(&self.client, &self.base_url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped_from_the_base_url() {
        let client = ServerClient::new("http://127.0.0.1:8080/");
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");

        let client = ServerClient::new("http://127.0.0.1:8080");
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
    }
}
