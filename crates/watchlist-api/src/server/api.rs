use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use watchlist_models::{MovieEntry, NewEntry, SearchResponse};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Query parameters for the search endpoint. `media_type` is included
/// only when a filter was chosen.
pub fn search_params(query: &str, media_type: Option<&str>) -> Vec<(&'static str, String)> {
    let mut params = vec![("query", query.to_string())];
    if let Some(kind) = media_type {
        params.push(("media_type", kind.to_string()));
    }
    params
}

/// Fetch the shared list.
pub async fn fetch_entries(client: &Client, base_url: &str) -> Result<Vec<MovieEntry>, ApiError> {
    let url = format!("{}/movies", base_url);
    debug!(url = %url, "fetching shared list");

    let response = send(client.get(&url), &url).await?;
    read_json(response, &url).await
}

/// Search the server's metadata provider.
pub async fn search(
    client: &Client,
    base_url: &str,
    query: &str,
    media_type: Option<&str>,
) -> Result<SearchResponse, ApiError> {
    let url = format!("{}/search", base_url);
    debug!(url = %url, query = %query, media_type = ?media_type, "searching");

    let request = client.get(&url).query(&search_params(query, media_type));
    let response = send(request, &url).await?;
    read_json(response, &url).await
}

/// Append one entry to the shared list.
pub async fn add_entry(client: &Client, base_url: &str, entry: &NewEntry) -> Result<(), ApiError> {
    let url = format!("{}/movies", base_url);
    debug!(url = %url, title = %entry.title, "adding entry");

    let response = send(client.post(&url).json(entry), &url).await?;
    check_status(response).await?;
    Ok(())
}

/// Probe the server's health endpoint.
pub async fn health(client: &Client, base_url: &str) -> Result<(), ApiError> {
    let url = format!("{}/health", base_url);
    let response = send(client.get(&url), &url).await?;
    check_status(response).await?;
    Ok(())
}

async fn send(request: reqwest::RequestBuilder, url: &str) -> Result<reqwest::Response, ApiError> {
    request.send().await.map_err(|source| ApiError::Transport {
        url: url.to_string(),
        source,
    })
}

/// Reject non-success responses, keeping the body's `message` field when
/// it parses as one. A body that is not the expected shape just means no
/// message is available.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .map(|parsed| parsed.message);
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    url: &str,
) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    let body = response.text().await.map_err(|source| ApiError::Transport {
        url: url.to_string(),
        source,
    })?;
    serde_json::from_str(&body).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_params_without_filter_carry_only_the_query() {
        assert_eq!(
            search_params("Matrix", None),
            vec![("query", "Matrix".to_string())]
        );
    }

    #[test]
    fn search_params_include_media_type_only_when_selected() {
        assert_eq!(
            search_params("Matrix", Some("movie")),
            vec![
                ("query", "Matrix".to_string()),
                ("media_type", "movie".to_string())
            ]
        );
    }
}
