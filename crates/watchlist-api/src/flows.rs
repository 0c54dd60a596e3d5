use tracing::{error, warn};
use watchlist_models::{MovieEntry, NewEntry, SearchResult};

use crate::error::ApiError;
use crate::traits::SharedListBackend;

/// How an add attempt resolved. The flow never returns an error: every
/// failure collapses to something the caller can put on the status line.
#[derive(Debug)]
pub enum AddOutcome {
    /// No display name is saved; nothing was sent.
    NameMissing,
    /// The entry was accepted. `entries` is the re-fetched list, or
    /// `None` when the follow-up fetch failed.
    Added { entries: Option<Vec<MovieEntry>> },
    /// The server rejected the entry or was unreachable.
    Failed { message: String },
}

/// Submit `result` to the shared list, attributed to `display_name`.
///
/// The name precondition runs before any network traffic: a missing (or
/// whitespace-only) name aborts with [`AddOutcome::NameMissing`]. On
/// success the list is re-fetched exactly once so the caller renders the
/// server's view rather than an optimistic local merge.
pub async fn add_to_shared_list(
    backend: &dyn SharedListBackend,
    display_name: &str,
    result: &SearchResult,
    note: Option<String>,
) -> AddOutcome {
    let contributor = display_name.trim();
    if contributor.is_empty() {
        return AddOutcome::NameMissing;
    }

    let entry = NewEntry::from_search_result(result, contributor).with_note(note);
    match backend.add_entry(&entry).await {
        Ok(()) => {
            let entries = match backend.fetch_entries().await {
                Ok(entries) => Some(entries),
                Err(err) => {
                    warn!(error = %err, "list refresh after add failed");
                    None
                }
            };
            AddOutcome::Added { entries }
        }
        Err(err) => {
            error!(error = %err, title = %result.title, "add request failed");
            AddOutcome::Failed {
                message: add_failure_message(&err),
            }
        }
    }
}

/// Prefer the server's own message, then the status line, then a generic
/// fallback for transport-level failures.
fn add_failure_message(err: &ApiError) -> String {
    if let Some(message) = err.server_message() {
        return message.to_string();
    }
    match err.status() {
        Some(status) => format!("Add failed with status {}", status),
        None => "Unable to add the movie.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use watchlist_models::SearchResponse;

    #[derive(Default)]
    struct MockBackend {
        fetch_calls: AtomicUsize,
        add_calls: AtomicUsize,
        entries: Vec<MovieEntry>,
        add_error: Mutex<Option<ApiError>>,
        fetch_error: Mutex<Option<ApiError>>,
        last_entry: Mutex<Option<NewEntry>>,
    }

    impl MockBackend {
        fn failing_add(err: ApiError) -> Self {
            Self {
                add_error: Mutex::new(Some(err)),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl SharedListBackend for MockBackend {
        async fn fetch_entries(&self) -> Result<Vec<MovieEntry>, ApiError> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            match self.fetch_error.lock().unwrap().take() {
                Some(err) => Err(err),
                None => Ok(self.entries.clone()),
            }
        }

        async fn search(
            &self,
            _query: &str,
            _media_type: Option<&str>,
        ) -> Result<SearchResponse, ApiError> {
            unreachable!("the add flow never searches")
        }

        async fn add_entry(&self, entry: &NewEntry) -> Result<(), ApiError> {
            self.add_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_entry.lock().unwrap() = Some(entry.clone());
            match self.add_error.lock().unwrap().take() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }

        async fn health(&self) -> Result<(), ApiError> {
            Ok(())
        }
    }

    fn matrix() -> SearchResult {
        SearchResult {
            title: "The Matrix".to_string(),
            year: Some("1999".to_string()),
            media_type: Some("movie".to_string()),
            imdb_id: Some("tt0133093".to_string()),
            poster_url: None,
        }
    }

    #[tokio::test]
    async fn empty_name_aborts_before_any_request() {
        let backend = MockBackend::default();

        let outcome = add_to_shared_list(&backend, "", &matrix(), None).await;

        assert!(matches!(outcome, AddOutcome::NameMissing));
        assert_eq!(backend.add_calls.load(Ordering::SeqCst), 0);
        assert_eq!(backend.fetch_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn whitespace_only_name_counts_as_missing() {
        let backend = MockBackend::default();

        let outcome = add_to_shared_list(&backend, "   ", &matrix(), None).await;

        assert!(matches!(outcome, AddOutcome::NameMissing));
        assert_eq!(backend.add_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn successful_add_sends_the_documented_body_and_refetches_once() {
        let backend = MockBackend {
            entries: vec![MovieEntry {
                title: "The Matrix".to_string(),
                year: Some("1999".to_string()),
                media_type: Some("movie".to_string()),
                imdb_id: Some("tt0133093".to_string()),
                added_by: Some("Alex".to_string()),
                poster_url: None,
                notes: None,
                created_at: None,
            }],
            ..MockBackend::default()
        };

        let outcome = add_to_shared_list(&backend, "Alex", &matrix(), None).await;

        let sent = backend.last_entry.lock().unwrap().clone().unwrap();
        assert_eq!(
            serde_json::to_value(&sent).unwrap(),
            json!({
                "title": "The Matrix",
                "imdb_id": "tt0133093",
                "added_by": "Alex",
                "poster_url": null,
                "year": "1999",
                "media_type": "movie"
            })
        );

        assert_eq!(backend.add_calls.load(Ordering::SeqCst), 1);
        assert_eq!(backend.fetch_calls.load(Ordering::SeqCst), 1);
        match outcome {
            AddOutcome::Added { entries: Some(entries) } => assert_eq!(entries.len(), 1),
            other => panic!("expected Added with entries, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn contributor_name_is_trimmed() {
        let backend = MockBackend::default();

        add_to_shared_list(&backend, "  Alex ", &matrix(), None).await;

        let sent = backend.last_entry.lock().unwrap().clone().unwrap();
        assert_eq!(sent.added_by, "Alex");
    }

    #[tokio::test]
    async fn server_message_wins_over_the_status_line() {
        let backend = MockBackend::failing_add(ApiError::Status {
            status: 400,
            message: Some("imdb_id cannot be empty".to_string()),
        });

        let outcome = add_to_shared_list(&backend, "Alex", &matrix(), None).await;

        match outcome {
            AddOutcome::Failed { message } => assert_eq!(message, "imdb_id cannot be empty"),
            other => panic!("expected Failed, got {:?}", other),
        }
        assert_eq!(backend.fetch_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn status_without_body_message_reports_the_status() {
        let backend = MockBackend::failing_add(ApiError::Status {
            status: 500,
            message: None,
        });

        let outcome = add_to_shared_list(&backend, "Alex", &matrix(), None).await;

        match outcome {
            AddOutcome::Failed { message } => assert_eq!(message, "Add failed with status 500"),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn failed_refresh_still_reports_the_add() {
        let backend = MockBackend {
            fetch_error: Mutex::new(Some(ApiError::Status {
                status: 500,
                message: None,
            })),
            ..MockBackend::default()
        };

        let outcome = add_to_shared_list(&backend, "Alex", &matrix(), None).await;

        assert_eq!(backend.add_calls.load(Ordering::SeqCst), 1);
        assert_eq!(backend.fetch_calls.load(Ordering::SeqCst), 1);
        assert!(matches!(outcome, AddOutcome::Added { entries: None }));
    }
}
