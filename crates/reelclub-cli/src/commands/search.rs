use crate::commands::context::ClientContext;
use crate::feedback::OutputFormat;
use crate::render;
use color_eyre::Result;
use tracing::error;
use watchlist_models::SearchResponse;

pub const EMPTY_QUERY_MESSAGE: &str = "Type something to search.";
pub const NO_MATCHES_MESSAGE: &str = "No matches found. Try a different title.";
pub const SEARCH_FAILED_MESSAGE: &str =
    "Search failed. Make sure the server can reach its search provider.";

pub async fn run_search(ctx: &ClientContext, query: &str, media_type: Option<&str>) -> Result<()> {
    let Some(response) = search_backend(ctx, query, media_type).await else {
        return Ok(());
    };

    if response.results.is_empty() {
        ctx.feedback.status(NO_MATCHES_MESSAGE);
        return Ok(());
    }

    match ctx.feedback.format() {
        OutputFormat::Human => {
            if !ctx.feedback.is_quiet() {
                println!("{}", render::results_table(&response.results));
            }
            if let Some(total) = response.total_results {
                if (response.results.len() as u32) < total {
                    ctx.feedback.status(format!(
                        "Showing {} of {} results.",
                        response.results.len(),
                        total
                    ));
                }
            }
        }
        _ => ctx.feedback.json(&serde_json::to_value(&response)?),
    }
    Ok(())
}

/// Shared by `search` and `add`: trims the query, refuses to hit the
/// network with an empty one, and collapses failures to a status line.
pub(crate) async fn search_backend(
    ctx: &ClientContext,
    query: &str,
    media_type: Option<&str>,
) -> Option<SearchResponse> {
    let query = query.trim();
    if query.is_empty() {
        ctx.feedback.status(EMPTY_QUERY_MESSAGE);
        return None;
    }

    let spinner = super::net_spinner("Searching…");
    let result = ctx.backend.search(query, media_type).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match result {
        Ok(response) => Some(response),
        Err(err) => {
            // Previously rendered results stay put.
            error!(error = %err, query = %query, "search request failed");
            ctx.feedback.error(SEARCH_FAILED_MESSAGE);
            None
        }
    }
}
