use crate::commands::context::ClientContext;
use crate::feedback::OutputFormat;
use crate::render;
use color_eyre::Result;
use tracing::error;
use watchlist_models::MovieEntry;

pub const LIST_FAILED_MESSAGE: &str = "Unable to load shared list. Check the server.";

pub async fn run_list(ctx: &ClientContext) -> Result<()> {
    let spinner = super::net_spinner("Loading shared list…");
    let fetched = ctx.backend.fetch_entries().await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let entries = match fetched {
        Ok(entries) => entries,
        Err(err) => {
            // Whatever was rendered before stays; just say it went wrong.
            error!(error = %err, "failed to fetch shared list");
            ctx.feedback.error(LIST_FAILED_MESSAGE);
            return Ok(());
        }
    };

    match ctx.feedback.format() {
        OutputFormat::Human => render_list(ctx, &entries),
        _ => ctx.feedback.json(&serde_json::to_value(&entries)?),
    }
    Ok(())
}

/// Render the list or the explicit empty state. Shared with the add
/// flow's post-add refresh.
pub(crate) fn render_list(ctx: &ClientContext, entries: &[MovieEntry]) {
    match render::list_table(entries) {
        Some(table) => {
            if !ctx.feedback.is_quiet() {
                println!("{table}");
            }
        }
        None => ctx.feedback.status(render::EMPTY_LIST_MESSAGE),
    }
}
