use crate::commands::context::ClientContext;
use crate::commands::{list, name, prompts, search};
use crate::feedback::OutputFormat;
use crate::render;
use color_eyre::Result;
use watchlist_api::{add_to_shared_list, AddOutcome};
use watchlist_models::SearchResult;

pub const NAME_MISSING_MESSAGE: &str = "Save your name before adding a movie.";
pub const ADDED_MESSAGE: &str = "Added to the list!";

pub async fn run_add(
    ctx: &mut ClientContext,
    query: &str,
    media_type: Option<&str>,
    pick: Option<usize>,
    note: Option<String>,
) -> Result<()> {
    let Some(response) = search::search_backend(ctx, query, media_type).await else {
        return Ok(());
    };
    if response.results.is_empty() {
        ctx.feedback.status(search::NO_MATCHES_MESSAGE);
        return Ok(());
    }

    let chosen = match choose_result(ctx, &response.results, pick)? {
        Some(result) => result.clone(),
        None => return Ok(()),
    };

    submit(ctx, &chosen, note).await
}

/// Resolve which result to add: an explicit `--pick N`, or an
/// interactive selection over the rendered results.
fn choose_result<'a>(
    ctx: &ClientContext,
    results: &'a [SearchResult],
    pick: Option<usize>,
) -> Result<Option<&'a SearchResult>> {
    if let Some(pick) = pick {
        return match pick.checked_sub(1).and_then(|index| results.get(index)) {
            Some(result) => Ok(Some(result)),
            None => {
                ctx.feedback.warn(format!(
                    "--pick {} is out of range; the search returned {} result(s)",
                    pick,
                    results.len()
                ));
                Ok(None)
            }
        };
    }

    if !super::is_interactive() {
        ctx.feedback
            .warn("Not a terminal; use --pick N to choose a result");
        return Ok(None);
    }

    if !ctx.feedback.is_quiet() {
        println!("{}", render::results_table(results));
    }

    let labels: Vec<String> = results.iter().map(render::result_label).collect();
    let index = prompts::select("Add which one?", &labels)?;
    Ok(results.get(index))
}

async fn submit(ctx: &mut ClientContext, result: &SearchResult, note: Option<String>) -> Result<()> {
    let mut display_name = ctx.profile.display_name();
    let mut prompted = false;

    loop {
        let spinner = if display_name.trim().is_empty() {
            None
        } else {
            super::net_spinner("Adding to the list…")
        };
        let outcome =
            add_to_shared_list(ctx.backend.as_ref(), &display_name, result, note.clone()).await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        match outcome {
            AddOutcome::NameMissing => {
                ctx.feedback.status(NAME_MISSING_MESSAGE);
                if prompted || !super::is_interactive() {
                    return Ok(());
                }
                // No name saved yet: ask for it on the spot, then retry.
                let entered = prompts::input("Your name", None)?;
                let entered = entered.trim().to_string();
                if entered.is_empty() {
                    ctx.feedback.status(name::EMPTY_NAME_MESSAGE);
                    return Ok(());
                }
                ctx.profile.set_display_name(&entered);
                ctx.profile
                    .save()
                    .map_err(|e| color_eyre::eyre::eyre!("Failed to save profile: {}", e))?;
                ctx.feedback.success(name::NAME_SAVED_MESSAGE);
                display_name = entered;
                prompted = true;
            }
            AddOutcome::Failed { message } => {
                ctx.feedback.error(message);
                return Ok(());
            }
            AddOutcome::Added { entries } => {
                ctx.feedback.success(ADDED_MESSAGE);
                match entries {
                    Some(entries) => match ctx.feedback.format() {
                        OutputFormat::Human => list::render_list(ctx, &entries),
                        _ => ctx.feedback.json(&serde_json::to_value(&entries)?),
                    },
                    None => ctx.feedback.warn(list::LIST_FAILED_MESSAGE),
                }
                return Ok(());
            }
        }
    }
}
