use chrono::{DateTime, Local, TimeZone};
use comfy_table::{Cell, Table};
use watchlist_models::display::{detail_line, DETAIL_SEPARATOR};
use watchlist_models::{poster, MovieEntry, SearchResult};

/// Shown instead of an empty table when the shared list has nothing in it.
pub const EMPTY_LIST_MESSAGE: &str = "Nothing here yet. Find something great to watch!";

/// Attribution fallback when the server has no contributor for an entry.
const UNKNOWN_CONTRIBUTOR: &str = "Unknown friend";

/// Table for the shared list, or `None` when it is empty and the caller
/// should print [`EMPTY_LIST_MESSAGE`] instead.
pub fn list_table(entries: &[MovieEntry]) -> Option<Table> {
    if entries.is_empty() {
        return None;
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Title").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Details").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Added").add_attribute(comfy_table::Attribute::Bold),
    ]);
    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.title),
            Cell::new(detail_line(
                entry.year.as_deref(),
                entry.media_type.as_deref(),
            )),
            Cell::new(attribution(entry)),
        ]);
    }
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    Some(table)
}

/// Numbered table of search results; the numbers feed `add --pick`.
pub fn results_table(results: &[SearchResult]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("#").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Title").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Details").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Poster").add_attribute(comfy_table::Attribute::Bold),
    ]);
    for (index, result) in results.iter().enumerate() {
        table.add_row(vec![
            Cell::new((index + 1).to_string()),
            Cell::new(&result.title),
            Cell::new(result_subtitle(result)),
            Cell::new(poster::normalize(result.poster_url.as_deref()).unwrap_or_default()),
        ]);
    }
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

/// "1999 • Movie" subtitle for one search result.
pub fn result_subtitle(result: &SearchResult) -> String {
    detail_line(result.year.as_deref(), result.media_type.as_deref())
}

/// "Alex • Thu 19:30". Falls back to a placeholder contributor, and a
/// timestamp the server never sent (or that never parsed) is simply left
/// off.
pub fn attribution(entry: &MovieEntry) -> String {
    let added = entry
        .added_by
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_CONTRIBUTOR);
    match entry.created_at {
        Some(ts) => format!(
            "{}{}{}",
            added,
            DETAIL_SEPARATOR,
            short_timestamp(ts.with_timezone(&Local))
        ),
        None => added.to_string(),
    }
}

/// Abbreviated weekday plus wall-clock time, the short "when was this
/// added" form the list view uses.
pub fn short_timestamp<Tz: TimeZone>(ts: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.format("%a %H:%M").to_string()
}

/// Label used when interactively selecting a search result.
pub fn result_label(result: &SearchResult) -> String {
    let subtitle = result_subtitle(result);
    if subtitle.is_empty() {
        result.title.clone()
    } else {
        format!("{} ({})", result.title, subtitle)
    }
}
