use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

pub mod add;
pub mod config;
pub mod context;
pub mod list;
pub mod name;
pub mod ping;
pub mod prompts;
pub mod search;

/// Spinner shown while a request is in flight, only when attached to a
/// real terminal.
pub(crate) fn net_spinner(message: &str) -> Option<ProgressBar> {
    if !is_interactive() {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(message.to_string());
    Some(spinner)
}

pub(crate) fn is_interactive() -> bool {
    std::io::stdout().is_terminal() && std::io::stderr().is_terminal()
}
