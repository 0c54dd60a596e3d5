use color_eyre::Result;
use dialoguer::{Input, Select};

/// Prompt for a string value with optional default
pub fn input(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut builder = Input::<String>::new().with_prompt(prompt).allow_empty(true);

    if let Some(default_value) = default {
        builder = builder.default(default_value.to_string());
    }

    builder
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))
}

/// Pick one of `items`, returning its index.
pub fn select(prompt: &str, items: &[String]) -> Result<usize> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read selection: {}", e))
}
