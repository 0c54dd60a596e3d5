use crate::commands::context::ClientContext;
use crate::feedback::OutputFormat;
use crate::ConfigCommands;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use serde_json::json;
use watchlist_config::{ServerConfig, DEFAULT_SERVER_URL};

pub fn run_config(ctx: &ClientContext, cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(ctx),
        ConfigCommands::Server { url } => set_server(ctx, url),
    }
}

fn show_config(ctx: &ClientContext) -> Result<()> {
    match ctx.feedback.format() {
        OutputFormat::Human => {
            if ctx.feedback.is_quiet() {
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec![
                Cell::new("Setting").add_attribute(comfy_table::Attribute::Bold),
                Cell::new("Value").add_attribute(comfy_table::Attribute::Bold),
            ]);
            table.add_row(vec![
                Cell::new("Config file"),
                Cell::new(ctx.paths.config_file().display().to_string()),
            ]);
            table.add_row(vec![
                Cell::new("Profile file"),
                Cell::new(ctx.paths.profile_file().display().to_string()),
            ]);
            table.add_row(vec![
                Cell::new("Server URL"),
                Cell::new(match &ctx.config.server {
                    Some(server) => server.url.clone(),
                    None => format!("{} (default)", DEFAULT_SERVER_URL),
                }),
            ]);
            table.add_row(vec![
                Cell::new("Active server"),
                Cell::new(ctx.server_url.clone()),
            ]);
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            println!("{table}");
        }
        _ => {
            ctx.feedback.json(&json!({
                "config_file": ctx.paths.config_file().display().to_string(),
                "profile_file": ctx.paths.profile_file().display().to_string(),
                "server_url": ctx.config.server.as_ref().map(|server| server.url.clone()),
                "default_server": DEFAULT_SERVER_URL,
                "active_server": ctx.server_url,
            }));
        }
    }
    Ok(())
}

fn set_server(ctx: &ClientContext, url: String) -> Result<()> {
    let mut config = ctx.config.clone();
    config.server = Some(ServerConfig {
        url: url.trim().trim_end_matches('/').to_string(),
    });
    config
        .validate()
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    config
        .save_to_file(&ctx.paths.config_file())
        .map_err(|e| {
            color_eyre::eyre::eyre!(
                "Failed to save config to {}: {}",
                ctx.paths.config_file().display(),
                e
            )
        })?;
    ctx.feedback.success(format!(
        "Server URL saved: {}",
        config.server.as_ref().map(|s| s.url.as_str()).unwrap_or(DEFAULT_SERVER_URL)
    ));
    Ok(())
}
