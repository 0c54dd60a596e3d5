use crate::commands::context::ClientContext;
use crate::commands::prompts;
use crate::NameCommands;
use color_eyre::Result;

pub const EMPTY_NAME_MESSAGE: &str = "Enter a name to save.";
pub const NAME_SAVED_MESSAGE: &str = "Name saved!";

pub fn run_name(ctx: &mut ClientContext, cmd: NameCommands) -> Result<()> {
    match cmd {
        NameCommands::Show => show_name(ctx),
        NameCommands::Set { name } => set_name(ctx, name),
        NameCommands::Clear => clear_name(ctx),
    }
}

fn show_name(ctx: &ClientContext) -> Result<()> {
    let name = ctx.profile.display_name();
    if name.is_empty() {
        ctx.feedback
            .status("No display name saved yet. Set one with: reelclub name set <NAME>");
    } else {
        ctx.feedback.status(name);
    }
    Ok(())
}

fn set_name(ctx: &mut ClientContext, name: Option<String>) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => {
            if !super::is_interactive() {
                ctx.feedback
                    .warn("Not a terminal; pass the name directly: reelclub name set <NAME>");
                return Ok(());
            }
            let current = ctx.profile.display_name();
            let default = if current.is_empty() {
                None
            } else {
                Some(current.as_str())
            };
            prompts::input("Display name", default)?
        }
    };

    let name = name.trim().to_string();
    if name.is_empty() {
        ctx.feedback.status(EMPTY_NAME_MESSAGE);
        return Ok(());
    }

    ctx.profile.set_display_name(&name);
    ctx.profile
        .save()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save profile: {}", e))?;
    ctx.feedback.success(NAME_SAVED_MESSAGE);
    Ok(())
}

fn clear_name(ctx: &mut ClientContext) -> Result<()> {
    if ctx.profile.display_name().is_empty() {
        ctx.feedback.status("No display name to clear");
        return Ok(());
    }
    ctx.profile.clear_display_name();
    ctx.profile
        .save()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save profile: {}", e))?;
    ctx.feedback.success("Display name cleared");
    Ok(())
}
