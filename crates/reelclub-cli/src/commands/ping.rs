use crate::commands::context::ClientContext;
use color_eyre::Result;
use tracing::error;

pub async fn run_ping(ctx: &ClientContext) -> Result<()> {
    let spinner = super::net_spinner("Checking the server…");
    let result = ctx.backend.health().await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match result {
        Ok(()) => ctx
            .feedback
            .success(format!("Server is reachable at {}", ctx.server_url)),
        Err(err) => {
            error!(error = %err, "health check failed");
            ctx.feedback
                .error(format!("Server is not reachable at {}", ctx.server_url));
        }
    }
    Ok(())
}
