use survey_store::error::StoreError;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    tracing::debug!(root = %ctx.project_root.display(), ?command, "dispatching");
    let result = match command {
        Commands::Pin { action } => commands::pin::handle(&action, ctx, flags).await,
        Commands::Markers => commands::pin::markers(ctx, flags).await,
        Commands::Issue { action } => commands::issue::handle(&action, ctx, flags).await,
        Commands::Note { action } => commands::note::handle(&action, ctx, flags).await,
        Commands::Entry { action } => commands::entry::handle(&action, ctx, flags).await,
        Commands::Image { action } => commands::image::handle(&action, ctx, flags).await,
        Commands::Show(args) => commands::show::handle(&args, ctx, flags).await,
    };
    result.map_err(with_stale_hint)
}

fn with_stale_hint(error: anyhow::Error) -> anyhow::Error {
    if error
        .downcast_ref::<StoreError>()
        .is_some_and(StoreError::is_stale)
    {
        error.context("positions have changed; run `svy show` and retry")
    } else {
        error
    }
}

#[cfg(test)]
mod tests {
    use survey_store::error::StoreError;

    use super::with_stale_hint;

    #[test]
    fn stale_errors_get_a_hint() {
        let stale = anyhow::Error::from(StoreError::StaleReference {
            target: String::from("reports note"),
            index: 4,
            len: 1,
        });
        let message = format!("{:#}", with_stale_hint(stale));
        assert!(message.starts_with("positions have changed"));
        assert!(message.contains("reports note"));
    }

    #[test]
    fn other_errors_pass_through() {
        let message = format!("{:#}", with_stale_hint(anyhow::anyhow!("disk full")));
        assert_eq!(message, "disk full");
    }
}
