use crate::cli::GlobalFlags;
use crate::cli::subcommands::PinCommands;
use crate::commands::shared::selection::resolve_pin;
use crate::context::AppContext;
use crate::output::output;

/// Handle `svy pin`.
pub async fn handle(
    action: &PinCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PinCommands::Add { color } => {
            let color = color
                .as_deref()
                .unwrap_or(&ctx.config.general.default_pin_color);
            let sel = ctx.service.create_pin_with_issue(color)?;
            output(&sel, flags.format)
        }
        PinCommands::List => output(&ctx.service.pin_summaries(), flags.format),
        PinCommands::Move { pin, x, y } => {
            let pin = resolve_pin(&ctx.service, pin)?;
            ctx.service.move_marker(&pin, *x, *y)?;
            let marker = ctx
                .service
                .markers()
                .into_iter()
                .find(|marker| marker.pin_id == pin);
            output(&marker, flags.format)
        }
    }
}

/// Handle `svy markers`.
pub async fn markers(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.service.markers(), flags.format)
}
