use survey_core::selection::EntryPos;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{EntryAt, EntryCommands};
use crate::commands::shared::parse::parse_bucket;
use crate::commands::shared::selection::resolve_selection;
use crate::commands::show::print_rows;
use crate::context::AppContext;

/// Handle `svy entry`.
pub async fn handle(
    action: &EntryCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EntryCommands::Delete { at, sel } => {
            let sel = resolve_selection(&ctx.service, sel)?;
            let bucket = parse_bucket(&at.bucket)?;
            ctx.service.delete_entry(&sel, bucket, position(at))?;
            print_rows(ctx, &sel, Some(bucket), flags)
        }
        EntryCommands::Copy { at, to, sel } => {
            let sel = resolve_selection(&ctx.service, sel)?;
            let from = parse_bucket(&at.bucket)?;
            let to = parse_bucket(to)?;
            ctx.service.copy_entry(&sel, from, position(at), to)?;
            print_rows(ctx, &sel, None, flags)
        }
        EntryCommands::Move { at, to, sel } => {
            let sel = resolve_selection(&ctx.service, sel)?;
            let from = parse_bucket(&at.bucket)?;
            let to = parse_bucket(to)?;
            ctx.service.move_entry(&sel, from, position(at), to)?;
            print_rows(ctx, &sel, None, flags)
        }
    }
}

pub const fn position(at: &EntryAt) -> EntryPos {
    EntryPos::new(at.note, at.entry)
}
