use survey_core::enums::BucketKind;
use survey_core::selection::Selection;

use crate::cli::root_commands::ShowArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::parse::parse_bucket;
use crate::commands::shared::rows::entry_rows;
use crate::commands::shared::selection::resolve_selection;
use crate::context::AppContext;
use crate::output::output;

/// Handle `svy show`. Tables list one row per entry; JSON carries the full
/// snapshot including image payloads.
pub async fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let sel = resolve_selection(&ctx.service, &args.sel)?;
    let only = args.bucket.as_deref().map(parse_bucket).transpose()?;
    if flags.format == OutputFormat::Table {
        return print_rows(ctx, &sel, only, flags);
    }

    let snapshot = ctx.service.fetch_bucket_snapshot(&sel)?;
    match only {
        Some(kind) => output(&snapshot.bucket(kind), flags.format),
        None => output(&snapshot, flags.format),
    }
}

/// Print entry rows for the selection, as the result of a bucket mutation.
pub fn print_rows(
    ctx: &AppContext,
    sel: &Selection,
    only: Option<BucketKind>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let snapshot = ctx.service.fetch_bucket_snapshot(sel)?;
    output(
        &entry_rows(&snapshot, only, ctx.service.calendar()),
        flags.format,
    )
}
