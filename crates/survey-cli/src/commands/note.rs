use crate::cli::GlobalFlags;
use crate::cli::subcommands::NoteCommands;
use crate::commands::shared::media::load_images;
use crate::commands::shared::parse::parse_bucket;
use crate::commands::shared::selection::resolve_selection;
use crate::commands::show::print_rows;
use crate::context::AppContext;

/// Handle `svy note`.
pub async fn handle(
    action: &NoteCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        NoteCommands::AddText { bucket, text, sel } => {
            let sel = resolve_selection(&ctx.service, sel)?;
            let bucket = parse_bucket(bucket)?;
            ctx.service.add_text_entry(&sel, bucket, text)?;
            print_rows(ctx, &sel, Some(bucket), flags)
        }
        NoteCommands::AddMedia { bucket, files, sel } => {
            let sel = resolve_selection(&ctx.service, sel)?;
            let bucket = parse_bucket(bucket)?;
            let images = load_images(files).await?;
            ctx.service.add_media_entry(&sel, bucket, images)?;
            print_rows(ctx, &sel, Some(bucket), flags)
        }
        NoteCommands::Delete { bucket, note, sel } => {
            let sel = resolve_selection(&ctx.service, sel)?;
            let bucket = parse_bucket(bucket)?;
            ctx.service.delete_note(&sel, bucket, *note)?;
            print_rows(ctx, &sel, Some(bucket), flags)
        }
        NoteCommands::Toggle { bucket, note, sel } => {
            let sel = resolve_selection(&ctx.service, sel)?;
            let bucket = parse_bucket(bucket)?;
            ctx.service.toggle_note(&sel, bucket, *note)?;
            print_rows(ctx, &sel, Some(bucket), flags)
        }
    }
}
