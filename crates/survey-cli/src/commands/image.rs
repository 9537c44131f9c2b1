use crate::cli::GlobalFlags;
use crate::cli::subcommands::ImageCommands;
use crate::commands::entry::position;
use crate::commands::shared::media::load_image;
use crate::commands::shared::parse::parse_bucket;
use crate::commands::shared::selection::resolve_selection;
use crate::commands::show::print_rows;
use crate::context::AppContext;

/// Handle `svy image`.
pub async fn handle(
    action: &ImageCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ImageCommands::Replace {
            at,
            photo,
            file,
            sel,
        } => {
            let sel = resolve_selection(&ctx.service, sel)?;
            let bucket = parse_bucket(&at.bucket)?;
            let image = load_image(file).await?;
            ctx.service
                .replace_image(&sel, bucket, position(at), *photo, image)?;
            print_rows(ctx, &sel, Some(bucket), flags)
        }
        ImageCommands::Delete { at, photo, sel } => {
            let sel = resolve_selection(&ctx.service, sel)?;
            let bucket = parse_bucket(&at.bucket)?;
            ctx.service
                .delete_image(&sel, bucket, position(at), *photo)?;
            print_rows(ctx, &sel, Some(bucket), flags)
        }
    }
}
