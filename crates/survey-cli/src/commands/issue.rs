use survey_core::enums::{IssueFilter, IssueStatus};
use survey_core::responses::IssueSummary;
use survey_core::selection::Selection;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::IssueCommands;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::selection::{resolve_pin, resolve_selection};
use crate::context::AppContext;
use crate::output::output;

/// Handle `svy issue`.
pub async fn handle(
    action: &IssueCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        IssueCommands::Add { pin } => {
            let pin = resolve_pin(&ctx.service, pin)?;
            let issue = ctx.service.create_issue(&pin)?;
            output(&Selection::new(pin, issue), flags.format)
        }
        IssueCommands::List { pin, status } => {
            let pin = resolve_pin(&ctx.service, pin)?;
            let filter = parse_enum::<IssueFilter>(status, "status")?;
            output(&ctx.service.issues(&pin, filter)?, flags.format)
        }
        IssueCommands::Rename { name, sel } => {
            let sel = resolve_selection(&ctx.service, sel)?;
            ctx.service.rename_issue(&sel, name)?;
            output_issue(ctx, &sel, flags)
        }
        IssueCommands::Status { status, sel } => {
            let sel = resolve_selection(&ctx.service, sel)?;
            let status = parse_enum::<IssueStatus>(status, "status")?;
            ctx.service.set_issue_status(&sel, status)?;
            output_issue(ctx, &sel, flags)
        }
        IssueCommands::Next { sel } => {
            let sel = resolve_selection(&ctx.service, sel)?;
            output(&ctx.service.next_issue(&sel)?, flags.format)
        }
        IssueCommands::Prev { sel } => {
            let sel = resolve_selection(&ctx.service, sel)?;
            output(&ctx.service.previous_issue(&sel)?, flags.format)
        }
    }
}

fn output_issue(ctx: &AppContext, sel: &Selection, flags: &GlobalFlags) -> anyhow::Result<()> {
    let summary = ctx.service.issue(sel)?.map(IssueSummary::of);
    output(&summary, flags.format)
}
