use anyhow::bail;
use survey_core::ids::{IssueId, PinId};
use survey_core::selection::Selection;
use survey_store::service::SurveyService;

use crate::cli::subcommands::SelectionArgs;

/// Resolve a pin given as an ID (`pin-…`) or a marker label (`A`, `ab`).
pub fn resolve_pin(service: &SurveyService, raw: &str) -> anyhow::Result<PinId> {
    if raw.contains('-') {
        let id = PinId::parse(raw)?;
        service.store().pin(&id)?;
        return Ok(id);
    }

    let label = raw.to_ascii_uppercase();
    service
        .markers()
        .into_iter()
        .find(|marker| marker.label == label)
        .map(|marker| marker.pin_id)
        .ok_or_else(|| anyhow::anyhow!("no pin labelled '{label}'"))
}

/// Turn `--pin` / `--issue` into a [`Selection`]. A pin without an issue
/// selects the pin's first issue.
pub fn resolve_selection(
    service: &SurveyService,
    args: &SelectionArgs,
) -> anyhow::Result<Selection> {
    let Some(raw_pin) = args.pin.as_deref() else {
        if args.issue.is_some() {
            bail!("--issue requires --pin");
        }
        tracing::debug!("no selection given");
        return Ok(Selection::none());
    };

    let pin = resolve_pin(service, raw_pin)?;
    match args.issue.as_deref() {
        Some(raw_issue) => Ok(Selection::new(pin, IssueId::parse(raw_issue)?)),
        None => Ok(service.select_pin(&pin)?),
    }
}
