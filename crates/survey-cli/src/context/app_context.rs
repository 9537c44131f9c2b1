use std::path::PathBuf;

use anyhow::Context;
use survey_config::SurveyConfig;
use survey_core::clock::SystemClock;
use survey_store::service::SurveyService;

/// Shared application resources initialized once per invocation.
pub struct AppContext {
    pub service: SurveyService,
    pub config: SurveyConfig,
    pub project_root: PathBuf,
}

impl AppContext {
    /// Rebuild the project's state from its journal.
    pub fn init(project_root: PathBuf, config: SurveyConfig) -> anyhow::Result<Self> {
        let state_dir = SurveyConfig::state_dir(&project_root);
        let journal = config.journal.resolve(&state_dir);
        let calendar = config
            .calendar
            .build()
            .context("invalid calendar configuration")?;

        let (service, summary) = SurveyService::open(
            Some(journal.clone()),
            config.journal.enabled,
            calendar,
            Box::new(SystemClock),
        )
        .with_context(|| format!("failed to replay journal at {}", journal.display()))?;

        tracing::debug!(
            journal = %journal.display(),
            operations = summary.operations_replayed,
            pins = summary.pins,
            issues = summary.issues,
            duration_ms = summary.duration_ms,
            "state rebuilt from journal"
        );

        Ok(Self {
            service,
            config,
            project_root,
        })
    }
}
