use clap::Subcommand;

use super::SelectionArgs;

/// Issue commands.
#[derive(Clone, Debug, Subcommand)]
pub enum IssueCommands {
    /// Add an issue to a pin.
    Add {
        /// Pin ID or marker label
        pin: String,
    },
    /// List a pin's issues.
    List {
        /// Pin ID or marker label
        pin: String,
        /// Filter: all, open, closed
        #[arg(long, default_value = "all")]
        status: String,
    },
    /// Rename the selected issue.
    Rename {
        name: String,
        #[command(flatten)]
        sel: SelectionArgs,
    },
    /// Open or close the selected issue.
    Status {
        /// open or closed
        status: String,
        #[command(flatten)]
        sel: SelectionArgs,
    },
    /// Select the pin's next issue, wrapping around.
    Next {
        #[command(flatten)]
        sel: SelectionArgs,
    },
    /// Select the pin's previous issue, wrapping around.
    Prev {
        #[command(flatten)]
        sel: SelectionArgs,
    },
}
