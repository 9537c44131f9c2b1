use clap::Subcommand;

use super::{EntryAt, SelectionArgs};

/// Entry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EntryCommands {
    /// Delete an entry. A note left empty goes with it.
    Delete {
        #[command(flatten)]
        at: EntryAt,
        #[command(flatten)]
        sel: SelectionArgs,
    },
    /// Copy an entry into another bucket.
    Copy {
        #[command(flatten)]
        at: EntryAt,
        /// Destination bucket
        to: String,
        #[command(flatten)]
        sel: SelectionArgs,
    },
    /// Move an entry into another bucket.
    Move {
        #[command(flatten)]
        at: EntryAt,
        /// Destination bucket
        to: String,
        #[command(flatten)]
        sel: SelectionArgs,
    },
}
