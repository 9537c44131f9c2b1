use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    EntryCommands, ImageCommands, IssueCommands, NoteCommands, PinCommands, SelectionArgs,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Pins on the site map.
    Pin {
        #[command(subcommand)]
        action: PinCommands,
    },
    /// List every pin's marker.
    Markers,
    /// Issues attached to a pin.
    Issue {
        #[command(subcommand)]
        action: IssueCommands,
    },
    /// Dated notes in an issue's buckets.
    Note {
        #[command(subcommand)]
        action: NoteCommands,
    },
    /// Single entries within a note.
    Entry {
        #[command(subcommand)]
        action: EntryCommands,
    },
    /// Images of a media entry.
    Image {
        #[command(subcommand)]
        action: ImageCommands,
    },
    /// Show the selected issue's buckets.
    Show(ShowArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Only this bucket: reports, need-approval, inspiration-board
    #[arg(long)]
    pub bucket: Option<String>,
    #[command(flatten)]
    pub sel: SelectionArgs,
}
