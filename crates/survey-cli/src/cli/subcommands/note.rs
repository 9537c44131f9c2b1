use std::path::PathBuf;

use clap::Subcommand;

use super::SelectionArgs;

/// Note commands. New entries join the bucket's note for today.
#[derive(Clone, Debug, Subcommand)]
pub enum NoteCommands {
    /// Add a text entry.
    AddText {
        bucket: String,
        text: String,
        #[command(flatten)]
        sel: SelectionArgs,
    },
    /// Add one media entry holding every given image, in argument order.
    AddMedia {
        bucket: String,
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[command(flatten)]
        sel: SelectionArgs,
    },
    /// Delete a whole note.
    Delete {
        bucket: String,
        note: usize,
        #[command(flatten)]
        sel: SelectionArgs,
    },
    /// Expand or collapse a note.
    Toggle {
        bucket: String,
        note: usize,
        #[command(flatten)]
        sel: SelectionArgs,
    },
}
