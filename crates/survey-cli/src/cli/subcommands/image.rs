use std::path::PathBuf;

use clap::Subcommand;

use super::{EntryAt, SelectionArgs};

/// Image commands on a media entry.
#[derive(Clone, Debug, Subcommand)]
pub enum ImageCommands {
    /// Replace one image with the contents of a file.
    Replace {
        #[command(flatten)]
        at: EntryAt,
        /// Image index within the entry
        photo: usize,
        file: PathBuf,
        #[command(flatten)]
        sel: SelectionArgs,
    },
    /// Delete one image.
    Delete {
        #[command(flatten)]
        at: EntryAt,
        /// Image index within the entry
        photo: usize,
        #[command(flatten)]
        sel: SelectionArgs,
    },
}
