mod entry;
mod image;
mod issue;
mod note;
mod pin;
mod selection;

pub use entry::EntryCommands;
pub use image::ImageCommands;
pub use issue::IssueCommands;
pub use note::NoteCommands;
pub use pin::PinCommands;
pub use selection::{EntryAt, SelectionArgs};
