//! Entity structs for the Survey pin/issue/note graph.
//!
//! `Pin` is the aggregate root: it owns its `Issue`s, each issue owns three
//! note lists (one per `BucketKind`), each `Note` owns its `Entry`s. All
//! structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod entry;
mod issue;
mod note;
mod pin;

pub use entry::{Entry, EntryContent};
pub use issue::Issue;
pub use note::Note;
pub use pin::{Marker, Pin};
