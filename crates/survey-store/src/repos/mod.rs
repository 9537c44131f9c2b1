//! Store operations, one module per part of the graph they touch.

mod entry;
mod issue;
mod media;
mod note;
mod pin;
