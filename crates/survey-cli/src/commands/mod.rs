pub mod dispatch;
pub mod entry;
pub mod image;
pub mod issue;
pub mod note;
pub mod pin;
pub mod shared;
pub mod show;
