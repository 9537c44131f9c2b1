pub mod media;
pub mod parse;
pub mod rows;
pub mod selection;
