use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EntryKind;
use crate::media::Image;

/// Content of an entry: text or images, never both.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum EntryContent {
    Text(String),
    Media(Vec<Image>),
}

/// A dated unit of content inside a note.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Entry {
    pub date: DateTime<Utc>,
    pub content: EntryContent,
}

impl Entry {
    #[must_use]
    pub fn text(date: DateTime<Utc>, text: impl Into<String>) -> Self {
        Self {
            date,
            content: EntryContent::Text(text.into()),
        }
    }

    #[must_use]
    pub const fn media(date: DateTime<Utc>, images: Vec<Image>) -> Self {
        Self {
            date,
            content: EntryContent::Media(images),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        match self.content {
            EntryContent::Text(_) => EntryKind::Text,
            EntryContent::Media(_) => EntryKind::Media,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            EntryContent::Text(text) => Some(text),
            EntryContent::Media(_) => None,
        }
    }

    #[must_use]
    pub fn images(&self) -> Option<&[Image]> {
        match &self.content {
            EntryContent::Media(images) => Some(images),
            EntryContent::Text(_) => None,
        }
    }

    pub fn images_mut(&mut self) -> Option<&mut Vec<Image>> {
        match &mut self.content {
            EntryContent::Media(images) => Some(images),
            EntryContent::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_is_internally_tagged() {
        let entry = Entry::text(Utc::now(), "Crack in wall");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["content"]["kind"], "text");
        assert_eq!(json["content"]["value"], "Crack in wall");
    }

    #[test]
    fn accessors_respect_kind() {
        let now = Utc::now();
        let text = Entry::text(now, "x");
        assert_eq!(text.kind(), EntryKind::Text);
        assert!(text.images().is_none());

        let mut media = Entry::media(now, vec![Image::new("a.png", vec![1])]);
        assert_eq!(media.kind(), EntryKind::Media);
        assert!(media.as_text().is_none());
        media.images_mut().unwrap().clear();
        assert_eq!(media.images().map(<[Image]>::len), Some(0));
    }
}
