//! Catalog record definitions

use serde::{Deserialize, Serialize};

/// A catalog record (a book) as supplied by the host and emitted on submit
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    pub title: String,
    pub subtitle: String,
    #[serde(alias = "isbn")]
    pub identifier: String,
    pub description: String,
    pub published: String,
    pub authors: Vec<String>,
    pub thumbnail_url: String,
}

/// The scalar fields of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Title,
    Subtitle,
    Identifier,
    Description,
    Published,
    ThumbnailUrl,
}

impl FieldName {
    /// All scalar fields in display order
    pub const ALL: [FieldName; 6] = [
        FieldName::Title,
        FieldName::Subtitle,
        FieldName::Identifier,
        FieldName::Description,
        FieldName::Published,
        FieldName::ThumbnailUrl,
    ];

    /// Stable key used in logs and host output
    pub fn key(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Subtitle => "subtitle",
            Self::Identifier => "identifier",
            Self::Description => "description",
            Self::Published => "published",
            Self::ThumbnailUrl => "thumbnail_url",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Subtitle => "Subtitle",
            Self::Identifier => "ISBN",
            Self::Description => "Description",
            Self::Published => "Published",
            Self::ThumbnailUrl => "Thumbnail URL",
        }
    }
}

impl Record {
    /// Read the value of a scalar field
    pub fn get(&self, name: FieldName) -> &str {
        match name {
            FieldName::Title => &self.title,
            FieldName::Subtitle => &self.subtitle,
            FieldName::Identifier => &self.identifier,
            FieldName::Description => &self.description,
            FieldName::Published => &self.published,
            FieldName::ThumbnailUrl => &self.thumbnail_url,
        }
    }

    /// Overwrite the value of a scalar field
    pub fn set(&mut self, name: FieldName, value: String) {
        let slot = match name {
            FieldName::Title => &mut self.title,
            FieldName::Subtitle => &mut self.subtitle,
            FieldName::Identifier => &mut self.identifier,
            FieldName::Description => &mut self.description,
            FieldName::Published => &mut self.published,
            FieldName::ThumbnailUrl => &mut self.thumbnail_url,
        };
        *slot = value;
    }
}
