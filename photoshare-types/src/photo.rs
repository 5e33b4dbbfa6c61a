use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A stored photo record.
///
/// Photos are normalized: the record carries the author as a foreign key
/// (`author_id`, wire name `authorId`) rather than an embedded user, and the
/// public URL is derived from `id` by the engine rather than stored.
///
/// `created` is assigned once when the photo is posted and never changes.
///
/// # Examples
///
/// ```
/// use photoshare_types::{Photo, PhotoCategory};
/// use chrono::{TimeZone, Utc};
///
/// let photo = Photo {
///     id: "2".to_string(),
///     name: "Enjoying the sunshine".to_string(),
///     category: PhotoCategory::Selfie,
///     description: None,
///     author_id: "sSchmidt".to_string(),
///     created: Utc.with_ymd_and_hms(2017, 4, 15, 19, 9, 57).unwrap(),
/// };
/// assert_eq!(photo.author_id, "sSchmidt");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Opaque unique identifier
    pub id: String,
    /// Non-empty display name
    pub name: String,
    /// Closed category classification
    pub category: PhotoCategory,
    /// Optional free-text description
    pub description: Option<String>,
    /// Foreign key into the user collection
    pub author_id: String,
    /// Creation timestamp, assigned once at post time
    pub created: DateTime<Utc>,
}

/// Closed set of photo categories.
///
/// Wire values are SCREAMING_SNAKE_CASE (`"SELFIE"`, `"PORTRAIT"`, ...);
/// anything else is rejected during deserialization. The default is
/// `Portrait`, which is also the category applied when a post omits one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhotoCategory {
    Selfie,
    #[default]
    Portrait,
    Action,
    Landscape,
    Graphic,
}

impl PhotoCategory {
    /// All categories, in declaration order.
    pub const ALL: [PhotoCategory; 5] = [
        PhotoCategory::Selfie,
        PhotoCategory::Portrait,
        PhotoCategory::Action,
        PhotoCategory::Landscape,
        PhotoCategory::Graphic,
    ];

    /// The wire form of this category.
    pub fn as_str(self) -> &'static str {
        match self {
            PhotoCategory::Selfie => "SELFIE",
            PhotoCategory::Portrait => "PORTRAIT",
            PhotoCategory::Action => "ACTION",
            PhotoCategory::Landscape => "LANDSCAPE",
            PhotoCategory::Graphic => "GRAPHIC",
        }
    }
}

impl fmt::Display for PhotoCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized category string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized photo category '{}'", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for PhotoCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhotoCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Input for posting a new photo.
///
/// The author is not part of the input; it is supplied separately from the
/// caller's context. An omitted category falls back to
/// [`PhotoCategory::Portrait`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPhotoInput {
    pub name: String,
    pub category: Option<PhotoCategory>,
    pub description: Option<String>,
}

impl PostPhotoInput {
    /// Create an input with just a name, leaving category and description
    /// to their defaults.
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            category: None,
            description: None,
        }
    }

    pub fn with_category(mut self, category: PhotoCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }
}
