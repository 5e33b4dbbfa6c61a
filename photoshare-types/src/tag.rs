use serde::{Deserialize, Serialize};

/// A many-to-many "user appears in photo" association.
///
/// Tags are append-only rows with no uniqueness constraint; duplicate rows
/// are tolerated and produce duplicate join results downstream. Both sides
/// are soft references: a tag pointing at a missing photo or user is
/// dropped during resolution, not treated as an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Foreign key into the photo collection
    pub photo_id: String,
    /// Foreign key into the user collection
    pub user_id: String,
}

impl Tag {
    pub fn new<P: Into<String>, U: Into<String>>(photo_id: P, user_id: U) -> Self {
        Self {
            photo_id: photo_id.into(),
            user_id: user_id.into(),
        }
    }
}
