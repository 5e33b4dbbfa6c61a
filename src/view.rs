//! Assembled response views.
//!
//! A view is a base row with its derived and requested relational fields
//! attached. Relational fields are `None` when the caller did not select
//! them, and are omitted from serialized output entirely.

use crate::config::Config;
use chrono::{DateTime, Utc};
use photoshare_types::{Photo, PhotoCategory, User};
use serde::Serialize;

/// A photo with derived and resolved fields attached.
///
/// `url` is always present — it is derived from the photo id, never
/// stored. `posted_by` and `tagged_users` are present only when selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoView {
    pub id: String,
    pub url: String,
    pub name: String,
    pub category: PhotoCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "crate::scalar::wire_format")]
    pub created: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_by: Option<UserView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagged_users: Option<Vec<UserView>>,
}

impl PhotoView {
    /// Build a relation-free view of a stored photo.
    pub fn base(photo: &Photo, config: &Config) -> Self {
        Self {
            id: photo.id.clone(),
            url: derive_url(&config.photo_url_base, &photo.id),
            name: photo.name.clone(),
            category: photo.category,
            description: photo.description.clone(),
            created: photo.created,
            posted_by: None,
            tagged_users: None,
        }
    }
}

/// A user with resolved photo lists attached.
///
/// `avatar` is carried on the view for wire compatibility but is never
/// persisted, so it is always absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_photos: Option<Vec<PhotoView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_photos: Option<Vec<PhotoView>>,
}

impl UserView {
    /// Build a relation-free view of a stored user.
    pub fn base(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            avatar: None,
            posted_photos: None,
            in_photos: None,
        }
    }
}

fn derive_url(base: &str, id: &str) -> String {
    format!("{}?text={}", base, id)
}
