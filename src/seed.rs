//! Demo dataset.
//!
//! The classic three-skier fixture set: three photos, three users, and
//! four tags, loaded through the [`CollectionStore`] interface. Used by
//! tests and demos.

use crate::engine::Engine;
use crate::error::{PhotoShareError, Result};
use crate::storage::{CollectionStore, PHOTOS, TAGS, USERS};
use chrono::{TimeZone, Utc};
use photoshare_types::{Photo, PhotoCategory, Tag, User};
use serde::Serialize;
use serde_json::Value;

/// The demo photo rows.
pub fn demo_photos() -> Vec<Photo> {
    vec![
        Photo {
            id: "1".to_string(),
            name: "Dropping the Heart Chute".to_string(),
            category: PhotoCategory::Action,
            description: Some("The heart chute is one of my favorite chutes".to_string()),
            author_id: "gPlake".to_string(),
            created: Utc.with_ymd_and_hms(2017, 3, 28, 0, 0, 0).unwrap(),
        },
        Photo {
            id: "2".to_string(),
            name: "Enjoying the sunshine".to_string(),
            category: PhotoCategory::Selfie,
            description: None,
            author_id: "sSchmidt".to_string(),
            created: Utc.with_ymd_and_hms(2017, 4, 15, 19, 9, 57).unwrap(),
        },
        Photo {
            id: "3".to_string(),
            name: "Gunbarrel 25".to_string(),
            category: PhotoCategory::Landscape,
            description: Some("25 laps on gunbarrel today".to_string()),
            author_id: "sSchmidt".to_string(),
            created: Utc.with_ymd_and_hms(2018, 4, 15, 19, 9, 57).unwrap(),
        },
    ]
}

/// The demo user rows.
pub fn demo_users() -> Vec<User> {
    vec![
        User::new("mHattrup", "Mike Hattrup"),
        User::new("gPlake", "Glen Plake"),
        User::new("sSchmidt", "Scot Schmidt"),
    ]
}

/// The demo tag rows.
pub fn demo_tags() -> Vec<Tag> {
    vec![
        Tag::new("1", "gPlake"),
        Tag::new("2", "sSchmidt"),
        Tag::new("2", "mHattrup"),
        Tag::new("2", "gPlake"),
    ]
}

/// Load the demo dataset into a store, replacing all three collections.
pub async fn seed_demo<S: CollectionStore>(store: &S) -> Result<()> {
    store.replace(PHOTOS, encode_all(PHOTOS, &demo_photos())?).await?;
    store.replace(USERS, encode_all(USERS, &demo_users())?).await?;
    store.replace(TAGS, encode_all(TAGS, &demo_tags())?).await?;
    Ok(())
}

impl<S: CollectionStore> Engine<S> {
    /// Load the demo dataset into this engine's store.
    pub async fn seed_demo(&self) -> Result<()> {
        seed_demo(self.store()).await
    }
}

fn encode_all<T: Serialize>(collection: &'static str, records: &[T]) -> Result<Vec<Value>> {
    records
        .iter()
        .map(|record| {
            serde_json::to_value(record).map_err(|source| PhotoShareError::Serialization {
                collection,
                source,
            })
        })
        .collect()
}
