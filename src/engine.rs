//! Query and mutation engine.
//!
//! The engine answers field-selective reads over the three photo
//! collections and appends new photos. Every request loads the collections
//! it needs from the store — there is no caching across requests — and
//! relational fields are computed per row, only when selected.

use crate::builder::EngineBuilder;
use crate::config::Config;
use crate::error::{PhotoShareError, Result};
use crate::ids::IdSource;
use crate::resolve::{self, Dataset};
use crate::select::PhotoSelection;
use crate::storage::{CollectionStore, MemoryStore, PHOTOS, TAGS, USERS};
use crate::view::PhotoView;
use chrono::{DateTime, Utc};
use photoshare_types::{Photo, PostPhotoInput};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// The photoshare engine.
///
/// Generic over its [`CollectionStore`] collaborator; the in-memory store
/// is the default. Construct one with [`Engine::memory`] or through the
/// [builder](EngineBuilder).
///
/// # Examples
///
/// ```rust
/// use photoshare::{Engine, PhotoSelection};
///
/// futures::executor::block_on(async {
///     let engine = Engine::memory()?;
///     engine.seed_demo().await?;
///
///     let photos = engine
///         .list_photos(None, &PhotoSelection::all())
///         .await?;
///     assert_eq!(photos.len(), engine.count_photos().await?);
///     Ok::<(), photoshare::PhotoShareError>(())
/// })
/// .unwrap();
/// ```
pub struct Engine<S: CollectionStore = MemoryStore> {
    store: S,
    config: Config,
    ids: Box<dyn IdSource>,
}

impl Engine<MemoryStore> {
    /// Create an engine over a fresh in-memory store with default
    /// configuration.
    pub fn memory() -> Result<Self> {
        Self::builder().build()
    }

    /// Start building an engine.
    pub fn builder() -> EngineBuilder<MemoryStore> {
        EngineBuilder::new()
    }
}

impl<S: CollectionStore> Engine<S> {
    pub(crate) fn from_parts(store: S, config: Config, ids: Box<dyn IdSource>) -> Self {
        Self { store, config, ids }
    }

    /// The engine's store, for seeding and inspection.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The engine's configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// List photos in their natural collection order.
    ///
    /// When `after` is present, only photos with `created` strictly
    /// greater than it survive; a photo created exactly at `after` is
    /// excluded. Absent, every row is returned.
    ///
    /// For each surviving row, exactly the relations named by `selection`
    /// are resolved. A broken required relation (a photo whose author is
    /// missing) aborts the whole listing — a response with rows silently
    /// missing would be worse than a whole-request failure.
    pub async fn list_photos(
        &self,
        after: Option<DateTime<Utc>>,
        selection: &PhotoSelection,
    ) -> Result<Vec<PhotoView>> {
        log::debug!("listing photos (after: {:?})", after);
        let dataset = self.load_dataset().await?;

        dataset
            .photos
            .iter()
            .filter(|photo| match after {
                Some(after) => photo.created > after,
                None => true,
            })
            .map(|photo| resolve::build_photo_view(photo, &dataset, selection, &self.config))
            .collect()
    }

    /// Number of photos in the collection. No filter applies.
    pub async fn count_photos(&self) -> Result<usize> {
        let rows = self.store.get(PHOTOS).await?;
        Ok(rows.map_or(0, |rows| rows.len()))
    }

    /// Append a new photo authored by `author_id`.
    ///
    /// The id is generated, distinct from every existing id; an omitted
    /// category defaults to portrait; `created` is stamped now. The author
    /// is deliberately not checked against the user collection — the write
    /// path accepts the reference as given.
    pub async fn create_photo(&self, author_id: &str, input: PostPhotoInput) -> Result<PhotoView> {
        if input.name.is_empty() {
            return Err(PhotoShareError::InvalidInput(
                "photo name must not be empty".to_string(),
            ));
        }

        let mut rows = self.store.get(PHOTOS).await?.unwrap_or_default();

        let photo = Photo {
            id: self.fresh_id(&rows),
            name: input.name,
            category: input.category.unwrap_or_default(),
            description: input.description,
            author_id: author_id.to_string(),
            created: Utc::now(),
        };
        log::debug!("posting photo {} by {}", photo.id, photo.author_id);

        rows.push(encode_row(PHOTOS, &photo)?);
        self.store.replace(PHOTOS, rows).await?;

        Ok(PhotoView::base(&photo, &self.config))
    }

    fn fresh_id(&self, rows: &[Value]) -> String {
        loop {
            let candidate = self.ids.next_id();
            if !rows.iter().any(|row| row_has_id(row, &candidate)) {
                return candidate;
            }
        }
    }

    /// Read all three collections with one concurrent fan-out.
    async fn load_dataset(&self) -> Result<Dataset> {
        let (photos, users, tags) = futures::try_join!(
            self.store.get(PHOTOS),
            self.store.get(USERS),
            self.store.get(TAGS),
        )?;

        Ok(Dataset {
            photos: decode_rows(PHOTOS, photos)?,
            users: decode_rows(USERS, users)?,
            tags: decode_rows(TAGS, tags)?,
        })
    }
}

/// Id comparison tolerant of legacy rows carrying numeric ids.
fn row_has_id(row: &Value, candidate: &str) -> bool {
    match row.get("id") {
        Some(Value::String(id)) => id == candidate,
        Some(Value::Number(n)) => n.to_string() == candidate,
        _ => false,
    }
}

fn decode_rows<T: DeserializeOwned>(
    collection: &'static str,
    rows: Option<Vec<Value>>,
) -> Result<Vec<T>> {
    rows.unwrap_or_default()
        .into_iter()
        .map(|row| {
            serde_json::from_value(row).map_err(|source| PhotoShareError::Serialization {
                collection,
                source,
            })
        })
        .collect()
}

fn encode_row<T: Serialize>(collection: &'static str, record: &T) -> Result<Value> {
    serde_json::to_value(record).map_err(|source| PhotoShareError::Serialization {
        collection,
        source,
    })
}
