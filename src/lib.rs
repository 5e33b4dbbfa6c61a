//! Embedded photo-sharing dataset engine with per-field relational
//! resolution and temporal queries.
//!
//! The engine answers typed, field-selective reads over three normalized
//! in-memory collections (photos, users, tag associations), joining
//! related rows on demand rather than eagerly, and coercing temporal
//! values between wire, query-literal, and internal representations.
//!
//! ## Error policy
//! Authorship is a required relation: a photo whose author is missing from
//! the user collection fails the whole request rather than producing a
//! placeholder. Tag associations are soft: a tag pointing at a missing
//! user or photo is dropped from the result, never an error.
//!
//! ```rust
//! use photoshare::{Engine, PhotoSelection, PostPhotoInput, UserSelection};
//!
//! futures::executor::block_on(async {
//!     let engine = Engine::memory()?;
//!     engine.seed_demo().await?;
//!
//!     // Resolve the author (with their photo lists) for every photo.
//!     let selection = PhotoSelection::default().with_posted_by(UserSelection::all());
//!     let photos = engine.list_photos(None, &selection).await?;
//!     assert_eq!(photos.len(), engine.count_photos().await?);
//!
//!     // Append a new photo.
//!     let posted = engine
//!         .create_photo("gPlake", PostPhotoInput::named("Fresh tracks"))
//!         .await?;
//!     assert!(posted.url.ends_with(&posted.id));
//!     # Ok::<(), photoshare::PhotoShareError>(())
//! })
//! .unwrap();
//! ```

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod ids;
pub mod resolve;
pub mod scalar;
pub mod seed;
pub mod select;
pub mod storage;
pub mod view;

pub use builder::EngineBuilder;
pub use config::Config;
pub use engine::Engine;
pub use error::{PhotoShareError, Result};

pub type PhotoShare = Engine;

pub use photoshare_types::{
    ParseCategoryError, Photo, PhotoCategory, PostPhotoInput, Tag, User,
};

pub use ids::{IdSource, SerialIds, UuidIds};
pub use resolve::{
    author_of, photos_authored_by, photos_featuring, tagged_users_of, Dataset,
};
pub use scalar::{decode_literal, decode_wire, encode_wire, Literal};
pub use select::{PhotoRelation, PhotoSelection, UserRelation, UserSelection};
pub use storage::{CollectionStore, MemoryStore, PHOTOS, TAGS, USERS};
pub use view::{PhotoView, UserView};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Engine, EngineBuilder, PhotoShareError, Result};

    pub use crate::{Photo, PhotoCategory, PostPhotoInput, Tag, User};

    pub use crate::{PhotoSelection, UserSelection};

    pub use crate::{CollectionStore, MemoryStore};

    pub use crate::Config;
}
