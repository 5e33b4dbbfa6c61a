//! # photoshare-types
//!
//! Core record and input types for the photoshare engine.
//!
//! This crate provides the normalized records stored in the three photo
//! collections:
//!
//! - **Photo records**: [`Photo`], [`PhotoCategory`], [`PostPhotoInput`]
//! - **User records**: [`User`]
//! - **Tag associations**: [`Tag`]
//!
//! All types are serializable with Serde using camelCase wire names
//! (`authorId`, `photoId`, `userId`), matching the collection format the
//! engine reads and writes.
//!
//! ## Examples
//!
//! ```rust
//! use photoshare_types::{Photo, PhotoCategory};
//! use chrono::Utc;
//!
//! let photo = Photo {
//!     id: "1".to_string(),
//!     name: "Dropping the Heart Chute".to_string(),
//!     category: PhotoCategory::Action,
//!     description: None,
//!     author_id: "gPlake".to_string(),
//!     created: Utc::now(),
//! };
//! assert_eq!(photo.category.to_string(), "ACTION");
//! ```

pub mod photo;
pub mod tag;
pub mod user;

pub use photo::{ParseCategoryError, Photo, PhotoCategory, PostPhotoInput};
pub use tag::Tag;
pub use user::User;
