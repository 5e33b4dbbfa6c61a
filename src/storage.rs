//! Collection store abstraction.
//!
//! This module provides a trait-based abstraction over the key-value
//! collaborator that persists the three photo collections, allowing
//! different storage implementations while maintaining a consistent API.
//!
//! Collections are schemaless: the store holds sequences of raw JSON rows
//! and never enforces record shape. Typing happens at the engine boundary.
//! There is also no transactional guarantee across collections — callers
//! must tolerate collections read at slightly different instants.

use crate::error::Result;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use serde_json::Value;
use std::future::Future;

/// Name of the photo collection.
pub const PHOTOS: &str = "photos";
/// Name of the user collection.
pub const USERS: &str = "users";
/// Name of the tag association collection.
pub const TAGS: &str = "tags";

/// Trait for collection store implementations.
///
/// An absent collection is reported as `Ok(None)` and must be treated by
/// callers as an empty sequence, never as an error.
pub trait CollectionStore: Send + Sync {
    /// Fetch the full contents of a named collection.
    fn get(&self, name: &str) -> impl Future<Output = Result<Option<Vec<Value>>>> + Send;

    /// Replace the full contents of a named collection.
    fn replace(&self, name: &str, rows: Vec<Value>) -> impl Future<Output = Result<()>> + Send;
}

/// In-memory collection store backed by a hash map.
///
/// Never fails; collections exist from the first `replace` onward.
///
/// # Examples
///
/// ```rust
/// use photoshare::{CollectionStore, MemoryStore, PHOTOS};
///
/// futures::executor::block_on(async {
///     let store = MemoryStore::new();
///     assert!(store.get(PHOTOS).await.unwrap().is_none());
///
///     store.replace(PHOTOS, vec![]).await.unwrap();
///     assert_eq!(store.get(PHOTOS).await.unwrap(), Some(vec![]));
/// });
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<FxHashMap<String, Vec<Value>>>,
}

impl MemoryStore {
    /// Create a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of collections that have been written at least once.
    pub fn collection_count(&self) -> usize {
        self.collections.read().len()
    }
}

impl CollectionStore for MemoryStore {
    async fn get(&self, name: &str) -> Result<Option<Vec<Value>>> {
        Ok(self.collections.read().get(name).cloned())
    }

    async fn replace(&self, name: &str, rows: Vec<Value>) -> Result<()> {
        self.collections.write().insert(name.to_string(), rows);
        Ok(())
    }
}
