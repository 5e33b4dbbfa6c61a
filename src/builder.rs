//! Engine builder for flexible configuration.
//!
//! This module provides a builder pattern for creating engines with a
//! custom store, configuration, or identifier source.

use crate::config::Config;
use crate::engine::Engine;
use crate::error::{PhotoShareError, Result};
use crate::ids::{IdSource, SerialIds};
use crate::storage::{CollectionStore, MemoryStore};

/// Builder for engine configuration.
///
/// # Examples
///
/// ```rust
/// use photoshare::{Config, Engine, UuidIds};
///
/// let engine = Engine::builder()
///     .config(Config::default().with_photo_url_base("https://img.example.com/p"))
///     .id_source(UuidIds::new())
///     .build()
///     .unwrap();
/// assert_eq!(engine.config().photo_url_base, "https://img.example.com/p");
/// ```
pub struct EngineBuilder<S: CollectionStore = MemoryStore> {
    store: S,
    config: Config,
    ids: Box<dyn IdSource>,
}

impl EngineBuilder<MemoryStore> {
    /// Create a new builder over a fresh in-memory store.
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(),
            config: Config::default(),
            ids: Box::new(SerialIds::new()),
        }
    }
}

impl Default for EngineBuilder<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CollectionStore> EngineBuilder<S> {
    /// Use a custom collection store.
    pub fn store<T: CollectionStore>(self, store: T) -> EngineBuilder<T> {
        EngineBuilder {
            store,
            config: self.config,
            ids: self.ids,
        }
    }

    /// Use a custom configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Use a custom identifier source for posted photos.
    pub fn id_source<I: IdSource + 'static>(mut self, ids: I) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Validate the configuration and build the engine.
    pub fn build(self) -> Result<Engine<S>> {
        self.config
            .validate()
            .map_err(PhotoShareError::InvalidInput)?;

        Ok(Engine::from_parts(self.store, self.config, self.ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_build_succeeds() {
        assert!(EngineBuilder::new().build().is_ok());
    }

    #[test]
    fn invalid_config_fails_build() {
        let result = Engine::builder()
            .config(Config::default().with_photo_url_base(""))
            .build();

        assert!(matches!(
            result,
            Err(PhotoShareError::InvalidInput(_))
        ));
    }
}
