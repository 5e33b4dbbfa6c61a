//! Engine configuration.
//!
//! Configuration is designed to be easily serializable and loadable from
//! JSON while keeping complexity minimal. Every field has a default, so
//! `{}` is a valid configuration document.

use serde::de::Error;
use serde::{Deserialize, Serialize};

/// Engine configuration.
///
/// # Example
///
/// ```rust
/// use photoshare::Config;
///
/// let config = Config::default();
///
/// // Load from JSON
/// let json = r#"{ "photo_url_base": "https://img.example.com/photo" }"#;
/// let config = Config::from_json(json).unwrap();
/// assert!(config.photo_url_base.starts_with("https://img"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL that photo URLs are derived from. The photo id is appended
    /// as a `text` query parameter.
    #[serde(default = "Config::default_photo_url_base")]
    pub photo_url_base: String,
}

impl Config {
    fn default_photo_url_base() -> String {
        "https://via.placeholder.com/640x360/0bd/fff".to_string()
    }

    pub fn with_photo_url_base<S: Into<String>>(mut self, base: S) -> Self {
        self.photo_url_base = base.into();
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.photo_url_base.is_empty() {
            return Err("Photo URL base must not be empty".to_string());
        }

        Ok(())
    }

    /// Load configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            photo_url_base: Self::default_photo_url_base(),
        }
    }
}
