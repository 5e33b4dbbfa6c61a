//! Error types for the photoshare engine.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PhotoShareError>;

/// Errors surfaced by the photoshare engine.
///
/// Soft-association misses (a tag pointing at a missing user or photo) are
/// not errors; they are filtered out of results and never appear here.
#[derive(Debug, Error)]
pub enum PhotoShareError {
    /// A temporal value failed coercion at one of the scalar boundaries
    /// (wire value, query literal, or internal timestamp).
    #[error("invalid temporal scalar `{value}`: {reason}")]
    InvalidScalarInput { value: String, reason: String },

    /// A required relational lookup found no match. Carries the record and
    /// the reference that broke so callers can name the violated invariant.
    #[error("photo `{photo}` references missing author `{author}`")]
    DanglingReference { photo: String, author: String },

    /// A stored row could not be decoded into its record type.
    #[error("failed to decode record in `{collection}` collection: {source}")]
    Serialization {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid caller-supplied input or configuration.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The storage collaborator reported a failure.
    #[error("storage error: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dangling_reference_names_record_and_relation() {
        let err = PhotoShareError::DanglingReference {
            photo: "1".to_string(),
            author: "gPlake".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("1"));
        assert!(message.contains("gPlake"));
    }
}
