//! Identifier sources for newly posted photos.
//!
//! The source is owned by the engine instance rather than being
//! process-global, so multiple engines (e.g. in tests) never share
//! sequence state. The engine additionally skips any candidate already
//! present in the photo collection, so a source only has to be eventually
//! fresh, not globally unique.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// A source of candidate photo identifiers.
pub trait IdSource: Send + Sync {
    /// Produce the next candidate identifier.
    fn next_id(&self) -> String;
}

/// Monotonic per-instance counter. The default source.
///
/// # Examples
///
/// ```rust
/// use photoshare::{IdSource, SerialIds};
///
/// let ids = SerialIds::new();
/// assert_eq!(ids.next_id(), "1");
/// assert_eq!(ids.next_id(), "2");
///
/// // A second source starts over: no shared state.
/// assert_eq!(SerialIds::new().next_id(), "1");
/// ```
#[derive(Debug, Default)]
pub struct SerialIds {
    next: AtomicU64,
}

impl SerialIds {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }
}

impl IdSource for SerialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        n.to_string()
    }
}

/// Collision-resistant random identifiers (UUID v4).
#[derive(Debug, Default)]
pub struct UuidIds;

impl UuidIds {
    pub fn new() -> Self {
        Self
    }
}

impl IdSource for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
