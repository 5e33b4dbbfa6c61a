use serde::{Deserialize, Serialize};

/// A stored user record.
///
/// `id` is an opaque login handle (e.g. `"gPlake"`). The avatar is not
/// persisted in this store; it surfaces on assembled views as always
/// absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque unique identifier, typically a login handle
    pub id: String,
    /// Optional display name
    pub name: Option<String>,
}

impl User {
    pub fn new<I: Into<String>, N: Into<String>>(id: I, name: N) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }
}
