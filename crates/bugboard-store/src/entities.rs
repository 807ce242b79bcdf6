//! Domain records exchanged with the tracker API
//!
//! Wire names are camelCase (`userId`), so the serde renames here are what
//! keep the Rust field names idiomatic.

use serde::{Deserialize, Serialize};

/// A bug record, both as stored and as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bug {
    /// Server-assigned identity
    pub id: u64,

    /// Free-form description
    pub description: String,

    /// Whether the bug has been resolved
    #[serde(default)]
    pub resolved: bool,

    /// User the bug is assigned to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

/// Payload for creating a bug; the server assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBug {
    /// Free-form description
    pub description: String,
}

impl NewBug {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A project bugs can be grouped under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
}
