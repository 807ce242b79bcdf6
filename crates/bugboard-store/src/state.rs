//! Store state, sliced per entity
//!
//! Collection lists are held behind an `Arc` so that cloning the state per
//! dispatch stays cheap and selectors can memoize on list identity: a
//! reducer that actually touches a list produces a new identity, a reducer
//! that leaves it alone preserves the old one.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::entities::{Bug, Project};

/// Root store state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    pub bugs: BugsState,
    pub projects: ProjectsState,
}

/// Bug collection plus request-status metadata
///
/// `loading` is true only between a `BugsRequested` and the matching
/// `BugsReceived`/`BugsRequestFailed` transition. `last_fetch` is set only
/// on a successful full-collection load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BugsState {
    /// Ordered bug collection
    pub list: Arc<Vec<Bug>>,

    /// Whether a collection load is in flight
    pub loading: bool,

    /// When the collection was last loaded successfully
    pub last_fetch: Option<DateTime<Utc>>,
}

/// Project collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectsState {
    pub list: Arc<Vec<Project>>,
}
