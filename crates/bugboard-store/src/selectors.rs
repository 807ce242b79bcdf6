//! Memoized read-only projections of store state
//!
//! Selectors cache on the identity of their declared dependencies, not on
//! deep equality: as long as the underlying lists keep their `Arc`
//! identity, the cached output is returned as a shared handle without
//! recomputation.

use std::sync::{Arc, Mutex};

use crate::entities::Bug;
use crate::state::StoreState;

/// The bug collection unchanged
pub fn bugs(state: &StoreState) -> Arc<Vec<Bug>> {
    Arc::clone(&state.bugs.list)
}

/// Memoized unresolved-bugs selector
///
/// Declared dependencies are the bug list and the project list; the cached
/// output is invalidated when either changes identity.
pub struct UnresolvedBugs {
    cache: Mutex<Option<UnresolvedCache>>,
}

struct UnresolvedCache {
    bugs: Arc<Vec<Bug>>,
    projects: Arc<Vec<crate::entities::Project>>,
    output: Arc<Vec<Bug>>,
}

impl UnresolvedBugs {
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(None),
        }
    }

    /// Bugs whose `resolved` flag is not set
    pub fn select(&self, state: &StoreState) -> Arc<Vec<Bug>> {
        let mut cache = self.cache.lock().unwrap();
        if let Some(entry) = cache.as_ref() {
            if Arc::ptr_eq(&entry.bugs, &state.bugs.list)
                && Arc::ptr_eq(&entry.projects, &state.projects.list)
            {
                return Arc::clone(&entry.output);
            }
        }

        let output: Arc<Vec<Bug>> = Arc::new(
            state
                .bugs
                .list
                .iter()
                .filter(|bug| !bug.resolved)
                .cloned()
                .collect(),
        );
        *cache = Some(UnresolvedCache {
            bugs: Arc::clone(&state.bugs.list),
            projects: Arc::clone(&state.projects.list),
            output: Arc::clone(&output),
        });
        output
    }
}

impl Default for UnresolvedBugs {
    fn default() -> Self {
        Self::new()
    }
}

/// Memoized selector closed over a user id
pub struct BugsByUser {
    user_id: u64,
    cache: Mutex<Option<(Arc<Vec<Bug>>, Arc<Vec<Bug>>)>>,
}

impl BugsByUser {
    pub fn new(user_id: u64) -> Self {
        Self {
            user_id,
            cache: Mutex::new(None),
        }
    }

    /// Bugs assigned to the captured user
    pub fn select(&self, state: &StoreState) -> Arc<Vec<Bug>> {
        let mut cache = self.cache.lock().unwrap();
        if let Some((input, output)) = cache.as_ref() {
            if Arc::ptr_eq(input, &state.bugs.list) {
                return Arc::clone(output);
            }
        }

        let output: Arc<Vec<Bug>> = Arc::new(
            state
                .bugs
                .list
                .iter()
                .filter(|bug| bug.user_id == Some(self.user_id))
                .cloned()
                .collect(),
        );
        *cache = Some((Arc::clone(&state.bugs.list), Arc::clone(&output)));
        output
    }
}
