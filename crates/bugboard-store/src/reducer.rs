//! Pure state-transition functions
//!
//! The root reducer delegates to one reducer per state slice. Matches are
//! exhaustive on purpose; adding an action variant forces every reducer to
//! take a position on it.

use std::sync::Arc;

use chrono::Utc;
use log::warn;

use crate::actions::Action;
use crate::state::{BugsState, ProjectsState, StoreState};

/// Root reducer that delegates to sub-reducers per slice
///
/// Pure function: takes state and action, returns the new state. No I/O
/// happens here; side effects live in the middleware chain.
pub fn reduce(mut state: StoreState, action: &Action) -> StoreState {
    state.bugs = bugs_reducer(state.bugs, action);
    state.projects = projects_reducer(state.projects, action);
    state
}

fn bugs_reducer(mut state: BugsState, action: &Action) -> BugsState {
    match action {
        Action::BugsRequested => {
            state.loading = true;
        }
        Action::BugsReceived(bugs) => {
            // Last write wins; the payload replaces the list wholesale.
            state.list = Arc::new(bugs.clone());
            state.loading = false;
            state.last_fetch = Some(Utc::now());
        }
        Action::BugsRequestFailed => {
            state.loading = false;
        }
        Action::BugAdded(bug) => {
            Arc::make_mut(&mut state.list).push(bug.clone());
        }
        Action::BugResolved { id } => match state.list.iter().position(|bug| bug.id == *id) {
            Some(index) => Arc::make_mut(&mut state.list)[index].resolved = true,
            None => warn!("bug {} not found, resolve ignored", id),
        },
        Action::BugAssignedToUser { id, user_id } => {
            match state.list.iter().position(|bug| bug.id == *id) {
                Some(index) => Arc::make_mut(&mut state.list)[index].user_id = Some(*user_id),
                None => warn!("bug {} not found, assignment ignored", id),
            }
        }
        Action::ProjectAdded(_)
        | Action::ApiCallBegan(_)
        | Action::ApiCallSucceeded(_)
        | Action::ApiCallFailed(_)
        | Action::Error { .. } => {}
    }
    state
}

fn projects_reducer(mut state: ProjectsState, action: &Action) -> ProjectsState {
    match action {
        Action::ProjectAdded(project) => {
            Arc::make_mut(&mut state.list).push(project.clone());
        }
        Action::ApiCallBegan(_)
        | Action::ApiCallSucceeded(_)
        | Action::ApiCallFailed(_)
        | Action::BugsRequested
        | Action::BugsReceived(_)
        | Action::BugsRequestFailed
        | Action::BugAdded(_)
        | Action::BugResolved { .. }
        | Action::BugAssignedToUser { .. }
        | Action::Error { .. } => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Bug, Project};

    fn bug(id: u64, description: &str) -> Bug {
        Bug {
            id,
            description: description.to_string(),
            resolved: false,
            user_id: None,
        }
    }

    #[test]
    fn test_bugs_requested_sets_loading() {
        let state = reduce(StoreState::default(), &Action::BugsRequested);
        assert!(state.bugs.loading);
    }

    #[test]
    fn test_bugs_received_replaces_list() {
        let mut state = reduce(StoreState::default(), &Action::BugsRequested);
        state = reduce(state, &Action::BugsReceived(vec![bug(1, "a"), bug(2, "b")]));
        assert_eq!(state.bugs.list.len(), 2);
        assert!(!state.bugs.loading);
        assert!(state.bugs.last_fetch.is_some());

        // Last write wins, no merge with the previous payload.
        state = reduce(state, &Action::BugsReceived(vec![bug(3, "c")]));
        assert_eq!(state.bugs.list.len(), 1);
        assert_eq!(state.bugs.list[0].id, 3);
    }

    #[test]
    fn test_bugs_request_failed_clears_loading_only() {
        let mut state = reduce(StoreState::default(), &Action::BugsReceived(vec![bug(1, "a")]));
        state = reduce(state, &Action::BugsRequested);
        state = reduce(state, &Action::BugsRequestFailed);
        assert!(!state.bugs.loading);
        assert_eq!(state.bugs.list.len(), 1);
    }

    #[test]
    fn test_bug_added_appends() {
        let mut state = reduce(StoreState::default(), &Action::BugAdded(bug(1, "a")));
        state = reduce(state, &Action::BugAdded(bug(2, "b")));
        assert_eq!(state.bugs.list.len(), 2);
        assert_eq!(state.bugs.list[1].id, 2);
    }

    #[test]
    fn test_bug_resolved_marks_bug() {
        let mut state = reduce(StoreState::default(), &Action::BugAdded(bug(1, "a")));
        state = reduce(state, &Action::BugResolved { id: 1 });
        assert!(state.bugs.list[0].resolved);
    }

    #[test]
    fn test_bug_resolved_unknown_id_is_noop() {
        let before = reduce(StoreState::default(), &Action::BugAdded(bug(1, "a")));
        let after = reduce(before.clone(), &Action::BugResolved { id: 42 });
        assert_eq!(before, after);
    }

    #[test]
    fn test_bug_assigned_sets_user() {
        let mut state = reduce(StoreState::default(), &Action::BugAdded(bug(1, "a")));
        state = reduce(state, &Action::BugAssignedToUser { id: 1, user_id: 7 });
        assert_eq!(state.bugs.list[0].user_id, Some(7));
    }

    #[test]
    fn test_bug_assigned_unknown_id_is_noop() {
        let before = reduce(StoreState::default(), &Action::BugAdded(bug(1, "a")));
        let after = reduce(
            before.clone(),
            &Action::BugAssignedToUser { id: 42, user_id: 7 },
        );
        assert_eq!(before, after);
    }

    #[test]
    fn test_project_added_appends() {
        let project = Project {
            id: 1,
            name: "core".to_string(),
        };
        let state = reduce(StoreState::default(), &Action::ProjectAdded(project));
        assert_eq!(state.projects.list.len(), 1);
    }

    #[test]
    fn test_generic_actions_leave_state_unchanged() {
        let before = reduce(StoreState::default(), &Action::BugAdded(bug(1, "a")));
        let after = reduce(
            before.clone(),
            &Action::ApiCallFailed("boom".to_string()),
        );
        assert_eq!(before, after);
    }

    #[test]
    fn test_untouched_list_keeps_identity() {
        let before = reduce(StoreState::default(), &Action::BugAdded(bug(1, "a")));
        let after = reduce(before.clone(), &Action::BugsRequested);
        assert!(Arc::ptr_eq(&before.bugs.list, &after.bugs.list));
    }
}
