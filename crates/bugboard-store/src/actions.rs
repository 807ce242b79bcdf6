//! Action vocabulary and dispatchable units
//!
//! Actions are a closed enum, so reducers and middleware match them
//! exhaustively and an unhandled kind is a compile error rather than a
//! silently ignored string tag. The callback slots of an [`ApiCall`] are
//! closed enums as well; they name the lifecycle action to build, and the
//! API middleware turns them into concrete actions when the request
//! starts, succeeds, or fails.

use bugboard_client::HttpMethod;
use serde::Deserialize;
use serde_json::Value;

use crate::entities::{Bug, Project};

/// A state transition request processed by the reducers
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// An API call was requested; recognized by the API middleware and a
    /// no-op in the reducers
    ApiCallBegan(ApiCall),
    /// Any API call completed successfully, carrying the response body
    ApiCallSucceeded(Value),
    /// Any API call failed, carrying a rendered message
    ApiCallFailed(String),

    /// A bug collection load started
    BugsRequested,
    /// The bug collection arrived; replaces the list wholesale
    BugsReceived(Vec<Bug>),
    /// The bug collection load failed; the list is left unchanged
    BugsRequestFailed,
    /// The server confirmed a newly created bug
    BugAdded(Bug),
    /// The server confirmed a bug was resolved
    BugResolved { id: u64 },
    /// The server confirmed a bug assignment
    BugAssignedToUser { id: u64, user_id: u64 },

    /// A project was added locally
    ProjectAdded(Project),

    /// Error-tagged action routed to the notification sink
    Error { message: String },
}

/// A unit accepted by the dispatch pipeline
///
/// The two-case split replaces the source-of-truth pattern of passing a
/// function where an action is expected: an [`Effect`] is a described
/// asynchronous operation the pipeline knows how to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatchable {
    Action(Action),
    Effect(Effect),
}

impl From<Action> for Dispatchable {
    fn from(action: Action) -> Self {
        Self::Action(action)
    }
}

impl From<Effect> for Dispatchable {
    fn from(effect: Effect) -> Self {
        Self::Effect(effect)
    }
}

/// A described asynchronous operation executed by the effect middleware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the bug collection, unless a recent fetch is still fresh
    LoadBugs,
}

/// Declarative request specification carried by [`Action::ApiCallBegan`]
///
/// Constructed per dispatch and never persisted. The three optional slots
/// name the lifecycle actions to dispatch alongside the generic ones.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    /// Path below the configured base endpoint (e.g., "/bugs")
    pub url: String,
    /// HTTP method to use
    pub method: HttpMethod,
    /// Optional JSON request body
    pub body: Option<Value>,
    /// Dispatched before the request goes out
    pub on_start: Option<StartAction>,
    /// Dispatched with the decoded response body on success
    pub on_success: Option<SuccessAction>,
    /// Dispatched after the generic failure action on failure
    pub on_error: Option<FailureAction>,
}

/// Lifecycle action dispatched before the request goes out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartAction {
    BugsRequested,
}

impl StartAction {
    pub fn into_action(self) -> Action {
        match self {
            StartAction::BugsRequested => Action::BugsRequested,
        }
    }
}

/// Lifecycle action built from the response body on success
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessAction {
    BugsReceived,
    BugAdded,
    BugResolved,
    BugAssigned,
}

impl SuccessAction {
    /// Build the concrete action from the response body
    ///
    /// # Errors
    ///
    /// Returns the deserialization error when the body does not match the
    /// payload the action expects; the API middleware turns that into the
    /// failure path.
    pub fn into_action(self, body: &Value) -> Result<Action, serde_json::Error> {
        match self {
            SuccessAction::BugsReceived => Ok(Action::BugsReceived(Vec::<Bug>::deserialize(body)?)),
            SuccessAction::BugAdded => Ok(Action::BugAdded(Bug::deserialize(body)?)),
            SuccessAction::BugResolved => {
                let bug = BugRef::deserialize(body)?;
                Ok(Action::BugResolved { id: bug.id })
            }
            SuccessAction::BugAssigned => {
                let bug = AssignedBug::deserialize(body)?;
                Ok(Action::BugAssignedToUser {
                    id: bug.id,
                    user_id: bug.user_id,
                })
            }
        }
    }
}

/// Lifecycle action dispatched after a failed request
///
/// Carries no payload; the rendered message travels on the generic
/// [`Action::ApiCallFailed`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureAction {
    BugsRequestFailed,
}

impl FailureAction {
    pub fn into_action(self) -> Action {
        match self {
            FailureAction::BugsRequestFailed => Action::BugsRequestFailed,
        }
    }
}

/// Minimal view of an updated bug in a PATCH response
#[derive(Debug, Deserialize)]
struct BugRef {
    id: u64,
}

/// Minimal view of an assignment-confirming PATCH response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssignedBug {
    id: u64,
    user_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_start_action_mapping() {
        assert_eq!(
            StartAction::BugsRequested.into_action(),
            Action::BugsRequested
        );
    }

    #[test]
    fn test_failure_action_mapping() {
        assert_eq!(
            FailureAction::BugsRequestFailed.into_action(),
            Action::BugsRequestFailed
        );
    }

    #[test]
    fn test_success_bugs_received() {
        let body = json!([{"id": 1, "description": "a"}]);
        let action = SuccessAction::BugsReceived.into_action(&body).unwrap();
        match action {
            Action::BugsReceived(bugs) => {
                assert_eq!(bugs.len(), 1);
                assert_eq!(bugs[0].id, 1);
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_success_bug_resolved_extracts_id() {
        let body = json!({"id": 3, "description": "a", "resolved": true});
        let action = SuccessAction::BugResolved.into_action(&body).unwrap();
        assert_eq!(action, Action::BugResolved { id: 3 });
    }

    #[test]
    fn test_success_bug_assigned_extracts_ids() {
        let body = json!({"id": 3, "description": "a", "userId": 9});
        let action = SuccessAction::BugAssigned.into_action(&body).unwrap();
        assert_eq!(
            action,
            Action::BugAssignedToUser { id: 3, user_id: 9 }
        );
    }

    #[test]
    fn test_success_mapping_rejects_wrong_shape() {
        let body = json!({"nope": true});
        assert!(SuccessAction::BugAdded.into_action(&body).is_err());
        assert!(SuccessAction::BugsReceived.into_action(&body).is_err());
    }
}
