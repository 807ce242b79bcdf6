//! Action creators: the dispatch surface exposed to UI collaborators
//!
//! Each operation returns a [`Dispatchable`] the store knows how to run.
//! The descriptors bind the endpoint, the method, the raw domain payload,
//! and the lifecycle actions to dispatch on each outcome.

use serde_json::json;

use bugboard_client::HttpMethod;

use crate::actions::{
    Action, ApiCall, Dispatchable, Effect, FailureAction, StartAction, SuccessAction,
};
use crate::entities::NewBug;

const BUGS_URL: &str = "/bugs";

/// Load the bug collection, unless a recent fetch is still fresh
///
/// A cache hit performs no dispatch at all; a miss runs the full
/// request lifecycle with loading transitions.
pub fn load_bugs() -> Dispatchable {
    Dispatchable::Effect(Effect::LoadBugs)
}

/// The request dispatched when the bug collection is stale
pub(crate) fn load_bugs_call() -> ApiCall {
    ApiCall {
        url: BUGS_URL.to_string(),
        method: HttpMethod::Get,
        body: None,
        on_start: Some(StartAction::BugsRequested),
        on_success: Some(SuccessAction::BugsReceived),
        on_error: Some(FailureAction::BugsRequestFailed),
    }
}

/// Create a bug on the server; the confirmed record is appended on success
pub fn add_bug(bug: NewBug) -> Dispatchable {
    Action::ApiCallBegan(ApiCall {
        url: BUGS_URL.to_string(),
        method: HttpMethod::Post,
        body: Some(json!({ "description": bug.description })),
        on_start: None,
        on_success: Some(SuccessAction::BugAdded),
        on_error: None,
    })
    .into()
}

/// Mark a bug resolved on the server; applied locally once confirmed
pub fn resolve_bug(id: u64) -> Dispatchable {
    Action::ApiCallBegan(ApiCall {
        url: format!("{}/{}", BUGS_URL, id),
        method: HttpMethod::Patch,
        body: Some(json!({ "resolved": true })),
        on_start: None,
        on_success: Some(SuccessAction::BugResolved),
        on_error: None,
    })
    .into()
}

/// Assign a bug to a user on the server; applied locally once confirmed
pub fn assign_bug_to_user(bug_id: u64, user_id: u64) -> Dispatchable {
    Action::ApiCallBegan(ApiCall {
        url: format!("{}/{}", BUGS_URL, bug_id),
        method: HttpMethod::Patch,
        body: Some(json!({ "userId": user_id })),
        on_start: None,
        on_success: Some(SuccessAction::BugAssigned),
        on_error: None,
    })
    .into()
}
