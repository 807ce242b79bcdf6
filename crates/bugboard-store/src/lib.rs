//! Client-side state container for a bug-tracking UI
//!
//! A normalized in-memory store with typed actions, pure reducers,
//! memoized selectors, and a middleware chain that turns declarative
//! API-call actions into HTTP requests with outcome dispatch.
//!
//! # Architecture
//!
//! ```text
//! Dispatchable (Action | Effect)
//!       │
//!       ▼
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐   ┌───────────────┐
//! │ Logging      │ → │ Effect       │ → │ Notification     │ → │ Api           │
//! │ (debug log)  │   │ (cache-aware │   │ (error toasts)   │   │ (HTTP + out-  │
//! │              │   │  load)       │   │                  │   │  come actions)│
//! └──────────────┘   └──────────────┘   └──────────────────┘   └───────────────┘
//!       │
//!       ▼
//!   reducers → StoreState → selectors
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use bugboard_store::{operations, LogNotificationSink, ReqwestClient, Store, UnresolvedBugs};
//! use bugboard_config::StoreConfig;
//!
//! # async fn example() {
//! let config = StoreConfig::load();
//! let client = ReqwestClient::new(&config.api_base_url).expect("client construction");
//! let mut store = Store::with_pipeline(
//!     Arc::new(client),
//!     Arc::new(LogNotificationSink),
//!     &config,
//! );
//!
//! store.dispatch(operations::load_bugs()).await;
//!
//! let unresolved = UnresolvedBugs::new();
//! for bug in unresolved.select(store.state()).iter() {
//!     println!("#{} {}", bug.id, bug.description);
//! }
//! # }
//! ```

pub mod actions;
pub mod entities;
pub mod middleware;
pub mod operations;
pub mod reducer;
pub mod selectors;
pub mod state;
pub mod store;

pub use actions::{
    Action, ApiCall, Dispatchable, Effect, FailureAction, StartAction, SuccessAction,
};
pub use entities::{Bug, NewBug, Project};
pub use middleware::{
    ApiMiddleware, EffectMiddleware, LogNotificationSink, LoggingMiddleware, Middleware,
    NotificationMiddleware, NotificationSink,
};
pub use operations::{add_bug, assign_bug_to_user, load_bugs, resolve_bug};
pub use reducer::reduce;
pub use selectors::{bugs, BugsByUser, UnresolvedBugs};
pub use state::{BugsState, ProjectsState, StoreState};
pub use store::{Context, Store};

// Re-export the transport types consumers need to wire a store.
pub use bugboard_client::{ApiClient, ApiError, HttpMethod, ReqwestClient, DEFAULT_BASE_URL};
