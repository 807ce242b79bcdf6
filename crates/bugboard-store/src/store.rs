//! Store: state plus the dispatch pipeline
//!
//! The Store follows the Redux pattern:
//! - Centralized state management
//! - Units are dispatched to modify state
//! - Pure reducers handle state transitions
//! - Side effects live in middleware, never in reducers
//!
//! Exactly one dispatched unit is processed at a time; the store is
//! exclusively borrowed for the duration of a `dispatch`, so a middleware
//! reading state and then dispatching cannot be interleaved by another
//! dispatch.

use std::sync::Arc;

use crate::actions::{Action, Dispatchable};
use crate::middleware::{
    ApiMiddleware, BoxFuture, EffectMiddleware, LoggingMiddleware, Middleware,
    NotificationMiddleware, NotificationSink,
};
use crate::reducer::reduce;
use crate::state::StoreState;
use bugboard_client::ApiClient;
use bugboard_config::StoreConfig;

/// Holds application state and runs dispatched units through the
/// middleware chain into the reducers
///
/// # Example
/// ```rust,ignore
/// let mut store = Store::with_pipeline(client, sink, &StoreConfig::load());
/// store.dispatch(operations::load_bugs()).await;
/// let unresolved = UnresolvedBugs::new().select(store.state());
/// ```
pub struct Store {
    state: StoreState,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl Store {
    /// Create a new store with initial state and no middleware
    pub fn new(initial_state: StoreState) -> Self {
        Self {
            state: initial_state,
            middleware: Vec::new(),
        }
    }

    /// Create a store wired with the standard pipeline, in order:
    /// logging, effects, notifications, API calls
    pub fn with_pipeline(
        client: Arc<dyn ApiClient>,
        sink: Arc<dyn NotificationSink>,
        config: &StoreConfig,
    ) -> Self {
        let mut store = Self::new(StoreState::default());
        store.add_middleware(LoggingMiddleware::new());
        store.add_middleware(EffectMiddleware::new(config.cache_max_age()));
        store.add_middleware(NotificationMiddleware::new(sink));
        store.add_middleware(ApiMiddleware::new(client));
        store
    }

    /// Add a middleware stage to the end of the chain
    ///
    /// Stages run in the order they were added. Add middleware before the
    /// first dispatch.
    pub fn add_middleware<M: Middleware + 'static>(&mut self, middleware: M) {
        self.middleware.push(Arc::new(middleware));
    }

    /// Get immutable reference to current state
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Replace entire state (useful for initialization or testing)
    pub fn replace_state(&mut self, state: StoreState) {
        self.state = state;
    }

    /// Dispatch a unit through the middleware chain, then the reducers
    ///
    /// The returned future completes only after every follow-up dispatch
    /// the chain produced has been applied; for API calls that includes
    /// the network round trip and the outcome actions.
    pub async fn dispatch(&mut self, unit: impl Into<Dispatchable>) {
        self.run_from(0, unit.into()).await;
    }

    /// Apply an action straight to the reducers, bypassing middleware
    ///
    /// Prefer [`dispatch`](Self::dispatch); this exists for tests and
    /// simple scenarios where middleware is not needed.
    pub fn apply(&mut self, action: &Action) {
        self.state = reduce(self.state.clone(), action);
    }

    /// Run a unit through the chain starting at the given stage
    ///
    /// Boxed because the chain re-enters itself: a stage forwarding with
    /// `next` or re-dispatching from the top recurses into this function.
    pub(crate) fn run_from(&mut self, index: usize, unit: Dispatchable) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            let stage = self.middleware.get(index).map(Arc::clone);
            match stage {
                Some(stage) => {
                    let mut ctx = Context { store: self, index };
                    stage.handle(unit, &mut ctx).await;
                }
                None => match unit {
                    Dispatchable::Action(action) => {
                        self.state = reduce(self.state.clone(), &action);
                    }
                    Dispatchable::Effect(effect) => {
                        log::warn!("effect {:?} fell through the chain unhandled", effect);
                    }
                },
            }
        })
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(StoreState::default())
    }
}

/// Capabilities handed to a middleware stage
///
/// A stage may inspect state, forward the unit to the following stage, or
/// re-enter the chain from the top with a new unit. A stage that does not
/// forward consumes the unit.
pub struct Context<'a> {
    store: &'a mut Store,
    index: usize,
}

impl Context<'_> {
    /// Read-only view of the current state
    pub fn state(&self) -> &StoreState {
        self.store.state()
    }

    /// Forward the unit to the next stage, or to the reducers at the end
    /// of the chain
    pub async fn next(&mut self, unit: Dispatchable) {
        let index = self.index;
        self.store.run_from(index + 1, unit).await;
    }

    /// Re-enter the chain from the top with a new unit
    pub async fn dispatch(&mut self, unit: impl Into<Dispatchable>) {
        self.store.run_from(0, unit.into()).await;
    }
}
