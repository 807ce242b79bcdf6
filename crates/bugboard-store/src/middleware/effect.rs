//! EffectMiddleware - executes described effects
//!
//! The cache-aware bug load lives here: reading `last_fetch` and deciding
//! whether to hit the network is the one place the pipeline reads state
//! before dispatching. The exclusive borrow of the store during a dispatch
//! guarantees no other dispatch can change `last_fetch` between the read
//! and the decision.

use async_trait::async_trait;
use chrono::{Duration, Utc};

use super::Middleware;
use crate::actions::{Action, Dispatchable, Effect};
use crate::operations;
use crate::store::Context;

/// Executes [`Effect`] units; plain actions pass straight through
pub struct EffectMiddleware {
    cache_max_age: Duration,
}

impl EffectMiddleware {
    /// Create the stage with the freshness window for collection loads
    pub fn new(cache_max_age: Duration) -> Self {
        Self { cache_max_age }
    }
}

#[async_trait]
impl Middleware for EffectMiddleware {
    async fn handle(&self, unit: Dispatchable, ctx: &mut Context<'_>) {
        let effect = match unit {
            Dispatchable::Effect(effect) => effect,
            other => return ctx.next(other).await,
        };

        match effect {
            Effect::LoadBugs => {
                // Cache hit performs no dispatch at all, not even a
                // loading transition.
                if let Some(last_fetch) = ctx.state().bugs.last_fetch {
                    let age = Utc::now() - last_fetch;
                    if age < self.cache_max_age {
                        log::debug!(
                            "bug list fetched {}s ago, still fresh, skipping",
                            age.num_seconds()
                        );
                        return;
                    }
                }

                ctx.dispatch(Action::ApiCallBegan(operations::load_bugs_call()))
                    .await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::ApiMiddleware;
    use crate::operations;
    use crate::state::{BugsState, StoreState};
    use crate::store::Store;
    use bugboard_client::{ApiClient, ApiError, HttpMethod};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    struct CountingClient {
        response: Value,
        calls: Mutex<usize>,
    }

    impl CountingClient {
        fn new(response: Value) -> Arc<Self> {
            Arc::new(Self {
                response,
                calls: Mutex::new(0),
            })
        }

        fn call_count(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl ApiClient for CountingClient {
        async fn request(
            &self,
            _method: HttpMethod,
            _path: &str,
            _body: Option<&Value>,
        ) -> Result<Value, ApiError> {
            *self.calls.lock().unwrap() += 1;
            Ok(self.response.clone())
        }
    }

    fn store_with(client: Arc<CountingClient>) -> Store {
        let mut store = Store::default();
        store.add_middleware(EffectMiddleware::new(Duration::minutes(10)));
        store.add_middleware(ApiMiddleware::new(client));
        store
    }

    #[tokio::test]
    async fn test_fresh_cache_issues_no_request() {
        let client = CountingClient::new(json!([]));
        let mut store = store_with(Arc::clone(&client));
        store.replace_state(StoreState {
            bugs: BugsState {
                last_fetch: Some(Utc::now() - Duration::minutes(2)),
                ..BugsState::default()
            },
            ..StoreState::default()
        });

        store.dispatch(operations::load_bugs()).await;

        assert_eq!(client.call_count(), 0);
        assert!(!store.state().bugs.loading);
    }

    #[tokio::test]
    async fn test_stale_cache_fetches() {
        let client = CountingClient::new(json!([{"id": 1, "description": "a"}]));
        let mut store = store_with(Arc::clone(&client));
        store.replace_state(StoreState {
            bugs: BugsState {
                last_fetch: Some(Utc::now() - Duration::minutes(11)),
                ..BugsState::default()
            },
            ..StoreState::default()
        });

        store.dispatch(operations::load_bugs()).await;

        assert_eq!(client.call_count(), 1);
        assert_eq!(store.state().bugs.list.len(), 1);
        assert!(!store.state().bugs.loading);
    }

    #[tokio::test]
    async fn test_second_load_within_window_is_a_cache_hit() {
        let client = CountingClient::new(json!([{"id": 1, "description": "a"}]));
        let mut store = store_with(Arc::clone(&client));

        // No prior fetch: the first load goes to the network and stamps
        // last_fetch via the reducer.
        store.dispatch(operations::load_bugs()).await;
        assert_eq!(client.call_count(), 1);
        assert!(store.state().bugs.last_fetch.is_some());

        store.dispatch(operations::load_bugs()).await;
        assert_eq!(client.call_count(), 1);
    }
}
