//! ApiMiddleware - turns declarative API-call actions into HTTP requests
//!
//! Recognizes [`Action::ApiCallBegan`], performs the described request
//! through the configured [`ApiClient`], and dispatches generic plus
//! request-specific outcome actions. The request is awaited inline: a
//! caller awaiting the dispatch resumes only after the round trip and the
//! outcome dispatches have completed. Failures are dispatched, never
//! retried, and never thrown past this stage.

use std::sync::Arc;

use async_trait::async_trait;

use bugboard_client::ApiClient;

use super::Middleware;
use crate::actions::{Action, ApiCall, Dispatchable};
use crate::store::Context;

/// Performs the HTTP request described by an [`ApiCall`] descriptor
pub struct ApiMiddleware {
    client: Arc<dyn ApiClient>,
}

impl ApiMiddleware {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    async fn execute(&self, call: ApiCall, ctx: &mut Context<'_>) {
        // The start action runs before any await point, so a loading flag
        // is visible while the request is in flight.
        if let Some(on_start) = call.on_start {
            ctx.dispatch(on_start.into_action()).await;
        }

        // Forward the original action so observers see it before
        // resolution; the reducers no-op on it.
        ctx.next(Action::ApiCallBegan(call.clone()).into()).await;

        let outcome = self
            .client
            .request(call.method, &call.url, call.body.as_ref())
            .await;

        match outcome {
            Ok(body) => {
                // Decode the endpoint-specific payload first so an
                // undecodable body takes the failure path instead of
                // announcing success.
                let specific = match call
                    .on_success
                    .map(|kind| kind.into_action(&body))
                    .transpose()
                {
                    Ok(specific) => specific,
                    Err(err) => {
                        let message = format!("invalid response body: {}", err);
                        return self.fail(message, &call, ctx).await;
                    }
                };

                ctx.dispatch(Action::ApiCallSucceeded(body)).await;
                if let Some(action) = specific {
                    ctx.dispatch(action).await;
                }
            }
            Err(err) => self.fail(err.to_string(), &call, ctx).await,
        }
    }

    async fn fail(&self, message: String, call: &ApiCall, ctx: &mut Context<'_>) {
        log::error!("{} {} failed: {}", call.method, call.url, message);
        ctx.dispatch(Action::ApiCallFailed(message)).await;
        if let Some(on_error) = call.on_error {
            ctx.dispatch(on_error.into_action()).await;
        }
    }
}

#[async_trait]
impl Middleware for ApiMiddleware {
    async fn handle(&self, unit: Dispatchable, ctx: &mut Context<'_>) {
        match unit {
            Dispatchable::Action(Action::ApiCallBegan(call)) => self.execute(call, ctx).await,
            other => ctx.next(other).await,
        }
    }
}
