//! Middleware pipeline for the dispatch path
//!
//! Middleware sits between dispatch and reducer execution, allowing side
//! effects, async operations, logging, and other cross-cutting concerns
//! to be handled in a composable way.
//!
//! ## Design
//!
//! ```text
//! Dispatchable → Middleware Chain → Reducer → State
//! ```
//!
//! Each stage receives the dispatched unit and a [`Context`] and can:
//! - Inspect the unit and the current state
//! - Forward the unit to the next stage with `ctx.next(unit)`
//! - Re-enter the chain from the top with `ctx.dispatch(unit)`
//! - Consume the unit by returning without forwarding
//!
//! ## Example
//!
//! ```rust,ignore
//! struct CountingMiddleware;
//!
//! #[async_trait]
//! impl Middleware for CountingMiddleware {
//!     async fn handle(&self, unit: Dispatchable, ctx: &mut Context<'_>) {
//!         log::debug!("saw a unit");
//!         ctx.next(unit).await;
//!     }
//! }
//! ```

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;

use crate::actions::Dispatchable;
use crate::store::Context;

// Module declarations
mod api;
mod effect;
mod logging;
mod notification;

// Re-exports
pub use api::ApiMiddleware;
pub use effect::EffectMiddleware;
pub use logging::LoggingMiddleware;
pub use notification::{LogNotificationSink, NotificationMiddleware, NotificationSink};

/// BoxFuture type alias for the chain's recursive futures
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A stage in the dispatch chain
///
/// Stages are called in order for each dispatched unit. A stage that does
/// not call [`Context::next`] consumes the unit; nothing downstream (and
/// no reducer) will see it.
#[async_trait]
pub trait Middleware: Send + Sync {
    /// Handle a unit before it reaches the reducers
    async fn handle(&self, unit: Dispatchable, ctx: &mut Context<'_>);
}
