//! NotificationMiddleware - routes error-tagged actions to a user-facing
//! notification sink
//!
//! This is the toast half of what used to be one conflated stage; effect
//! execution lives in its own stage so the two concerns stay independent
//! and their order in the chain stays explicit.

use std::sync::Arc;

use async_trait::async_trait;

use super::Middleware;
use crate::actions::{Action, Dispatchable};
use crate::store::Context;

/// Receives user-facing notification messages
///
/// The embedding application decides what a notification looks like; the
/// store only pushes messages through this seam.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str);
}

/// Default sink that forwards notifications to the log
pub struct LogNotificationSink;

impl NotificationSink for LogNotificationSink {
    fn notify(&self, message: &str) {
        log::warn!("notification: {}", message);
    }
}

/// Shows a notification for error-tagged actions and consumes them;
/// everything else is forwarded unchanged
pub struct NotificationMiddleware {
    sink: Arc<dyn NotificationSink>,
}

impl NotificationMiddleware {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self { sink }
    }
}

#[async_trait]
impl Middleware for NotificationMiddleware {
    async fn handle(&self, unit: Dispatchable, ctx: &mut Context<'_>) {
        match unit {
            Dispatchable::Action(Action::Error { message }) => {
                self.sink.notify(&message);
            }
            other => ctx.next(other).await,
        }
    }
}
