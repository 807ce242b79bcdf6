//! LoggingMiddleware - logs all dispatched units for debugging

use async_trait::async_trait;

use super::Middleware;
use crate::actions::Dispatchable;
use crate::store::Context;

/// Logs every unit that passes through the chain, then forwards it
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(&self, unit: Dispatchable, ctx: &mut Context<'_>) {
        log::debug!("dispatch: {:?}", unit);
        // Always continue to the next stage
        ctx.next(unit).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;
    use crate::store::Store;

    #[tokio::test]
    async fn test_logging_middleware_forwards() {
        let mut store = Store::default();
        store.add_middleware(LoggingMiddleware::new());

        store.dispatch(Action::BugsRequested).await;
        assert!(store.state().bugs.loading);
    }
}
