//! `tower::Service` integration for the dispatcher.
//!
//! [`CommandDispatcher`] implements `Service<Arc<MessageEvent>>`, so it can be
//! wrapped in ordinary tower layers (timeouts, concurrency limits, tracing)
//! before it is driven by the runtime.
//!
//! ```rust,ignore
//! use tower::ServiceExt;
//!
//! let outcome = dispatcher.clone().oneshot(message).await?;
//! ```

use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};

use courier_core::MessageEvent;
use futures::future::BoxFuture;
use tower::Service;
use tower::util::BoxCloneSyncService;

use crate::dispatcher::{CommandDispatcher, DispatchOutcome};

/// A type-erased, `Clone + Send + Sync` dispatch service.
pub type BoxedDispatchService = BoxCloneSyncService<Arc<MessageEvent>, DispatchOutcome, Infallible>;

impl CommandDispatcher {
    /// Erases the dispatcher into a [`BoxedDispatchService`].
    pub fn boxed(self) -> BoxedDispatchService {
        BoxCloneSyncService::new(self)
    }
}

impl Service<Arc<MessageEvent>> for CommandDispatcher {
    type Response = DispatchOutcome;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<DispatchOutcome, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, message: Arc<MessageEvent>) -> Self::Future {
        let dispatcher = self.clone();
        Box::pin(async move { Ok(dispatcher.dispatch(message).await) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::IgnoreReason;
    use crate::dispatcher::tests::{Call, Log, TestClient, message, registry};
    use crate::DispatcherConfig;
    use tower::ServiceExt;

    fn dispatcher(log: &Log) -> CommandDispatcher {
        CommandDispatcher::new(registry(log), TestClient::new(None), DispatcherConfig::default())
    }

    #[test]
    fn test_oneshot_dispatches() {
        let log = Log::default();
        let outcome = tokio_test::block_on(
            dispatcher(&log).oneshot(Arc::new(message("!roll 3 20"))),
        )
        .unwrap();

        assert_eq!(outcome, DispatchOutcome::Executed { command: "roll".into() });
        assert!(matches!(log.lock()[1], Call::Execute(..)));
    }

    #[test]
    fn test_boxed_service_is_cloneable() {
        let log = Log::default();
        let service = dispatcher(&log).boxed();

        let first = tokio_test::block_on(service.clone().oneshot(Arc::new(message("!ping"))));
        let second = tokio_test::block_on(service.oneshot(Arc::new(message("hello"))));

        assert_eq!(first.unwrap(), DispatchOutcome::Executed { command: "ping".into() });
        assert_eq!(second.unwrap(), DispatchOutcome::Ignored(IgnoreReason::NoPrefix));
    }
}
