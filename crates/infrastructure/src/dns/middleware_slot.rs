use arc_swap::ArcSwap;
use hickory_proto::op::Message;
use hip5_application::ports::{MiddlewareRegistry, RootMiddleware, RootResolver};
use hip5_domain::DomainError;
use std::sync::Arc;
use tracing::{info, warn};

/// Holds the root server's middleware stage.
///
/// Registration swaps the stage atomically; queries already in flight keep
/// the stage they started with.
pub struct MiddlewareSlot {
    current: ArcSwap<Option<Arc<dyn RootMiddleware>>>,
}

impl MiddlewareSlot {
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(None),
        }
    }

    pub fn current(&self) -> Option<Arc<dyn RootMiddleware>> {
        (**self.current.load()).clone()
    }

    pub fn is_installed(&self) -> bool {
        self.current.load().is_some()
    }

    pub fn clear(&self) {
        self.current.store(Arc::new(None));
        info!("Root middleware removed");
    }

    /// Answer `request` through the installed stage, or through `fallback`
    /// when none is installed.
    pub async fn resolve(
        &self,
        tld: &str,
        request: &Message,
        fallback: &dyn RootResolver,
    ) -> Result<Message, DomainError> {
        match self.current() {
            Some(middleware) => middleware.handle(tld, request).await,
            None => fallback.response(request).await,
        }
    }
}

impl Default for MiddlewareSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl MiddlewareRegistry for MiddlewareSlot {
    fn register(&self, middleware: Arc<dyn RootMiddleware>) {
        let previous = self.current.swap(Arc::new(Some(middleware)));
        if previous.is_some() {
            warn!("Replacing previously installed root middleware");
        }
        info!("Root middleware installed");
    }
}
