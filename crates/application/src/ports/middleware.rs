use async_trait::async_trait;
use hickory_proto::op::Message;
use hip5_domain::DomainError;
use std::sync::Arc;

/// A stage the root server runs in front of its own resolution.
#[async_trait]
pub trait RootMiddleware: Send + Sync {
    async fn handle(&self, tld: &str, request: &Message) -> Result<Message, DomainError>;
}

/// Registration point the host exposes for its middleware stage.
pub trait MiddlewareRegistry: Send + Sync {
    fn register(&self, middleware: Arc<dyn RootMiddleware>);
}
