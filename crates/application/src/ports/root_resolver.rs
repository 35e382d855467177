use async_trait::async_trait;
use hickory_proto::op::Message;
use hip5_domain::DomainError;

/// Normal resolution path of the root name server.
#[async_trait]
pub trait RootResolver: Send + Sync {
    /// Answer `request` from root zone data, exactly as the server would
    /// without any middleware installed.
    async fn response(&self, request: &Message) -> Result<Message, DomainError>;

    /// Raw name resource attached to a TLD, if the name has one.
    async fn lookup_name(&self, name: &str) -> Result<Option<Vec<u8>>, DomainError>;
}
