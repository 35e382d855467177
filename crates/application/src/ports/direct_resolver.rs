use async_trait::async_trait;
use hickory_proto::op::Message;
use hickory_proto::rr::{Name, RecordType};
use hip5_domain::{DomainError, ProtocolSet};
use std::sync::Arc;

/// Answers names whose TLD is itself the (single) configured protocol.
///
/// Returned messages are passed to the client untouched, so they must
/// already be complete and signed.
#[async_trait]
pub trait SingleDirectResolver: Send + Sync {
    async fn resolve(&self, name: &Name, record_type: RecordType) -> Option<Message>;
}

#[async_trait]
pub trait MultiDirectResolver: Send + Sync {
    async fn resolve(&self, protocol: &str, name: &Name, record_type: RecordType)
        -> Option<Message>;
}

#[derive(Clone)]
pub enum DirectBinding {
    Single(Arc<dyn SingleDirectResolver>),
    Multi(Arc<dyn MultiDirectResolver>),
}

impl DirectBinding {
    pub fn single(resolver: impl SingleDirectResolver + 'static) -> Self {
        Self::Single(Arc::new(resolver))
    }

    pub fn multi(resolver: impl MultiDirectResolver + 'static) -> Self {
        Self::Multi(Arc::new(resolver))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Single(_) => "single-protocol direct resolver",
            Self::Multi(_) => "multi-protocol direct resolver",
        }
    }

    pub fn check(&self, protocols: &ProtocolSet) -> Result<(), DomainError> {
        let fits = match self {
            Self::Single(_) => !protocols.is_multi(),
            Self::Multi(_) => protocols.is_multi(),
        };
        if fits {
            Ok(())
        } else {
            Err(DomainError::BindingMismatch {
                binding: self.kind(),
                configured: protocols.len(),
            })
        }
    }

    pub async fn resolve(
        &self,
        protocol: &str,
        name: &Name,
        record_type: RecordType,
    ) -> Option<Message> {
        match self {
            Self::Single(resolver) => resolver.resolve(name, record_type).await,
            Self::Multi(resolver) => resolver.resolve(protocol, name, record_type).await,
        }
    }
}
