use async_trait::async_trait;
use hickory_proto::op::Message;
use hickory_proto::rr::{Name, RecordType};
use hip5_domain::{DomainError, ProtocolSet};
use std::sync::Arc;

/// Records produced by an alternate-protocol backend, in DNS wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerAnswer {
    pub data: Vec<u8>,
    /// Type of the records in `data`; signatures are made under this type.
    pub record_type: RecordType,
}

impl HandlerAnswer {
    pub fn new(data: impl Into<Vec<u8>>, record_type: RecordType) -> Self {
        Self {
            data: data.into(),
            record_type,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Capabilities the middleware lends to handlers while they run.
#[async_trait]
pub trait HandlerContext: Send + Sync {
    /// Raw name resource of `tld` on the root zone (e.g. to read TXT data
    /// published alongside the delegation).
    async fn resource(&self, tld: &str) -> Result<Option<Vec<u8>>, DomainError>;
}

/// An intercepted referral, handed to the protocol backend.
#[derive(Clone, Copy)]
pub struct ReferralRequest<'a> {
    /// Delegation target: the NS target with the protocol label removed.
    pub data: &'a str,
    /// Lowercased query name.
    pub name: &'a Name,
    pub record_type: RecordType,
    pub request: &'a Message,
    pub tld: &'a str,
    /// Base resolver answer that carried the referral.
    pub resolved: &'a Message,
    pub context: &'a dyn HandlerContext,
}

/// Backend for a middleware configured with exactly one protocol.
#[async_trait]
pub trait SingleProtocolHandler: Send + Sync {
    async fn handle(&self, referral: ReferralRequest<'_>)
        -> anyhow::Result<Option<HandlerAnswer>>;
}

/// Backend for a middleware configured with several protocols; receives
/// the protocol the referral matched.
#[async_trait]
pub trait MultiProtocolHandler: Send + Sync {
    async fn handle(
        &self,
        protocol: &str,
        referral: ReferralRequest<'_>,
    ) -> anyhow::Result<Option<HandlerAnswer>>;
}

/// Handler call shape, fixed when the middleware is built.
#[derive(Clone)]
pub enum HandlerBinding {
    Single(Arc<dyn SingleProtocolHandler>),
    Multi(Arc<dyn MultiProtocolHandler>),
}

impl HandlerBinding {
    pub fn single(handler: impl SingleProtocolHandler + 'static) -> Self {
        Self::Single(Arc::new(handler))
    }

    pub fn multi(handler: impl MultiProtocolHandler + 'static) -> Self {
        Self::Multi(Arc::new(handler))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Single(_) => "single-protocol handler",
            Self::Multi(_) => "multi-protocol handler",
        }
    }

    /// A single binding needs exactly one protocol, a multi binding more.
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

    pub async fn invoke(
        &self,
        protocol: &str,
        referral: ReferralRequest<'_>,
    ) -> anyhow::Result<Option<HandlerAnswer>> {
        match self {
            Self::Single(handler) => handler.handle(referral).await,
            Self::Multi(handler) => handler.handle(protocol, referral).await,
        }
    }
}
