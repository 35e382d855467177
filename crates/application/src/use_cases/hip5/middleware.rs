use super::hns_resolution::HnsResolution;
use super::lifecycle::{Lifecycle, LifecycleEvent};
use super::referral_scanner::ReferralScanner;
use super::response_builder::ResponseBuilder;
use crate::ports::{
    DirectBinding, HandlerBinding, HandlerContext, MiddlewareRegistry, ReferralRequest,
    RootMiddleware, RootResolver, RootServer,
};
use async_trait::async_trait;
use futures::FutureExt;
use hickory_proto::op::Message;
use hickory_proto::rr::{Name, RecordType};
use hip5_domain::labels::{delegation_target, strip_root};
use hip5_domain::{DomainError, Hip5Config, ProtocolSet};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

const DEFAULT_HANDLER_TIMEOUT: Duration = Duration::from_secs(5);

/// Result of asking the protocol backend about an intercepted referral.
#[derive(Debug)]
pub enum HandlerOutcome {
    Answer(Message),
    NoAnswer,
    Failed(anyhow::Error),
}

/// Root-server middleware that hands HIP-5 delegations to alternate
/// naming protocols.
///
/// Per query it either answers a protocol TLD directly, passes the root
/// answer through, or intercepts an NS referral whose target ends in a
/// configured protocol label and replaces it with the backend's answer.
/// An intercepted referral is never returned as-is: without a backend
/// answer the client receives a signed SOA instead.
pub struct Hip5Middleware {
    protocols: ProtocolSet,
    scanner: ReferralScanner,
    builder: ResponseBuilder,
    hns: HnsResolution,
    resolver: Arc<dyn RootResolver>,
    handler: HandlerBinding,
    direct: Option<DirectBinding>,
    handler_timeout: Duration,
    lifecycle: Lifecycle,
}

impl Hip5Middleware {
    pub fn new(
        protocols: ProtocolSet,
        root: RootServer,
        handler: HandlerBinding,
    ) -> Result<Self, DomainError> {
        handler.check(&protocols)?;

        Ok(Self {
            scanner: ReferralScanner::new(protocols.clone()),
            builder: ResponseBuilder::new(Arc::clone(&root.zone)),
            hns: HnsResolution::new(Arc::clone(&root.resolver), root.cache),
            resolver: root.resolver,
            protocols,
            handler,
            direct: None,
            handler_timeout: DEFAULT_HANDLER_TIMEOUT,
            lifecycle: Lifecycle::default(),
        })
    }

    pub fn from_config(
        config: &Hip5Config,
        root: RootServer,
        handler: HandlerBinding,
    ) -> Result<Self, DomainError> {
        let middleware = Self::new(config.protocol_set()?, root, handler)?
            .with_handler_timeout(config.handler_timeout())
            .with_synthetic_tld(config.synthetic_tld.as_str());
        Ok(middleware)
    }

    pub fn with_direct(mut self, direct: DirectBinding) -> Result<Self, DomainError> {
        direct.check(&self.protocols)?;
        self.direct = Some(direct);
        Ok(self)
    }

    pub fn with_handler_timeout(mut self, timeout: Duration) -> Self {
        self.handler_timeout = timeout;
        self
    }

    pub fn with_synthetic_tld(mut self, tld: impl Into<Arc<str>>) -> Self {
        self.hns = self.hns.with_synthetic_tld(tld);
        self
    }

    /// Report open/close transitions on `observer`.
    pub fn with_lifecycle_observer(
        mut self,
        observer: mpsc::UnboundedSender<LifecycleEvent>,
    ) -> Self {
        self.lifecycle = Lifecycle::observed(observer);
        self
    }

    pub fn protocols(&self) -> &ProtocolSet {
        &self.protocols
    }

    /// Register this middleware with the host's resolution pipeline.
    pub fn install(self: Arc<Self>, registry: &dyn MiddlewareRegistry) {
        info!(protocols = %self.protocols, "Installing HIP-5 middleware");
        registry.register(self);
    }

    pub fn open(&self) {
        self.lifecycle.open();
        info!(protocols = %self.protocols, "HIP-5 middleware opened");
    }

    pub fn close(&self) {
        self.lifecycle.close();
        info!("HIP-5 middleware closed");
    }

    pub fn is_open(&self) -> bool {
        self.lifecycle.is_open()
    }

    /// Raw name resource of `tld` on the root zone.
    pub async fn resource(&self, tld: &str) -> Result<Option<Vec<u8>>, DomainError> {
        self.resolver.lookup_name(strip_root(tld)).await
    }

    /// Decide how to answer one inbound query.
    ///
    /// `request` must carry a question; only the first one is considered.
    pub async fn dispatch(&self, tld: &str, request: &Message) -> Result<Message, DomainError> {
        let query = request
            .queries()
            .first()
            .ok_or(DomainError::MissingQuestion)?;
        let name = query.name().to_lowercase();
        let record_type = query.query_type();

        if let Some(protocol) = self.protocols.match_tld(tld) {
            return Ok(self.resolve_direct(protocol, &name, record_type).await);
        }

        let resolved = self.hns.resolve(request, tld).await?;

        let Some(found) = self.scanner.find_referral(&resolved) else {
            return Ok(resolved);
        };

        let protocol = found.protocol;
        let ns = found.target.to_ascii();
        debug!(
            protocol = %protocol,
            domain = %name,
            record_type = %record_type,
            owner = %found.record.name(),
            ns = %ns,
            "Intercepted referral to .{}", protocol
        );

        let referral = ReferralRequest {
            data: delegation_target(&ns),
            name: &name,
            record_type,
            request,
            tld,
            resolved: &resolved,
            context: self,
        };

        match self.invoke_handler(protocol, referral).await {
            HandlerOutcome::Answer(response) => {
                debug!(
                    protocol = %protocol,
                    domain = %name,
                    "Returning response via {} protocol", protocol
                );
                Ok(response)
            }
            HandlerOutcome::NoAnswer => {
                debug!(
                    protocol = %protocol,
                    domain = %name,
                    "No answer from protocol backend"
                );
                Ok(self.builder.build_soa())
            }
            HandlerOutcome::Failed(err) => {
                warn!(protocol = %protocol, domain = %name, "Resolution failed for name");
                debug!(error = ?err, "Protocol backend failure");
                Ok(self.builder.build_soa())
            }
        }
    }

    async fn resolve_direct(
        &self,
        protocol: &str,
        name: &Name,
        record_type: RecordType,
    ) -> Message {
        if let Some(direct) = &self.direct {
            // Returned unsigned: the direct resolver owns its signatures.
            if let Some(response) = direct.resolve(protocol, name, record_type).await {
                debug!(protocol = %protocol, domain = %name, "Direct answer");
                return response;
            }
        }
        self.builder.build_soa()
    }

    /// Run the backend under the handler deadline and turn whatever it
    /// produced into a signed answer. Errors, panics, timeouts and
    /// undecodable records all come back as `Failed`.
    pub async fn invoke_handler(
        &self,
        protocol: &str,
        referral: ReferralRequest<'_>,
    ) -> HandlerOutcome {
        let call = AssertUnwindSafe(self.handler.invoke(protocol, referral)).catch_unwind();

        let answer = match tokio::time::timeout(self.handler_timeout, call).await {
            Err(_) => {
                return HandlerOutcome::Failed(anyhow::anyhow!(
                    "handler timed out after {} ms",
                    self.handler_timeout.as_millis()
                ))
            }
            Ok(Err(_)) => return HandlerOutcome::Failed(anyhow::anyhow!("handler panicked")),
            Ok(Ok(Err(err))) => return HandlerOutcome::Failed(err),
            Ok(Ok(Ok(None))) => return HandlerOutcome::NoAnswer,
            Ok(Ok(Ok(Some(answer)))) if answer.is_empty() => return HandlerOutcome::NoAnswer,
            Ok(Ok(Ok(Some(answer)))) => answer,
        };

        match self
            .builder
            .build_from_records(&answer.data, answer.record_type)
        {
            Ok(response) => HandlerOutcome::Answer(response),
            Err(err) => HandlerOutcome::Failed(anyhow::Error::new(err)),
        }
    }
}

#[async_trait]
impl HandlerContext for Hip5Middleware {
    async fn resource(&self, tld: &str) -> Result<Option<Vec<u8>>, DomainError> {
        Hip5Middleware::resource(self, tld).await
    }
}

#[async_trait]
impl RootMiddleware for Hip5Middleware {
    async fn handle(&self, tld: &str, request: &Message) -> Result<Message, DomainError> {
        self.dispatch(tld, request).await
    }
}
