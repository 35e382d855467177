use crate::ports::{ResponseCache, RootResolver};
use hickory_proto::op::Message;
use hip5_domain::labels::{is_synthetic_tld, SYNTHETIC_TLD};
use hip5_domain::DomainError;
use std::sync::Arc;
use tracing::debug;

/// Looks a name up on the root zone the normal way: cache first, then the
/// root resolver.
pub struct HnsResolution {
    resolver: Arc<dyn RootResolver>,
    cache: Arc<dyn ResponseCache>,
    synthetic_tld: Arc<str>,
}

impl HnsResolution {
    pub fn new(resolver: Arc<dyn RootResolver>, cache: Arc<dyn ResponseCache>) -> Self {
        Self {
            resolver,
            cache,
            synthetic_tld: Arc::from(SYNTHETIC_TLD),
        }
    }

    pub fn with_synthetic_tld(mut self, tld: impl Into<Arc<str>>) -> Self {
        self.synthetic_tld = tld.into();
        self
    }

    pub async fn resolve(&self, request: &Message, tld: &str) -> Result<Message, DomainError> {
        let query = request
            .queries()
            .first()
            .ok_or(DomainError::MissingQuestion)?;
        let name = query.name().to_lowercase().to_ascii();
        let record_type = query.query_type();

        if let Some(cached) = self.cache.get(&name, record_type) {
            debug!(domain = %name, record_type = %record_type, "Root cache HIT");
            return Ok(cached);
        }

        let response = self.resolver.response(request).await?;

        // Synthesized zones are not stable DNS facts.
        if is_synthetic_tld(tld, &self.synthetic_tld) {
            debug!(domain = %name, tld = %tld, "Skipping cache for synthetic zone");
        } else {
            self.cache.set(&name, record_type, &response);
        }

        Ok(response)
    }
}
