use super::{ResponseCache, RootResolver, RootZone};
use std::sync::Arc;

/// The host capabilities the middleware is built on.
#[derive(Clone)]
pub struct RootServer {
    pub resolver: Arc<dyn RootResolver>,
    pub zone: Arc<dyn RootZone>,
    pub cache: Arc<dyn ResponseCache>,
}

impl RootServer {
    pub fn new(
        resolver: Arc<dyn RootResolver>,
        zone: Arc<dyn RootZone>,
        cache: Arc<dyn ResponseCache>,
    ) -> Self {
        Self {
            resolver,
            zone,
            cache,
        }
    }
}
