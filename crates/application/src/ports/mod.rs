mod direct_resolver;
mod middleware;
mod protocol_handler;
mod response_cache;
mod root_resolver;
mod root_server;
mod root_zone;

pub use direct_resolver::{DirectBinding, MultiDirectResolver, SingleDirectResolver};
pub use middleware::{MiddlewareRegistry, RootMiddleware};
pub use protocol_handler::{
    HandlerAnswer, HandlerBinding, HandlerContext, MultiProtocolHandler, ReferralRequest,
    SingleProtocolHandler,
};
pub use response_cache::ResponseCache;
pub use root_resolver::RootResolver;
pub use root_server::RootServer;
pub use root_zone::RootZone;
