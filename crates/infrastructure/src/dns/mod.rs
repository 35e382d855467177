pub mod middleware_slot;
pub mod root_cache;

pub use middleware_slot::MiddlewareSlot;
pub use root_cache::{RootCacheMetrics, RootResponseCache};
