mod metrics;
mod storage;

pub use metrics::RootCacheMetrics;
pub use storage::RootResponseCache;
