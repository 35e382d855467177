pub mod cache;
pub mod errors;
pub mod hip5;
pub mod logging;
pub mod root;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use hip5::Hip5Config;
pub use logging::LoggingConfig;
pub use root::Config;
