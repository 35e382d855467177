//! HIP-5 Domain Layer
pub mod config;
pub mod errors;
pub mod labels;
pub mod protocol_set;

pub use config::{CacheConfig, Config, ConfigError, Hip5Config, LoggingConfig};
pub use errors::DomainError;
pub use protocol_set::ProtocolSet;
