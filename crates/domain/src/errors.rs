use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("DNS request carries no question")]
    MissingQuestion,

    #[error("Failed to decode DNS record: {0}")]
    RecordDecode(String),

    #[error("Root resolution failed: {0}")]
    Resolution(String),

    #[error("Invalid protocol set: {0}")]
    InvalidProtocolSet(String),

    #[error("{binding} binding does not fit {configured} configured protocol(s)")]
    BindingMismatch {
        binding: &'static str,
        configured: usize,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
