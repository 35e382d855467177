use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::labels::SYNTHETIC_TLD;
use crate::{DomainError, ProtocolSet};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Hip5Config {
    /// Protocol names, e.g. `["_eth", "hyper"]`. Order decides precedence
    /// when a TLD contains more than one of them.
    #[serde(default)]
    pub protocols: Vec<String>,

    #[serde(default = "default_handler_timeout_ms")]
    pub handler_timeout_ms: u64,

    #[serde(default = "default_synthetic_tld")]
    pub synthetic_tld: String,
}

impl Hip5Config {
    pub fn protocol_set(&self) -> Result<ProtocolSet, DomainError> {
        ProtocolSet::new(self.protocols.iter().cloned())
    }

    pub fn handler_timeout(&self) -> Duration {
        Duration::from_millis(self.handler_timeout_ms)
    }
}

impl Default for Hip5Config {
    fn default() -> Self {
        Self {
            protocols: vec![],
            handler_timeout_ms: default_handler_timeout_ms(),
            synthetic_tld: default_synthetic_tld(),
        }
    }
}

fn default_handler_timeout_ms() -> u64 {
    5000
}

fn default_synthetic_tld() -> String {
    SYNTHETIC_TLD.to_string()
}
