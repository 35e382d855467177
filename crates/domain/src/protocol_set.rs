use crate::errors::DomainError;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Ordered, immutable set of HIP-5 protocol names.
///
/// Matching is case-sensitive and uses the names exactly as configured.
/// Lookups that can match more than one name resolve in configuration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolSet {
    protocols: Arc<[Arc<str>]>,
}

impl ProtocolSet {
    pub fn new<I, S>(protocols: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut ordered: Vec<Arc<str>> = Vec::new();

        for protocol in protocols {
            let protocol: String = protocol.into();
            if protocol.trim().is_empty() {
                return Err(DomainError::InvalidProtocolSet(
                    "protocol names cannot be blank".to_string(),
                ));
            }
            if !seen.insert(protocol.clone()) {
                return Err(DomainError::InvalidProtocolSet(format!(
                    "duplicate protocol '{}'",
                    protocol
                )));
            }
            ordered.push(Arc::from(protocol));
        }

        if ordered.is_empty() {
            return Err(DomainError::InvalidProtocolSet(
                "at least one protocol is required".to_string(),
            ));
        }

        Ok(Self {
            protocols: ordered.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.protocols.len()
    }

    /// Never true for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.protocols.is_empty()
    }

    pub fn is_multi(&self) -> bool {
        self.protocols.len() > 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.protocols.iter().map(|p| p.as_ref())
    }

    /// First configured protocol contained anywhere in `tld`.
    pub fn match_tld(&self, tld: &str) -> Option<&str> {
        self.iter().find(|p| tld.contains(p))
    }

    /// Configured protocol equal to `label`.
    pub fn match_label(&self, label: &str) -> Option<&str> {
        self.iter().find(|p| *p == label)
    }
}

impl fmt::Display for ProtocolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(f, "[{}]", joined.join(", "))
    }
}
