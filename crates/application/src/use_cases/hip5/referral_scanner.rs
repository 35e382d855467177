use hickory_proto::op::Message;
use hickory_proto::rr::{Name, RData, Record};
use hip5_domain::ProtocolSet;

/// An NS referral whose target ends in a configured protocol label.
#[derive(Debug, Clone, Copy)]
pub struct Referral<'a> {
    pub protocol: &'a str,
    pub record: &'a Record,
    pub target: &'a Name,
}

pub struct ReferralScanner {
    protocols: ProtocolSet,
}

impl ReferralScanner {
    pub fn new(protocols: ProtocolSet) -> Self {
        Self { protocols }
    }

    /// First NS record in the authority section, in document order, whose
    /// target's final label is a configured protocol.
    pub fn find_referral<'a>(&'a self, response: &'a Message) -> Option<Referral<'a>> {
        response.name_servers().iter().find_map(|record| {
            let RData::NS(ns) = record.data() else {
                return None;
            };
            let target = &ns.0;
            let label = target.iter().last()?;
            let label = std::str::from_utf8(label).ok()?;
            self.protocols
                .match_label(label)
                .map(|protocol| Referral {
                    protocol,
                    record,
                    target,
                })
        })
    }
}
