use crate::ports::RootZone;
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::{Record, RecordType};
use hickory_proto::serialize::binary::{BinDecodable, BinDecoder};
use hip5_domain::DomainError;
use std::sync::Arc;

/// Builds the signed messages the middleware synthesizes itself.
pub struct ResponseBuilder {
    zone: Arc<dyn RootZone>,
}

impl ResponseBuilder {
    pub fn new(zone: Arc<dyn RootZone>) -> Self {
        Self { zone }
    }

    /// Authoritative response carrying only the signed zone SOA.
    ///
    /// Tells a recursive resolver there is no answer here and that it
    /// should ask again with the full query.
    pub fn build_soa(&self) -> Message {
        let mut authority = vec![self.zone.to_soa()];
        self.zone.sign_rrset(&mut authority, RecordType::SOA);

        let mut message = authoritative_response();
        message.add_name_servers(authority);
        message
    }

    /// Authoritative response whose answer section is decoded from `data`.
    ///
    /// The answer set is signed under `record_type` and, unless that is
    /// already CNAME, under CNAME as well.
    pub fn build_from_records(
        &self,
        data: &[u8],
        record_type: RecordType,
    ) -> Result<Message, DomainError> {
        let mut answers = decode_records(data)?;

        // Answers resolved from alternate name systems appear to come
        // directly from the root zone.
        self.zone.sign_rrset(&mut answers, record_type);
        if record_type != RecordType::CNAME {
            self.zone.sign_rrset(&mut answers, RecordType::CNAME);
        }

        let mut message = authoritative_response();
        message.add_answers(answers);
        Ok(message)
    }
}

fn authoritative_response() -> Message {
    let mut message = Message::new(0, MessageType::Response, OpCode::Query);
    message.set_authoritative(true);
    message
}

/// Decode consecutive wire-format records until `data` is exhausted.
pub fn decode_records(data: &[u8]) -> Result<Vec<Record>, DomainError> {
    let mut decoder = BinDecoder::new(data);
    let mut records = Vec::new();

    while !decoder.is_empty() {
        let record =
            Record::read(&mut decoder).map_err(|e| DomainError::RecordDecode(e.to_string()))?;
        records.push(record);
    }

    Ok(records)
}
