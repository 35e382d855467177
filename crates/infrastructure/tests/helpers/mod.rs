#![allow(dead_code)]

use async_trait::async_trait;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{A, NS, SOA, TXT};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use hip5_application::ports::{RootResolver, RootZone};
use hip5_domain::DomainError;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub fn name(s: &str) -> Name {
    Name::from_ascii(s).unwrap()
}

pub fn query(domain: &str, record_type: RecordType) -> Message {
    let mut message = Message::new(0x4242, MessageType::Query, OpCode::Query);
    message.add_query(Query::query(name(domain), record_type));
    message
}

pub fn a_record(owner: &str, ttl: u32, ip: Ipv4Addr) -> Record {
    Record::from_rdata(name(owner), ttl, RData::A(A(ip)))
}

pub fn ns_record(owner: &str, ttl: u32, target: &str) -> Record {
    Record::from_rdata(name(owner), ttl, RData::NS(NS(name(target))))
}

pub fn response_with(answers: Vec<Record>, authority: Vec<Record>) -> Message {
    let mut message = Message::new(0x4242, MessageType::Response, OpCode::Query);
    message.add_answers(answers);
    message.add_name_servers(authority);
    message
}

pub fn wire(records: &[Record]) -> Vec<u8> {
    let mut data = Vec::new();
    for record in records {
        data.extend(record.to_bytes().unwrap());
    }
    data
}

/// Root resolver that always returns the same response and counts calls.
pub struct FixedRootResolver {
    response: Message,
    calls: AtomicUsize,
}

impl FixedRootResolver {
    pub fn new(response: Message) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RootResolver for FixedRootResolver {
    async fn response(&self, _request: &Message) -> Result<Message, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }

    async fn lookup_name(&self, _name: &str) -> Result<Option<Vec<u8>>, DomainError> {
        Ok(None)
    }
}

/// Signs by appending a `sig:<TYPE>` TXT record per call.
pub struct RecordingZone {
    signed: Mutex<Vec<RecordType>>,
}

impl RecordingZone {
    pub fn new() -> Self {
        Self {
            signed: Mutex::new(Vec::new()),
        }
    }

    pub fn signed_types(&self) -> Vec<RecordType> {
        self.signed.lock().unwrap().clone()
    }
}

impl RootZone for RecordingZone {
    fn to_soa(&self) -> Record {
        let soa = SOA::new(name("."), name("."), 2024010100, 1800, 900, 604800, 86400);
        Record::from_rdata(Name::root(), 86400, RData::SOA(soa))
    }

    fn sign_rrset(&self, records: &mut Vec<Record>, record_type: RecordType) {
        self.signed.lock().unwrap().push(record_type);
        let owner = records
            .first()
            .map(|record| record.name().clone())
            .unwrap_or_else(Name::root);
        let tag = format!("sig:{}", record_type);
        records.push(Record::from_rdata(owner, 0, RData::TXT(TXT::new(vec![tag]))));
    }
}

pub fn records_of(records: &[Record], record_type: RecordType) -> Vec<&Record> {
    records
        .iter()
        .filter(|record| record.record_type() == record_type)
        .collect()
}

/// Types named by the `sig:` markers in `records`.
pub fn signature_tags(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| match record.data() {
            RData::TXT(txt) => txt.txt_data().first().cloned(),
            _ => None,
        })
        .filter_map(|tag| String::from_utf8(tag.into_vec()).ok())
        .filter_map(|tag| tag.strip_prefix("sig:").map(str::to_string))
        .collect()
}
