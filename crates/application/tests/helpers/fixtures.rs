#![allow(dead_code)]

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{A, CNAME, NS, SOA, TXT};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use std::net::Ipv4Addr;

const SIGNATURE_PREFIX: &str = "sig:";

/// Name with its letter case kept as written.
pub fn name(s: &str) -> Name {
    Name::from_ascii(s).unwrap()
}

pub fn query(domain: &str, record_type: RecordType) -> Message {
    let mut message = Message::new(0x1234, MessageType::Query, OpCode::Query);
    message.add_query(Query::query(name(domain), record_type));
    message
}

pub fn empty_request() -> Message {
    Message::new(0x1234, MessageType::Query, OpCode::Query)
}

pub fn soa_record() -> Record {
    let soa = SOA::new(name("."), name("."), 2024010100, 1800, 900, 604800, 86400);
    Record::from_rdata(Name::root(), 86400, RData::SOA(soa))
}

pub fn ns_record(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 86400, RData::NS(NS(name(target))))
}

pub fn a_record(owner: &str, ip: Ipv4Addr) -> Record {
    Record::from_rdata(name(owner), 300, RData::A(A(ip)))
}

pub fn cname_record(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::CNAME(CNAME(name(target))))
}

/// Root answer that delegates `owner` to the given NS targets.
pub fn referral_response(owner: &str, targets: &[&str]) -> Message {
    let mut message = Message::new(0x1234, MessageType::Response, OpCode::Query);
    message.add_name_servers(targets.iter().map(|t| ns_record(owner, t)));
    message
}

/// Root answer with a real answer section and no delegation.
pub fn answer_response(records: Vec<Record>) -> Message {
    let mut message = Message::new(0x1234, MessageType::Response, OpCode::Query);
    message.add_answers(records);
    message
}

pub fn wire(records: &[Record]) -> Vec<u8> {
    let mut data = Vec::new();
    for record in records {
        data.extend(record.to_bytes().unwrap());
    }
    data
}

/// Stand-in for an RRSIG: a TXT record tagged with the signed type.
pub fn signature_marker(owner: &Name, record_type: RecordType) -> Record {
    let tag = format!("{}{}", SIGNATURE_PREFIX, record_type);
    Record::from_rdata(owner.clone(), 0, RData::TXT(TXT::new(vec![tag])))
}

fn marker_type(record: &Record) -> Option<String> {
    let RData::TXT(txt) = record.data() else {
        return None;
    };
    let tag = txt.txt_data().first()?;
    let tag = std::str::from_utf8(tag).ok()?;
    tag.strip_prefix(SIGNATURE_PREFIX).map(str::to_string)
}

/// Types covered by the signature markers in `records`, in order.
pub fn signed_types_in(records: &[Record]) -> Vec<String> {
    records.iter().filter_map(marker_type).collect()
}

/// `records` without signature markers.
pub fn data_records(records: &[Record]) -> Vec<&Record> {
    records
        .iter()
        .filter(|record| marker_type(record).is_none())
        .collect()
}
