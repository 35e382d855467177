use hickory_proto::rr::{Record, RecordType};

/// Zone apex data and signing keys owned by the root name server.
pub trait RootZone: Send + Sync {
    /// SOA record for the zone the server is authoritative for.
    fn to_soa(&self) -> Record;

    /// Sign the records of `record_type` in `records`, appending the
    /// resulting signatures to the same set.
    fn sign_rrset(&self, records: &mut Vec<Record>, record_type: RecordType);
}
