use hickory_proto::op::Message;
use hickory_proto::rr::RecordType;

/// Response cache shared with the root name server, keyed by lowercased
/// query name and type.
pub trait ResponseCache: Send + Sync {
    fn get(&self, name: &str, record_type: RecordType) -> Option<Message>;

    fn set(&self, name: &str, record_type: RecordType, response: &Message);
}
