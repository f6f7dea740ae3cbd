//! DNS Message Builder
//!
//! Constructs the upstream A-type question in wire format using
//! `hickory-proto`. Exactly one question per outbound packet.

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use nat64_dns_domain::DomainError;
use std::str::FromStr;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Build an A-record query for `qname` and serialize to wire bytes.
    ///
    /// Uses a random transaction id and sets RD, matching what the
    /// upstream resolver expects from a stub.
    pub fn build_a_query(qname: &str) -> Result<Vec<u8>, DomainError> {
        let name = Name::from_str(qname).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid qname '{}': {}", qname, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordType::A);
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(fastrand::u16(..), MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        Self::serialize_message(&message)
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
