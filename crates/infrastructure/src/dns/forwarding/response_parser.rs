use hickory_proto::op::Message;
use hickory_proto::rr::RData;
use nat64_dns_domain::DomainError;
use std::net::Ipv4Addr;
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Extract the A records from an upstream reply, preserving their
    /// answer-section order. Non-A answer records (CNAMEs in a chain,
    /// etc.) are skipped.
    pub fn parse_a_records(response_bytes: &[u8]) -> Result<Vec<Ipv4Addr>, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to parse upstream reply: {}", e))
        })?;

        let addresses: Vec<Ipv4Addr> = message
            .answers()
            .iter()
            .filter_map(|record| match record.data() {
                RData::A(a) => Some(a.0),
                _ => None,
            })
            .collect();

        debug!(
            rcode = ?message.response_code(),
            a_records = addresses.len(),
            "Upstream reply parsed"
        );

        Ok(addresses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::op::{MessageType, OpCode};
    use hickory_proto::rr::rdata::A;
    use hickory_proto::rr::{Name, Record};
    use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
    use std::str::FromStr;

    fn reply_with_a_records(addrs: &[Ipv4Addr]) -> Vec<u8> {
        let name = Name::from_str("example.com.").unwrap();
        let mut message = Message::new(1, MessageType::Response, OpCode::Query);
        for addr in addrs {
            message.add_answer(Record::from_rdata(name.clone(), 60, RData::A(A(*addr))));
        }

        let mut buf = Vec::new();
        let mut encoder = BinEncoder::new(&mut buf);
        message.emit(&mut encoder).unwrap();
        buf
    }

    #[test]
    fn test_parse_preserves_answer_order() {
        let addrs = [
            Ipv4Addr::new(192, 0, 2, 3),
            Ipv4Addr::new(192, 0, 2, 1),
            Ipv4Addr::new(192, 0, 2, 2),
        ];
        let parsed = ResponseParser::parse_a_records(&reply_with_a_records(&addrs)).unwrap();
        assert_eq!(parsed, addrs);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ResponseParser::parse_a_records(&[0xff; 5]).is_err());
    }
}
