use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::AAAA;
use hickory_proto::rr::{RData, Record, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use nat64_dns_application::use_cases::{AaaaResolution, ResolveAaaaUseCase};
use nat64_dns_domain::DomainError;
use std::net::Ipv6Addr;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

const CUSTOM_TTL: u32 = 300;
const DNS64_TTL: u32 = 60;

/// Per-datagram dispatch: decode, route AAAA questions through the
/// resolution pipeline, reply exactly once.
///
/// Malformed datagrams are answered with FORMERR when the transaction id
/// is recoverable (the first two bytes); shorter datagrams have no
/// transaction to answer and are dropped. Internal faults surface as
/// SERVFAIL, never as a missing reply.
pub struct DnsServerHandler {
    use_case: Arc<ResolveAaaaUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ResolveAaaaUseCase>) -> Self {
        Self { use_case }
    }

    /// Handle one inbound datagram, producing at most one reply datagram.
    pub async fn handle_datagram(&self, datagram: &[u8]) -> Option<Vec<u8>> {
        let request = match Message::from_vec(datagram) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, len = datagram.len(), "Unparseable inbound datagram");
                let id = recover_transaction_id(datagram)?;
                return encode_reply(&bare_response(id, ResponseCode::FormErr)).ok();
            }
        };

        match self.process(&request).await {
            Ok(reply) => match encode_reply(&reply) {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    error!(error = %e, "Failed to encode reply");
                    encode_reply(&bare_response(request.id(), ResponseCode::ServFail)).ok()
                }
            },
            Err(e) => {
                error!(error = %e, "Request handling failed");
                encode_reply(&bare_response(request.id(), ResponseCode::ServFail)).ok()
            }
        }
    }

    async fn process(&self, request: &Message) -> Result<Message, DomainError> {
        let mut reply = response_skeleton(request);

        let Some(query) = request.queries().first() else {
            debug!(id = request.id(), "Datagram carries no question");
            return Ok(reply);
        };

        let qname = query.name().to_utf8();
        let qname = qname.trim_end_matches('.');

        if query.query_type() != RecordType::AAAA {
            // Only AAAA is served; everything else gets an immediate
            // empty success answer with no upstream contact.
            debug!(qname = %qname, qtype = ?query.query_type(), "Non-AAAA query, empty answer");
            return Ok(reply);
        }

        let (addresses, ttl): (Vec<Ipv6Addr>, u32) = match self.use_case.execute(qname).await {
            AaaaResolution::Custom(address) => (vec![address], CUSTOM_TTL),
            AaaaResolution::Synthesized(addresses) => (addresses, DNS64_TTL),
            AaaaResolution::Unavailable => (Vec::new(), DNS64_TTL),
        };

        info!(qname = %qname, answers = addresses.len(), "AAAA query answered");

        let name = query.name().clone();
        for address in addresses {
            reply.add_answer(Record::from_rdata(
                name.clone(),
                ttl,
                RData::AAAA(AAAA(address)),
            ));
        }

        Ok(reply)
    }
}

/// Response echoing the request's id and question, with the response,
/// authoritative and recursion-available flags set.
fn response_skeleton(request: &Message) -> Message {
    let mut reply = Message::new(request.id(), MessageType::Response, OpCode::Query);
    reply.set_authoritative(true);
    reply.set_recursion_available(true);
    reply.add_queries(request.queries().to_vec());
    reply
}

/// Response carrying only a header; used when no question survived parsing.
fn bare_response(id: u16, code: ResponseCode) -> Message {
    let mut reply = Message::new(id, MessageType::Response, OpCode::Query);
    reply.set_authoritative(true);
    reply.set_recursion_available(true);
    reply.set_response_code(code);
    reply
}

fn recover_transaction_id(datagram: &[u8]) -> Option<u16> {
    let bytes = datagram.get(0..2)?;
    Some(u16::from_be_bytes([bytes[0], bytes[1]]))
}

fn encode_reply(message: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message
        .emit(&mut encoder)
        .map_err(|e| DomainError::InvalidDnsMessage(format!("Failed to encode reply: {}", e)))?;
    Ok(buf)
}
