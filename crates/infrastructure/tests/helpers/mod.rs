#![allow(dead_code)]

use async_trait::async_trait;
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use nat64_dns_application::ports::{PrefixSource, UpstreamClient};
use nat64_dns_domain::Nat64Prefix;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Upstream stub: hands back a canned reply (or nothing) and counts calls.
pub struct MockUpstreamClient {
    reply: Mutex<Option<Vec<u8>>>,
    calls: AtomicUsize,
}

impl MockUpstreamClient {
    pub fn silent() -> Self {
        Self {
            reply: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_reply(reply: Vec<u8>) -> Self {
        Self {
            reply: Mutex::new(Some(reply)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamClient for MockUpstreamClient {
    async fn query(&self, _question: &[u8]) -> Option<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.lock().unwrap().clone()
    }
}

pub struct MockPrefixSource {
    prefix: Option<Nat64Prefix>,
}

impl MockPrefixSource {
    pub fn unavailable() -> Self {
        Self { prefix: None }
    }

    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: Some(prefix.parse().unwrap()),
        }
    }
}

#[async_trait]
impl PrefixSource for MockPrefixSource {
    async fn current(&self) -> Option<Nat64Prefix> {
        self.prefix
    }
}

/// Wire-format upstream reply carrying the given A records, in order.
pub fn a_record_reply(qname: &str, addrs: &[Ipv4Addr]) -> Vec<u8> {
    let name = Name::from_str(&format!("{}.", qname)).unwrap();
    let mut message = Message::new(4242, MessageType::Response, OpCode::Query);
    for addr in addrs {
        message.add_answer(Record::from_rdata(name.clone(), 60, RData::A(A(*addr))));
    }

    let mut buf = Vec::new();
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}
