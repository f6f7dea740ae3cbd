#![allow(dead_code)]

use async_trait::async_trait;
use nat64_dns_application::ports::{Dns64Resolver, PrefixSource};
use nat64_dns_domain::Nat64Prefix;
use std::collections::HashMap;
use std::net::Ipv6Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub struct MockPrefixSource {
    prefix: Mutex<Option<Nat64Prefix>>,
    calls: AtomicUsize,
}

impl MockPrefixSource {
    pub fn unavailable() -> Self {
        Self {
            prefix: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: Mutex::new(Some(prefix.parse().unwrap())),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PrefixSource for MockPrefixSource {
    async fn current(&self) -> Option<Nat64Prefix> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.prefix.lock().unwrap()
    }
}

pub struct MockDns64Resolver {
    responses: Mutex<HashMap<String, Vec<Ipv6Addr>>>,
    calls: AtomicUsize,
}

impl MockDns64Resolver {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_response(&self, qname: &str, addresses: Vec<&str>) {
        self.responses.lock().unwrap().insert(
            qname.to_string(),
            addresses.into_iter().map(|a| a.parse().unwrap()).collect(),
        );
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Dns64Resolver for MockDns64Resolver {
    async fn synthesize(&self, qname: &str, _prefix: &Nat64Prefix) -> Vec<Ipv6Addr> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .get(qname)
            .cloned()
            .unwrap_or_default()
    }
}
