use async_trait::async_trait;
use nat64_dns_domain::Nat64Prefix;
use std::net::Ipv6Addr;

/// DNS64 synthesis: upstream A records mapped under a NAT64 prefix.
///
/// The returned addresses preserve upstream record order. An empty vec
/// covers every failure mode (no upstream reply, no A records, prefix too
/// long to embed an IPv4).
#[async_trait]
pub trait Dns64Resolver: Send + Sync {
    async fn synthesize(&self, qname: &str, prefix: &Nat64Prefix) -> Vec<Ipv6Addr>;
}
