use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use async_trait::async_trait;
use nat64_dns_application::ports::{Dns64Resolver, UpstreamClient};
use nat64_dns_domain::Nat64Prefix;
use std::net::Ipv6Addr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Classic DNS64: queries upstream for A records and maps each one under
/// the NAT64 prefix, preserving upstream answer order.
pub struct Dns64Synthesizer {
    upstream: Arc<dyn UpstreamClient>,
}

impl Dns64Synthesizer {
    pub fn new(upstream: Arc<dyn UpstreamClient>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl Dns64Resolver for Dns64Synthesizer {
    async fn synthesize(&self, qname: &str, prefix: &Nat64Prefix) -> Vec<Ipv6Addr> {
        let question = match MessageBuilder::build_a_query(qname) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(qname = %qname, error = %e, "Cannot build upstream question");
                return Vec::new();
            }
        };

        let Some(reply) = self.upstream.query(&question).await else {
            debug!(qname = %qname, "No upstream reply");
            return Vec::new();
        };

        let ipv4_addrs = match ResponseParser::parse_a_records(&reply) {
            Ok(addrs) => addrs,
            Err(e) => {
                debug!(qname = %qname, error = %e, "Unparseable upstream reply");
                return Vec::new();
            }
        };

        // An IPv4 needs 32 host bits; refuse to emit corrupted addresses
        // under a longer prefix.
        if prefix.host_bits() < 32 {
            warn!(
                prefix = %prefix,
                host_bits = prefix.host_bits(),
                "NAT64 prefix too long to embed IPv4"
            );
            return Vec::new();
        }

        ipv4_addrs
            .into_iter()
            .map(|ipv4| prefix.embed_ipv4(ipv4))
            .collect()
    }
}
