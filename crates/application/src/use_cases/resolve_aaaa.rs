use crate::ports::{Dns64Resolver, PrefixSource};
use nat64_dns_domain::SynthesisEngine;
use std::net::Ipv6Addr;
use std::sync::Arc;
use tracing::{debug, info};

/// Outcome of resolving one AAAA question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AaaaResolution {
    /// Decoded directly from the hostname; answered with a 300s TTL.
    Custom(Ipv6Addr),
    /// DNS64 synthesis under the loaded prefix; answered with a 60s TTL.
    /// May be empty — a valid no-data response.
    Synthesized(Vec<Ipv6Addr>),
    /// No NAT64 prefix could be loaded; answered with zero records.
    Unavailable,
}

/// Resolution pipeline for AAAA questions: custom synthesis first, then
/// the DNS64 fallback under the dynamically loaded prefix.
pub struct ResolveAaaaUseCase {
    engine: SynthesisEngine,
    prefix_source: Arc<dyn PrefixSource>,
    dns64: Arc<dyn Dns64Resolver>,
}

impl ResolveAaaaUseCase {
    pub fn new(
        engine: SynthesisEngine,
        prefix_source: Arc<dyn PrefixSource>,
        dns64: Arc<dyn Dns64Resolver>,
    ) -> Self {
        Self {
            engine,
            prefix_source,
            dns64,
        }
    }

    pub async fn execute(&self, qname: &str) -> AaaaResolution {
        if let Some(address) = self.engine.resolve(qname) {
            info!(qname = %qname, address = %address, "Custom synthesis hit");
            return AaaaResolution::Custom(address);
        }

        let Some(prefix) = self.prefix_source.current().await else {
            debug!(qname = %qname, "No NAT64 prefix available, answering empty");
            return AaaaResolution::Unavailable;
        };

        let addresses = self.dns64.synthesize(qname, &prefix).await;
        info!(qname = %qname, prefix = %prefix, answers = addresses.len(), "DNS64 synthesis");
        AaaaResolution::Synthesized(addresses)
    }
}
