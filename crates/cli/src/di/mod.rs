use nat64_dns_application::use_cases::ResolveAaaaUseCase;
use nat64_dns_domain::{Config, Nat64Prefix, SynthesisEngine};
use nat64_dns_infrastructure::dns::{
    Dns64Synthesizer, DnsServerHandler, FilePrefixStore, UdpUpstreamClient,
};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

/// Wired dependency graph for the DNS server.
pub struct Services {
    pub handler: Arc<DnsServerHandler>,
    pub prefix_source: Arc<FilePrefixStore>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let base_prefix: Nat64Prefix = config.synthesis.base_prefix.parse()?;
        let engine = SynthesisEngine::new(&config.synthesis.suffix, base_prefix);

        let prefix_source = Arc::new(FilePrefixStore::new(&config.prefix_file)?);

        let resolver_ip: IpAddr = config
            .upstream
            .server
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid upstream address {}: {}", config.upstream.server, e))?;
        let upstream = Arc::new(UdpUpstreamClient::new(
            SocketAddr::new(resolver_ip, config.upstream.port),
            Duration::from_secs(config.upstream.query_timeout),
            config.upstream.max_inflight,
        ));

        let dns64 = Arc::new(Dns64Synthesizer::new(upstream));

        let use_case = Arc::new(ResolveAaaaUseCase::new(
            engine,
            prefix_source.clone(),
            dns64,
        ));

        Ok(Self {
            handler: Arc::new(DnsServerHandler::new(use_case)),
            prefix_source,
        })
    }
}
