use clap::Parser;
use nat64_dns_application::ports::PrefixSource;
use nat64_dns_domain::CliOverrides;
use nat64_dns_infrastructure::system::interface_ipv6_addresses;
use tracing::{info, warn};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "nat64-dns")]
#[command(version)]
#[command(about = "NAT64 DNS - IPv6-only clients' gateway to IPv4 resources")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// UDP listen port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Interface whose IPv6 addresses to bind
    #[arg(short = 'i', long)]
    interface: Option<String>,

    /// Upstream resolver address
    #[arg(short = 'u', long)]
    upstream: Option<String>,

    /// NAT64 prefix file path
    #[arg(long)]
    prefix_file: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        interface: cli.interface.clone(),
        upstream: cli.upstream.clone(),
        prefix_file: cli.prefix_file.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting NAT64 DNS Server v{}", env!("CARGO_PKG_VERSION"));

    let services = di::Services::new(&config)?;

    // Probe once at startup so a missing prefix file is visible in the
    // logs immediately; the server still runs without DNS64 fallback.
    if services.prefix_source.current().await.is_none() {
        warn!(
            path = %config.prefix_file.path,
            "Prefix file missing or invalid, DNS64 fallback will not work"
        );
    }

    let addresses = interface_ipv6_addresses(&config.server.interface)?;
    if addresses.is_empty() {
        anyhow::bail!(
            "No IPv6 addresses found on interface {}",
            config.server.interface
        );
    }

    server::start_dns_server(&addresses, config.server.port, services.handler).await
}
