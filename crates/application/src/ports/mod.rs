mod dns64_resolver;
mod prefix_source;
mod upstream_client;

pub use dns64_resolver::Dns64Resolver;
pub use prefix_source::PrefixSource;
pub use upstream_client::UpstreamClient;
