pub mod dns64;
pub mod forwarding;
pub mod prefix_store;
pub mod server;
pub mod upstream;

pub use dns64::Dns64Synthesizer;
pub use prefix_store::FilePrefixStore;
pub use server::DnsServerHandler;
pub use upstream::UdpUpstreamClient;
