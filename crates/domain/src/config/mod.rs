pub mod errors;
pub mod logging;
pub mod prefix_file;
pub mod root;
pub mod server;
pub mod synthesis;
pub mod upstream;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use prefix_file::PrefixFileConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use synthesis::SynthesisConfig;
pub use upstream::UpstreamConfig;
