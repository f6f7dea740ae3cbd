//! NAT64 DNS Domain Layer
pub mod config;
pub mod errors;
pub mod prefix;
pub mod synthesis;

pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use prefix::Nat64Prefix;
pub use synthesis::{SynthesisEngine, SynthesisKey};
