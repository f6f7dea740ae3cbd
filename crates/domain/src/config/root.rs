use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::prefix_file::PrefixFileConfig;
use super::server::ServerConfig;
use super::synthesis::SynthesisConfig;
use super::upstream::UpstreamConfig;
use crate::prefix::Nat64Prefix;

/// Main configuration structure for the NAT64 DNS server
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, interface)
    #[serde(default)]
    pub server: ServerConfig,

    /// Custom synthesis configuration (suffix, base prefix)
    #[serde(default)]
    pub synthesis: SynthesisConfig,

    /// Upstream resolver used for DNS64 fallback
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// NAT64 prefix file settings
    #[serde(default)]
    pub prefix_file: PrefixFileConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. nat64-dns.toml in current directory
    /// 3. /etc/nat64-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("nat64-dns.toml").exists() {
            Self::from_file("nat64-dns.toml")?
        } else if std::path::Path::new("/etc/nat64-dns/config.toml").exists() {
            Self::from_file("/etc/nat64-dns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(interface) = overrides.interface {
            self.server.interface = interface;
        }
        if let Some(upstream) = overrides.upstream {
            self.upstream.server = upstream;
        }
        if let Some(path) = overrides.prefix_file {
            self.prefix_file.path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.synthesis.suffix.is_empty() || self.synthesis.suffix.contains('.') {
            return Err(ConfigError::Validation(format!(
                "Synthesis suffix must be a single label, got '{}'",
                self.synthesis.suffix
            )));
        }

        let base: Nat64Prefix = self
            .synthesis
            .base_prefix
            .parse()
            .map_err(|e| ConfigError::Validation(format!("Invalid base prefix: {}", e)))?;
        if base.host_bits() < 32 {
            return Err(ConfigError::Validation(format!(
                "Base prefix {} leaves no room to embed an IPv4 address",
                base
            )));
        }

        if self.prefix_file.read_workers == 0 || self.prefix_file.max_concurrent_reads == 0 {
            return Err(ConfigError::Validation(
                "Prefix file worker and read limits must be nonzero".to_string(),
            ));
        }

        if self.upstream.max_inflight == 0 {
            return Err(ConfigError::Validation(
                "Upstream in-flight limit must be nonzero".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub interface: Option<String>,
    pub upstream: Option<String>,
    pub prefix_file: Option<String>,
    pub log_level: Option<String>,
}
