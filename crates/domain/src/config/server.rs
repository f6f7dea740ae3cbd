use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// UDP listen port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Interface whose IPv6 addresses the server binds to.
    #[serde(default = "default_interface")]
    pub interface: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            interface: default_interface(),
        }
    }
}

fn default_port() -> u16 {
    53
}

fn default_interface() -> String {
    "tailscale0".to_string()
}
