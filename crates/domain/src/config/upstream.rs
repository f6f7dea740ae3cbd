use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Resolver queried for A records during DNS64 synthesis.
    #[serde(default = "default_server")]
    pub server: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Seconds to wait for a single upstream reply datagram.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// Cap on concurrently outstanding upstream queries.
    #[serde(default = "default_max_inflight")]
    pub max_inflight: usize,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            port: default_port(),
            query_timeout: default_query_timeout(),
            max_inflight: default_max_inflight(),
        }
    }
}

fn default_server() -> String {
    "127.0.0.53".to_string()
}

fn default_port() -> u16 {
    53
}

fn default_query_timeout() -> u64 {
    2
}

fn default_max_inflight() -> usize {
    64
}
