use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PrefixFileConfig {
    /// Tayga-style config file supplying the NAT64 prefix.
    #[serde(default = "default_path")]
    pub path: String,

    /// Threads in the pool that performs blocking file reads.
    #[serde(default = "default_read_workers")]
    pub read_workers: usize,

    /// Concurrent reads admitted past the semaphore.
    #[serde(default = "default_max_concurrent_reads")]
    pub max_concurrent_reads: usize,

    /// Seconds to wait for a read permit before giving up.
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout: u64,
}

impl Default for PrefixFileConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            read_workers: default_read_workers(),
            max_concurrent_reads: default_max_concurrent_reads(),
            acquire_timeout: default_acquire_timeout(),
        }
    }
}

fn default_path() -> String {
    "/etc/tayga/default.conf".to_string()
}

fn default_read_workers() -> usize {
    4
}

fn default_max_concurrent_reads() -> usize {
    8
}

fn default_acquire_timeout() -> u64 {
    5
}
