use async_trait::async_trait;
use nat64_dns_application::ports::PrefixSource;
use nat64_dns_domain::config::PrefixFileConfig;
use nat64_dns_domain::{DomainError, Nat64Prefix};
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};
use tokio::sync::{oneshot, Semaphore};
use tracing::{debug, warn};

/// Process-lifetime cache of the last successfully loaded prefix, keyed
/// on (resolved real path, modification time). The lock is held only
/// across the compare/update of these fields, never across file I/O.
struct PrefixCacheEntry {
    prefix: Nat64Prefix,
    raw: String,
    real_path: PathBuf,
    mtime: Option<SystemTime>,
}

/// Loads the NAT64 prefix from a tayga-style config file.
///
/// Blocking reads run on a small dedicated thread pool so they never
/// stall the request path, and are additionally gated by a counting
/// semaphore with a short acquire timeout. Every failure mode — missing
/// file, unreadable content, symlink escaping the config directory,
/// permit timeout — degrades to `None` for that call.
pub struct FilePrefixStore {
    path: PathBuf,
    cache: Arc<Mutex<Option<PrefixCacheEntry>>>,
    read_gate: Arc<Semaphore>,
    acquire_timeout: Duration,
    pool: rayon::ThreadPool,
}

impl FilePrefixStore {
    pub fn new(config: &PrefixFileConfig) -> Result<Self, DomainError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.read_workers)
            .thread_name(|i| format!("prefix-read-{}", i))
            .build()
            .map_err(|e| DomainError::IoError(format!("Failed to build read pool: {}", e)))?;

        Ok(Self {
            path: PathBuf::from(&config.path),
            cache: Arc::new(Mutex::new(None)),
            read_gate: Arc::new(Semaphore::new(config.max_concurrent_reads)),
            acquire_timeout: Duration::from_secs(config.acquire_timeout),
            pool,
        })
    }

    fn read_and_parse(
        path: &Path,
        cache: &Mutex<Option<PrefixCacheEntry>>,
    ) -> Option<Nat64Prefix> {
        // Resolve symlinks and refuse to follow one that leaves the
        // directory the config file is supposed to live in.
        let real_path = fs::canonicalize(path).ok()?;
        let allowed_dir = fs::canonicalize(path.parent()?).ok()?;
        if !real_path.starts_with(&allowed_dir) {
            warn!(
                configured = %path.display(),
                resolved = %real_path.display(),
                "Prefix file symlink escapes its directory, refusing to read"
            );
            return None;
        }

        let mtime = fs::metadata(&real_path)
            .ok()
            .and_then(|meta| meta.modified().ok());

        {
            let cached = cache.lock().ok()?;
            if let Some(entry) = cached.as_ref() {
                if entry.real_path == real_path && entry.mtime == mtime && mtime.is_some() {
                    debug!(raw = %entry.raw, "Prefix cache hit, skipping file read");
                    return Some(entry.prefix);
                }
            }
        }

        let file = fs::File::open(&real_path).ok()?;
        // Streamed line by line; the file is never loaded whole.
        for line in BufReader::new(file).lines() {
            let line = line.ok()?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut tokens = trimmed.split_whitespace();
            if tokens.next() != Some("prefix") {
                continue;
            }
            let raw = tokens.next()?;

            let prefix: Nat64Prefix = match raw.parse() {
                Ok(p) => p,
                Err(e) => {
                    warn!(raw = %raw, error = %e, "Invalid prefix in prefix file");
                    return None;
                }
            };

            debug!(prefix = %prefix, path = %real_path.display(), "NAT64 prefix loaded");
            let mut cached = cache.lock().ok()?;
            *cached = Some(PrefixCacheEntry {
                prefix,
                raw: raw.to_string(),
                real_path,
                mtime,
            });
            return Some(prefix);
        }

        None
    }
}

#[async_trait]
impl PrefixSource for FilePrefixStore {
    async fn current(&self) -> Option<Nat64Prefix> {
        let permit = match tokio::time::timeout(self.acquire_timeout, self.read_gate.acquire())
            .await
        {
            Ok(Ok(permit)) => permit,
            Ok(Err(_)) => return None,
            Err(_) => {
                warn!(path = %self.path.display(), "Timed out waiting for a prefix read slot");
                return None;
            }
        };

        let (tx, rx) = oneshot::channel();
        let path = self.path.clone();
        let cache = Arc::clone(&self.cache);
        self.pool.spawn(move || {
            let _ = tx.send(Self::read_and_parse(&path, &cache));
        });

        let result = rx.await.ok().flatten();
        drop(permit);
        result
    }
}
