use async_trait::async_trait;
use nat64_dns_application::ports::UpstreamClient;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

/// Single-shot UDP query client towards the upstream resolver.
///
/// A global counting semaphore caps concurrently outstanding queries;
/// waiters queue unbounded. Each admitted query gets one ephemeral socket
/// which is dropped unconditionally after the first reply datagram, the
/// deadline, or a transport error. No pooling, no retry.
pub struct UdpUpstreamClient {
    resolver: SocketAddr,
    timeout: Duration,
    inflight: Arc<Semaphore>,
}

impl UdpUpstreamClient {
    pub fn new(resolver: SocketAddr, timeout: Duration, max_inflight: usize) -> Self {
        Self {
            resolver,
            timeout,
            inflight: Arc::new(Semaphore::new(max_inflight)),
        }
    }

    fn local_bind_addr(&self) -> &'static str {
        if self.resolver.is_ipv4() {
            "0.0.0.0:0"
        } else {
            "[::]:0"
        }
    }

    async fn query_once(&self, question: &[u8]) -> std::io::Result<Option<Vec<u8>>> {
        let socket = UdpSocket::bind(self.local_bind_addr()).await?;
        socket.connect(self.resolver).await?;
        socket.send(question).await?;

        let mut reply_buf = vec![0u8; 4096];
        match tokio::time::timeout(self.timeout, socket.recv(&mut reply_buf)).await {
            Ok(Ok(len)) => {
                reply_buf.truncate(len);
                Ok(Some(reply_buf))
            }
            Ok(Err(e)) => Err(e),
            Err(_) => {
                debug!(resolver = %self.resolver, "Upstream query timed out");
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl UpstreamClient for UdpUpstreamClient {
    async fn query(&self, question: &[u8]) -> Option<Vec<u8>> {
        // Closed only if the semaphore is dropped, which cannot happen
        // while &self is alive.
        let _permit = self.inflight.acquire().await.ok()?;

        match self.query_once(question).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(resolver = %self.resolver, error = %e, "Upstream transport error");
                None
            }
        }
    }
}
