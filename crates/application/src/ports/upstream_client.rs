use async_trait::async_trait;

/// Single-shot DNS query transport towards the upstream resolver.
///
/// Takes one wire-format question and returns the first reply datagram,
/// or `None` on timeout or transport error. Implementations bound their
/// own concurrency; callers simply await.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn query(&self, question: &[u8]) -> Option<Vec<u8>>;
}
