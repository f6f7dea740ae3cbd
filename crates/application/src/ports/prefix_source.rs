use async_trait::async_trait;
use nat64_dns_domain::Nat64Prefix;

/// Supplier of the NAT64 prefix used for DNS64 synthesis.
///
/// `current` degrades to `None` when no prefix can be produced — missing
/// file, unreadable content, rejected symlink — and never returns an error;
/// the caller answers with an empty record set instead.
#[async_trait]
pub trait PrefixSource: Send + Sync {
    async fn current(&self) -> Option<Nat64Prefix>;
}
