use nat64_dns_domain::DomainError;
use network_interface::{Addr, NetworkInterface, NetworkInterfaceConfig};
use std::net::Ipv6Addr;
use tracing::debug;

/// IPv6 addresses currently assigned to the named interface.
///
/// Returns an empty vec when the interface exists but carries no IPv6
/// addresses, and also when it does not exist at all; the caller treats
/// both the same way (nothing to bind).
pub fn interface_ipv6_addresses(name: &str) -> Result<Vec<Ipv6Addr>, DomainError> {
    let interfaces = NetworkInterface::show()
        .map_err(|e| DomainError::IoError(format!("Failed to enumerate interfaces: {}", e)))?;

    let addresses: Vec<Ipv6Addr> = interfaces
        .iter()
        .filter(|iface| iface.name == name)
        .flat_map(|iface| iface.addr.iter())
        .filter_map(|addr| match addr {
            Addr::V6(v6) => Some(v6.ip),
            Addr::V4(_) => None,
        })
        .collect();

    debug!(interface = %name, count = addresses.len(), "Interface IPv6 addresses discovered");
    Ok(addresses)
}
