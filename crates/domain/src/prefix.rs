use crate::errors::DomainError;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// An IPv6 network under which NAT64 addresses are synthesized.
///
/// Immutable once constructed; host bits below the prefix length are
/// masked off, so two prefixes covering the same network compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nat64Prefix {
    network: Ipv6Addr,
    prefix_len: u8,
}

impl Nat64Prefix {
    pub fn new(address: Ipv6Addr, prefix_len: u8) -> Result<Self, DomainError> {
        if prefix_len > 128 {
            return Err(DomainError::InvalidPrefix(format!(
                "prefix length {} out of range",
                prefix_len
            )));
        }
        let mask = if prefix_len == 0 {
            0
        } else {
            u128::MAX << (128 - prefix_len)
        };
        Ok(Self {
            network: Ipv6Addr::from(u128::from(address) & mask),
            prefix_len,
        })
    }

    pub fn network_address(&self) -> Ipv6Addr {
        self.network
    }

    pub fn network_bits(&self) -> u128 {
        u128::from(self.network)
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Host bits available below the prefix.
    pub fn host_bits(&self) -> u8 {
        128 - self.prefix_len
    }

    /// OR an IPv4 address into the low 32 bits of the network address.
    ///
    /// Callers must check `host_bits() >= 32` first; embedding under a
    /// longer prefix would corrupt the network portion.
    pub fn embed_ipv4(&self, ipv4: Ipv4Addr) -> Ipv6Addr {
        Ipv6Addr::from(self.network_bits() | u128::from(u32::from(ipv4)))
    }
}

impl FromStr for Nat64Prefix {
    type Err = DomainError;

    /// Parses `<ipv6-address>[/<length>]`; a bare address is a /128.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr_part, len_part) = match s.split_once('/') {
            Some((a, l)) => (a, Some(l)),
            None => (s, None),
        };

        let address: Ipv6Addr = addr_part
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidPrefix(format!("invalid address: {}", addr_part)))?;

        let prefix_len = match len_part {
            Some(l) => l
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|len| *len <= 128)
                .ok_or_else(|| {
                    DomainError::InvalidPrefix(format!("invalid prefix length: {}", l))
                })?,
            None => 128,
        };

        Self::new(address, prefix_len)
    }
}

impl fmt::Display for Nat64Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix_len)
    }
}
