use crate::prefix::Nat64Prefix;
use std::net::{Ipv4Addr, Ipv6Addr};

const CUSTOMER_ID_MAX: u32 = 0xFF_FFFF;
const SITE_ID_SHIFT: u32 = 32;
const CUSTOMER_ID_SHIFT: u32 = 40;

/// Identifiers decoded from a synthesis hostname.
///
/// The customer id occupies 24 bits and the site id 8 bits of the host
/// portion of a synthesized address; together with the embedded IPv4 they
/// never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisKey {
    pub ipv4: Ipv4Addr,
    pub customer_id: u32,
    pub site_id: u8,
}

impl SynthesisKey {
    pub fn new(ipv4: Ipv4Addr, customer_id: u32, site_id: u8) -> Option<Self> {
        if customer_id > CUSTOMER_ID_MAX {
            return None;
        }
        Some(Self {
            ipv4,
            customer_id,
            site_id,
        })
    }

    /// Decode the labels left once the synthesis suffix has been removed.
    ///
    /// The first label is an IPv4 literal with `-` in place of `.`. The
    /// remaining label(s) carry the customer id (hex, optional leading `t`)
    /// and, when present, the site id (hex). Whichever label starts with
    /// `t` is the customer id; if neither does, the last label is the
    /// customer and the middle one the site (legacy rule, kept verbatim).
    fn from_labels(labels: &[&str]) -> Option<Self> {
        if labels.len() < 2 || labels.len() > 3 {
            return None;
        }

        let ipv4_label = labels[0];
        let mut customer_label = *labels.last()?;
        let mut site_label = "0";

        if labels.len() == 3 {
            let (first, second) = (labels[1], labels[2]);
            if let Some(rest) = first.strip_prefix('t') {
                customer_label = rest;
                site_label = second;
            } else if let Some(rest) = second.strip_prefix('t') {
                customer_label = rest;
                site_label = first;
            } else {
                customer_label = second;
                site_label = first;
            }
        }

        let customer_label = customer_label.strip_prefix('t').unwrap_or(customer_label);

        let customer_id = u32::from_str_radix(customer_label, 16).ok()?;
        let site_id = u32::from_str_radix(site_label, 16).ok()?;
        if site_id > 0xFF {
            return None;
        }

        let ipv4: Ipv4Addr = ipv4_label.replace('-', ".").parse().ok()?;

        Self::new(ipv4, customer_id, site_id as u8)
    }

    /// Host-portion bits: customer id at bit 40, site id at bit 32, IPv4
    /// in the low 32 bits.
    fn host_suffix(&self) -> u128 {
        (u128::from(self.customer_id) << CUSTOMER_ID_SHIFT)
            | (u128::from(self.site_id) << SITE_ID_SHIFT)
            | u128::from(u32::from(self.ipv4))
    }
}

/// Zero-lookup AAAA synthesis from specially-formatted hostnames.
///
/// `resolve` is a pure function: no I/O, no shared state, and every
/// failure folds into a no-match so the caller can fall through to DNS64.
pub struct SynthesisEngine {
    suffix: String,
    base_prefix: Nat64Prefix,
}

impl SynthesisEngine {
    pub fn new(suffix: &str, base_prefix: Nat64Prefix) -> Self {
        Self {
            suffix: suffix.to_lowercase(),
            base_prefix,
        }
    }

    pub fn resolve(&self, qname: &str) -> Option<Ipv6Addr> {
        let clean = qname.to_lowercase();
        let clean = clean.trim_end_matches('.');

        let content = clean.strip_suffix(self.suffix.as_str())?;
        let content = content.strip_suffix('.')?;

        let labels: Vec<&str> = content.split('.').collect();
        let key = SynthesisKey::from_labels(&labels)?;

        Some(Ipv6Addr::from(
            self.base_prefix.network_bits() | key.host_suffix(),
        ))
    }
}
