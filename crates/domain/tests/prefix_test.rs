use nat64_dns_domain::Nat64Prefix;
use std::net::{Ipv4Addr, Ipv6Addr};

#[test]
fn test_parse_with_length() {
    let prefix: Nat64Prefix = "64:ff9b::/96".parse().unwrap();
    assert_eq!(prefix.prefix_len(), 96);
    assert_eq!(prefix.host_bits(), 32);
    assert_eq!(
        prefix.network_address(),
        "64:ff9b::".parse::<Ipv6Addr>().unwrap()
    );
}

#[test]
fn test_parse_bare_address_is_full_length() {
    let prefix: Nat64Prefix = "64:ff9b::1".parse().unwrap();
    assert_eq!(prefix.prefix_len(), 128);
    assert_eq!(prefix.host_bits(), 0);
}

#[test]
fn test_parse_masks_host_bits() {
    let prefix: Nat64Prefix = "64:ff9b::dead:beef/96".parse().unwrap();
    assert_eq!(
        prefix.network_address(),
        "64:ff9b::".parse::<Ipv6Addr>().unwrap()
    );

    let canonical: Nat64Prefix = "64:ff9b::/96".parse().unwrap();
    assert_eq!(prefix, canonical);
}

#[test]
fn test_parse_rejects_garbage() {
    assert!("not-an-address/96".parse::<Nat64Prefix>().is_err());
    assert!("64:ff9b::/129".parse::<Nat64Prefix>().is_err());
    assert!("64:ff9b::/ninety".parse::<Nat64Prefix>().is_err());
    assert!("192.0.2.0/24".parse::<Nat64Prefix>().is_err());
}

#[test]
fn test_embed_ipv4_fills_low_32_bits() {
    let prefix: Nat64Prefix = "64:ff9b::/96".parse().unwrap();
    let out = prefix.embed_ipv4(Ipv4Addr::new(192, 0, 2, 33));
    assert_eq!(out, "64:ff9b::c000:221".parse::<Ipv6Addr>().unwrap());
}

#[test]
fn test_display_round_trips() {
    let prefix: Nat64Prefix = "64:ff9b:1::/96".parse().unwrap();
    assert_eq!(prefix.to_string(), "64:ff9b:1::/96");
    assert_eq!(prefix.to_string().parse::<Nat64Prefix>().unwrap(), prefix);
}
