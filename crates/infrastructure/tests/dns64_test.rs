mod helpers;

use helpers::{a_record_reply, MockUpstreamClient};
use nat64_dns_application::ports::Dns64Resolver;
use nat64_dns_domain::Nat64Prefix;
use nat64_dns_infrastructure::dns::Dns64Synthesizer;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

fn prefix(s: &str) -> Nat64Prefix {
    s.parse().unwrap()
}

#[tokio::test]
async fn test_synthesize_maps_a_records_in_upstream_order() {
    let addrs = [
        Ipv4Addr::new(192, 0, 2, 9),
        Ipv4Addr::new(192, 0, 2, 1),
        Ipv4Addr::new(198, 51, 100, 3),
    ];
    let upstream = Arc::new(MockUpstreamClient::with_reply(a_record_reply(
        "example.com",
        &addrs,
    )));
    let synthesizer = Dns64Synthesizer::new(upstream);

    let out = synthesizer
        .synthesize("example.com", &prefix("64:ff9b::/96"))
        .await;

    let expected: Vec<Ipv6Addr> = vec![
        "64:ff9b::c000:209".parse().unwrap(),
        "64:ff9b::c000:201".parse().unwrap(),
        "64:ff9b::c633:6403".parse().unwrap(),
    ];
    assert_eq!(out, expected);
}

#[tokio::test]
async fn test_synthesize_empty_when_upstream_is_silent() {
    let upstream = Arc::new(MockUpstreamClient::silent());
    let synthesizer = Dns64Synthesizer::new(upstream.clone());

    let out = synthesizer
        .synthesize("example.com", &prefix("64:ff9b::/96"))
        .await;

    assert!(out.is_empty());
    assert_eq!(upstream.calls(), 1);
}

#[tokio::test]
async fn test_synthesize_empty_when_reply_has_no_a_records() {
    let upstream = Arc::new(MockUpstreamClient::with_reply(a_record_reply(
        "example.com",
        &[],
    )));
    let synthesizer = Dns64Synthesizer::new(upstream);

    let out = synthesizer
        .synthesize("example.com", &prefix("64:ff9b::/96"))
        .await;

    assert!(out.is_empty());
}

#[tokio::test]
async fn test_synthesize_rejects_prefix_without_32_host_bits() {
    // /100 leaves 28 host bits; embedding would corrupt the network part
    let upstream = Arc::new(MockUpstreamClient::with_reply(a_record_reply(
        "example.com",
        &[Ipv4Addr::new(192, 0, 2, 1)],
    )));
    let synthesizer = Dns64Synthesizer::new(upstream);

    let out = synthesizer
        .synthesize("example.com", &prefix("64:ff9b::/100"))
        .await;

    assert!(out.is_empty());
}

#[tokio::test]
async fn test_synthesize_empty_on_unparseable_reply() {
    let upstream = Arc::new(MockUpstreamClient::with_reply(vec![0xde, 0xad, 0xbe]));
    let synthesizer = Dns64Synthesizer::new(upstream);

    let out = synthesizer
        .synthesize("example.com", &prefix("64:ff9b::/96"))
        .await;

    assert!(out.is_empty());
}
