pub mod interface;

pub use interface::interface_ipv6_addresses;
