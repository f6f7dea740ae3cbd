mod mock_ports;

pub use mock_ports::{MockDns64Resolver, MockPrefixSource};
