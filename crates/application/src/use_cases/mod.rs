mod resolve_aaaa;

pub use resolve_aaaa::{AaaaResolution, ResolveAaaaUseCase};
