//! Domain ports (traits)
//!
//! Interfaces the fixture engine requires from its surroundings.

pub mod network_stub;

#[cfg(test)]
pub use network_stub::MockNetworkStub;
pub use network_stub::{HttpMethod, NetworkStub, StubBody, StubResponse};
