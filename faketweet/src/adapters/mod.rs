//! Adapters layer
//!
//! Implementations of port traits.

pub mod in_memory_stub;

pub use in_memory_stub::InMemoryNetworkStub;
