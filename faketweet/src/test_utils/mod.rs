//! Test utilities
//!
//! Fixture builders shared by the unit tests. Collaborator expectations use
//! the `MockNetworkStub` generated from the `NetworkStub` port; tests that
//! need real replay use `InMemoryNetworkStub`.

pub mod fixtures;

pub use fixtures::*;
