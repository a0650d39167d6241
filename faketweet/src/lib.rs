//! Fake search API fixtures
//!
//! Builds deterministic tweet records and search response envelopes shaped
//! like the search API's JSON, and registers them with a network stub so
//! code under test gets canned data instead of making real requests.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use faketweet::{FakeTwitter, InMemoryNetworkStub, SearchOptions, TweetAttributes};
//!
//! let stub = Arc::new(InMemoryNetworkStub::new());
//! let mut fake = FakeTwitter::new(stub.clone());
//!
//! fake.register_search(
//!     "#rust",
//!     SearchOptions::new().result(TweetAttributes::new().from_user("@ferris").text("hi")),
//! )?;
//! # Ok::<(), faketweet::FixtureError>(())
//! ```

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod encoding;
pub mod error;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

pub use adapters::InMemoryNetworkStub;
pub use app::{FakeTwitter, IdentityRegistry, SearchResponseFactory, TweetFactory};
pub use config::FixtureConfig;
pub use domain::entities::{SearchOptions, SearchResponse, Searches, Tweet, TweetAttributes};
pub use domain::ports::{HttpMethod, NetworkStub, StubBody, StubResponse};
pub use error::{FixtureError, StubError};
