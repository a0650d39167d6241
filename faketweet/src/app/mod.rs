//! Application layer
//!
//! The factories that build fixtures and the service that registers them.

pub mod fake_twitter;
pub mod identity_registry;
pub mod search_response_factory;
pub mod tweet_factory;

pub use fake_twitter::FakeTwitter;
pub use identity_registry::{IdentityRegistry, TWEET_COUNTER, USER_COUNTER};
pub use search_response_factory::SearchResponseFactory;
pub use tweet_factory::TweetFactory;
