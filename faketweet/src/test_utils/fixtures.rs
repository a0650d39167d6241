//! Test fixtures

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::adapters::InMemoryNetworkStub;
use crate::app::FakeTwitter;
use crate::domain::entities::TweetAttributes;
use crate::encoding::parse_created_at;

/// Thu, 20 Aug 2009 23:23:09 +0000
pub fn test_created_at() -> DateTime<Utc> {
    parse_created_at("Thu, 20 Aug 2009 23:23:09 +0000").unwrap()
}

/// A tweet description with a fixed timestamp and text
pub fn tweet_at(created_at: DateTime<Utc>, text: &str) -> TweetAttributes {
    TweetAttributes::new().created_at(created_at).text(text)
}

/// A fresh engine backed by an in-memory stub; the stub handle is shared
pub fn test_engine() -> (FakeTwitter<InMemoryNetworkStub>, Arc<InMemoryNetworkStub>) {
    let stub = Arc::new(InMemoryNetworkStub::new());
    (FakeTwitter::new(stub.clone()), stub)
}
