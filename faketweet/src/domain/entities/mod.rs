//! Domain entities
//!
//! Fixture records and their partial descriptions.

pub mod attributes;
pub mod search_response;
pub mod tweet;

pub use attributes::{canonical_key, canonicalize};
pub use search_response::{
    SearchOptions, SearchResponse, Searches, DEFAULT_COMPLETED_IN, DEFAULT_PAGE,
    DEFAULT_RESULTS_PER_PAGE, DEFAULT_SINCE_ID, EMPTY_MAX_ID, SEARCH_RESPONSE_FIELDS,
};
pub use tweet::{
    strip_at, Tweet, TweetAttributes, DEFAULT_FROM_USER, DEFAULT_ISO_LANGUAGE_CODE,
    DEFAULT_SOURCE, DEFAULT_TEXT, TWEET_FIELDS,
};
