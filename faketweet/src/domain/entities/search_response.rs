//! Search response envelope
//!
//! The paginated wrapper the search endpoint returns around its results.

use serde::Serialize;
use serde_json::{Map, Value};

use super::attributes::{expect_object, read_float, read_integer, read_nullable_string};
use super::tweet::{Tweet, TweetAttributes};
use crate::error::FixtureError;

pub const DEFAULT_SINCE_ID: i64 = 0;
/// `max_id` of a response without results
pub const EMPTY_MAX_ID: i64 = -1;
pub const DEFAULT_RESULTS_PER_PAGE: i64 = 15;
pub const DEFAULT_COMPLETED_IN: f64 = 0.008646;
pub const DEFAULT_PAGE: i64 = 1;

pub const SEARCH_RESPONSE_FIELDS: &[&str] = &[
    "results",
    "since_id",
    "max_id",
    "results_per_page",
    "completed_in",
    "page",
    "query",
];

/// A search response ready to be serialized
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    /// Newest first
    pub results: Vec<Tweet>,
    pub since_id: i64,
    pub max_id: i64,
    pub results_per_page: i64,
    pub completed_in: f64,
    pub page: i64,
    pub query: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchResponse {
    pub fn to_json(&self) -> Result<String, FixtureError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Partial search response description. Scalars left as `None` take the
/// defaults; `max_id` is only honoured when there are no results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    pub results: Vec<TweetAttributes>,
    pub since_id: Option<i64>,
    pub max_id: Option<i64>,
    pub results_per_page: Option<i64>,
    pub completed_in: Option<f64>,
    pub page: Option<i64>,
    pub query: Option<String>,
    pub extra: Map<String, Value>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(mut self, results: impl IntoIterator<Item = TweetAttributes>) -> Self {
        self.results = results.into_iter().collect();
        self
    }

    pub fn result(mut self, tweet: TweetAttributes) -> Self {
        self.results.push(tweet);
        self
    }

    pub fn since_id(mut self, since_id: i64) -> Self {
        self.since_id = Some(since_id);
        self
    }

    pub fn max_id(mut self, max_id: i64) -> Self {
        self.max_id = Some(max_id);
        self
    }

    pub fn results_per_page(mut self, results_per_page: i64) -> Self {
        self.results_per_page = Some(results_per_page);
        self
    }

    pub fn completed_in(mut self, completed_in: f64) -> Self {
        self.completed_in = Some(completed_in);
        self
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

impl TryFrom<Value> for SearchOptions {
    type Error = FixtureError;

    /// Every tweet is validated before anything is returned, so a bad entry
    /// anywhere in `results` rejects the whole description.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let mut options = SearchOptions::default();

        for (key, value) in expect_object("search response", value)? {
            match key.as_str() {
                "results" => options.results = read_results(value)?,
                "since_id" => options.since_id = read_integer(&key, &value)?,
                "max_id" => options.max_id = read_integer(&key, &value)?,
                "results_per_page" => options.results_per_page = read_integer(&key, &value)?,
                "completed_in" => options.completed_in = read_float(&key, &value)?,
                "page" => options.page = read_integer(&key, &value)?,
                "query" => options.query = read_nullable_string(&key, &value)?,
                _ => {
                    options.extra.insert(key, value);
                }
            }
        }

        Ok(options)
    }
}

fn read_results(value: Value) -> Result<Vec<TweetAttributes>, FixtureError> {
    let entries = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Array(entries) => entries,
        _ => return Err(FixtureError::invalid("results", "an array of tweets")),
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            TweetAttributes::try_from(entry).map_err(|e| match e {
                FixtureError::InvalidFieldType { field, expected } => {
                    FixtureError::InvalidFieldType {
                        field: format!("results[{}].{}", i, field),
                        expected,
                    }
                }
                other => other,
            })
        })
        .collect()
}

/// One response, or a rotation served in order to successive requests
#[derive(Debug, Clone, PartialEq)]
pub enum Searches {
    One(SearchOptions),
    Rotation(Vec<SearchOptions>),
}

impl From<SearchOptions> for Searches {
    fn from(options: SearchOptions) -> Self {
        Searches::One(options)
    }
}

impl From<Vec<SearchOptions>> for Searches {
    fn from(options: Vec<SearchOptions>) -> Self {
        Searches::Rotation(options)
    }
}
