//! Fixture file loading
//!
//! ```json
//! {"searches": [{"query": "#rust", "responses": [{"results": [{"text": "hi"}]}]}]}
//! ```
//!
//! One response registers a fixed body, several register a rotation.

use std::path::Path;

use anyhow::Context;
use faketweet::{FakeTwitter, FixtureError, NetworkStub, SearchOptions, Searches};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct FixtureFile {
    pub searches: Vec<SearchFixture>,
}

#[derive(Debug, Deserialize)]
pub struct SearchFixture {
    pub query: String,
    pub responses: Vec<Value>,
}

impl SearchFixture {
    /// Validate every response before anything is registered
    fn searches(&self) -> Result<Searches, FixtureError> {
        if self.responses.is_empty() {
            return Err(FixtureError::EmptyRotationList {
                query: self.query.clone(),
            });
        }

        let mut options = self
            .responses
            .iter()
            .cloned()
            .map(SearchOptions::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(match options.len() {
            1 => Searches::One(options.remove(0)),
            _ => Searches::Rotation(options),
        })
    }
}

impl FixtureFile {
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture file {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Invalid fixture file {}", path.display()))
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Register every search, returning the registered URLs
    pub fn register<S: NetworkStub>(
        &self,
        fake: &mut FakeTwitter<S>,
    ) -> Result<Vec<String>, FixtureError> {
        let searches = self
            .searches
            .iter()
            .map(|search| {
                search
                    .searches()
                    .map(|searches| (search.query.as_str(), searches))
            })
            .collect::<Result<Vec<_>, _>>()?;

        searches
            .into_iter()
            .map(|(query, searches)| fake.register(query, searches))
            .collect()
    }
}
