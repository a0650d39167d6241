//! Fake Twitter service
//!
//! Entry point for tests: builds search responses and registers them with a
//! network stub under the search URL for a query. Owns all fixture state, so
//! one instance per test gives full isolation.

use std::sync::Arc;

use crate::app::search_response_factory::SearchResponseFactory;
use crate::app::tweet_factory::TweetFactory;
use crate::config::FixtureConfig;
use crate::domain::entities::{SearchOptions, SearchResponse, Searches, Tweet, TweetAttributes};
use crate::domain::ports::{HttpMethod, NetworkStub, StubBody, StubResponse};
use crate::encoding::{escape_query, search_url};
use crate::error::FixtureError;

pub struct FakeTwitter<S>
where
    S: NetworkStub,
{
    tweets: TweetFactory,
    stub: Arc<S>,
}

impl<S> FakeTwitter<S>
where
    S: NetworkStub,
{
    pub fn new(stub: Arc<S>) -> Self {
        Self::with_config(stub, FixtureConfig::default())
    }

    pub fn with_config(stub: Arc<S>, config: FixtureConfig) -> Self {
        Self {
            tweets: TweetFactory::new(config),
            stub,
        }
    }

    /// Register one response for `query`. Returns the registered URL.
    pub fn register_search(
        &mut self,
        query: &str,
        options: SearchOptions,
    ) -> Result<String, FixtureError> {
        let escaped_query = escape_query(query);
        let url = search_url(&self.tweets.config().search_host, &escaped_query);

        let body = self.search_body(&escaped_query, options)?;
        self.stub
            .register(HttpMethod::Get, &url, StubResponse::Single(body))?;

        tracing::debug!(query, url = %url, "Registered search response");
        Ok(url)
    }

    /// Register a rotation of responses for `query`, served one per request
    /// in order. Returns the registered URL.
    ///
    /// If the stub rejects the registration, the tweets already built stay in
    /// history and their ids stay allocated.
    pub fn register_searches(
        &mut self,
        query: &str,
        options: Vec<SearchOptions>,
    ) -> Result<String, FixtureError> {
        if options.is_empty() {
            return Err(FixtureError::EmptyRotationList {
                query: query.to_string(),
            });
        }

        let escaped_query = escape_query(query);
        let url = search_url(&self.tweets.config().search_host, &escaped_query);

        let bodies = options
            .into_iter()
            .map(|options| self.search_body(&escaped_query, options))
            .collect::<Result<Vec<_>, _>>()?;
        let count = bodies.len();
        self.stub
            .register(HttpMethod::Get, &url, StubResponse::Rotation(bodies))?;

        tracing::debug!(query, url = %url, count, "Registered search rotation");
        Ok(url)
    }

    pub fn register(&mut self, query: &str, searches: Searches) -> Result<String, FixtureError> {
        match searches {
            Searches::One(options) => self.register_search(query, options),
            Searches::Rotation(options) => self.register_searches(query, options),
        }
    }

    pub fn new_tweet(&mut self, attrs: TweetAttributes) -> Tweet {
        self.tweets.create(attrs)
    }

    pub fn search_response(&mut self, options: SearchOptions) -> SearchResponse {
        SearchResponseFactory::create(&mut self.tweets, options)
    }

    /// Tweets created from `user`, most recent first
    pub fn tweets_from(&self, user: &str) -> Vec<Tweet> {
        self.tweets.tweets_from(user)
    }

    /// Clear the stub's registrations and every id, user and tweet
    pub fn reset(&mut self) -> Result<(), FixtureError> {
        self.tweets.reset();
        self.stub.reset_registry()?;
        tracing::debug!("Reset fixtures");
        Ok(())
    }

    pub fn stub(&self) -> &Arc<S> {
        &self.stub
    }

    fn search_body(
        &mut self,
        escaped_query: &str,
        mut options: SearchOptions,
    ) -> Result<StubBody, FixtureError> {
        options.query = Some(escaped_query.to_string());
        let response = self.search_response(options);
        Ok(StubBody::json(response.to_json()?))
    }
}
