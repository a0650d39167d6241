//! Search response factory
//!
//! Assembles a `SearchResponse` from `SearchOptions`, creating each result
//! through the `TweetFactory`.

use chrono::Utc;

use crate::app::tweet_factory::TweetFactory;
use crate::domain::entities::{
    SearchOptions, SearchResponse, Tweet, TweetAttributes, DEFAULT_COMPLETED_IN, DEFAULT_PAGE,
    DEFAULT_RESULTS_PER_PAGE, DEFAULT_SINCE_ID, EMPTY_MAX_ID, SEARCH_RESPONSE_FIELDS,
};
use crate::encoding::escape_html;

pub struct SearchResponseFactory;

impl SearchResponseFactory {
    pub fn create(tweets: &mut TweetFactory, options: SearchOptions) -> SearchResponse {
        let SearchOptions {
            results,
            since_id,
            max_id,
            results_per_page,
            completed_in,
            page,
            query,
            mut extra,
        } = options;

        let results = create_tweets(tweets, results);
        let max_id = results
            .iter()
            .map(|tweet| tweet.id)
            .max()
            .or(max_id)
            .unwrap_or(EMPTY_MAX_ID);

        extra.retain(|key, _| !SEARCH_RESPONSE_FIELDS.contains(&key.as_str()));

        SearchResponse {
            results,
            since_id: since_id.unwrap_or(DEFAULT_SINCE_ID),
            max_id,
            results_per_page: results_per_page.unwrap_or(DEFAULT_RESULTS_PER_PAGE),
            completed_in: completed_in.unwrap_or(DEFAULT_COMPLETED_IN),
            page: page.unwrap_or(DEFAULT_PAGE),
            query: query.unwrap_or_default(),
            extra,
        }
    }
}

/// Create the result tweets, newest first.
///
/// Ids must follow creation time: the oldest tweet gets the lowest id even
/// though results are listed newest first. So the inputs are sorted newest
/// first (stable, undated inputs count as "now"), created oldest first, and
/// the output flipped back.
fn create_tweets(tweets: &mut TweetFactory, mut inputs: Vec<TweetAttributes>) -> Vec<Tweet> {
    let now = Utc::now();
    inputs.sort_by(|a, b| b.created_at.unwrap_or(now).cmp(&a.created_at.unwrap_or(now)));

    let mut created: Vec<Tweet> = inputs
        .into_iter()
        .rev()
        .map(|attrs| {
            let mut tweet = tweets.create(attrs);
            tweet.source = tweet.source.as_deref().map(escape_html);
            tweet
        })
        .collect();

    created.reverse();
    created
}
