//! Tweet factory
//!
//! Turns partial `TweetAttributes` into complete `Tweet`s and remembers every
//! tweet it has made.

use chrono::Utc;

use crate::app::identity_registry::{IdentityRegistry, TWEET_COUNTER};
use crate::config::FixtureConfig;
use crate::domain::entities::{
    strip_at, Tweet, TweetAttributes, DEFAULT_FROM_USER, DEFAULT_ISO_LANGUAGE_CODE,
    DEFAULT_SOURCE, DEFAULT_TEXT, TWEET_FIELDS,
};

pub struct TweetFactory {
    registry: IdentityRegistry,
    history: Vec<Tweet>,
    config: FixtureConfig,
}

impl TweetFactory {
    pub fn new(config: FixtureConfig) -> Self {
        Self {
            registry: IdentityRegistry::new(),
            history: Vec::new(),
            config,
        }
    }

    /// Build a tweet, filling every missing field.
    ///
    /// Merge rules, caller values always win:
    /// - `text`, `from_user`, `iso_language_code`, `source`: defaulted when
    ///   missing, an explicit null stays null
    /// - `to_user`: no default, left out of the tweet unless supplied
    /// - `from_user`, `to_user`: one leading `@` removed before lookup
    /// - `id`: next tweet id
    /// - `from_user_id`, `to_user_id`: interned id of the matching name, null
    ///   when there is no name
    /// - `profile_image_url`: derived from `from_user_id`
    /// - `created_at`: now
    pub fn create(&mut self, attrs: TweetAttributes) -> Tweet {
        let TweetAttributes {
            id,
            text,
            from_user,
            to_user,
            from_user_id,
            to_user_id,
            iso_language_code,
            source,
            profile_image_url,
            created_at,
            mut extra,
        } = attrs;

        let from_user = from_user
            .unwrap_or_else(|| Some(DEFAULT_FROM_USER.to_string()))
            .map(|name| strip_at(&name).to_string());
        let to_user = to_user.map(|name| name.map(|name| strip_at(&name).to_string()));

        let id = id.unwrap_or_else(|| self.registry.next_id(TWEET_COUNTER));
        let from_user_id = from_user_id.or_else(|| self.registry.id_for(from_user.as_deref()));
        let to_user_id = to_user_id
            .or_else(|| self.registry.id_for(to_user.as_ref().and_then(|name| name.as_deref())));
        let profile_image_url =
            profile_image_url.unwrap_or_else(|| self.config.profile_image_url(from_user_id));

        extra.retain(|key, _| !TWEET_FIELDS.contains(&key.as_str()));

        let tweet = Tweet {
            text: text.unwrap_or_else(|| Some(DEFAULT_TEXT.to_string())),
            from_user,
            to_user,
            to_user_id,
            from_user_id,
            id,
            iso_language_code: iso_language_code
                .unwrap_or_else(|| Some(DEFAULT_ISO_LANGUAGE_CODE.to_string())),
            source: source.unwrap_or_else(|| Some(DEFAULT_SOURCE.to_string())),
            profile_image_url,
            created_at: created_at.unwrap_or_else(Utc::now),
            extra,
        };

        self.history.push(tweet.clone());
        tweet
    }

    /// Tweets authored by `user`, most recently created first
    pub fn tweets_from(&self, user: &str) -> Vec<Tweet> {
        let user = strip_at(user);
        self.history
            .iter()
            .rev()
            .filter(|tweet| tweet.from_user.as_deref() == Some(user))
            .cloned()
            .collect()
    }

    /// Every tweet created since the last reset, oldest first
    pub fn history(&self) -> &[Tweet] {
        &self.history
    }

    pub fn config(&self) -> &FixtureConfig {
        &self.config
    }

    /// Forget all ids, interned users and created tweets
    pub fn reset(&mut self) {
        self.registry.reset();
        self.history.clear();
    }
}

impl Default for TweetFactory {
    fn default() -> Self {
        Self::new(FixtureConfig::default())
    }
}
