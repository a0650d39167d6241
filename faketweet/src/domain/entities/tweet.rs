//! Tweet fixture entity
//!
//! A `Tweet` is one search result as the search API returns it. Tweets are
//! built from `TweetAttributes`, a partial description where every field is
//! optional and anything left out is filled from defaults.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use super::attributes::{
    expect_object, read_integer, read_nullable_string, read_timestamp,
};
use crate::encoding::serialize_created_at;
use crate::error::FixtureError;

pub const DEFAULT_TEXT: &str = "just some tweet";
pub const DEFAULT_FROM_USER: &str = "jojo";
pub const DEFAULT_ISO_LANGUAGE_CODE: &str = "en";
pub const DEFAULT_SOURCE: &str = r#"<a href="http://twitter.com/">web</a>"#;

/// Wire names of the fields a tweet always carries. `extra` keys with these
/// names are dropped.
pub const TWEET_FIELDS: &[&str] = &[
    "text",
    "from_user",
    "to_user",
    "to_user_id",
    "from_user_id",
    "id",
    "iso_language_code",
    "source",
    "profile_image_url",
    "created_at",
];

/// A fully populated tweet fixture
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tweet {
    pub text: Option<String>,
    pub from_user: Option<String>,
    /// Omitted when never supplied, `Some(None)` serializes as null
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_user: Option<Option<String>>,
    pub to_user_id: Option<i64>,
    pub from_user_id: Option<i64>,
    pub id: i64,
    pub iso_language_code: Option<String>,
    /// Raw markup; escaped when the tweet is placed in a search response
    pub source: Option<String>,
    pub profile_image_url: String,
    #[serde(serialize_with = "serialize_created_at")]
    pub created_at: DateTime<Utc>,
    /// Caller-supplied fields the factory does not know about
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial tweet description.
///
/// Two kinds of optional field:
/// - `Option<Option<String>>` fields (`text`, `from_user`, `to_user`,
///   `iso_language_code`, `source`): `None` takes the default, `Some(None)`
///   keeps an explicit null.
/// - `Option<T>` fields (`id`, user ids, `profile_image_url`, `created_at`):
///   `None` is resolved by the factory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TweetAttributes {
    pub id: Option<i64>,
    pub text: Option<Option<String>>,
    pub from_user: Option<Option<String>>,
    pub to_user: Option<Option<String>>,
    pub from_user_id: Option<i64>,
    pub to_user_id: Option<i64>,
    pub iso_language_code: Option<Option<String>>,
    pub source: Option<Option<String>>,
    pub profile_image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub extra: Map<String, Value>,
}

impl TweetAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(Some(text.into()));
        self
    }

    pub fn from_user(mut self, user: impl Into<String>) -> Self {
        self.from_user = Some(Some(user.into()));
        self
    }

    /// Explicit null author: no `from_user` and no `from_user_id`
    pub fn without_from_user(mut self) -> Self {
        self.from_user = Some(None);
        self
    }

    pub fn to_user(mut self, user: impl Into<String>) -> Self {
        self.to_user = Some(Some(user.into()));
        self
    }

    pub fn from_user_id(mut self, id: i64) -> Self {
        self.from_user_id = Some(id);
        self
    }

    pub fn to_user_id(mut self, id: i64) -> Self {
        self.to_user_id = Some(id);
        self
    }

    pub fn iso_language_code(mut self, code: impl Into<String>) -> Self {
        self.iso_language_code = Some(Some(code.into()));
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(Some(source.into()));
        self
    }

    pub fn profile_image_url(mut self, url: impl Into<String>) -> Self {
        self.profile_image_url = Some(url.into());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Attach a field that is serialized verbatim
    pub fn extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

impl TryFrom<Value> for TweetAttributes {
    type Error = FixtureError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let mut attrs = TweetAttributes::default();

        for (key, value) in expect_object("tweet", value)? {
            match key.as_str() {
                "id" => attrs.id = read_integer(&key, &value)?,
                "text" => attrs.text = Some(read_nullable_string(&key, &value)?),
                "from_user" => attrs.from_user = Some(read_nullable_string(&key, &value)?),
                "to_user" => attrs.to_user = Some(read_nullable_string(&key, &value)?),
                "from_user_id" => attrs.from_user_id = read_integer(&key, &value)?,
                "to_user_id" => attrs.to_user_id = read_integer(&key, &value)?,
                "iso_language_code" => {
                    attrs.iso_language_code = Some(read_nullable_string(&key, &value)?)
                }
                "source" => attrs.source = Some(read_nullable_string(&key, &value)?),
                "profile_image_url" => {
                    attrs.profile_image_url = read_nullable_string(&key, &value)?
                }
                "created_at" => attrs.created_at = read_timestamp(&key, &value)?,
                _ => {
                    attrs.extra.insert(key, value);
                }
            }
        }

        Ok(attrs)
    }
}

/// Drop one leading `@` from a user name
pub fn strip_at(name: &str) -> &str {
    name.strip_prefix('@').unwrap_or(name)
}
