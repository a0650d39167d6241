use std::env;

pub const DEFAULT_SEARCH_HOST: &str = "twitter.com";
pub const DEFAULT_PROFILE_IMAGE_BASE: &str =
    "http://s3.amazonaws.com/twitter_production/profile_images";

/// Where fixture URLs point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Host suffix of the search endpoint (`http://search.<host>/search.json`)
    pub search_host: String,
    /// Prefix of generated profile image URLs
    pub profile_image_base: String,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            search_host: DEFAULT_SEARCH_HOST.to_string(),
            profile_image_base: DEFAULT_PROFILE_IMAGE_BASE.to_string(),
        }
    }
}

impl FixtureConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            search_host: env::var("FAKETWEET_SEARCH_HOST")
                .unwrap_or_else(|_| DEFAULT_SEARCH_HOST.to_string()),
            profile_image_base: env::var("FAKETWEET_PROFILE_IMAGE_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_PROFILE_IMAGE_BASE.to_string()),
        }
    }

    /// Profile image URL for a user id; the id segment is empty when absent
    pub fn profile_image_url(&self, user_id: Option<i64>) -> String {
        let id = user_id.map(|id| id.to_string()).unwrap_or_default();
        format!("{}/{}/photo.jpg", self.profile_image_base, id)
    }
}
