use std::env;
use std::path::PathBuf;

use anyhow::Context;
use faketweet::FixtureConfig;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// JSON file describing the searches to serve
    pub fixture_file: PathBuf,
    pub fixtures: FixtureConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let port = match env::var("PORT") {
            Ok(port) => port
                .parse()
                .with_context(|| format!("PORT is not a valid port: {}", port))?,
            Err(_) => 8080,
        };

        Ok(Self {
            port,
            fixture_file: env::var("FIXTURE_FILE")
                .map(PathBuf::from)
                .context("FIXTURE_FILE must be set")?,
            fixtures: FixtureConfig::from_env(),
        })
    }
}
