//! Fake search API stub server
//!
//! Serves the searches described in a fixture file over HTTP so tests can
//! point any HTTP client at it instead of the real search API.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use faketweet::{FakeTwitter, InMemoryNetworkStub};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod fixture_file;
mod routes;

use config::Config;
use fixture_file::FixtureFile;
use routes::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,faketweet=debug,faketweet_stub_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Loading fixtures from {}", config.fixture_file.display());
    let fixtures = FixtureFile::read(&config.fixture_file)?;

    let stub = Arc::new(InMemoryNetworkStub::new());
    let mut fake = FakeTwitter::with_config(stub.clone(), config.fixtures.clone());
    let urls = fixtures
        .register(&mut fake)
        .context("Failed to register fixtures")?;
    for url in &urls {
        tracing::info!("Stubbed {}", url);
    }

    let app = routes::router(AppState { stub });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
