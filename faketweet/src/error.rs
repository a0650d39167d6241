//! Error types for the fixture engine
//!
//! - `FixtureError`: errors surfaced by the factories and the registration facade
//! - `StubError`: errors reported by a network stub implementation

use thiserror::Error;

/// Errors raised while building or registering fixtures.
///
/// None of these leave the engine half-mutated: validation runs before any
/// identifier is allocated or any tweet is recorded.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Invalid value for `{field}`: expected {expected}")]
    InvalidFieldType {
        field: String,
        expected: &'static str,
    },

    #[error("Cannot register an empty rotation for query {query:?}")]
    EmptyRotationList { query: String },

    #[error("Network stub error: {0}")]
    Stub(#[from] StubError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FixtureError {
    pub(crate) fn invalid(field: impl Into<String>, expected: &'static str) -> Self {
        FixtureError::InvalidFieldType {
            field: field.into(),
            expected,
        }
    }
}

/// Network stub errors
#[derive(Debug, Error)]
pub enum StubError {
    #[error("Stub registry lock poisoned")]
    Poisoned,

    #[error("Registration rejected: {0}")]
    Rejected(String),
}

impl<T> From<std::sync::PoisonError<T>> for StubError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        StubError::Poisoned
    }
}
