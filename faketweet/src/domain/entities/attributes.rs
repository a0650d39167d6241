//! Dynamic attribute helpers
//!
//! Fixtures can be described as JSON (fixture files, table-driven tests).
//! These helpers normalize keys to the canonical snake_case wire names and
//! check each value against the type its field expects.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::encoding::{created_at_from_unix, parse_created_at};
use crate::error::FixtureError;

/// Canonical key form: `fromUser` -> `from_user`, `profileImageURL` -> `profile_image_url`
pub fn canonical_key(key: &str) -> String {
    let mut buf = String::with_capacity(key.len() + 4);
    let mut prev_lower = false;
    for c in key.chars() {
        if c.is_uppercase() {
            if prev_lower {
                buf.push('_');
            }
            buf.extend(c.to_lowercase());
            prev_lower = false;
        } else {
            buf.push(c);
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
        }
    }
    buf
}

/// Re-key an object with canonical keys. Later duplicates win.
pub fn canonicalize(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .map(|(key, value)| (canonical_key(&key), value))
        .collect()
}

pub(crate) fn expect_object(field: &str, value: Value) -> Result<Map<String, Value>, FixtureError> {
    match value {
        Value::Object(map) => Ok(canonicalize(map)),
        _ => Err(FixtureError::invalid(field, "an object")),
    }
}

/// Integer field where `null` means "not supplied"
pub(crate) fn read_integer(field: &str, value: &Value) -> Result<Option<i64>, FixtureError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| FixtureError::invalid(field, "an integer or null")),
        _ => Err(FixtureError::invalid(field, "an integer or null")),
    }
}

pub(crate) fn read_float(field: &str, value: &Value) -> Result<Option<f64>, FixtureError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| FixtureError::invalid(field, "a number or null")),
        _ => Err(FixtureError::invalid(field, "a number or null")),
    }
}

/// String field where `null` is a value of its own
pub(crate) fn read_nullable_string(
    field: &str,
    value: &Value,
) -> Result<Option<String>, FixtureError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(FixtureError::invalid(field, "a string or null")),
    }
}

pub(crate) fn read_timestamp(
    field: &str,
    value: &Value,
) -> Result<Option<DateTime<Utc>>, FixtureError> {
    const EXPECTED: &str = "an RFC 2822 / RFC 3339 timestamp or unix seconds";

    match value {
        Value::Null => Ok(None),
        Value::String(s) => parse_created_at(s)
            .map(Some)
            .ok_or_else(|| FixtureError::invalid(field, EXPECTED)),
        Value::Number(n) => n
            .as_i64()
            .and_then(created_at_from_unix)
            .map(Some)
            .ok_or_else(|| FixtureError::invalid(field, EXPECTED)),
        _ => Err(FixtureError::invalid(field, EXPECTED)),
    }
}
