//! Text encoding helpers
//!
//! Query escaping, search URL construction, HTML escaping of tweet sources
//! and the wire format of `created_at`.

use chrono::{DateTime, TimeZone, Utc};
use serde::Serializer;
use url::Url;

/// `created_at` wire format. The offset is a literal: timestamps are always UTC.
pub const CREATED_AT_FORMAT: &str = "%a, %d %b %Y %H:%M:%S +0000";

/// Percent-encode a search query (`#foo "bar"` -> `%23foo%20%22bar%22`)
pub fn escape_query(query: &str) -> String {
    urlencoding::encode(query).into_owned()
}

/// Search endpoint URL for an already escaped query
pub fn search_url(search_host: &str, escaped_query: &str) -> String {
    format!("http://search.{}/search.json?q={}", search_host, escaped_query)
}

/// Escape `&`, `<`, `>` and `"` as HTML entities
pub fn escape_html(raw: &str) -> String {
    let mut buf = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => buf.push_str("&amp;"),
            '<' => buf.push_str("&lt;"),
            '>' => buf.push_str("&gt;"),
            '"' => buf.push_str("&quot;"),
            _ => buf.push(c),
        }
    }
    buf
}

pub fn format_created_at(created_at: &DateTime<Utc>) -> String {
    created_at.format(CREATED_AT_FORMAT).to_string()
}

/// Parse an RFC 2822 or RFC 3339 timestamp into UTC
pub fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Unix seconds to UTC, `None` when out of range
pub fn created_at_from_unix(secs: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(secs, 0).single()
}

pub(crate) fn serialize_created_at<S>(
    created_at: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_created_at(created_at))
}

/// Path and query of a request target (`http://host/a?b` -> `/a?b`).
///
/// Targets that are already a path pass through. Fragments are dropped.
pub fn path_and_query(target: &str) -> String {
    match Url::parse(target) {
        Ok(url) => match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        },
        Err(_) => target
            .split_once('#')
            .map_or(target, |(path, _)| path)
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_query_uses_percent_encoding() {
        assert_eq!(
            escape_query("#foo \"some string\""),
            "%23foo%20%22some%20string%22"
        );
    }

    #[test]
    fn escape_query_keeps_unreserved() {
        assert_eq!(escape_query("rust-lang_2.0~"), "rust-lang_2.0~");
        assert_eq!(escape_query(""), "");
    }

    #[test]
    fn search_url_format() {
        assert_eq!(
            search_url("twitter.com", "%23foo"),
            "http://search.twitter.com/search.json?q=%23foo"
        );
    }

    #[test]
    fn escape_html_entities() {
        assert_eq!(
            escape_html(r#"<a href="http://twitter.com/">web & more</a>"#),
            "&lt;a href=&quot;http://twitter.com/&quot;&gt;web &amp; more&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn format_created_at_is_utc_with_literal_offset() {
        let created_at = parse_created_at("Thu, 20 Aug 2009 16:23:09 -0700").unwrap();
        assert_eq!(
            format_created_at(&created_at),
            "Thu, 20 Aug 2009 23:23:09 +0000"
        );
    }

    #[test]
    fn parse_created_at_accepts_rfc3339() {
        let created_at = parse_created_at("2009-08-20T23:23:09Z").unwrap();
        assert_eq!(
            format_created_at(&created_at),
            "Thu, 20 Aug 2009 23:23:09 +0000"
        );
    }

    #[test]
    fn parse_created_at_rejects_garbage() {
        assert!(parse_created_at("yesterday").is_none());
    }

    #[test]
    fn created_at_from_unix_seconds() {
        let created_at = created_at_from_unix(1_250_810_589).unwrap();
        assert_eq!(
            format_created_at(&created_at),
            "Thu, 20 Aug 2009 23:23:09 +0000"
        );
    }

    #[test]
    fn path_and_query_strips_scheme_and_host() {
        assert_eq!(
            path_and_query("http://search.twitter.com/search.json?q=%23foo"),
            "/search.json?q=%23foo"
        );
        assert_eq!(path_and_query("http://example.com"), "/");
        assert_eq!(path_and_query("/search.json?q=a"), "/search.json?q=a");
    }

    #[test]
    fn path_and_query_keeps_query_without_path() {
        assert_eq!(path_and_query("http://search.a.com?q=one"), "/?q=one");
        assert_ne!(
            path_and_query("http://search.a.com?q=one"),
            path_and_query("http://other.com?q=two")
        );
    }

    #[test]
    fn path_and_query_drops_fragment() {
        assert_eq!(path_and_query("http://example.com/a?b=1#top"), "/a?b=1");
        assert_eq!(path_and_query("/a?b=1#top"), "/a?b=1");
    }
}
