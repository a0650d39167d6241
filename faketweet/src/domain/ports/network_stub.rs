//! Network stub port trait
//!
//! The HTTP interception layer that hands canned bodies to code under test.
//! The fixture engine only registers responses and clears them; matching and
//! replaying requests is the implementation's business.

use crate::error::StubError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
            HttpMethod::Put => write!(f, "PUT"),
            HttpMethod::Patch => write!(f, "PATCH"),
            HttpMethod::Delete => write!(f, "DELETE"),
        }
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(format!("Unknown HTTP method: {}", s)),
        }
    }
}

/// A canned response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubBody {
    pub body: String,
    pub content_type: &'static str,
}

impl StubBody {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            content_type: "application/json",
        }
    }
}

/// What to serve for a registered URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubResponse {
    /// The same body for every request
    Single(StubBody),
    /// One body per request in order; the last one repeats once exhausted
    Rotation(Vec<StubBody>),
}

impl StubResponse {
    pub fn bodies(&self) -> &[StubBody] {
        match self {
            StubResponse::Single(body) => std::slice::from_ref(body),
            StubResponse::Rotation(bodies) => bodies,
        }
    }
}

/// Port trait for the HTTP interception layer
#[cfg_attr(test, mockall::automock)]
pub trait NetworkStub: Send + Sync {
    /// Serve `response` for requests matching `method` and `url`, replacing
    /// any earlier registration for the same pair
    fn register(&self, method: HttpMethod, url: &str, response: StubResponse)
        -> Result<(), StubError>;

    /// Forget every registration
    fn reset_registry(&self) -> Result<(), StubError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn http_method_from_str() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("PATCH".parse::<HttpMethod>().unwrap(), HttpMethod::Patch);
        assert!("TRACE".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn stub_response_bodies() {
        let single = StubResponse::Single(StubBody::json("{}"));
        assert_eq!(single.bodies().len(), 1);

        let rotation = StubResponse::Rotation(vec![StubBody::json("1"), StubBody::json("2")]);
        assert_eq!(rotation.bodies()[1].body, "2");
        assert_eq!(rotation.bodies()[0].content_type, "application/json");
    }
}
