//! In-memory network stub
//!
//! Keeps registrations in memory and replays them on request. Rotations hand
//! out their bodies in order and keep repeating the last one.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::ports::{HttpMethod, NetworkStub, StubBody, StubResponse};
use crate::encoding::path_and_query;
use crate::error::StubError;

struct Registration {
    url: String,
    bodies: Vec<StubBody>,
    served: usize,
}

impl Registration {
    fn next_body(&mut self) -> Option<StubBody> {
        let last = self.bodies.len().checked_sub(1)?;
        let body = self.bodies[self.served.min(last)].clone();
        self.served += 1;
        Some(body)
    }
}

#[derive(Default, Clone)]
pub struct InMemoryNetworkStub {
    registrations: Arc<RwLock<BTreeMap<(HttpMethod, String), Registration>>>,
}

impl InMemoryNetworkStub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next body for a request. `target` is either a full URL or a
    /// path-and-query; a full URL match wins over a path match. When several
    /// hosts share the path, the registration with the lowest URL answers.
    pub fn respond(&self, method: HttpMethod, target: &str) -> Result<Option<StubBody>, StubError> {
        let mut registrations = self.registrations.write()?;

        if let Some(registration) = registrations.get_mut(&(method, target.to_string())) {
            return Ok(registration.next_body());
        }

        let path = path_and_query(target);
        let body = registrations
            .iter_mut()
            .filter(|((m, _), _)| *m == method)
            .find(|(_, registration)| path_and_query(&registration.url) == path)
            .and_then(|(_, registration)| registration.next_body());

        if body.is_none() {
            tracing::debug!(%method, request = target, "No stubbed response");
        }
        Ok(body)
    }

    /// Number of requests served for a registration
    pub fn hits(&self, method: HttpMethod, url: &str) -> Result<usize, StubError> {
        let registrations = self.registrations.read()?;
        Ok(registrations
            .get(&(method, url.to_string()))
            .map(|registration| registration.served)
            .unwrap_or(0))
    }

    pub fn is_registered(&self, method: HttpMethod, url: &str) -> Result<bool, StubError> {
        let registrations = self.registrations.read()?;
        Ok(registrations.contains_key(&(method, url.to_string())))
    }

    pub fn len(&self) -> Result<usize, StubError> {
        Ok(self.registrations.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StubError> {
        Ok(self.len()? == 0)
    }
}

impl NetworkStub for InMemoryNetworkStub {
    fn register(
        &self,
        method: HttpMethod,
        url: &str,
        response: StubResponse,
    ) -> Result<(), StubError> {
        let bodies = match response {
            StubResponse::Single(body) => vec![body],
            StubResponse::Rotation(bodies) if bodies.is_empty() => {
                return Err(StubError::Rejected(format!(
                    "empty rotation for {} {}",
                    method, url
                )))
            }
            StubResponse::Rotation(bodies) => bodies,
        };

        let mut registrations = self.registrations.write()?;
        registrations.insert(
            (method, url.to_string()),
            Registration {
                url: url.to_string(),
                bodies,
                served: 0,
            },
        );
        Ok(())
    }

    fn reset_registry(&self) -> Result<(), StubError> {
        self.registrations.write()?.clear();
        Ok(())
    }
}
