//! Identity registry
//!
//! Named counters and the user name -> user id interning table.

use std::collections::HashMap;

pub const TWEET_COUNTER: &str = "tweet";
pub const USER_COUNTER: &str = "user";

#[derive(Debug, Default)]
pub struct IdentityRegistry {
    counters: HashMap<String, i64>,
    users: HashMap<String, i64>,
}

impl IdentityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next value of `counter`, starting at 1. Counters are independent.
    pub fn next_id(&mut self, counter: &str) -> i64 {
        let value = self.counters.entry(counter.to_string()).or_insert(0);
        *value += 1;
        tracing::trace!(counter, id = *value, "Allocated id");
        *value
    }

    /// Interned id for `user`, allocating one on first sight.
    /// Absent and empty names have no id.
    pub fn id_for(&mut self, user: Option<&str>) -> Option<i64> {
        let user = user.filter(|u| !u.is_empty())?;

        if let Some(id) = self.users.get(user) {
            return Some(*id);
        }

        let id = self.next_id(USER_COUNTER);
        self.users.insert(user.to_string(), id);
        tracing::trace!(user, id, "Interned user");
        Some(id)
    }

    pub fn reset(&mut self) {
        self.counters.clear();
        self.users.clear();
    }
}
