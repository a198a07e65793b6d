//! In-memory credential store
//!
//! Map-backed credential storage - in production this would be a proper
//! database behind the same trait.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::{CredentialStore, RECOGNIZED};
use crate::auth::UserForm;

/// Default demo credentials used when no configuration supplies any.
static DEFAULT_CREDENTIALS: LazyLock<HashMap<String, String>> = LazyLock::new(|| {
    let mut creds = HashMap::new();
    creds.insert("alice".to_string(), "alice123".to_string());
    creds.insert("bob".to_string(), "bob123".to_string());
    creds.insert("admin".to_string(), "admin123".to_string());
    creds
});

/// Credential store backed by an in-memory username → password map.
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new(records: HashMap<String, String>) -> Self {
        Self { records }
    }

    /// Builds a store preloaded with the default demo credentials.
    pub fn with_defaults() -> Self {
        Self {
            records: DEFAULT_CREDENTIALS.clone(),
        }
    }
}

impl CredentialStore for MemoryStore {
    fn lookup(&self, form: &UserForm) -> i32 {
        match self.records.get(form.username()) {
            Some(stored) if stored == form.password() => RECOGNIZED,
            _ => 0,
        }
    }
}
