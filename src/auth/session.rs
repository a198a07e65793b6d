//! Session state
//!
//! Holds the currently authenticated username. Shared across dispatches and
//! written only by the authentication service after a successful login.

use std::sync::{Arc, RwLock};

/// Thread-safe shared session wrapper
pub type SharedSession = Arc<RwLock<Session>>;

/// Mutable record of the currently authenticated user.
#[derive(Debug, Default)]
pub struct Session {
    current_user: Option<String>,
}

impl Session {
    /// Creates an empty session behind a shared lock.
    pub fn shared() -> SharedSession {
        Arc::new(RwLock::new(Session::default()))
    }

    /// Returns the currently authenticated username, if any.
    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    /// Returns whether a user is currently authenticated.
    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    /// Overwrites the current user with the given username.
    pub fn set_current_user(&mut self, username: &str) {
        self.current_user = Some(username.to_string());
    }

    /// Resets the session, clearing the current user.
    pub fn clear(&mut self) {
        self.current_user = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_no_user() {
        let session = Session::default();
        assert_eq!(session.current_user(), None);
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_set_current_user_overwrites() {
        let mut session = Session::default();
        session.set_current_user("alice");
        assert_eq!(session.current_user(), Some("alice"));
        session.set_current_user("bob");
        assert_eq!(session.current_user(), Some("bob"));
    }

    #[test]
    fn test_clear_resets_user() {
        let mut session = Session::default();
        session.set_current_user("alice");
        session.clear();
        assert_eq!(session.current_user(), None);
        assert!(!session.is_logged_in());
    }
}
