//! Authentication service
//!
//! Turns a credential store lookup into a login decision and owns the
//! session update that follows a successful login.

use log::debug;

use super::form::UserForm;
use super::session::SharedSession;
use crate::error::AuthError;
use crate::store::{CredentialStore, RECOGNIZED};

/// Service seam between the login dispatcher and the credential store.
///
/// Substitutable so callers can be tested against a stub implementation.
pub trait AuthService {
    /// Attempts to authenticate the form's credentials.
    ///
    /// Returns `Ok(true)` when the store recognizes the credentials and
    /// `Ok(false)` when it does not. Structural validation failures on the
    /// form are surfaced to the caller as an error.
    fn login(&self, form: &UserForm) -> Result<bool, AuthError>;

    /// Unconditionally overwrites the session's current user.
    ///
    /// Must only be called as a consequence of a successful `login`.
    fn set_current_user(&self, username: &str);
}

/// Performs basic input sanitation to check for malicious or malformed usernames.
fn is_valid_input(input: &str, max_length: usize) -> bool {
    !input.trim().is_empty() && input.len() <= max_length && !input.contains(['\r', '\n', '\0'])
}

/// Real authentication service backed by a credential store.
pub struct LoginService<S: CredentialStore> {
    store: S,
    session: SharedSession,
    max_username_length: usize,
}

impl<S: CredentialStore> LoginService<S> {
    pub fn new(store: S, session: SharedSession, max_username_length: usize) -> Self {
        Self {
            store,
            session,
            max_username_length,
        }
    }

    /// Returns the currently authenticated username, if any.
    pub fn current_user(&self) -> Option<String> {
        self.session
            .read()
            .expect("session lock poisoned")
            .current_user()
            .map(str::to_string)
    }

    /// Validates the structural preconditions on the form.
    fn validate_form(&self, form: &UserForm) -> Result<(), AuthError> {
        let username = form.username();

        // Check for invalid username characters/format
        if username.contains(['@', '#', ',', '%']) || username.starts_with(char::is_numeric) {
            return Err(AuthError::InvalidUsername(username.to_string()));
        }

        if !is_valid_input(username, self.max_username_length) {
            return Err(AuthError::MalformedInput("Invalid username format".into()));
        }

        Ok(())
    }
}

impl<S: CredentialStore> AuthService for LoginService<S> {
    fn login(&self, form: &UserForm) -> Result<bool, AuthError> {
        self.validate_form(form)?;

        let result = self.store.lookup(form);
        debug!("Lookup for user {} returned code {}", form.username(), result);

        Ok(result == RECOGNIZED)
    }

    fn set_current_user(&self, username: &str) {
        self.session
            .write()
            .expect("session lock poisoned")
            .set_current_user(username);
        debug!("Current user set to {}", username);
    }
}
