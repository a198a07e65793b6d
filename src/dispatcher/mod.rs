//! Login dispatch
//!
//! Entry point of the authentication flow. Validates the incoming form,
//! invokes the authentication service, and maps the result to an outcome,
//! updating the session only on success.

pub mod results;

pub use results::LoginOutcome;

use log::{info, warn};

use crate::auth::{AuthService, UserForm};

/// Controller that maps a submitted form to a [`LoginOutcome`].
pub struct LoginDispatcher<A: AuthService> {
    service: A,
}

impl<A: AuthService> LoginDispatcher<A> {
    pub fn new(service: A) -> Self {
        Self { service }
    }

    /// Returns the underlying authentication service.
    pub fn service(&self) -> &A {
        &self.service
    }

    /// Dispatches one login attempt.
    ///
    /// An absent form is rejected without consulting the service at all.
    /// A service error is recovered here and surfaced only as
    /// [`LoginOutcome::Error`]; the error detail is logged and discarded.
    pub fn dispatch(&self, form: Option<&UserForm>) -> LoginOutcome {
        let Some(form) = form else {
            return LoginOutcome::Invalid;
        };

        match self.service.login(form) {
            Ok(true) => {
                // Username taken from the input form, not re-fetched.
                self.service.set_current_user(form.username());
                info!("User {} logged in", form.username());
                LoginOutcome::Success
            }
            Ok(false) => {
                info!("Login rejected for user {}", form.username());
                LoginOutcome::Fail
            }
            Err(e) => {
                warn!("Login error for user {}: {}", form.username(), e);
                LoginOutcome::Error
            }
        }
    }
}
