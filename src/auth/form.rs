//! Credential form
//!
//! Defines the `UserForm` value submitted to a login attempt. A plain data
//! holder with no identity beyond its fields.

/// Submitted login credentials.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    username: String,
    password: String,
}

impl UserForm {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// Returns the submitted username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the submitted password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Sets the username on the form.
    pub fn set_username(&mut self, username: String) {
        self.username = username;
    }

    /// Sets the password on the form.
    pub fn set_password(&mut self, password: String) {
        self.password = password;
    }
}
