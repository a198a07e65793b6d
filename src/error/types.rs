//! Error types
//!
//! Domain-specific error types for the authentication service.

use std::fmt;

/// Authentication module errors
#[derive(Debug)]
pub enum AuthError {
    InvalidUsername(String),
    MalformedInput(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidUsername(u) => write!(f, "Invalid username: {}", u),
            AuthError::MalformedInput(s) => write!(f, "Malformed input: {}", s),
        }
    }
}

impl std::error::Error for AuthError {}
