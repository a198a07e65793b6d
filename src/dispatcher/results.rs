//! Dispatch result types
//!
//! Defines the status value produced by a single login dispatch.

use std::fmt;

/// Status of one login dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials recognized; session was updated.
    Success,
    /// Credentials not recognized.
    Fail,
    /// The authentication service rejected the form as malformed.
    Error,
    /// No form was submitted; nothing was attempted.
    Invalid,
}

impl LoginOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginOutcome::Success => "SUCCESS",
            LoginOutcome::Fail => "FAIL",
            LoginOutcome::Error => "ERROR",
            LoginOutcome::Invalid => "INVALID",
        }
    }
}

impl fmt::Display for LoginOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
