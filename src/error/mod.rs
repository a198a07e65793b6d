//! Error handling
//!
//! Defines error types for the authentication modules.

pub mod types;

pub use types::*;
