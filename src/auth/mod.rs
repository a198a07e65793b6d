//! Authentication system
//!
//! Handles credential validation, login decisions, and session management.

pub mod form;
pub mod service;
pub mod session;

pub use form::UserForm;
pub use service::{AuthService, LoginService};
pub use session::{Session, SharedSession};
