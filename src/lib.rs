pub mod auth;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod store;

pub use auth::{AuthService, LoginService, Session, SharedSession, UserForm};
pub use config::AppConfig;
pub use dispatcher::{LoginDispatcher, LoginOutcome};
pub use error::AuthError;
pub use store::{CredentialStore, MemoryStore, RECOGNIZED};
