//! Credential store
//!
//! Data-access layer consulted during login. A store performs an opaque
//! lookup for a submitted form and reports the result as an integer code.

pub mod memory;

pub use memory::MemoryStore;

use crate::auth::UserForm;

/// Lookup result code meaning the credentials matched a known record.
/// Any other code means the credentials were not recognized.
pub const RECOGNIZED: i32 = 1;

/// Data-access seam for credential lookups.
///
/// Implementations have no visible side effects and no error conditions;
/// a lookup that cannot be resolved returns a non-matching code.
pub trait CredentialStore {
    /// Looks up the form's credentials and returns a result code.
    /// Returns [`RECOGNIZED`] when the credentials match a known record.
    fn lookup(&self, form: &UserForm) -> i32;
}
