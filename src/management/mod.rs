//! Credential persistence.
//!
//! Home of the [`CredentialStore`] collaborator trait and its file-backed
//! implementation used by the CLI.

mod credentials;

pub use credentials::CredentialStore;
pub use credentials::FileCredentialStore;
