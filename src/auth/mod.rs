//! Authentication for the region client.
//!
//! This module provides:
//! - Credential type and file storage
//! - The process-wide credential cache
//! - WCA redirect parsing and the authorize link
//! - The code-for-credential exchange

pub mod cache;
pub mod credentials;
pub mod exchange;
pub mod redirect;

pub use cache::CredentialCache;
pub use credentials::{Credential, CredentialsManager};
pub use exchange::{AuthExchange, CredentialStatus};
pub use redirect::{build_authorize_url, AuthorizationCode, RedirectParams};
