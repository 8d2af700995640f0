//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET/POST used by the PCA API client
//! - [`CredentialStore`] - durable storage for the single API credential

pub mod credentials;
pub mod http;

pub use credentials::{CredentialStore, CredentialsError};
pub use http::{Headers, HttpClient, HttpError, Response};
