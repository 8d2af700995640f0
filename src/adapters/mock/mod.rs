//! Test doubles for the trait seams.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses and a request log
//! - [`InMemoryCredentials`] - in-memory credential storage with failure switches

pub mod credentials;
pub mod http;

pub use credentials::InMemoryCredentials;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
