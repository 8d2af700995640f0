//! PCA API client.
//!
//! [`PcaApiClient`] owns the base URL and the transport; each endpoint is an
//! inherent method defined in the module for its resource.

mod client;
pub mod login;
pub mod region_requests;
pub mod regions;
pub mod user;

pub use client::{PcaApiClient, PCA_API_URL};
