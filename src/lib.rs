//! pca-region - set your Pinoy Cubers Association ranking region from the
//! command line.
//!
//! This library exposes modules for use in integration tests and by the
//! `pca` binary.

pub mod adapters;
pub mod api;
pub mod app;
pub mod auth;
pub mod cli;
pub mod cli_output;
pub mod domain;
pub mod error;
pub mod models;
pub(crate) mod mutex_ext;
pub mod startup;
pub mod state;
pub mod traits;
pub mod view_state;
