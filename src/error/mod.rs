//! Error handling for the region client.
//!
//! Errors are split by the boundary they occur at and unified by
//! [`PcaError`]:
//!
//! | Category | Source | Recovery |
//! |----------|--------|----------|
//! | Network | connection, timeout, bad body | user re-runs the command |
//! | Server | HTTP 5xx | user re-runs the command later |
//! | Auth | failed exchange, rejected credential | back to the login prompt |
//! | Moderation | denied / duplicate region request | appeal by e-mail |
//! | System | credential file, home directory | fix the local environment |
//! | Configuration | bad `PCA_*` variable | fix the variable |

mod auth;
mod category;
mod network;
mod pca_error;
mod result;
mod submit;
mod system;

pub use auth::AuthError;
pub use category::ErrorCategory;
pub use network::{classify_http_error, NetworkError};
pub use pca_error::PcaError;
pub use result::PcaResult;
pub use submit::SubmitError;
pub use system::{classify_io_error, SystemError};
