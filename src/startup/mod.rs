//! Process startup: configuration and logging.
//!
//! - [`config`] - `PcaConfig`, defaults plus `PCA_*` overrides
//! - [`logging`] - the `tracing` subscriber
//!
//! # Usage
//!
//! ```ignore
//! use pca_region::startup::{init_logging, PcaConfig};
//!
//! init_logging();
//! let config = PcaConfig::from_env()?;
//! ```

pub mod config;
pub mod logging;

pub use config::PcaConfig;
pub use logging::init_logging;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = PcaConfig::new()
            .with_open_browser(false)
            .with_request_timeout_secs(3)
            .with_credentials_path("/tmp/creds.json");

        assert!(!config.open_browser);
        assert_eq!(config.request_timeout_secs, 3);
        assert!(config.credentials_path.is_some());
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        init_logging();
    }
}
