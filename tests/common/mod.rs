//! Common test utilities for integration tests.
//!
//! [`TestEnv`] pairs a wiremock server standing in for the PCA API with a
//! temporary credential file, and builds `App`s wired to both.
//!
//! # Example
//!
//! ```ignore
//! let env = TestEnv::start().await;
//! env.mount_profile(new_user_profile()).await;
//! let mut app = env.app();
//! ```

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pca_region::app::App;
use pca_region::auth::{Credential, CredentialsManager};
use pca_region::models::Timestamp;
use pca_region::startup::PcaConfig;

pub const TOKEN: &str = "abc123";
pub const AUTH_HEADER: &str = "Token abc123";

/// The clock every test app runs on: 1 June 2024.
pub fn june_2024() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// A competitor who joined this year and never set a region.
pub fn new_user_profile() -> Value {
    json!({
        "id": 42,
        "first_name": "Juan",
        "last_name": "Dela Cruz",
        "wca_id": "2019DELA01",
        "region": null,
        "region_updated_at": null,
        "created_at": "2024-03-01"
    })
}

pub fn request(region: &str, status: &str, created_at: &str) -> Value {
    json!({ "region": region, "status": status, "created_at": created_at })
}

pub fn regions() -> Value {
    json!([
        { "id": "NCR", "name": "National Capital Region" },
        { "id": "CAR", "name": "Cordillera Administrative Region" },
        { "id": "CALABARZON", "name": "Calabarzon" }
    ])
}

pub struct TestEnv {
    pub server: MockServer,
    dir: TempDir,
}

impl TestEnv {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn credentials_path(&self) -> std::path::PathBuf {
        self.dir.path().join(".credentials.json")
    }

    pub fn config(&self) -> PcaConfig {
        PcaConfig::default()
            .with_api_base_url(self.server.uri())
            .with_credentials_path(self.credentials_path())
            .with_request_timeout_secs(5)
            .with_open_browser(false)
    }

    /// A fresh session over the shared server and credential file.
    pub fn app(&self) -> App {
        App::from_config(&self.config()).unwrap().with_clock(june_2024)
    }

    pub fn store_credential(&self, token: &str) {
        CredentialsManager::with_path(self.credentials_path())
            .save(&Credential::parse(token).unwrap())
            .unwrap();
    }

    pub fn stored_credential(&self) -> Option<Credential> {
        CredentialsManager::with_path(self.credentials_path())
            .load()
            .unwrap()
    }

    pub async fn mount_profile(&self, body: Value) {
        Mock::given(method("GET"))
            .and(path("/user/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mount_requests(&self, body: Value) {
        Mock::given(method("GET"))
            .and(path("/user/region-update-requests/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mount_regions(&self) {
        Mock::given(method("GET"))
            .and(path("/regions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(regions()))
            .mount(&self.server)
            .await;
    }

    /// Profile of a new user with no request on file.
    pub async fn mount_new_user(&self) {
        self.mount_profile(new_user_profile()).await;
        self.mount_requests(json!([])).await;
    }
}
