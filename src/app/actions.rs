//! User-initiated session actions.

use std::sync::Arc;

use tracing::{debug, info};

use super::{App, AppMessage};
use crate::auth::{CredentialStatus, RedirectParams};
use crate::error::{AuthError, PcaError, SubmitError};
use crate::models::RegionId;
use crate::traits::HttpClient;

/// Result of [`App::submit_region`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Accepted for moderation; the session is now `Submitted`.
    Submitted,
    /// Not accepted. Submission stays on offer unless the error says the
    /// session was signed out or submission was never offered.
    Failed(PcaError),
}

impl<C: HttpClient + 'static> App<C> {
    /// Resolve the credential, exchanging the redirect's code if there is
    /// one and nothing is cached, then start loading the dashboard.
    ///
    /// Without a credential or a code the session stays anonymous.
    pub async fn authenticate(&mut self, redirect: Option<&RedirectParams>) {
        let exchanging = !self.cache.is_logged_in() && redirect.and_then(|r| r.code()).is_some();
        if exchanging {
            self.session.begin_authentication();
        }

        match self.exchange.ensure_credential(redirect).await {
            Ok(CredentialStatus::Ready(_)) => {
                self.session.authenticated();
                self.spawn_fetches();
            }
            Ok(CredentialStatus::LoginRequired) => {
                debug!("No credential and no code, login required");
            }
            Err(err) => {
                self.session.authentication_failed(err.into());
            }
        }
    }

    /// Reload profile and latest request, superseding any lookup in flight.
    pub fn refresh(&mut self) {
        if !self.session.is_authenticated() {
            return;
        }
        self.session.begin_refresh();
        self.spawn_fetches();
    }

    /// Submit `region` for moderation.
    ///
    /// Refused without a network call unless the session offers submission.
    pub async fn submit_region(&mut self, region: RegionId) -> SubmitOutcome {
        if !self.phase().offers_submission() {
            debug!(phase = ?self.phase(), "Submission not offered");
            return SubmitOutcome::Failed(SubmitError::NotEligible.into());
        }
        let Some(credential) = self.cache.get() else {
            return SubmitOutcome::Failed(AuthError::NotAuthenticated.into());
        };

        self.session.retry_submission();
        match self.api.submit_region(&credential, &region).await {
            Ok(()) => {
                self.session.submitted();
                self.refresh();
                SubmitOutcome::Submitted
            }
            Err(err) if err.requires_reauth() => {
                self.handle_unauthorized();
                SubmitOutcome::Failed(err)
            }
            Err(err) => {
                self.session.submit_failed(err.clone());
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Forget the credential everywhere and return to the login prompt.
    ///
    /// No server call is made.
    pub fn logout(&mut self) {
        info!("Logging out");
        self.cancel_fetches();
        self.cache.teardown();
        self.session.signed_out();
    }

    /// End the session: stop in-flight lookups and ignore their answers.
    ///
    /// The credential is kept for the next session.
    pub fn teardown(&mut self) {
        debug!(generation = self.generation, "Tearing down session");
        self.cancel_fetches();
    }

    /// Spawn the profile and request lookups for a fresh generation.
    fn spawn_fetches(&mut self) {
        let Some(credential) = self.cache.get() else {
            return;
        };
        self.cancel_fetches();
        let generation = self.generation;

        let api = Arc::clone(&self.api);
        let tx = self.message_tx.clone();
        let profile_credential = credential.clone();
        let profile_task = tokio::spawn(async move {
            let result = api.fetch_profile(&profile_credential).await;
            let _ = tx.send(AppMessage::ProfileLoaded { generation, result });
        });

        let api = Arc::clone(&self.api);
        let tx = self.message_tx.clone();
        let request_task = tokio::spawn(async move {
            let result = api.fetch_latest_request(&credential).await;
            let _ = tx.send(AppMessage::RequestStatusLoaded { generation, result });
        });

        self.tasks = vec![profile_task, request_task];
        self.outstanding = 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryCredentials, MockHttpClient, MockResponse};
    use crate::api::PcaApiClient;
    use crate::auth::{Credential, CredentialCache};
    use crate::state::SessionPhase;
    use crate::view_state::LoginPromptConfig;
    use chrono::{TimeZone, Utc};
    use std::time::Duration;

    const BASE: &str = "https://api.test";

    fn app_with(store: InMemoryCredentials, http: MockHttpClient) -> App<MockHttpClient> {
        let cache = CredentialCache::init(Arc::new(store));
        let api = PcaApiClient::with_http(BASE, http);
        App::new(cache, api, LoginPromptConfig::default())
            .with_clock(|| Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap())
    }

    fn mock_dashboard(http: &MockHttpClient, requests: serde_json::Value) {
        http.set_response(
            "GET",
            &format!("{}/user/", BASE),
            MockResponse::json(
                200,
                serde_json::json!({
                    "first_name": "Juan",
                    "last_name": "Dela Cruz",
                    "wca_id": "2019DELA01",
                    "region": null,
                    "region_updated_at": null,
                    "created_at": "2024-03-01"
                }),
            ),
        );
        http.set_response(
            "GET",
            &format!("{}/user/region-update-requests/", BASE),
            MockResponse::json(200, requests),
        );
    }

    fn stored() -> InMemoryCredentials {
        InMemoryCredentials::with_credential(Credential::parse("abc123").unwrap())
    }

    #[tokio::test]
    async fn test_authenticate_without_anything_stays_anonymous() {
        let http = MockHttpClient::new();
        let mut app = app_with(InMemoryCredentials::new(), http.clone());

        app.authenticate(None).await;

        assert_eq!(app.phase(), SessionPhase::Anonymous);
        assert_eq!(http.request_count(), 0);
    }

    #[tokio::test]
    async fn test_cached_credential_loads_dashboard() {
        let http = MockHttpClient::new();
        mock_dashboard(&http, serde_json::json!([]));
        let mut app = app_with(stored(), http.clone());

        app.authenticate(None).await;
        assert_eq!(app.phase(), SessionPhase::Loading);
        assert_eq!(app.pending_fetches(), 2);

        app.run_until_settled().await;
        assert_eq!(app.phase(), SessionPhase::Eligible);
    }

    #[tokio::test]
    async fn test_submit_refused_locally_when_not_offered() {
        let http = MockHttpClient::new();
        let mut app = app_with(InMemoryCredentials::new(), http.clone());

        let outcome = app.submit_region(RegionId::default()).await;

        assert_eq!(outcome, SubmitOutcome::Failed(SubmitError::NotEligible.into()));
        assert_eq!(http.request_count(), 0);
    }

    #[tokio::test]
    async fn test_submit_failure_then_success() {
        let http = MockHttpClient::new();
        mock_dashboard(&http, serde_json::json!([]));
        let submit_url = format!("{}/user/region-update-requests/", BASE);
        http.set_response("POST", &submit_url, MockResponse::status(503));
        let mut app = app_with(stored(), http.clone());
        app.authenticate(None).await;
        app.run_until_settled().await;

        let outcome = app.submit_region(RegionId::default()).await;
        assert!(matches!(outcome, SubmitOutcome::Failed(PcaError::Network(_))));
        assert_eq!(app.phase(), SessionPhase::SubmitError);

        http.set_response("POST", &submit_url, MockResponse::status(201));
        let outcome = app.submit_region(RegionId::default()).await;
        assert_eq!(outcome, SubmitOutcome::Submitted);
        assert_eq!(app.phase(), SessionPhase::Submitted);
    }

    #[tokio::test]
    async fn test_logout_discards_in_flight_results() {
        let http = MockHttpClient::new();
        mock_dashboard(&http, serde_json::json!([]));
        http.set_delay(Duration::from_millis(50));
        let store = stored();
        let mut app = app_with(store.clone(), http);

        app.authenticate(None).await;
        let started = app.generation();
        app.logout();

        assert!(app.generation() > started);
        assert_eq!(app.pending_fetches(), 0);
        assert_eq!(app.phase(), SessionPhase::Anonymous);
        assert_eq!(store.get_credential(), None);
    }

    #[tokio::test]
    async fn test_stale_message_is_ignored() {
        let http = MockHttpClient::new();
        mock_dashboard(&http, serde_json::json!([]));
        let mut app = app_with(stored(), http);
        app.authenticate(None).await;
        app.run_until_settled().await;
        let stale = app.generation();

        app.refresh();
        let profile = app.session.profile().cloned().unwrap();
        let mut changed = profile.clone();
        changed.first_name = Some("Stale".to_string());
        app.handle_message(AppMessage::ProfileLoaded {
            generation: stale,
            result: Ok(changed),
        });

        assert_eq!(app.session.profile(), Some(&profile));
        assert_eq!(app.pending_fetches(), 2);
        app.run_until_settled().await;
    }

    #[tokio::test]
    async fn test_teardown_keeps_credential() {
        let http = MockHttpClient::new();
        mock_dashboard(&http, serde_json::json!([]));
        let store = stored();
        let mut app = app_with(store.clone(), http);
        app.authenticate(None).await;

        app.teardown();

        assert_eq!(app.pending_fetches(), 0);
        assert!(store.get_credential().is_some());
    }
}
