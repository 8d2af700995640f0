//! Session driver.
//!
//! [`App`] sequences the async work of a session: it resolves the
//! credential, spawns the profile and request lookups, applies their
//! results as they arrive and performs submission and logout. Every batch
//! of spawned lookups is stamped with the current generation; logout,
//! teardown and each new refresh bump it, so late answers from an earlier
//! batch are dropped.

mod actions;
mod handlers;
mod messages;

pub use actions::SubmitOutcome;
pub use messages::AppMessage;

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::adapters::{FileCredentialStore, ReqwestHttpClient};
use crate::api::PcaApiClient;
use crate::auth::{AuthExchange, CredentialCache};
use crate::error::{PcaError, PcaResult};
use crate::models::Timestamp;
use crate::startup::PcaConfig;
use crate::state::{Session, SessionPhase};
use crate::traits::HttpClient;
use crate::view_state::{LoginPromptConfig, SessionView};

/// Source of the current time.
pub type Clock = Arc<dyn Fn() -> Timestamp + Send + Sync>;

/// One client session.
pub struct App<C: HttpClient + 'static = ReqwestHttpClient> {
    /// Phase, loaded data and submission outcome
    pub session: Session,
    cache: CredentialCache,
    api: Arc<PcaApiClient<C>>,
    exchange: AuthExchange<C>,
    login_prompt: LoginPromptConfig,
    clock: Clock,
    /// Bumped whenever in-flight lookups become irrelevant
    generation: u64,
    /// Lookups of the current generation still unanswered
    outstanding: usize,
    tasks: Vec<JoinHandle<()>>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    message_rx: mpsc::UnboundedReceiver<AppMessage>,
}

impl App<ReqwestHttpClient> {
    /// Build the production session from configuration.
    ///
    /// Reads the stored credential once.
    pub fn from_config(config: &PcaConfig) -> PcaResult<Self> {
        let http = ReqwestHttpClient::with_timeout(config.request_timeout())
            .map_err(|e| PcaError::from(crate::error::classify_http_error(e, &config.api_base_url)))?;
        let store = FileCredentialStore::at(config.credentials_path.as_deref())?;
        let cache = CredentialCache::init(Arc::new(store));
        let api = PcaApiClient::with_http(config.api_base_url.clone(), http);
        Ok(Self::new(cache, api, LoginPromptConfig::from_config(config)))
    }
}

impl<C: HttpClient + 'static> App<C> {
    pub fn new(cache: CredentialCache, api: PcaApiClient<C>, login_prompt: LoginPromptConfig) -> Self {
        let api = Arc::new(api);
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            session: Session::new(),
            exchange: AuthExchange::new(cache.clone(), Arc::clone(&api)),
            cache,
            api,
            login_prompt,
            clock: Arc::new(Utc::now),
            generation: 0,
            outstanding: 0,
            tasks: Vec::new(),
            message_tx,
            message_rx,
        }
    }

    /// Replace the clock used for eligibility decisions.
    pub fn with_clock(mut self, clock: impl Fn() -> Timestamp + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn now(&self) -> Timestamp {
        (self.clock)()
    }

    /// Current phase of the session.
    pub fn phase(&self) -> SessionPhase {
        self.session.phase_at(self.now())
    }

    /// Everything the presentation layer needs to render the session.
    pub fn view(&self) -> SessionView {
        SessionView::derive(&self.session, &self.login_prompt, self.now())
    }

    pub fn cache(&self) -> &CredentialCache {
        &self.cache
    }

    pub fn api(&self) -> &PcaApiClient<C> {
        &self.api
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Lookups still outstanding for the current generation.
    pub fn pending_fetches(&self) -> usize {
        self.outstanding
    }

    /// Hide the login call-to-action for the rest of this session.
    pub fn dismiss_login_prompt(&mut self) {
        self.session.dismiss_login_prompt();
    }

    /// Make every in-flight lookup irrelevant and stop it.
    fn cancel_fetches(&mut self) {
        self.generation += 1;
        self.outstanding = 0;
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

impl<C: HttpClient + 'static> std::fmt::Debug for App<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("session", &self.session)
            .field("cache", &self.cache)
            .field("generation", &self.generation)
            .field("outstanding", &self.outstanding)
            .finish()
    }
}
