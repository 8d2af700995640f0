//! Applying fetch results to the session.

use tracing::{debug, warn};

use super::{App, AppMessage};
use crate::error::PcaError;
use crate::traits::HttpClient;

impl<C: HttpClient + 'static> App<C> {
    /// Apply one message. Messages from an older generation are dropped.
    pub fn handle_message(&mut self, msg: AppMessage) {
        if msg.generation() != self.generation {
            debug!(
                stale = msg.generation(),
                current = self.generation,
                "Discarding result of a cancelled fetch"
            );
            return;
        }
        self.outstanding = self.outstanding.saturating_sub(1);

        match msg {
            AppMessage::ProfileLoaded { result, .. } => match result {
                Ok(profile) => {
                    debug!("Profile loaded");
                    self.session.profile_loaded(profile);
                }
                Err(err) => self.handle_fetch_error(err),
            },
            AppMessage::RequestStatusLoaded { result, .. } => match result {
                Ok(latest) => {
                    debug!(status = ?latest.as_ref().map(|r| r.status), "Region request status loaded");
                    self.session.request_loaded(latest);
                }
                Err(err) => self.handle_fetch_error(err),
            },
        }
    }

    fn handle_fetch_error(&mut self, err: PcaError) {
        if err.requires_reauth() {
            self.handle_unauthorized();
        } else {
            warn!(code = err.error_code(), "Fetch failed: {}", err);
            self.session.load_failed(err);
        }
    }

    /// The API no longer accepts the stored credential: drop it and go back
    /// to the login prompt.
    pub(super) fn handle_unauthorized(&mut self) {
        warn!("Stored credential was rejected, signing out");
        self.cancel_fetches();
        self.cache.clear();
        self.session.signed_out();
    }

    /// Apply messages until no lookup of the current generation is
    /// outstanding.
    pub async fn run_until_settled(&mut self) {
        while self.outstanding > 0 {
            match self.message_rx.recv().await {
                Some(msg) => self.handle_message(msg),
                None => break,
            }
        }
    }
}
