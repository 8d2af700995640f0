//! Session-level state machine.
//!
//! ```text
//! Anonymous --code--> Authenticating --ok--> Authenticated --+--> Eligible --submit ok--> Submitted
//!     ^                     |                                |        ^   \
//!     +------ failure ------+                                |        |    submit failure
//!     ^                                                      |      retry   \
//!     +--- logout / credential rejected (from anywhere) -----+        +--- SubmitError
//!                                                            +--> Ineligible
//! ```
//!
//! `Authenticated` is reported as [`SessionPhase::Loading`] until both the
//! profile and the latest request are known, since eligibility cannot be
//! decided before that.

use crate::domain::{can_change_region_at, Eligibility};
use crate::error::PcaError;
use crate::models::{RegionChangeRequest, Timestamp, UserProfile};

/// What is known about the user's latest region change request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    /// The lookup has not answered yet.
    #[default]
    Loading,
    /// The user never filed a request.
    Absent,
    /// The most recent request.
    Latest(RegionChangeRequest),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    /// The resolved lookup, or `None` while loading.
    pub fn resolved(&self) -> Option<Option<&RegionChangeRequest>> {
        match self {
            RequestState::Loading => None,
            RequestState::Absent => Some(None),
            RequestState::Latest(request) => Some(Some(request)),
        }
    }

    pub fn latest(&self) -> Option<&RegionChangeRequest> {
        self.resolved().flatten()
    }
}

impl From<Option<RegionChangeRequest>> for RequestState {
    fn from(latest: Option<RegionChangeRequest>) -> Self {
        match latest {
            Some(request) => RequestState::Latest(request),
            None => RequestState::Absent,
        }
    }
}

/// Externally visible phase of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Anonymous,
    Authenticating,
    /// Signed in, waiting for the profile or the request lookup.
    Loading,
    /// Signed in, but the profile or request lookup failed.
    LoadFailed,
    Eligible,
    Ineligible,
    /// A region was submitted in this session. Terminal.
    Submitted,
    /// The last submission failed; submission is still offered.
    SubmitError,
}

impl SessionPhase {
    /// Whether region submission is offered in this phase.
    pub fn offers_submission(&self) -> bool {
        matches!(self, SessionPhase::Eligible | SessionPhase::SubmitError)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum AuthPhase {
    #[default]
    Anonymous,
    Authenticating,
    Authenticated,
}

#[derive(Debug, Clone, PartialEq, Default)]
enum Submission {
    #[default]
    NotSubmitted,
    Submitted,
    Failed(PcaError),
}

/// State of one client session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    auth: AuthPhase,
    profile: Option<UserProfile>,
    request: RequestState,
    submission: Submission,
    /// Last sign-in or loading failure, shown next to the login prompt or
    /// instead of the dashboard.
    last_error: Option<PcaError>,
    login_prompt_dismissed: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The phase at time `now` (eligibility depends on the calendar year).
    pub fn phase_at(&self, now: Timestamp) -> SessionPhase {
        match self.auth {
            AuthPhase::Anonymous => SessionPhase::Anonymous,
            AuthPhase::Authenticating => SessionPhase::Authenticating,
            AuthPhase::Authenticated => match &self.submission {
                Submission::Submitted => SessionPhase::Submitted,
                Submission::Failed(_) => SessionPhase::SubmitError,
                Submission::NotSubmitted => match self.eligibility_at(now) {
                    Eligibility::Eligible => SessionPhase::Eligible,
                    Eligibility::Ineligible => SessionPhase::Ineligible,
                    Eligibility::Undetermined if self.last_error.is_some() => {
                        SessionPhase::LoadFailed
                    }
                    Eligibility::Undetermined => SessionPhase::Loading,
                },
            },
        }
    }

    /// Eligibility at `now`; undetermined until profile and request are known.
    pub fn eligibility_at(&self, now: Timestamp) -> Eligibility {
        match (&self.profile, self.request.resolved()) {
            (Some(profile), Some(latest)) => can_change_region_at(profile, latest, now).into(),
            _ => Eligibility::Undetermined,
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    pub fn last_error(&self) -> Option<&PcaError> {
        self.last_error.as_ref()
    }

    /// The failure of the last submission, if it failed.
    pub fn submit_error(&self) -> Option<&PcaError> {
        match &self.submission {
            Submission::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth == AuthPhase::Authenticated
    }

    pub fn login_prompt_dismissed(&self) -> bool {
        self.login_prompt_dismissed
    }

    /// Hide the login call-to-action for the rest of this session.
    pub fn dismiss_login_prompt(&mut self) {
        self.login_prompt_dismissed = true;
    }

    /// A code is being exchanged.
    pub fn begin_authentication(&mut self) {
        self.auth = AuthPhase::Authenticating;
        self.last_error = None;
    }

    /// The exchange failed; back to the login prompt.
    pub fn authentication_failed(&mut self, err: PcaError) {
        self.reset_to_anonymous();
        self.last_error = Some(err);
    }

    /// A credential is available; profile and request are to be loaded.
    pub fn authenticated(&mut self) {
        self.auth = AuthPhase::Authenticated;
        self.profile = None;
        self.request = RequestState::Loading;
        self.submission = Submission::NotSubmitted;
        self.last_error = None;
    }

    /// Mark the request lookup outstanding again, keeping the profile on
    /// screen until a fresh one arrives.
    pub fn begin_refresh(&mut self) {
        if self.is_authenticated() {
            self.request = RequestState::Loading;
            self.last_error = None;
        }
    }

    pub fn profile_loaded(&mut self, profile: UserProfile) {
        if self.is_authenticated() {
            self.profile = Some(profile);
        }
    }

    pub fn request_loaded(&mut self, latest: Option<RegionChangeRequest>) {
        if self.is_authenticated() {
            self.request = latest.into();
        }
    }

    /// A profile or request lookup failed for a reason other than a
    /// rejected credential.
    pub fn load_failed(&mut self, err: PcaError) {
        if self.is_authenticated() {
            self.last_error = Some(err);
        }
    }

    /// The region was accepted for moderation.
    pub fn submitted(&mut self) {
        if self.is_authenticated() {
            self.submission = Submission::Submitted;
        }
    }

    /// The region was not accepted; submission stays on offer.
    pub fn submit_failed(&mut self, err: PcaError) {
        if self.is_authenticated() && self.submission != Submission::Submitted {
            self.submission = Submission::Failed(err);
        }
    }

    /// Leave `SubmitError` for `Eligible`.
    pub fn retry_submission(&mut self) {
        if matches!(self.submission, Submission::Failed(_)) {
            self.submission = Submission::NotSubmitted;
        }
    }

    /// Logout or rejected credential.
    pub fn signed_out(&mut self) {
        self.reset_to_anonymous();
    }

    fn reset_to_anonymous(&mut self) {
        let dismissed = self.login_prompt_dismissed;
        *self = Self {
            login_prompt_dismissed: dismissed,
            ..Self::default()
        };
    }
}
