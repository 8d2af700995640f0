//! What the session looks like to the user.
//!
//! [`SessionView::derive`] is a pure function of the session, so the CLI
//! and tests read the same strings.

use super::login_prompt::{LoginPrompt, LoginPromptConfig};
use crate::error::{ErrorCategory, PcaError};
use crate::models::{RegionId, RequestStatus, Timestamp, UserProfile};
use crate::state::{RequestState, Session, SessionPhase};

pub const AUTHENTICATING_TEXT: &str = "Signing in with the WCA...";
pub const LOADING_TEXT: &str = "Loading your data...";
pub const LOAD_ERROR_TITLE: &str = "Error: Can't load your data";

pub const NO_REGION_TEXT: &str = "No region yet";
pub const NO_REQUEST_TEXT: &str = "No request yet";
pub const STATUS_LOADING_TEXT: &str = "Loading...";
pub const STATUS_UNAVAILABLE_TEXT: &str = "Unavailable";

pub const GUIDANCE: [&str; 2] = [
    "Please keep in mind: Pick only your REAL region. Our team will verify this, and may deny your submission if found false.",
    "You can only set your region once every year, so please double check if it's correct before submitting.",
];

pub const APPEAL_GUIDANCE: [&str; 3] = [
    "Sorry, your request has been denied because we cannot verify your region.",
    "You must e-mail us at pcaresultscommittee@gmail.com, and make the subject of the e-mail \"Region update request appeal: (Your full name)\".",
    "In the e-mail, you must give us as much as you can your proof of residence / origin in your selected region.",
];

pub const SUBMIT_ACTION_LABEL: &str = "Set your region";

pub const SUBMITTED_TITLE: &str = "You've submitted your region";
pub const SUBMITTED_BODY: &str = "Thanks for submitting your region! Please wait up to a week or two for your region setting to be approved.";

pub const SUBMIT_ERROR_TITLE: &str = "Error: Can't submit region";
pub const SUBMIT_ERROR_BODY: &str = "A network/system error may have happened, or your request has been denied as you may have already set your region for this year. You can only set your region once every year.";

/// A titled message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

/// The region picker and its submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSelection {
    pub default_region: RegionId,
    pub action_label: &'static str,
}

impl Default for RegionSelection {
    fn default() -> Self {
        Self {
            default_region: RegionId::default(),
            action_label: SUBMIT_ACTION_LABEL,
        }
    }
}

/// The signed-in user's overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub greeting: String,
    pub current_region: String,
    pub request_status: String,
    pub guidance: Vec<String>,
    /// Present only while submission is on offer.
    pub selection: Option<RegionSelection>,
}

impl Dashboard {
    fn new(profile: &UserProfile, request: &RequestState, offer_submission: bool) -> Self {
        Self::with_status_loading_text(profile, request, offer_submission, STATUS_LOADING_TEXT)
    }

    /// `loading_text` stands in for the status while the lookup has no answer.
    fn with_status_loading_text(
        profile: &UserProfile,
        request: &RequestState,
        offer_submission: bool,
        loading_text: &str,
    ) -> Self {
        let region = profile
            .region
            .as_ref()
            .map(RegionId::to_string)
            .unwrap_or_else(|| NO_REGION_TEXT.to_string());
        let status = match request {
            RequestState::Loading => loading_text.to_string(),
            RequestState::Absent => NO_REQUEST_TEXT.to_string(),
            RequestState::Latest(latest) => latest.status.to_string(),
        };
        let denied = request.latest().map(|r| r.status) == Some(RequestStatus::Denied);
        let guidance: &[&str] = if denied { &APPEAL_GUIDANCE } else { &GUIDANCE };

        Self {
            greeting: format!("Hello, {}!", profile.display_name()),
            current_region: format!("Your current region: {}", region),
            request_status: format!("Your region request's status: {}", status),
            guidance: guidance.iter().map(|s| s.to_string()).collect(),
            selection: offer_submission.then(RegionSelection::default),
        }
    }
}

/// The rendered outcome of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionView {
    /// Anonymous: invite the user to sign in.
    LoginPrompt(LoginPrompt),
    /// Anonymous with the prompt dismissed: nothing to show.
    Hidden,
    /// A code is being exchanged.
    Authenticating,
    /// Signed in, profile not loaded yet.
    Loading,
    /// Signed in, loading failed. Whatever did load stays on screen.
    LoadError {
        notice: Notice,
        dashboard: Option<Dashboard>,
    },
    Dashboard(Dashboard),
    /// Terminal for the session; submission is no longer offered.
    Submitted(Notice),
    /// The submission failed; the dashboard keeps offering it.
    SubmitError { notice: Notice, dashboard: Dashboard },
}

impl SessionView {
    pub fn derive(session: &Session, prompt: &LoginPromptConfig, now: Timestamp) -> Self {
        let phase = session.phase_at(now);
        let dashboard = |offer: bool| {
            session
                .profile()
                .map(|profile| Dashboard::new(profile, session.request(), offer))
        };

        match phase {
            SessionPhase::Anonymous if session.login_prompt_dismissed() => SessionView::Hidden,
            SessionPhase::Anonymous => SessionView::LoginPrompt(LoginPrompt::new(
                prompt,
                session.last_error().map(PcaError::user_message),
            )),
            SessionPhase::Authenticating => SessionView::Authenticating,
            SessionPhase::Loading => match dashboard(false) {
                Some(dashboard) => SessionView::Dashboard(dashboard),
                None => SessionView::Loading,
            },
            SessionPhase::LoadFailed => SessionView::LoadError {
                notice: Notice {
                    title: LOAD_ERROR_TITLE.to_string(),
                    body: session
                        .last_error()
                        .map(PcaError::user_message)
                        .unwrap_or_default(),
                },
                dashboard: session.profile().map(|profile| {
                    Dashboard::with_status_loading_text(
                        profile,
                        session.request(),
                        false,
                        STATUS_UNAVAILABLE_TEXT,
                    )
                }),
            },
            SessionPhase::Eligible | SessionPhase::Ineligible => {
                match dashboard(phase.offers_submission()) {
                    Some(dashboard) => SessionView::Dashboard(dashboard),
                    None => SessionView::Loading,
                }
            }
            SessionPhase::Submitted => SessionView::Submitted(Notice {
                title: SUBMITTED_TITLE.to_string(),
                body: SUBMITTED_BODY.to_string(),
            }),
            SessionPhase::SubmitError => {
                let notice = Notice {
                    title: SUBMIT_ERROR_TITLE.to_string(),
                    body: session
                        .submit_error()
                        .map(submit_error_body)
                        .unwrap_or_else(|| SUBMIT_ERROR_BODY.to_string()),
                };
                match dashboard(true) {
                    Some(dashboard) => SessionView::SubmitError { notice, dashboard },
                    None => SessionView::LoadError {
                        notice,
                        dashboard: None,
                    },
                }
            }
        }
    }

    /// Whether the region picker is on screen.
    pub fn offers_submission(&self) -> bool {
        match self {
            SessionView::Dashboard(dashboard) | SessionView::SubmitError { dashboard, .. } => {
                dashboard.selection.is_some()
            }
            _ => false,
        }
    }

    /// The dashboard, if one is shown.
    pub fn dashboard(&self) -> Option<&Dashboard> {
        match self {
            SessionView::Dashboard(dashboard) | SessionView::SubmitError { dashboard, .. } => {
                Some(dashboard)
            }
            SessionView::LoadError { dashboard, .. } => dashboard.as_ref(),
            _ => None,
        }
    }
}

/// Moderation answers explain themselves; anything else gets the generic text.
fn submit_error_body(err: &PcaError) -> String {
    match err.category() {
        ErrorCategory::Moderation => err.user_message(),
        _ => SUBMIT_ERROR_BODY.to_string(),
    }
}
