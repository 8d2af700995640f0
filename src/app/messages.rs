//! AppMessage enum for results coming back from spawned fetches.

use crate::error::PcaError;
use crate::models::{RegionChangeRequest, UserProfile};

/// Results of async operations, stamped with the session generation that
/// started them.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// `GET /user/` answered
    ProfileLoaded {
        generation: u64,
        result: Result<UserProfile, PcaError>,
    },
    /// `GET /user/region-update-requests/` answered
    RequestStatusLoaded {
        generation: u64,
        result: Result<Option<RegionChangeRequest>, PcaError>,
    },
}

impl AppMessage {
    pub fn generation(&self) -> u64 {
        match self {
            AppMessage::ProfileLoaded { generation, .. }
            | AppMessage::RequestStatusLoaded { generation, .. } => *generation,
        }
    }
}
