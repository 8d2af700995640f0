use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::region::RegionId;
use super::timestamp::{self, Timestamp};

/// Moderation state of a region change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestStatus {
    Pending,
    Approved,
    Denied,
}

impl RequestStatus {
    /// The status as the API spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Denied => "Denied",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RequestStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Status casing differs between API versions.
impl<'de> Deserialize<'de> for RequestStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(RequestStatus::Pending),
            "approved" => Ok(RequestStatus::Approved),
            "denied" => Ok(RequestStatus::Denied),
            _ => Err(serde::de::Error::unknown_variant(
                &raw,
                &["Pending", "Approved", "Denied"],
            )),
        }
    }
}

/// A user's request to change their region, as returned newest-first by
/// `GET /user/region-update-requests/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionChangeRequest {
    pub region: RegionId,
    pub status: RequestStatus,
    #[serde(alias = "createdAt", deserialize_with = "timestamp::deserialize")]
    pub created_at: Timestamp,
}

impl RegionChangeRequest {
    pub fn is_denied(&self) -> bool {
        self.status == RequestStatus::Denied
    }
}
