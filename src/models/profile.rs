use serde::{Deserialize, Serialize};

use super::region::{deserialize_optional_region, RegionId};
use super::timestamp::{self, Timestamp};
use super::deserialize_optional_id;

/// The authenticated competitor, as returned by `GET /user/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    #[serde(default, alias = "firstName")]
    pub first_name: Option<String>,
    #[serde(default, alias = "lastName")]
    pub last_name: Option<String>,
    /// The competitor's WCA id, e.g. `2019DELA01`.
    #[serde(default, alias = "wcaId")]
    pub wca_id: Option<String>,
    /// Region currently on record; `None` if never set.
    #[serde(default, deserialize_with = "deserialize_optional_region")]
    pub region: Option<RegionId>,
    /// When the region was last changed.
    #[serde(
        default,
        alias = "regionUpdatedAt",
        deserialize_with = "timestamp::deserialize_option"
    )]
    pub region_updated_at: Option<Timestamp>,
    #[serde(alias = "createdAt", deserialize_with = "timestamp::deserialize")]
    pub created_at: Timestamp,
}

impl UserProfile {
    /// The time the yearly region window is measured from: the last region
    /// change, or account creation if the region was never changed.
    pub fn region_reference_time(&self) -> Timestamp {
        self.region_updated_at.unwrap_or(self.created_at)
    }

    /// `First Last (WCAID)`, leaving out whatever is missing.
    pub fn display_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        match self.wca_id.as_deref().map(str::trim).filter(|id| !id.is_empty()) {
            Some(wca_id) if name.is_empty() => format!("({})", wca_id),
            Some(wca_id) => format!("{} ({})", name, wca_id),
            None => name,
        }
    }
}
