//! Wire types of the PCA API.
//!
//! - [`UserProfile`] - `GET /user/`
//! - [`RegionChangeRequest`] - `GET /user/region-update-requests/`
//! - [`Region`] - `GET /regions`

mod profile;
mod region;
mod region_request;
pub mod timestamp;

pub use profile::UserProfile;
pub use region::{Region, RegionId, DEFAULT_REGION, NATIONAL_REGION_ID, NATIONAL_REGION_NAME};
pub use region_request::{RegionChangeRequest, RequestStatus};
pub use timestamp::{parse_timestamp, Timestamp};

use serde::{Deserialize, Deserializer};

/// A response body that is either `{ "data": T }` or `T` itself.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Payload<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Payload<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            Payload::Wrapped { data } => data,
            Payload::Bare(inner) => inner,
        }
    }
}

/// An id the API sends either as a string or as an integer.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Signed(n) => n.to_string(),
            RawId::Unsigned(n) => n.to_string(),
        }
    }
}

/// Deserialize a string-or-integer id into its string form.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

/// Like [`deserialize_id`], with `null` or absence mapping to `None`.
pub(crate) fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawId>::deserialize(deserializer).map(|raw| raw.map(String::from))
}
