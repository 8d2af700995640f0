use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::{deserialize_id, deserialize_optional_id};

/// Region preselected in the submission form.
pub const DEFAULT_REGION: &str = "NCR";

/// Id of the country-wide option offered by ranking navigation.
pub const NATIONAL_REGION_ID: &str = "PH";

/// Display name of the country-wide option.
pub const NATIONAL_REGION_NAME: &str = "Philippines";

/// Identifier of a region, e.g. `NCR`.
///
/// Numeric ids from the API are kept in their decimal form. Decoding trims
/// the id the same way [`RegionId::parse`] does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RegionId(String);

impl RegionId {
    /// Wrap an id, rejecting blank values.
    pub fn parse(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for RegionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = deserialize_id(deserializer)?;
        RegionId::parse(raw).ok_or_else(|| D::Error::custom("region id is blank"))
    }
}

/// An optional region where `null`, absence and a blank id all mean unset.
pub(crate) fn deserialize_optional_region<'de, D>(
    deserializer: D,
) -> Result<Option<RegionId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_optional_id(deserializer)?.and_then(RegionId::parse))
}

impl Default for RegionId {
    fn default() -> Self {
        Self(DEFAULT_REGION.to_string())
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A selectable region (`GET /regions`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub name: String,
}

impl Region {
    /// The country-wide pseudo region.
    pub fn national() -> Self {
        Self {
            id: RegionId(NATIONAL_REGION_ID.to_string()),
            name: NATIONAL_REGION_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoded_region_id_is_trimmed() {
        let region: Region =
            serde_json::from_str(r#"{"id": " NCR ", "name": "National Capital Region"}"#).unwrap();
        assert_eq!(region.id, RegionId::parse("NCR").unwrap());
    }

    #[test]
    fn test_blank_region_id_is_rejected() {
        assert!(serde_json::from_str::<RegionId>(r#""  ""#).is_err());
    }

    #[test]
    fn test_region_id_accepts_string_and_number() {
        let regions: Vec<Region> = serde_json::from_str(
            r#"[{"id": "NCR", "name": "National Capital Region"}, {"id": 7, "name": "Central Visayas"}]"#,
        )
        .unwrap();
        assert_eq!(regions[0].id.as_str(), "NCR");
        assert_eq!(regions[1].id.as_str(), "7");
    }

    #[test]
    fn test_region_id_serializes_as_plain_string() {
        let id = RegionId::parse("NCR").unwrap();
        assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!("NCR"));
    }

    #[test]
    fn test_default_region_is_ncr() {
        assert_eq!(RegionId::default().as_str(), "NCR");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert!(RegionId::parse("  ").is_none());
        assert_eq!(RegionId::parse(" CAR ").unwrap().as_str(), "CAR");
    }
}
