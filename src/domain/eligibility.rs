//! Yearly region-change eligibility.
//!
//! A region may be changed once per calendar year (UTC). The year is
//! counted from the last region change, or from account creation when the
//! region was never changed. A user with no region and no request on file
//! may always file their first one.

use chrono::{Datelike, Utc};

use crate::models::{RegionChangeRequest, Timestamp, UserProfile};

/// Whether the session may offer region submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// The latest request has not been looked up yet.
    Undetermined,
    Eligible,
    Ineligible,
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }
}

impl From<bool> for Eligibility {
    fn from(eligible: bool) -> Self {
        if eligible {
            Eligibility::Eligible
        } else {
            Eligibility::Ineligible
        }
    }
}

/// [`can_change_region_at`] evaluated now.
pub fn can_change_region(profile: &UserProfile, latest_request: Option<&RegionChangeRequest>) -> bool {
    can_change_region_at(profile, latest_request, Utc::now())
}

/// Decide eligibility at `now`.
///
/// `latest_request` must be the resolved lookup: `None` means the user
/// never filed a request, not that the lookup is still running.
pub fn can_change_region_at(
    profile: &UserProfile,
    latest_request: Option<&RegionChangeRequest>,
    now: Timestamp,
) -> bool {
    let changed_this_year = profile.region_reference_time().year() == now.year();
    let first_request = profile.region.is_none() && latest_request.is_none();
    !changed_this_year || first_request
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RegionId, RequestStatus};
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32) -> Timestamp {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    fn profile(region: Option<&str>, updated: Option<Timestamp>, created: Timestamp) -> UserProfile {
        UserProfile {
            id: None,
            first_name: None,
            last_name: None,
            wca_id: None,
            region: region.and_then(RegionId::parse),
            region_updated_at: updated,
            created_at: created,
        }
    }

    fn request(status: RequestStatus, created: Timestamp) -> RegionChangeRequest {
        RegionChangeRequest {
            region: RegionId::parse("NCR").unwrap(),
            status,
            created_at: created,
        }
    }

    #[test]
    fn test_different_year_is_always_eligible() {
        let statuses = [
            None,
            Some(RequestStatus::Pending),
            Some(RequestStatus::Approved),
            Some(RequestStatus::Denied),
        ];
        for reference_year in 2015..2024 {
            for region in [None, Some("NCR")] {
                for status in statuses {
                    let p = profile(region, Some(at(reference_year, 6, 1)), at(2014, 1, 1));
                    let r = status.map(|s| request(s, at(reference_year, 6, 1)));
                    assert!(
                        can_change_region_at(&p, r.as_ref(), at(2024, 3, 1)),
                        "reference {} region {:?} status {:?}",
                        reference_year,
                        region,
                        status
                    );
                }
            }
        }
    }

    #[test]
    fn test_no_region_and_no_request_is_eligible_in_same_year() {
        for month in 1..=12 {
            let p = profile(None, None, at(2024, month, 1));
            assert!(can_change_region_at(&p, None, at(2024, 12, 31)));
        }
    }

    #[test]
    fn test_region_set_this_year_with_request_is_ineligible() {
        for status in [RequestStatus::Pending, RequestStatus::Approved, RequestStatus::Denied] {
            let p = profile(Some("NCR"), Some(at(2024, 2, 1)), at(2020, 1, 1));
            let r = request(status, at(2024, 1, 15));
            assert!(!can_change_region_at(&p, Some(&r), at(2024, 11, 1)));
        }
    }

    #[test]
    fn test_region_set_this_year_without_request_is_ineligible() {
        let p = profile(Some("NCR"), Some(at(2024, 2, 1)), at(2020, 1, 1));
        assert!(!can_change_region_at(&p, None, at(2024, 11, 1)));
    }

    #[test]
    fn test_pending_first_request_blocks_resubmission() {
        let p = profile(None, None, at(2024, 3, 1));
        let r = request(RequestStatus::Pending, at(2024, 3, 2));
        assert!(!can_change_region_at(&p, Some(&r), at(2024, 3, 3)));
    }

    #[test]
    fn test_year_boundary_is_utc() {
        // 23:30 UTC on Dec 31 is already next year in Manila.
        let updated = Utc.with_ymd_and_hms(2023, 12, 31, 23, 30, 0).unwrap();
        let p = profile(Some("NCR"), Some(updated), at(2020, 1, 1));
        assert!(!can_change_region_at(&p, None, at(2023, 12, 31)));
        assert!(can_change_region_at(&p, None, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_created_at_used_when_region_never_changed() {
        let p = profile(Some("NCR"), None, at(2024, 1, 10));
        assert!(!can_change_region_at(&p, None, at(2024, 5, 1)));
        assert!(can_change_region_at(&p, None, at(2025, 1, 1)));
    }

    #[test]
    fn test_eligibility_from_bool() {
        assert_eq!(Eligibility::from(true), Eligibility::Eligible);
        assert_eq!(Eligibility::from(false), Eligibility::Ineligible);
        assert!(!Eligibility::Undetermined.is_eligible());
    }
}
