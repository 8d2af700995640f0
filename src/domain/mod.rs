//! Pure domain rules, free of I/O.
//!
//! - [`eligibility`] - once-per-year region change window

pub mod eligibility;

pub use eligibility::{can_change_region, can_change_region_at, Eligibility};
