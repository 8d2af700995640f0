//! Application state management
//!
//! - [`Session`]: authentication phase, loaded profile and request, and
//!   submission outcome for one client session

pub mod session;

pub use session::{RequestState, Session, SessionPhase};
