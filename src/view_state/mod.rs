//! Derived view state.
//!
//! Nothing here owns state: every view is computed from a
//! [`crate::state::Session`] on demand.

pub mod login_prompt;
pub mod session_view;

pub use login_prompt::{LoginPrompt, LoginPromptConfig};
pub use session_view::{Dashboard, Notice, RegionSelection, SessionView};
