//! Terminal output for the `pca` commands.
//!
//! [`boxes`] holds the line primitives; [`view`] turns session views and
//! region lists into lines.

mod boxes;
mod view;

pub use boxes::*;
pub use view::{render_login_state, render_regions, render_view};
