//! View models
//!
//! Pure derivations from state to render content. Views stay markup-only;
//! everything a test needs to assert (which sub-state renders, which exact
//! message) lives here.

pub mod repository_panel;
pub mod search_content;

pub use repository_panel::{derive_repo_panel, description_line, RepoPanelContent};
pub use search_content::{derive_search_content, SearchContent};
