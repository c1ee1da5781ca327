//! Query parameter types for page handlers.

use serde::Deserialize;

/// `?preview=` on detail pages. Only the literal `true` selects drafts.
#[derive(Debug, Default, Deserialize)]
pub struct PreviewParams {
    pub preview: Option<String>,
}

/// `?category=` on the home page.
#[derive(Debug, Default, Deserialize)]
pub struct HomeParams {
    pub category: Option<String>,
}
