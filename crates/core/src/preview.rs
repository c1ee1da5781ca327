//! Preview/draft switch.
//!
//! A request reads either the live (published) version of a document or
//! its latest draft. The choice is made once per request from an explicit
//! flag and passed down by value, so concurrent requests never share it.

use std::time::Duration;

use serde::Serialize;

/// Which version of the content a request reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    #[default]
    Published,
    Draft,
}

impl ContentMode {
    /// Select the mode from a `?preview=` query value.
    ///
    /// Only the literal string `true` opts into drafts.
    pub fn from_preview_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("true") => ContentMode::Draft,
            _ => ContentMode::Published,
        }
    }

    pub fn is_draft(self) -> bool {
        self == ContentMode::Draft
    }

    /// How long a result read in this mode may be reused.
    ///
    /// Drafts always revalidate.
    pub fn cache_ttl(self, revalidate: Duration) -> Duration {
        match self {
            ContentMode::Published => revalidate,
            ContentMode::Draft => Duration::ZERO,
        }
    }

    /// `Cache-Control` value for a request to the data source.
    pub fn upstream_cache_control(self, revalidate: Duration) -> String {
        match self.cache_ttl(revalidate).as_secs() {
            0 => "no-cache".to_string(),
            secs => format!("max-age={secs}"),
        }
    }

    /// `Cache-Control` value for a rendered page.
    pub fn page_cache_control(self, revalidate: Duration) -> String {
        match self.cache_ttl(revalidate).as_secs() {
            0 => "no-store".to_string(),
            secs => format!("public, max-age={secs}"),
        }
    }
}
