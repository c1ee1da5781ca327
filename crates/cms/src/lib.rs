//! Content query layer for the FolioMate storefront.
//!
//! Talks to the CMS REST API through the [`source::ContentSource`] seam,
//! builds Payload-style filters with [`query::FindQuery`], and exposes the
//! fail-soft [`repository::ContentRepo`] the page API reads from.

pub mod client;
pub mod config;
pub mod error;
#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod query;
pub mod repository;
pub mod source;
