//! FolioMate content projection core.
//!
//! Pure domain logic shared by the CMS query layer and the page API:
//! content types, the slug rule, URL normalization, relationship
//! resolution, the preview/draft switch and view model assembly.
//! Nothing in this crate performs I/O.

pub mod content;
pub mod error;
pub mod preview;
pub mod price;
pub mod relation;
pub mod slug;
pub mod types;
pub mod url;
pub mod view;
