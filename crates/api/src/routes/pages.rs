//! Route definitions for storefront pages and their metadata.

use axum::routing::get;
use axum::Router;

use crate::handlers::{meta, pages};
use crate::state::AppState;

/// Page routes mounted at `/pages`.
///
/// ```text
/// GET /home                   -> home_page
/// GET /templates/{slug}       -> template_page
/// GET /categories/{slug}      -> category_page
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/home", get(pages::home_page))
        .route("/templates/{slug}", get(pages::template_page))
        .route("/categories/{slug}", get(pages::category_page))
}

/// Metadata routes mounted at `/meta`.
///
/// ```text
/// GET /templates/{slug}       -> template_meta_handler
/// GET /categories/{slug}      -> category_meta_handler
/// ```
pub fn meta_router() -> Router<AppState> {
    Router::new()
        .route("/templates/{slug}", get(meta::template_meta_handler))
        .route("/categories/{slug}", get(meta::category_meta_handler))
}

/// Preview link route, merged at the API root.
pub fn preview_router() -> Router<AppState> {
    Router::new().route("/preview-links/{slug}", get(meta::preview_link))
}
