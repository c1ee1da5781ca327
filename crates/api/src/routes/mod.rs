pub mod health;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /pages/home                         home page (?category=)
/// /pages/templates/{slug}             template detail (?preview=true)
/// /pages/categories/{slug}            category listing
///
/// /meta/templates/{slug}              template head metadata
/// /meta/categories/{slug}             category head metadata
///
/// /preview-links/{slug}               draft preview URL for editors
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/pages", pages::router())
        .nest("/meta", pages::meta_router())
        .merge(pages::preview_router())
}
