//! Handlers for storefront pages.
//!
//! Each handler reads through the fail-soft repository, hands the results
//! to the assembler and returns the view model. A missing primary entity
//! (template or category requested by slug) is a 404; missing secondary
//! data is just an empty list in the view model.

use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use foliomate_core::error::CoreError;
use foliomate_core::preview::ContentMode;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::{HomeParams, PreviewParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/pages/home
///
/// Published templates and the category filter. Both queries run
/// concurrently; either one failing leaves its half of the page empty.
pub async fn home_page(
    State(state): State<AppState>,
    Query(params): Query<HomeParams>,
) -> AppResult<impl IntoResponse> {
    let (templates, categories) = tokio::join!(
        state
            .repo
            .find_published_templates(state.config.home_template_limit),
        state.repo.list_categories(state.config.home_category_limit),
    );

    let page = state
        .assembler
        .home_page(&templates, &categories, params.category.as_deref());

    tracing::debug!(
        templates = page.templates.len(),
        categories = categories.len(),
        "Home page assembled",
    );

    Ok(page_response(&state, ContentMode::Published, page))
}

/// GET /api/v1/pages/templates/{slug}
///
/// Template detail. `?preview=true` reads the latest draft and disables
/// caching of the response.
pub async fn template_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<PreviewParams>,
) -> AppResult<impl IntoResponse> {
    let mode = ContentMode::from_preview_flag(params.preview.as_deref());

    let template = state
        .repo
        .find_template_by_slug(&slug, mode)
        .await
        .ok_or_else(|| AppError::Core(CoreError::not_found("Template", slug.as_str())))?;

    let detail = state.assembler.detail(&template, mode);

    tracing::debug!(slug = %detail.slug, preview = detail.preview, "Template page assembled");

    Ok(page_response(&state, mode, detail))
}

/// GET /api/v1/pages/categories/{slug}
///
/// Category listing. A category with no templates renders its empty state.
pub async fn category_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let category = state
        .repo
        .find_category_by_slug(&slug)
        .await
        .ok_or_else(|| AppError::Core(CoreError::not_found("Category", slug.as_str())))?;

    let templates = state.repo.find_templates_by_category(&category.id).await;
    let page = state.assembler.category_page(&category, &templates);

    tracing::debug!(slug = %page.slug, templates = page.templates.len(), "Category page assembled");

    Ok(page_response(&state, ContentMode::Published, page))
}

/// Wrap a view model in the data envelope with the mode's cache header.
fn page_response<T: Serialize>(state: &AppState, mode: ContentMode, data: T) -> impl IntoResponse {
    let cache_control = mode.page_cache_control(state.config.cms.revalidate);
    (
        [(header::CACHE_CONTROL, cache_control)],
        Json(DataResponse { data }),
    )
}
