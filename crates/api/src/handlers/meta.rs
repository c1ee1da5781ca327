//! Handlers for page head metadata and preview links.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use foliomate_core::error::CoreError;
use foliomate_core::preview::ContentMode;
use foliomate_core::slug::{preview_url, validate_slug};
use foliomate_core::view::{category_meta, template_meta};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Preview link handed to CMS editors.
#[derive(Debug, Serialize)]
pub struct PreviewLink {
    pub url: String,
}

/// GET /api/v1/meta/templates/{slug}
///
/// Always 200: a miss yields the "Template Not Found" title. Metadata is
/// read from the published version only.
pub async fn template_meta_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let template = state
        .repo
        .find_template_by_slug(&slug, ContentMode::Published)
        .await;

    Json(DataResponse {
        data: template_meta(template.as_ref()),
    })
}

/// GET /api/v1/meta/categories/{slug}
pub async fn category_meta_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let category = state.repo.find_category_by_slug(&slug).await;

    Json(DataResponse {
        data: category_meta(category.as_ref()),
    })
}

/// GET /api/v1/preview-links/{slug}
///
/// Storefront URL that opens the draft of a template.
pub async fn preview_link(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    validate_slug(&slug)?;

    let url = preview_url(&state.config.frontend_url, &slug).ok_or_else(|| {
        AppError::Core(CoreError::Validation("Slug must not be empty".into()))
    })?;

    Ok(Json(DataResponse {
        data: PreviewLink { url },
    }))
}
