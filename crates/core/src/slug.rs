//! URL slug derivation and validation for templates and categories.
//!
//! Both collections derive a missing slug from their display text
//! (template name, category title) with the same rule, so the rule lives
//! here once.

use crate::error::CoreError;

/// Derive a URL-safe slug from a title or name.
///
/// Lowercases the input, replaces every maximal run of characters outside
/// `[a-z0-9]` with a single hyphen, and strips one leading and one trailing
/// hyphen. A title without any ASCII alphanumerics yields an empty string;
/// use [`ensure_slug`] where an empty slug must be rejected.
pub fn derive_slug(text: &str) -> String {
    let lowered = text.to_lowercase();

    let mut result = String::with_capacity(lowered.len());
    let mut prev_hyphen = false;
    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            result.push(c);
            prev_hyphen = false;
        } else if !prev_hyphen {
            result.push('-');
            prev_hyphen = true;
        }
    }

    // Runs are already collapsed, so at most one hyphen sits at each end.
    let trimmed = result.strip_prefix('-').unwrap_or(&result);
    let trimmed = trimmed.strip_suffix('-').unwrap_or(trimmed);
    trimmed.to_string()
}

/// Validate a slug (non-empty, only lowercase alphanumeric + hyphens).
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(
            "Slug must contain only lowercase alphanumeric characters and hyphens".into(),
        ));
    }
    Ok(())
}

/// Resolve the slug a record should be stored under.
///
/// An explicit, non-blank slug wins. Otherwise the slug is derived from
/// `source`. An empty result is rejected, since it would collide with every
/// other record whose title has no alphanumerics.
pub fn ensure_slug(explicit: Option<&str>, source: &str) -> Result<String, CoreError> {
    if let Some(slug) = explicit.map(str::trim).filter(|s| !s.is_empty()) {
        return Ok(slug.to_string());
    }

    let derived = derive_slug(source);
    if derived.is_empty() {
        return Err(CoreError::Validation(format!(
            "Cannot derive a slug from '{source}': it contains no letters or digits"
        )));
    }
    Ok(derived)
}

/// Build the storefront preview link for a template slug.
///
/// Returns `None` for an empty slug, mirroring the CMS admin which offers
/// no preview for unsaved documents.
pub fn preview_url(frontend_base: &str, slug: &str) -> Option<String> {
    if slug.is_empty() {
        return None;
    }
    Some(format!(
        "{}/template/{slug}?preview=true",
        frontend_base.trim_end_matches('/')
    ))
}
