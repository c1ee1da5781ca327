//! URL normalization for demo links and media files.
//!
//! Editors type demo links by hand (often without a scheme) and the CMS
//! may hand out media URLs relative to its own origin. Everything leaving
//! the engine is absolute where it can be.

/// Normalize a live-demo link.
///
/// Empty or whitespace-only input yields `None`. Links already starting
/// with `http://` or `https://` are returned unchanged; anything else is
/// prefixed with `https://`.
pub fn normalize_demo_url(raw: Option<&str>) -> Option<String> {
    let trimmed = raw.map(str::trim).filter(|s| !s.is_empty())?;

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{trimmed}"))
    }
}

/// Resolve a media URL against the configured media origin.
///
/// - absolute (`http`-prefixed) URLs are returned unchanged;
/// - root-relative paths are joined to `base` when one is configured;
/// - anything else is returned as-is.
pub fn resolve_media_url(raw: Option<&str>, base: Option<&str>) -> Option<String> {
    let trimmed = raw.map(str::trim).filter(|s| !s.is_empty())?;

    if trimmed.starts_with("http") {
        return Some(trimmed.to_string());
    }

    match base.map(str::trim).filter(|b| !b.is_empty()) {
        Some(base) if trimmed.starts_with('/') => {
            Some(format!("{}{trimmed}", base.trim_end_matches('/')))
        }
        _ => Some(trimmed.to_string()),
    }
}
