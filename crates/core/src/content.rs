//! Content documents as returned by the CMS.
//!
//! Field names follow the CMS wire format (`liveDemo`, `_status`,
//! `createdAt`). Relationship fields are [`Relation`]s because their shape
//! depends on the query depth.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::relation::{nullable_vec, Relation};
use crate::slug::ensure_slug;
use crate::types::{DocId, Timestamp};

// ---------------------------------------------------------------------------
// Publish status
// ---------------------------------------------------------------------------

/// Versioning state of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    Draft,
    Published,
}

/// A document served under its own storefront URL.
pub trait Routable {
    /// The slug the document is served under.
    ///
    /// Fails when the stored slug is blank and none can be derived from the
    /// display text. Such documents are unreachable and the repository
    /// drops them.
    fn routable_slug(&self) -> Result<String, CoreError>;
}

// ---------------------------------------------------------------------------
// Media
// ---------------------------------------------------------------------------

/// An uploaded file. Shared by any number of templates and sections.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(deserialize_with = "doc_id")]
    pub id: DocId,
    /// Absolute, or relative to the CMS origin.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

// ---------------------------------------------------------------------------
// Template
// ---------------------------------------------------------------------------

/// One feature section of a template, owned by that template.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Section {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image: Relation<Media>,
}

/// A website template offered in the storefront.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(deserialize_with = "doc_id")]
    pub id: DocId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Price in USD. `None` and non-positive values mean free.
    #[serde(default)]
    pub price: Option<f64>,
    /// Demo link as typed by the editor; the scheme may be missing.
    #[serde(default)]
    pub live_demo: Option<String>,
    #[serde(default)]
    pub thumbnail: Relation<Media>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub sections: Vec<Section>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub categories: Vec<Relation<Category>>,
    #[serde(default, rename = "_status")]
    pub status: Option<PublishStatus>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

impl Routable for Template {
    fn routable_slug(&self) -> Result<String, CoreError> {
        ensure_slug(Some(&self.slug), &self.name)
    }
}

impl Template {
    /// The stored slug, or one derived from the name when it is blank.
    ///
    /// Empty only for documents [`Routable::routable_slug`] rejects, which
    /// never leave the repository.
    pub fn effective_slug(&self) -> String {
        self.routable_slug().unwrap_or_default()
    }

    /// A document without a `_status` is not considered published.
    pub fn is_published(&self) -> bool {
        self.status == Some(PublishStatus::Published)
    }

    /// Whether any expanded category carries the given slug.
    pub fn in_category(&self, category_slug: &str) -> bool {
        self.categories
            .iter()
            .filter_map(Relation::resolve)
            .any(|c| c.effective_slug() == category_slug)
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// A storefront category. Related to templates many-to-many.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(deserialize_with = "doc_id")]
    pub id: DocId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub templates: Vec<Relation<Template>>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

impl Category {
    /// The stored slug, or one derived from the title when it is blank.
    pub fn effective_slug(&self) -> String {
        self.routable_slug().unwrap_or_default()
    }
}

impl Routable for Category {
    fn routable_slug(&self) -> Result<String, CoreError> {
        ensure_slug(Some(&self.slug), &self.title)
    }
}

/// Accept both string ids (document stores) and numeric ids (SQL stores).
fn doc_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DocId, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
