//! Fail-soft content repository.
//!
//! Every operation returns the empty or not-found result when the data
//! source cannot be reached or answers with garbage. Callers cannot tell a
//! miss from an outage; the difference is only visible in the logs, where
//! failures are reported at `error` level and misses at `debug`.
//!
//! Documents with no usable slug (blank `slug` and a name or title without
//! letters or digits) are dropped with a `warn`, so every record handed to
//! the assembler has a non-empty, distinct URL.

use std::sync::Arc;

use foliomate_core::content::{Category, Routable, Template};
use foliomate_core::preview::ContentMode;
use serde::de::DeserializeOwned;

use crate::query::{Collection, FindQuery};
use crate::source::ContentSource;

/// Status filter value for live documents.
const PUBLISHED: &str = "published";

/// Typed read operations over a [`ContentSource`].
#[derive(Clone)]
pub struct ContentRepo {
    source: Arc<dyn ContentSource>,
    depth: u8,
}

impl ContentRepo {
    /// `depth` controls how far relationship fields are expanded.
    pub fn new(source: Arc<dyn ContentSource>, depth: u8) -> Self {
        Self { source, depth }
    }

    /// Look up one template by exact slug.
    ///
    /// In [`ContentMode::Published`] only documents with `_status =
    /// published` are requested, and anything else the source returns is
    /// discarded. In [`ContentMode::Draft`] the latest revision is read
    /// regardless of status.
    pub async fn find_template_by_slug(&self, slug: &str, mode: ContentMode) -> Option<Template> {
        let slug = slug.trim();
        if slug.is_empty() {
            return None;
        }

        let mut query = FindQuery::new().equals("slug", slug).depth(self.depth).mode(mode);
        if !mode.is_draft() {
            query = query.equals("_status", PUBLISHED);
        }

        let template = self
            .query::<Template>("find_template_by_slug", Collection::Templates, &query)
            .await
            .into_iter()
            .find(|t| mode.is_draft() || t.is_published());

        if template.is_none() {
            tracing::debug!(slug, draft = mode.is_draft(), "Template not found");
        }
        template
    }

    /// Published templates assigned to a category, in source order.
    ///
    /// Narrower than "every member template": drafts are excluded even
    /// though the category relation includes them, because category pages
    /// are public and have no preview mode.
    pub async fn find_templates_by_category(&self, category_id: &str) -> Vec<Template> {
        let query = FindQuery::new()
            .contains("categories", category_id)
            .equals("_status", PUBLISHED)
            .depth(self.depth);

        self.query::<Template>("find_templates_by_category", Collection::Templates, &query)
            .await
            .into_iter()
            .filter(Template::is_published)
            .collect()
    }

    /// Up to `limit` published templates with relationships expanded.
    pub async fn find_published_templates(&self, limit: u32) -> Vec<Template> {
        let query = FindQuery::new()
            .equals("_status", PUBLISHED)
            .depth(self.depth)
            .limit(limit);

        let mut templates: Vec<Template> = self
            .query::<Template>("find_published_templates", Collection::Templates, &query)
            .await
            .into_iter()
            .filter(Template::is_published)
            .collect();
        templates.truncate(limit as usize);
        templates
    }

    /// Look up one category by exact slug.
    pub async fn find_category_by_slug(&self, slug: &str) -> Option<Category> {
        let slug = slug.trim();
        if slug.is_empty() {
            return None;
        }

        let query = FindQuery::new().equals("slug", slug).depth(self.depth);
        let category = self
            .query::<Category>("find_category_by_slug", Collection::Categories, &query)
            .await
            .into_iter()
            .next();

        if category.is_none() {
            tracing::debug!(slug, "Category not found");
        }
        category
    }

    /// Up to `limit` categories for the storefront filter bar.
    pub async fn list_categories(&self, limit: u32) -> Vec<Category> {
        let query = FindQuery::new().depth(1).limit(limit);

        let mut categories: Vec<Category> = self
            .query("list_categories", Collection::Categories, &query)
            .await;
        categories.truncate(limit as usize);
        categories
    }

    // ---- private helpers ----

    /// Run a query and decode each document, degrading to an empty list on
    /// any source failure and skipping documents that fail to decode or have
    /// no routable slug.
    async fn query<T: DeserializeOwned + Routable>(
        &self,
        operation: &'static str,
        collection: Collection,
        query: &FindQuery,
    ) -> Vec<T> {
        let response = match self.source.find(collection, query).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    operation,
                    collection = collection.as_str(),
                    error = %e,
                    "Content query failed, returning empty result",
                );
                return Vec::new();
            }
        };

        response
            .docs
            .into_iter()
            .filter_map(|doc| {
                let decoded = match serde_json::from_value::<T>(doc) {
                    Ok(decoded) => decoded,
                    Err(e) => {
                        tracing::warn!(
                            operation,
                            collection = collection.as_str(),
                            error = %e,
                            "Skipping malformed document",
                        );
                        return None;
                    }
                };
                if let Err(e) = decoded.routable_slug() {
                    tracing::warn!(
                        operation,
                        collection = collection.as_str(),
                        error = %e,
                        "Skipping document without a usable slug",
                    );
                    return None;
                }
                Some(decoded)
            })
            .collect()
    }
}
