//! In-memory [`ContentSource`] for tests.
//!
//! Applies `equals`/`in` filters and `limit` to stored JSON documents and
//! records every query it receives. Depth is ignored: documents come back
//! exactly as they were stored.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::client::FindResponse;
use crate::error::CmsError;
use crate::query::{Collection, Filter, FilterOp, FindQuery};
use crate::source::ContentSource;

#[derive(Default)]
pub struct MemorySource {
    templates: Vec<Value>,
    categories: Vec<Value>,
    failing: bool,
    queries: Mutex<Vec<(Collection, FindQuery)>>,
}

impl MemorySource {
    pub fn new(templates: Vec<Value>, categories: Vec<Value>) -> Self {
        Self {
            templates,
            categories,
            ..Self::default()
        }
    }

    /// A source whose every query fails as if the CMS were down.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Queries received so far, oldest first.
    pub fn queries(&self) -> Vec<(Collection, FindQuery)> {
        self.queries
            .lock()
            .map(|q| q.to_vec())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn find(
        &self,
        collection: Collection,
        query: &FindQuery,
    ) -> Result<FindResponse<Value>, CmsError> {
        if let Ok(mut log) = self.queries.lock() {
            log.push((collection, query.clone()));
        }

        if self.failing {
            return Err(CmsError::Api {
                status: 503,
                body: "Service Unavailable".into(),
            });
        }

        let docs = match collection {
            Collection::Templates => &self.templates,
            Collection::Categories => &self.categories,
        };

        let mut matched: Vec<Value> = docs
            .iter()
            .filter(|doc| query.filters.iter().all(|f| matches_filter(doc, f)))
            .cloned()
            .collect();
        if let Some(limit) = query.limit {
            matched.truncate(limit as usize);
        }

        Ok(FindResponse {
            total_docs: Some(matched.len() as u64),
            has_next_page: Some(false),
            docs: matched,
        })
    }
}

fn matches_filter(doc: &Value, filter: &Filter) -> bool {
    let field = &doc[filter.field.as_str()];
    match filter.op {
        FilterOp::Equals => id_of(field).is_some_and(|v| v == filter.value),
        FilterOp::In => match field {
            Value::Array(items) => items
                .iter()
                .any(|item| id_of(item).is_some_and(|v| v == filter.value)),
            other => id_of(other).is_some_and(|v| v == filter.value),
        },
    }
}

/// Scalar value of a field, or the `id` of an expanded relationship.
fn id_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map.get("id").and_then(id_of),
        _ => None,
    }
}
