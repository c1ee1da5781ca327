//! Query construction for the CMS REST `find` endpoints.
//!
//! Encodes filters the way Payload expects them in the query string:
//! `where[slug][equals]=…`, `where[categories][in]=…`, plus `depth`,
//! `limit` and `draft`.

use foliomate_core::preview::ContentMode;

/// A CMS collection the engine reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Templates,
    Categories,
}

impl Collection {
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Templates => "templates",
            Collection::Categories => "categories",
        }
    }
}

/// Comparison operator of a `where` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Equals,
    /// Set membership: the field (or one of its elements) equals the value.
    In,
}

impl FilterOp {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterOp::Equals => "equals",
            FilterOp::In => "in",
        }
    }
}

/// One `where[field][op]=value` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub field: String,
    pub op: FilterOp,
    pub value: String,
}

/// Parameters of a `find` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindQuery {
    pub filters: Vec<Filter>,
    pub depth: Option<u8>,
    pub limit: Option<u32>,
    pub mode: ContentMode,
}

impl FindQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn equals(mut self, field: &str, value: impl Into<String>) -> Self {
        self.filters.push(Filter {
            field: field.to_string(),
            op: FilterOp::Equals,
            value: value.into(),
        });
        self
    }

    pub fn contains(mut self, field: &str, value: impl Into<String>) -> Self {
        self.filters.push(Filter {
            field: field.to_string(),
            op: FilterOp::In,
            value: value.into(),
        });
        self
    }

    pub fn depth(mut self, depth: u8) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn mode(mut self, mode: ContentMode) -> Self {
        self.mode = mode;
        self
    }

    /// Query-string pairs in a stable order.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .filters
            .iter()
            .map(|f| {
                (
                    format!("where[{}][{}]", f.field, f.op.as_str()),
                    f.value.clone(),
                )
            })
            .collect();

        if let Some(depth) = self.depth {
            pairs.push(("depth".into(), depth.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".into(), limit.to_string()));
        }
        if self.mode.is_draft() {
            pairs.push(("draft".into(), "true".into()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_filters_depth_and_limit() {
        let pairs = FindQuery::new()
            .equals("slug", "modern-portfolio")
            .equals("_status", "published")
            .depth(2)
            .limit(100)
            .to_pairs();

        assert_eq!(
            pairs,
            vec![
                ("where[slug][equals]".to_string(), "modern-portfolio".to_string()),
                ("where[_status][equals]".to_string(), "published".to_string()),
                ("depth".to_string(), "2".to_string()),
                ("limit".to_string(), "100".to_string()),
            ]
        );
    }

    #[test]
    fn draft_mode_adds_draft_flag() {
        let pairs = FindQuery::new()
            .contains("categories", "c1")
            .mode(ContentMode::Draft)
            .to_pairs();

        assert_eq!(pairs[0].0, "where[categories][in]");
        assert!(pairs.contains(&("draft".to_string(), "true".to_string())));
    }

    #[test]
    fn published_mode_has_no_draft_flag() {
        let pairs = FindQuery::new().to_pairs();
        assert!(pairs.is_empty());
    }
}
