use async_trait::async_trait;

use crate::client::{CmsClient, FindResponse};
use crate::error::CmsError;
use crate::query::{Collection, FindQuery};

/// Read-only query interface of the content data source.
///
/// Documents are returned as raw JSON; typed decoding happens in the
/// repository so one malformed document does not sink its siblings.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn find(
        &self,
        collection: Collection,
        query: &FindQuery,
    ) -> Result<FindResponse<serde_json::Value>, CmsError>;
}

#[async_trait]
impl ContentSource for CmsClient {
    async fn find(
        &self,
        collection: Collection,
        query: &FindQuery,
    ) -> Result<FindResponse<serde_json::Value>, CmsError> {
        self.fetch(collection, query).await
    }
}
