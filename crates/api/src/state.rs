use std::sync::Arc;

use foliomate_cms::repository::ContentRepo;
use foliomate_cms::source::ContentSource;
use foliomate_core::view::Assembler;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Nothing in it is mutated after startup, so concurrent requests never
/// coordinate.
#[derive(Clone)]
pub struct AppState {
    /// Fail-soft content repository.
    pub repo: Arc<ContentRepo>,
    /// View model assembler with the configured display policy.
    pub assembler: Arc<Assembler>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wire the repository and assembler for a content source.
    pub fn new(config: ServerConfig, source: Arc<dyn ContentSource>) -> Self {
        let repo = ContentRepo::new(source, config.cms.depth);
        let assembler = Assembler::new(config.display_policy());

        Self {
            repo: Arc::new(repo),
            assembler: Arc::new(assembler),
            config: Arc::new(config),
        }
    }
}
