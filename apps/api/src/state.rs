use std::sync::Arc;

use crate::document::PageConfig;
use crate::storage::BlobStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Where generated documents are written and served from.
    /// Default: FsBlobStore rooted at OUTPUT_DIR.
    pub store: Arc<dyn BlobStore>,
    /// Page geometry and style presets. Static; never derived from input.
    pub page_config: PageConfig,
}
