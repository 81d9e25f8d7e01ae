use std::sync::Arc;

use crate::llm_client::ChatModel;
use crate::profiles::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Profile persistence. `PgProfileStore` in production.
    pub store: Arc<dyn ProfileStore>,
    /// Chat-completions model used by every generation endpoint.
    pub llm: Arc<dyn ChatModel>,
    /// Plain HTTP client for downloading job postings.
    pub http: reqwest::Client,
}
