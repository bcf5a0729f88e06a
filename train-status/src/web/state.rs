//! Application state for the web layer.

use std::sync::Arc;

use crate::upstream::UpstreamClient;

/// Shared application state.
///
/// Holds nothing request-specific; every request builds its own data.
#[derive(Clone)]
pub struct AppState {
    /// Upstream train-tracking API client
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(upstream: UpstreamClient) -> Self {
        Self {
            upstream: Arc::new(upstream),
        }
    }
}
