use std::sync::Arc;

use crate::client::MatcherClient;
use crate::config::Config;
use crate::store::RecruitStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Document store handle. Constructed once in `main`, closed on shutdown.
    pub store: Arc<dyn RecruitStore>,
    /// Client for the external matcher at `MATCHER_URL`.
    pub matcher: MatcherClient,
    pub config: Config,
}
