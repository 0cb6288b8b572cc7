use std::sync::Arc;

use parivar::api::ApiClient;
use parivar::common::Config;
use parivar::services::{InterestLedger, SessionCache, ViewCache};

#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub api: Arc<ApiClient>,
    pub sessions: Arc<SessionCache>,
    pub views: Arc<ViewCache>,
    pub interests: Arc<InterestLedger>,
}

impl AppState {
    pub fn new(cfg: Config) -> Self {
        let api = Arc::new(ApiClient::new(&cfg.api_base, cfg.admin_token.clone()));
        Self {
            cfg,
            api,
            sessions: Arc::new(SessionCache::new()),
            views: Arc::new(ViewCache::new()),
            interests: Arc::new(InterestLedger::new()),
        }
    }
}
