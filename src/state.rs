use crate::config::Config;
use crate::upstream::Upstream;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub upstream: Upstream,
}

impl AppState {
    pub fn new(config: Arc<Config>, upstream: Upstream) -> Self {
        Self { config, upstream }
    }
}
