use crate::config::Config;
use crate::errors::AppError;
use crate::models::{ActivityFeed, Interval};
use reqwest::Client;
use tracing::{debug, error};

/// Client for the activity-tracking API. One GET per render, no retry or
/// caching; failures surface as 502 to our own routes.
#[derive(Clone)]
pub struct Upstream {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl Upstream {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// Fetches the activities document as-is, without reshaping it.
    pub async fn fetch_raw(&self) -> Result<serde_json::Value, AppError> {
        let url = format!("{}/activities", self.base_url);
        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|err| {
            error!("activity service unreachable: {err}");
            AppError::bad_gateway("failed to reach activity service")
        })?;

        let status = response.status();
        debug!("activity service responded {status} for {url}");
        if !status.is_success() {
            error!("activity service returned {status} for {url}");
            return Err(AppError::bad_gateway(format!(
                "activity service returned {status}"
            )));
        }

        response.json().await.map_err(|err| {
            error!("activity service returned invalid JSON: {err}");
            AppError::bad_gateway("activity service returned invalid JSON")
        })
    }

    /// Fetches and decodes the feed into interval records.
    pub async fn fetch_intervals(&self) -> Result<Vec<Interval>, AppError> {
        let document = self.fetch_raw().await?;
        let feed: ActivityFeed = serde_json::from_value(document).map_err(|err| {
            error!("unexpected activities payload: {err}");
            AppError::bad_gateway("activity service returned an unexpected payload")
        })?;
        Ok(feed.into_intervals())
    }
}
