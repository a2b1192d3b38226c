use std::{env, fmt};

/// Activity filtered into the grid when TARGET_ACTIVITY_ID is not set.
pub const DEFAULT_TARGET_ACTIVITY_ID: &str = "15444261-b618-417a-9cf2-77f4744a92d4";

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub api_key: Option<String>,
    pub target_activity_id: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("BASE_URL")
            .map_err(|_| ConfigError::new("BASE_URL must point at the activity service"))?;
        let api_key = env::var("API_KEY").ok().filter(|key| !key.is_empty());
        let target_activity_id = env::var("TARGET_ACTIVITY_ID")
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_TARGET_ACTIVITY_ID.to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            base_url,
            api_key,
            target_activity_id,
            port,
        })
    }
}

#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ConfigError {}
