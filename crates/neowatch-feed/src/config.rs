use std::time::Duration;

use crate::error::FeedError;

#[derive(Debug, Clone)]
pub struct NeoWsConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl NeoWsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.nasa.gov".to_string(),
            timeout: Duration::from_secs(15),
        }
    }

    /// Reads `NASA_API_KEY` from the environment.
    pub fn from_env() -> Result<Self, FeedError> {
        let api_key = std::env::var("NASA_API_KEY")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| FeedError::Config("NASA_API_KEY is not set".to_string()))?;
        Ok(Self::new(api_key))
    }
}

#[derive(Debug, Clone)]
pub enum FeedProviderConfig {
    NeoWs(NeoWsConfig),
}
