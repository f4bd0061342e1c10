use std::time::Duration;

use crate::error::ProviderError;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Reads `GEMINI_API_KEY` from the environment.
    pub fn from_env() -> Result<Self, ProviderError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ProviderError::Config("GEMINI_API_KEY is not set".to_string()))?;
        Ok(Self::new(api_key))
    }
}

#[derive(Debug, Clone)]
pub enum TextProviderConfig {
    Gemini(GeminiConfig),
}
