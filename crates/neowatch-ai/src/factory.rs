use std::sync::Arc;

use crate::config::TextProviderConfig;
use crate::error::ProviderError;
use crate::providers::GeminiTextProvider;
use crate::traits::TextProvider;

pub fn build_text_provider(
    cfg: TextProviderConfig,
) -> Result<Arc<dyn TextProvider>, ProviderError> {
    match cfg {
        TextProviderConfig::Gemini(c) => Ok(Arc::new(GeminiTextProvider::new(c)?)),
    }
}
