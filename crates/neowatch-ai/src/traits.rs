use async_trait::async_trait;

use crate::error::ProviderError;
use crate::types::{GenerateRequest, GenerateResponse};

#[async_trait]
pub trait TextProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate(&self, request: GenerateRequest)
        -> Result<GenerateResponse, ProviderError>;
}
