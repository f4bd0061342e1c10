use async_trait::async_trait;

use crate::error::FeedError;
use crate::types::{FeedRequest, FeedResponse};

#[async_trait]
pub trait FeedProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// One blocking fetch per call: no retries, no caching. The caller
    /// re-triggers on failure.
    async fn fetch(&self, request: FeedRequest) -> Result<FeedResponse, FeedError>;
}
