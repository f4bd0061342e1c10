use std::sync::Arc;

use crate::config::FeedProviderConfig;
use crate::error::FeedError;
use crate::providers::NeoWsFeedProvider;
use crate::traits::FeedProvider;

pub fn build_feed_provider(
    cfg: FeedProviderConfig,
) -> Result<Arc<dyn FeedProvider>, FeedError> {
    match cfg {
        FeedProviderConfig::NeoWs(c) => Ok(Arc::new(NeoWsFeedProvider::new(c)?)),
    }
}
