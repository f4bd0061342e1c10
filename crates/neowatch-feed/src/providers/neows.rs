use reqwest::Client;
use tracing::{debug, warn};

use crate::config::NeoWsConfig;
use crate::error::FeedError;
use crate::traits::FeedProvider;
use crate::types::{FeedRequest, FeedResponse};

#[derive(Clone)]
pub struct NeoWsFeedProvider {
    config: NeoWsConfig,
    client: Client,
}

impl NeoWsFeedProvider {
    pub fn new(config: NeoWsConfig) -> Result<Self, FeedError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn feed_url(&self) -> String {
        format!(
            "{}/neo/rest/v1/feed",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl FeedProvider for NeoWsFeedProvider {
    fn name(&self) -> &'static str {
        "neows"
    }

    async fn fetch(&self, request: FeedRequest) -> Result<FeedResponse, FeedError> {
        debug!(
            start_date = %request.start_date,
            end_date = %request.end_date,
            "fetching NeoWs feed"
        );

        let res = self
            .client
            .get(self.feed_url())
            .query(&[
                ("start_date", request.start_date.to_string()),
                ("end_date", request.end_date.to_string()),
                ("api_key", self.config.api_key.clone()),
            ])
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            warn!(status, "NeoWs feed request failed");
            return Err(FeedError::Api { status, body });
        }

        Ok(res.json().await?)
    }
}
