use crate::api::{search_url, videos_url, VideoApi};
use crate::config::SearchConfig;
use crate::error::ApiError;
use crate::models::{SearchListResponse, SearchPage, SearchRequest, StatisticsById, VideoListResponse};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

/// Native YouTube Data API client.
pub struct YouTubeClient {
    client: Client,
    config: SearchConfig,
}

impl YouTubeClient {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: SearchConfig) -> Self {
        Self { client, config }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!("GET {}{}", url.origin().ascii_serialization(), url.path());

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), &body));
        }

        Ok(response.json::<T>().await?)
    }
}

impl VideoApi for YouTubeClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, ApiError> {
        let url = search_url(&self.config, request)?;
        let response: SearchListResponse = self.get_json(url).await?;
        Ok(response.into())
    }

    async fn statistics(&self, video_ids: &[String]) -> Result<StatisticsById, ApiError> {
        let url = videos_url(&self.config, video_ids)?;
        let response: VideoListResponse = self.get_json(url).await?;
        Ok(response.into())
    }
}
