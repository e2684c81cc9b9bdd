use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use video_search_core::api::{search_url, videos_url, SearchListResponse, VideoListResponse};
use video_search_core::{
    ApiError, SearchConfig, SearchPage, SearchRequest, StatisticsById, VideoApi,
};

/// YouTube Data API client running on the browser's `fetch`.
pub struct BrowserVideoApi {
    config: SearchConfig,
}

impl BrowserVideoApi {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response: Response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, &text));
    }

    response.json::<T>().await.map_err(|e| match e {
        gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
        other => ApiError::Network(other.to_string()),
    })
}

impl VideoApi for BrowserVideoApi {
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, ApiError> {
        let url = search_url(&self.config, request)?;
        let response: SearchListResponse = get_json(url.as_str()).await?;
        Ok(response.into())
    }

    async fn statistics(&self, video_ids: &[String]) -> Result<StatisticsById, ApiError> {
        let url = videos_url(&self.config, video_ids)?;
        let response: VideoListResponse = get_json(url.as_str()).await?;
        Ok(response.into())
    }
}
