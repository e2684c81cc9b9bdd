//! The seam between the orchestrator and the YouTube Data API.
//!
//! Both HTTP clients (the browser one in the frontend and the native
//! `reqwest` one) build their URLs through [`search_url`] and [`videos_url`]
//! so the query contract lives in one place.

use crate::config::SearchConfig;
use crate::error::ApiError;
use crate::models::{SearchPage, SearchRequest, StatisticsById};
use url::Url;

pub use crate::models::{SearchListResponse, VideoListResponse};

/// External search and details operations.
///
/// The futures are not required to be `Send`, browser fetches never are.
#[allow(async_fn_in_trait)]
pub trait VideoApi {
    /// One page of `search.list` results.
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, ApiError>;

    /// `videos.list` statistics for the given ids.
    async fn statistics(&self, video_ids: &[String]) -> Result<StatisticsById, ApiError>;
}

fn endpoint(config: &SearchConfig, resource: &str) -> Result<Url, ApiError> {
    Url::parse(&config.api_endpoint)
        .and_then(|base| base.join(resource))
        .map_err(|e| ApiError::InvalidUrl(format!("{}{resource}: {e}", config.api_endpoint)))
}

/// `GET {endpoint}search?q=..&part=snippet&type=video&...`
pub fn search_url(config: &SearchConfig, request: &SearchRequest) -> Result<Url, ApiError> {
    let mut url = endpoint(config, "search")?;
    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("q", &request.keyword)
            .append_pair("part", "snippet")
            .append_pair("type", "video")
            .append_pair("key", &config.api_key)
            .append_pair("publishedAfter", &request.published_after)
            .append_pair("publishedBefore", &request.published_before)
            .append_pair("maxResults", &request.max_results.to_string());
        if let Some(token) = &request.page_token {
            query.append_pair("pageToken", token.as_str());
        }
    }
    Ok(url)
}

/// `GET {endpoint}videos?part=statistics&id=a,b,c&key=..`
pub fn videos_url(config: &SearchConfig, video_ids: &[String]) -> Result<Url, ApiError> {
    let mut url = endpoint(config, "videos")?;
    url.query_pairs_mut()
        .append_pair("part", "statistics")
        .append_pair("id", &video_ids.join(","))
        .append_pair("key", &config.api_key);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PageCursor;
    use std::collections::HashMap;

    fn config() -> SearchConfig {
        SearchConfig::new("k3y", "https://www.googleapis.com/youtube/v3")
    }

    fn request(page_token: Option<&str>) -> SearchRequest {
        SearchRequest {
            keyword: "rust & wasm".to_string(),
            published_after: "2024-01-01T00:00:00.000Z".to_string(),
            published_before: "2024-02-01T00:00:00.000Z".to_string(),
            max_results: 10,
            page_token: page_token.map(|t| PageCursor(t.to_string())),
        }
    }

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn test_search_url_parameters() {
        let url = search_url(&config(), &request(None)).unwrap();
        assert_eq!(url.path(), "/youtube/v3/search");

        let query = query_map(&url);
        assert_eq!(query["q"], "rust & wasm");
        assert_eq!(query["part"], "snippet");
        assert_eq!(query["type"], "video");
        assert_eq!(query["key"], "k3y");
        assert_eq!(query["publishedAfter"], "2024-01-01T00:00:00.000Z");
        assert_eq!(query["publishedBefore"], "2024-02-01T00:00:00.000Z");
        assert_eq!(query["maxResults"], "10");
        assert!(!query.contains_key("pageToken"));
    }

    #[test]
    fn test_search_url_with_cursor() {
        let url = search_url(&config(), &request(Some("CAoQAA"))).unwrap();
        assert_eq!(query_map(&url)["pageToken"], "CAoQAA");
    }

    #[test]
    fn test_videos_url_joins_ids() {
        let ids = vec!["a1".to_string(), "b2".to_string(), "c3".to_string()];
        let url = videos_url(&config(), &ids).unwrap();
        assert_eq!(url.path(), "/youtube/v3/videos");

        let query = query_map(&url);
        assert_eq!(query["part"], "statistics");
        assert_eq!(query["id"], "a1,b2,c3");
        assert_eq!(query["key"], "k3y");
    }
}
