use crate::serde_helpers;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Validated form input for one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub keyword: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Raw values as typed into the search form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub keyword: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl SearchForm {
    pub fn new(keyword: &str, start_date: &str, end_date: &str) -> Self {
        Self {
            keyword: Some(keyword.to_string()),
            start_date: Some(start_date.to_string()),
            end_date: Some(end_date.to_string()),
        }
    }
}

/// Opaque continuation token handed out by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageCursor(pub String);

impl PageCursor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub channel_id: String,
    pub channel_title: String,
    pub published_at: DateTime<Utc>,
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default, deserialize_with = "serde_helpers::optional_count")]
    pub like_count: Option<u64>,
    #[serde(default, deserialize_with = "serde_helpers::optional_count")]
    pub view_count: Option<u64>,
    #[serde(default, deserialize_with = "serde_helpers::optional_count")]
    pub comment_count: Option<u64>,
}

/// A search hit joined with its statistics. This is what gets rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedVideo {
    #[serde(flatten)]
    pub summary: VideoSummary,
    pub statistics: VideoStatistics,
}

impl EnrichedVideo {
    pub fn id(&self) -> &str {
        &self.summary.id
    }
}

/// Query for one page of the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub keyword: String,
    pub published_after: String,
    pub published_before: String,
    pub max_results: u32,
    pub page_token: Option<PageCursor>,
}

/// One page of search hits in API order.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub videos: Vec<VideoSummary>,
    pub next_page: Option<PageCursor>,
}

pub type StatisticsById = HashMap<String, VideoStatistics>;

// YouTube Data API v3 payloads.
// Documentation: https://developers.google.com/youtube/v3/docs/search/list

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchResultItem>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResultItem {
    pub id: SearchResultId,
    pub snippet: SearchResultSnippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultId {
    #[serde(default)]
    pub kind: String,
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultSnippet {
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
    #[serde(default)]
    pub channel_title: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

impl Thumbnails {
    pub fn best_url(&self) -> String {
        self.high
            .as_ref()
            .or(self.medium.as_ref())
            .or(self.default.as_ref())
            .map(|thumbnail| thumbnail.url.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoListItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoListItem {
    pub id: String,
    #[serde(default)]
    pub statistics: VideoStatistics,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
}

impl From<SearchListResponse> for SearchPage {
    fn from(response: SearchListResponse) -> Self {
        let videos = response
            .items
            .into_iter()
            .filter_map(|item| {
                let Some(id) = item.id.video_id else {
                    log::debug!("Skipping search item of kind \"{}\"", item.id.kind);
                    return None;
                };
                Some(VideoSummary {
                    id,
                    title: item.snippet.title,
                    description: item.snippet.description,
                    channel_id: item.snippet.channel_id,
                    channel_title: item.snippet.channel_title,
                    published_at: item.snippet.published_at,
                    thumbnail_url: item.snippet.thumbnails.best_url(),
                })
            })
            .collect();

        SearchPage {
            videos,
            next_page: response.next_page_token.map(PageCursor),
        }
    }
}

impl From<VideoListResponse> for StatisticsById {
    fn from(response: VideoListResponse) -> Self {
        response
            .items
            .into_iter()
            .map(|item| (item.id, item.statistics))
            .collect()
    }
}
