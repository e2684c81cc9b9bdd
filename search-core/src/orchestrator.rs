use crate::api::VideoApi;
use crate::config::SearchConfig;
use crate::error::ApiError;
use crate::models::{EnrichedVideo, PageCursor, SearchCriteria, SearchRequest, StatisticsById};
use crate::validation::to_api_timestamp;
use log::{debug, error, info};
use std::collections::HashSet;

/// Pages through the search endpoint and joins each page with its statistics.
pub struct SearchOrchestrator<A> {
    api: A,
    config: SearchConfig,
}

impl<A: VideoApi> SearchOrchestrator<A> {
    pub fn new(api: A, config: SearchConfig) -> Self {
        Self { api, config }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs one search to completion.
    ///
    /// Issues at most `max_pages` search calls, strictly one after another.
    /// Any failure aborts the whole search and nothing collected so far is
    /// returned.
    pub async fn run(&self, criteria: &SearchCriteria) -> Result<Vec<EnrichedVideo>, ApiError> {
        let published_after = to_api_timestamp(criteria.start_date);
        let published_before = to_api_timestamp(criteria.end_date);

        let mut page_number = 0;
        let mut cursor: Option<PageCursor> = None;
        let mut all_videos: Vec<EnrichedVideo> = Vec::new();
        let mut seen_ids: HashSet<String> = HashSet::new();

        loop {
            let request = SearchRequest {
                keyword: criteria.keyword.clone(),
                published_after: published_after.clone(),
                published_before: published_before.clone(),
                max_results: self.config.max_results,
                page_token: cursor.take(),
            };

            let page = self.api.search(&request).await.map_err(|e| {
                error!("Search page {} failed: {e}", page_number + 1);
                e
            })?;

            // `insert` also drops repeats inside the same page.
            let new_videos: Vec<_> = page
                .videos
                .into_iter()
                .filter(|video| seen_ids.insert(video.id.clone()))
                .collect();
            let video_ids: Vec<String> = new_videos.iter().map(|v| v.id.clone()).collect();

            let mut statistics = if video_ids.is_empty() {
                StatisticsById::new()
            } else {
                self.api.statistics(&video_ids).await.map_err(|e| {
                    error!("Statistics for page {} failed: {e}", page_number + 1);
                    e
                })?
            };

            debug!(
                "Page {}: {} new videos, {} with statistics",
                page_number + 1,
                new_videos.len(),
                statistics.len()
            );

            all_videos.extend(new_videos.into_iter().map(|summary| {
                let statistics = statistics.remove(&summary.id).unwrap_or_default();
                EnrichedVideo {
                    summary,
                    statistics,
                }
            }));

            cursor = page.next_page;
            page_number += 1;

            if page_number >= self.config.max_pages || cursor.is_none() {
                break;
            }
        }

        info!(
            "Search for \"{}\" returned {} videos from {} page(s)",
            criteria.keyword,
            all_videos.len(),
            page_number
        );
        Ok(all_videos)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::models::{SearchPage, VideoStatistics, VideoSummary};
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// In-memory API that replays scripted pages and records every call.
    #[derive(Default)]
    pub(crate) struct ScriptedApi {
        pages: RefCell<VecDeque<Result<SearchPage, ApiError>>>,
        statistics: RefCell<VecDeque<Result<StatisticsById, ApiError>>>,
        pub search_calls: RefCell<Vec<SearchRequest>>,
        pub statistics_calls: RefCell<Vec<Vec<String>>>,
    }

    impl ScriptedApi {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        /// Queues a page; its statistics are generated from the ids unless overridden.
        pub(crate) fn page(self, ids: &[&str], next: Option<&str>) -> Self {
            self.pages.borrow_mut().push_back(Ok(SearchPage {
                videos: ids.iter().map(|id| summary(id)).collect(),
                next_page: next.map(|token| PageCursor(token.to_string())),
            }));
            self
        }

        pub(crate) fn search_failure(self, error: ApiError) -> Self {
            self.pages.borrow_mut().push_back(Err(error));
            self
        }

        pub(crate) fn statistics_failure(self, error: ApiError) -> Self {
            self.statistics.borrow_mut().push_back(Err(error));
            self
        }

        pub(crate) fn statistics_response(self, stats: StatisticsById) -> Self {
            self.statistics.borrow_mut().push_back(Ok(stats));
            self
        }

        pub(crate) fn total_calls(&self) -> usize {
            self.search_calls.borrow().len() + self.statistics_calls.borrow().len()
        }
    }

    impl VideoApi for ScriptedApi {
        async fn search(&self, request: &SearchRequest) -> Result<SearchPage, ApiError> {
            self.search_calls.borrow_mut().push(request.clone());
            self.pages
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("no scripted page left".to_string())))
        }

        async fn statistics(&self, video_ids: &[String]) -> Result<StatisticsById, ApiError> {
            self.statistics_calls.borrow_mut().push(video_ids.to_vec());
            match self.statistics.borrow_mut().pop_front() {
                Some(scripted) => scripted,
                None => Ok(video_ids
                    .iter()
                    .map(|id| (id.clone(), stats_for(id)))
                    .collect()),
            }
        }
    }

    pub(crate) fn summary(id: &str) -> VideoSummary {
        VideoSummary {
            id: id.to_string(),
            title: format!("Video {id}"),
            description: String::new(),
            channel_id: "UC123".to_string(),
            channel_title: "Channel".to_string(),
            published_at: Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap(),
            thumbnail_url: format!("https://i.ytimg.com/vi/{id}/hqdefault.jpg"),
        }
    }

    pub(crate) fn stats_for(id: &str) -> VideoStatistics {
        let n = id.len() as u64;
        VideoStatistics {
            like_count: Some(n),
            view_count: Some(n * 1000),
            comment_count: Some(n + 1),
        }
    }

    pub(crate) fn criteria() -> SearchCriteria {
        SearchCriteria {
            keyword: "rust".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        }
    }

    pub(crate) fn config(max_pages: u32) -> SearchConfig {
        SearchConfig::new("test-key", "https://www.googleapis.com/youtube/v3/")
            .with_max_results(3)
            .with_max_pages(max_pages)
    }

    fn ids(videos: &[EnrichedVideo]) -> Vec<&str> {
        videos.iter().map(|v| v.id()).collect()
    }

    #[tokio::test]
    async fn test_two_pages_in_arrival_order() {
        let api = ScriptedApi::new()
            .page(&["a", "b", "c"], Some("C1"))
            .page(&["d", "e"], None);
        let orchestrator = SearchOrchestrator::new(api, config(5));

        let videos = orchestrator.run(&criteria()).await.unwrap();

        assert_eq!(ids(&videos), vec!["a", "b", "c", "d", "e"]);
        let api = orchestrator.api();
        assert_eq!(api.search_calls.borrow().len(), 2);
        assert_eq!(api.statistics_calls.borrow().len(), 2);
        assert_eq!(videos[3].statistics, stats_for("d"));
    }

    #[tokio::test]
    async fn test_requests_carry_dates_and_cursor() {
        let api = ScriptedApi::new()
            .page(&["a"], Some("C1"))
            .page(&["b"], None);
        let orchestrator = SearchOrchestrator::new(api, config(5));
        orchestrator.run(&criteria()).await.unwrap();

        let calls = orchestrator.api().search_calls.borrow();
        assert_eq!(calls[0].keyword, "rust");
        assert_eq!(calls[0].published_after, "2024-01-01T00:00:00.000Z");
        assert_eq!(calls[0].published_before, "2024-02-01T00:00:00.000Z");
        assert_eq!(calls[0].max_results, 3);
        assert_eq!(calls[0].page_token, None);
        assert_eq!(calls[1].page_token, Some(PageCursor("C1".to_string())));
    }

    #[tokio::test]
    async fn test_duplicates_across_pages_are_dropped() {
        let api = ScriptedApi::new()
            .page(&["a", "b", "c"], Some("C1"))
            .page(&["b", "d"], None);
        let orchestrator = SearchOrchestrator::new(api, config(5));

        let videos = orchestrator.run(&criteria()).await.unwrap();

        assert_eq!(ids(&videos), vec!["a", "b", "c", "d"]);
        let statistics_calls = orchestrator.api().statistics_calls.borrow();
        assert_eq!(statistics_calls[1], vec!["d".to_string()]);
    }

    #[tokio::test]
    async fn test_duplicates_within_a_page_are_dropped() {
        let api = ScriptedApi::new().page(&["a", "a", "b"], None);
        let orchestrator = SearchOrchestrator::new(api, config(5));

        let videos = orchestrator.run(&criteria()).await.unwrap();
        assert_eq!(ids(&videos), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_page_ceiling_wins_over_cursor() {
        let api = ScriptedApi::new()
            .page(&["a", "b", "c"], Some("C1"))
            .page(&["d"], None);
        let orchestrator = SearchOrchestrator::new(api, config(1));

        let videos = orchestrator.run(&criteria()).await.unwrap();

        assert_eq!(videos.len(), 3);
        assert_eq!(orchestrator.api().search_calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_statistics_default_to_empty() {
        let mut partial = StatisticsById::new();
        partial.insert("a".to_string(), stats_for("a"));
        let api = ScriptedApi::new()
            .page(&["a", "b"], None)
            .statistics_response(partial);
        let orchestrator = SearchOrchestrator::new(api, config(5));

        let videos = orchestrator.run(&criteria()).await.unwrap();

        assert_eq!(videos[0].statistics, stats_for("a"));
        assert_eq!(videos[1].statistics, VideoStatistics::default());
    }

    #[tokio::test]
    async fn test_page_without_new_ids_skips_statistics_call() {
        let api = ScriptedApi::new()
            .page(&["a", "b"], Some("C1"))
            .page(&["a", "b"], Some("C2"))
            .page(&[], None);
        let orchestrator = SearchOrchestrator::new(api, config(5));

        let videos = orchestrator.run(&criteria()).await.unwrap();

        assert_eq!(videos.len(), 2);
        let api = orchestrator.api();
        assert_eq!(api.search_calls.borrow().len(), 3);
        assert_eq!(api.statistics_calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_statistics_failure_aborts() {
        let api = ScriptedApi::new()
            .page(&["a", "b", "c"], Some("C1"))
            .page(&["d", "e"], Some("C2"))
            .page(&["f"], None)
            .statistics_response(StatisticsById::new())
            .statistics_failure(ApiError::Network("connection reset".to_string()));
        let orchestrator = SearchOrchestrator::new(api, config(5));

        let error = orchestrator.run(&criteria()).await.unwrap_err();

        assert_eq!(error, ApiError::Network("connection reset".to_string()));
        assert_eq!(orchestrator.api().search_calls.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_search_failure_aborts_before_statistics() {
        let api = ScriptedApi::new().search_failure(ApiError::Status {
            status: 403,
            message: "quotaExceeded".to_string(),
        });
        let orchestrator = SearchOrchestrator::new(api, config(5));

        let error = orchestrator.run(&criteria()).await.unwrap_err();

        assert_eq!(error.to_string(), "quotaExceeded");
        assert!(orchestrator.api().statistics_calls.borrow().is_empty());
    }
}
