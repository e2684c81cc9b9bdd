//! Keyword and date-range search over the YouTube Data API.
//!
//! A search walks `search.list` page by page (bounded by the configured page
//! ceiling), drops ids already seen, fetches `videos.list` statistics for each
//! page and joins the two by video id.
//!
//! ```no_run
//! use video_search_core::{SearchConfig, SearchForm, SearchOrchestrator, YouTubeClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SearchConfig::from_env()?;
//!     let orchestrator = SearchOrchestrator::new(YouTubeClient::new(config.clone()), config);
//!
//!     let criteria = video_search_core::validate_search_form(
//!         &SearchForm::new("rust", "2024-01-01", "2024-02-01"),
//!     )?;
//!     for video in orchestrator.run(&criteria).await? {
//!         println!("{}: {:?} views", video.summary.title, video.statistics.view_count);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
mod error;
pub mod format;
mod models;
mod orchestrator;
mod serde_helpers;
mod session;
mod validation;
#[cfg(feature = "youtube_data_api")]
mod youtube_client;

pub use api::VideoApi;
pub use config::SearchConfig;
pub use error::{ApiError, ConfigError, FormField, SearchError, ValidationError};
pub use models::{
    EnrichedVideo, PageCursor, SearchCriteria, SearchForm, SearchPage, SearchRequest,
    StatisticsById, VideoStatistics, VideoSummary,
};
pub use orchestrator::SearchOrchestrator;
pub use session::{submit_search, Alert, AlertKind, SearchAction, SearchState};
pub use validation::{to_api_timestamp, validate_search_form};
#[cfg(feature = "youtube_data_api")]
pub use youtube_client::YouTubeClient;
