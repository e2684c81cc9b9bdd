use crate::error::ConfigError;

pub const API_KEY_VAR: &str = "YOUTUBE_API_KEY";
pub const API_ENDPOINT_VAR: &str = "YOUTUBE_API_ENDPOINT";
pub const MAX_RESULTS_VAR: &str = "YOUTUBE_API_MAX_RESULTS";
pub const MAX_PAGES_VAR: &str = "YOUTUBE_API_MAX_PAGES";

pub const DEFAULT_API_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/";
pub const DEFAULT_MAX_RESULTS: u32 = 50;
pub const DEFAULT_MAX_PAGES: u32 = 5;

/// The search endpoint refuses larger pages.
pub const MAX_RESULTS_LIMIT: u32 = 50;

#[derive(Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub api_key: String,
    pub api_endpoint: String,
    pub max_results: u32,
    pub max_pages: u32,
}

// Keeps the API key out of logs.
impl std::fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchConfig")
            .field("api_key", &"<redacted>")
            .field("api_endpoint", &self.api_endpoint)
            .field("max_results", &self.max_results)
            .field("max_pages", &self.max_pages)
            .finish()
    }
}

impl SearchConfig {
    pub fn new(api_key: impl Into<String>, api_endpoint: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_endpoint: normalize_endpoint(&api_endpoint.into()),
            max_results: DEFAULT_MAX_RESULTS,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Builds the config from any key/value source (process env, `window.ENV_CONFIG`, ...).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = read(API_KEY_VAR).ok_or(ConfigError::Missing(API_KEY_VAR))?;
        let api_endpoint = read(API_ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());

        let mut config = SearchConfig::new(api_key.trim(), api_endpoint.trim());
        if let Some(value) = read(MAX_RESULTS_VAR) {
            config.max_results = parse_number(MAX_RESULTS_VAR, &value)?;
        }
        if let Some(value) = read(MAX_PAGES_VAR) {
            config.max_pages = parse_number(MAX_PAGES_VAR, &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Loads `.env` (if any) and reads the process environment.
    #[cfg(feature = "youtube_data_api")]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.is_empty() {
            return Err(ConfigError::Missing(API_KEY_VAR));
        }
        if url::Url::parse(&self.api_endpoint).is_err() {
            return Err(ConfigError::Invalid {
                key: API_ENDPOINT_VAR,
                reason: format!("\"{}\" is not an absolute URL", self.api_endpoint),
            });
        }
        if self.max_results == 0 || self.max_results > MAX_RESULTS_LIMIT {
            return Err(ConfigError::Invalid {
                key: MAX_RESULTS_VAR,
                reason: format!("must be between 1 and {MAX_RESULTS_LIMIT}"),
            });
        }
        if self.max_pages == 0 {
            return Err(ConfigError::Invalid {
                key: MAX_PAGES_VAR,
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_number(key: &'static str, value: &str) -> Result<u32, ConfigError> {
    value.trim().parse().map_err(|e| ConfigError::Invalid {
        key,
        reason: format!("\"{value}\": {e}"),
    })
}

/// Endpoints are joined with relative paths, so they must end in a slash.
fn normalize_endpoint(endpoint: &str) -> String {
    if endpoint.ends_with('/') {
        endpoint.to_string()
    } else {
        format!("{endpoint}/")
    }
}
