use thiserror::Error;

/// Which form field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Keyword,
    StartDate,
    EndDate,
}

impl FormField {
    pub fn display_name(&self) -> &'static str {
        match self {
            FormField::Keyword => "keyword",
            FormField::StartDate => "start date",
            FormField::EndDate => "end date",
        }
    }
}

/// Rejected user input. Recoverable: the user corrects the form and retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a keyword")]
    MissingKeyword,

    #[error("Please select a start date")]
    MissingStartDate,

    #[error("Please select an end date")]
    MissingEndDate,

    #[error("Invalid {} \"{}\", expected YYYY-MM-DD", .field.display_name(), .value)]
    InvalidDate { field: FormField, value: String },
}

impl ValidationError {
    pub fn field(&self) -> FormField {
        match self {
            ValidationError::MissingKeyword => FormField::Keyword,
            ValidationError::MissingStartDate => FormField::StartDate,
            ValidationError::MissingEndDate => FormField::EndDate,
            ValidationError::InvalidDate { field, .. } => *field,
        }
    }
}

/// Failure of either external call. Never retried; the message is shown as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Builds a status error, preferring the message from a YouTube error body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<crate::models::ApiErrorResponse>(body)
            .ok()
            .map(|response| response.error.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| format!("Request failed with status code {status}"));
        ApiError::Status { status, message }
    }
}

#[cfg(feature = "youtube_data_api")]
impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing configuration value: {0}")]
    Missing(&'static str),

    #[error("Invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}
