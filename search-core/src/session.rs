use crate::api::VideoApi;
use crate::error::{SearchError, ValidationError};
use crate::models::{EnrichedVideo, SearchForm};
use crate::orchestrator::SearchOrchestrator;
use crate::validation::validate_search_form;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }
}

/// Everything the search page renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub loading: bool,
    pub alert: Option<Alert>,
    pub results: Vec<EnrichedVideo>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    Rejected(ValidationError),
    Started,
    Completed(Vec<EnrichedVideo>),
    Failed(SearchError),
    DismissAlert,
}

impl SearchState {
    pub fn reduce(self, action: SearchAction) -> Self {
        match action {
            SearchAction::Rejected(error) => Self {
                alert: Some(Alert::error(error.to_string())),
                ..self
            },
            SearchAction::Started => Self {
                loading: true,
                alert: None,
                ..self
            },
            // A successful search replaces the previous list wholesale.
            SearchAction::Completed(results) => Self {
                loading: false,
                results,
                ..self
            },
            SearchAction::Failed(error) => Self {
                loading: false,
                alert: Some(Alert::error(error.to_string())),
                ..self
            },
            SearchAction::DismissAlert => Self {
                alert: None,
                ..self
            },
        }
    }
}

/// Drives one form submission, reporting progress through `dispatch`.
///
/// Invalid input is reported as a single `Rejected` action before any network
/// call. Otherwise `Started` is followed by exactly one `Completed` or
/// `Failed`.
pub async fn submit_search<A, D>(orchestrator: &SearchOrchestrator<A>, form: &SearchForm, dispatch: D)
where
    A: VideoApi,
    D: Fn(SearchAction),
{
    let criteria = match validate_search_form(form) {
        Ok(criteria) => criteria,
        Err(e) => {
            log::warn!("Rejected search form: {e}");
            dispatch(SearchAction::Rejected(e));
            return;
        }
    };

    dispatch(SearchAction::Started);

    match orchestrator.run(&criteria).await {
        Ok(results) => dispatch(SearchAction::Completed(results)),
        Err(e) => dispatch(SearchAction::Failed(e.into())),
    }
}
