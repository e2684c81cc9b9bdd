use crate::error::{FormField, ValidationError};
use crate::models::{SearchCriteria, SearchForm};
use chrono::NaiveDate;

/// Format produced by `<input type="date">`.
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

fn non_empty_trimmed(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

fn parse_date(field: FormField, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, DATE_INPUT_FORMAT).map_err(|_| ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Checks keyword, start date and end date in that order and stops at the first problem.
///
/// The keyword is passed on exactly as typed; only a zero-length keyword is missing.
pub fn validate_search_form(form: &SearchForm) -> Result<SearchCriteria, ValidationError> {
    let keyword = non_empty(form.keyword.as_ref()).ok_or(ValidationError::MissingKeyword)?;

    let start_date = non_empty_trimmed(form.start_date.as_ref()).ok_or(ValidationError::MissingStartDate)?;
    let start_date = parse_date(FormField::StartDate, start_date)?;

    let end_date = non_empty_trimmed(form.end_date.as_ref()).ok_or(ValidationError::MissingEndDate)?;
    let end_date = parse_date(FormField::EndDate, end_date)?;

    Ok(SearchCriteria {
        keyword: keyword.to_string(),
        start_date,
        end_date,
    })
}

/// Midnight UTC of `date` as RFC 3339 with milliseconds, e.g. `2024-01-05T00:00:00.000Z`.
pub fn to_api_timestamp(date: NaiveDate) -> String {
    date.and_time(chrono::NaiveTime::MIN)
        .and_utc()
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}
