use video_search_core::{ConfigError, SearchConfig};
use wasm_bindgen::JsValue;

/// Publish date in the browser's locale, e.g. "1/10/2024, 1:00:00 PM".
pub fn format_local_date(published_at: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(published_at));
    if date.get_time().is_nan() {
        return published_at.to_string();
    }
    date.to_locale_string("default", &JsValue::UNDEFINED).into()
}

pub fn describe_config(config: &Result<SearchConfig, ConfigError>) -> String {
    match config {
        Ok(config) => format!(
            "API: \"{}\", MAX_RESULTS: {}, MAX_PAGES: {}",
            config.api_endpoint, config.max_results, config.max_pages
        ),
        Err(e) => format!("invalid configuration: {e}"),
    }
}
