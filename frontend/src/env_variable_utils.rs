use lazy_static::lazy_static;
use video_search_core::{ConfigError, SearchConfig};
use web_sys::window;

lazy_static! {
    pub static ref SEARCH_CONFIG: Result<SearchConfig, ConfigError> =
        SearchConfig::from_lookup(get_env_var);
}

pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    // Check if env_config is undefined
    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    // Get the specific environment variable
    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if !value.is_undefined() {
        value.as_string()
    } else {
        log::debug!("Environment variable '{}' is undefined", key);
        None
    }
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME")
        .unwrap_or_else(|| "Search YouTube Videos Based on Date Range and Keywords".to_string())
}

pub fn is_debug_mode() -> bool {
    get_env_var("DEBUG_MODE")
        .unwrap_or_else(|| "false".to_string())
        .parse()
        .unwrap_or(false)
}
