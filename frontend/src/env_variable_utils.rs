use lazy_static::lazy_static;
use wasm_bindgen::JsValue;
use web_sys::window;

const DEFAULT_APP_NAME: &str = "NGTube Web Demo";

lazy_static! {
    /// Prefix for every endpoint path. Empty means same origin.
    pub static ref BACKEND_URL: String = get_backend_url();
}

/// Reads `key` from the `window.ENV_CONFIG` object defined in `index.html`.
pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - using built-in defaults");
        return None;
    }

    config_string(&env_config, key)
}

fn config_string(env_config: &JsValue, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(env_config, &key.into()).ok()?;
    if value.is_undefined() {
        log::warn!("Environment variable '{}' is undefined", key);
        return None;
    }
    value.as_string()
}

pub fn get_backend_url() -> String {
    get_env_var("BACKEND_URL").unwrap_or_default()
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME")
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_APP_NAME.to_string())
}

pub fn is_debug_mode() -> bool {
    get_env_var("DEBUG_MODE")
        .map(|value| parse_flag(&value))
        .unwrap_or(false)
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}
