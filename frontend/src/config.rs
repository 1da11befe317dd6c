use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Local-storage key holding the bearer token. Shared with earlier clients
/// so existing sign-ins survive an upgrade.
pub const ACCESS_TOKEN_KEY: &str = "uoxToken";

/// Delay applied to search-as-you-type inputs.
pub const SEARCH_DEBOUNCE_MS: u64 = 1000;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4444/laf/api/v1";

const API_PATH_SUFFIX: &str = "/api/v1";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn get_from_env_js(window: &web_sys::Window) -> Option<String> {
    // Optional global: window.__LAF_ENV = { API_BASE_URL: "..." }
    let any = js_sys::Reflect::get(window, &"__LAF_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"API_BASE_URL".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"api_base_url".into()).ok());
    val.and_then(|v| v.as_string())
}

fn get_from_window_config(window: &web_sys::Window) -> Option<String> {
    // Optional global: window.__LAF_CONFIG = { api_base_url: "..." }
    let any = js_sys::Reflect::get(window, &"__LAF_CONFIG".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"api_base_url".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"API_BASE_URL".into()).ok());
    val.and_then(|v| v.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    let window = web_sys::window()?;
    get_from_env_js(&window).or_else(|| get_from_window_config(&window))
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let href = web_sys::window()?.location().href().ok()?;
    let url = reqwest::Url::parse(&href).ok()?.join("config.json").ok()?;
    let resp = reqwest::get(url).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(url) = fetch_runtime_config().await.and_then(|cfg| cfg.api_base_url) {
        return cache_base_url(&url);
    }
    log::debug!("no runtime config found, using {}", DEFAULT_API_BASE_URL);
    cache_base_url(DEFAULT_API_BASE_URL)
}

/// Base URL resolved so far, without waiting for `./config.json`.
pub fn current_api_base_url() -> String {
    API_BASE_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Resolves a server-relative asset path (item images) against the API origin.
pub fn asset_url(api_base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = normalize_base_url(api_base_url);
    let origin = base.strip_suffix(API_PATH_SUFFIX).unwrap_or(&base);
    if path.starts_with('/') {
        format!("{}{}", origin, path)
    } else {
        format!("{}/{}", origin, path)
    }
}
