use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub ws_base_url: Option<String>,
    pub time_zone: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static WS_BASE_URL: OnceLock<String> = OnceLock::new();
static TIME_ZONE: OnceLock<Tz> = OnceLock::new();

/// Swap the HTTP scheme for the matching WebSocket scheme, leaving the
/// authority and path untouched. Unknown schemes are passed through.
pub fn derive_ws_base(api_base_url: &str) -> String {
    if let Some(rest) = api_base_url.strip_prefix("https://") {
        format!("wss://{}", rest)
    } else if let Some(rest) = api_base_url.strip_prefix("http://") {
        format!("ws://{}", rest)
    } else {
        api_base_url.to_string()
    }
}

#[cfg(target_arch = "wasm32")]
fn read_global_str(obj: &js_sys::Object, key: &str) -> Option<String> {
    js_sys::Reflect::get(obj, &key.into())
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .and_then(|value| value.as_string())
}

// Deployments may inject either window.__TUTORLINK_ENV (env.js) or
// window.__TUTORLINK_CONFIG; env.js wins when both are present.
#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    let window = web_sys::window()?;
    for name in ["__TUTORLINK_ENV", "__TUTORLINK_CONFIG"] {
        let value = match js_sys::Reflect::get(&window, &(*name).into()) {
            Ok(value) if !value.is_undefined() && !value.is_null() => value,
            _ => continue,
        };
        let obj = js_sys::Object::from(value);
        let cfg = RuntimeConfig {
            api_base_url: read_global_str(&obj, "api_base_url")
                .or_else(|| read_global_str(&obj, "API_BASE_URL")),
            ws_base_url: read_global_str(&obj, "ws_base_url")
                .or_else(|| read_global_str(&obj, "WS_BASE_URL")),
            time_zone: read_global_str(&obj, "time_zone")
                .or_else(|| read_global_str(&obj, "TIME_ZONE")),
        };
        if cfg.api_base_url.is_some() || cfg.ws_base_url.is_some() || cfg.time_zone.is_some() {
            return Some(cfg);
        }
    }
    None
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(target_arch = "wasm32")]
fn cache_config(cfg: &RuntimeConfig) {
    if let Some(url) = &cfg.api_base_url {
        let _ = API_BASE_URL.set(url.clone());
    }
    if let Some(url) = &cfg.ws_base_url {
        let _ = WS_BASE_URL.set(url.clone());
    }
    if let Some(tz) = &cfg.time_zone {
        match tz.parse::<Tz>() {
            Ok(parsed) => {
                let _ = TIME_ZONE.set(parsed);
            }
            Err(_) => log::warn!("unrecognized time_zone {:?}; staying on UTC", tz),
        }
    }
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(cfg) = snapshot_from_globals() {
            cache_config(&cfg);
            if let Some(cached) = API_BASE_URL.get() {
                return cached.clone();
            }
        }
        if let Some(cfg) = fetch_runtime_config().await {
            cache_config(&cfg);
        }
    }
    API_BASE_URL
        .get_or_init(|| DEFAULT_API_BASE_URL.to_string())
        .clone()
}

pub async fn await_ws_base_url() -> String {
    if let Some(cached) = WS_BASE_URL.get() {
        return cached.clone();
    }
    let api_base = await_api_base_url().await;
    WS_BASE_URL.get_or_init(|| derive_ws_base(&api_base)).clone()
}

/// Synchronous view of the API base URL. Valid once `init` has completed,
/// which the entry point guarantees before mounting the app.
pub fn api_base_url() -> String {
    API_BASE_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

pub fn current_time_zone() -> Tz {
    *TIME_ZONE.get().unwrap_or(&Tz::UTC)
}

pub async fn init() {
    let _ = await_api_base_url().await;
    let _ = await_ws_base_url().await;
}
