//! Application configuration loaded from environment variables.
//!
//! All values are optional and fall back to local defaults:
//! - `TAPEVIEW_WS_URL` — push-channel endpoint for live ticks and decisions
//! - `TAPEVIEW_HTTP_URL` — base URL for the snapshot/force-update API
//! - `TAPEVIEW_SYMBOL` — trading symbol shown in the dashboard

/// Default push-channel endpoint.
const DEFAULT_WS_URL: &str = "ws://127.0.0.1:8080/ws";

/// Default HTTP API base URL.
const DEFAULT_HTTP_URL: &str = "http://127.0.0.1:8080";

/// Default trading symbol.
const DEFAULT_SYMBOL: &str = "BTC/USDT";

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ws_url: String,
    pub http_url: String,
    pub symbol: String,
}

/// Loads the application configuration from environment variables.
///
/// Every value has a default pointing at a local feed server, so an
/// empty environment always yields a valid configuration. A trailing
/// slash on the HTTP base URL is stripped so endpoint paths can be
/// appended verbatim.
///
/// # Errors
///
/// Returns [`TapeviewError::Config`](crate::TapeviewError::Config) if an
/// override uses the wrong URL scheme.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let ws_url = non_empty_var("TAPEVIEW_WS_URL").unwrap_or_else(|| DEFAULT_WS_URL.to_string());
    if !ws_url.starts_with("ws://") && !ws_url.starts_with("wss://") {
        return Err(crate::TapeviewError::Config(format!(
            "TAPEVIEW_WS_URL must be a ws:// or wss:// URL, got {ws_url}"
        )));
    }

    let http_url = non_empty_var("TAPEVIEW_HTTP_URL")
        .unwrap_or_else(|| DEFAULT_HTTP_URL.to_string())
        .trim_end_matches('/')
        .to_string();
    if !http_url.starts_with("http://") && !http_url.starts_with("https://") {
        return Err(crate::TapeviewError::Config(format!(
            "TAPEVIEW_HTTP_URL must be an http:// or https:// URL, got {http_url}"
        )));
    }

    let symbol = non_empty_var("TAPEVIEW_SYMBOL").unwrap_or_else(|| DEFAULT_SYMBOL.to_string());

    Ok(AppConfig {
        ws_url,
        http_url,
        symbol,
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
