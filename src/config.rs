//! Client configuration baked in at build time.
//!
//! The browser has no process environment, so every knob is read through
//! `option_env!` when the WASM bundle is compiled. Missing or malformed values
//! fall back to defaults that match a local development backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api/";
pub const DEFAULT_ADMIN_BASE_URL: &str = "http://127.0.0.1:8000/admin/";
pub const DEFAULT_TOAST_MS: u32 = 3000;
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
/// Older links point here; the router forwards it to [`REGISTER_PATH`].
pub const LEGACY_SIGNUP_PATH: &str = "/signup";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST root, always ending in a single `/`.
    pub api_base_url: String,
    /// Backend admin site root, always ending in a single `/`.
    pub admin_base_url: String,
    pub login_path: &'static str,
    pub register_path: &'static str,
    /// How long confirmation toasts stay visible.
    pub toast_ms: u32,
    pub log_level: log::Level,
}

impl ClientConfig {
    /// Build config from the build-time environment.
    ///
    /// Optional:
    /// - `SELLPOINT_API_URL`: default `http://127.0.0.1:8000/api/`
    /// - `SELLPOINT_ADMIN_URL`: default `http://127.0.0.1:8000/admin/`
    /// - `SELLPOINT_TOAST_MS`: default 3000
    /// - `SELLPOINT_LOG`: `error`, `warn`, `info` (default), `debug`, `trace`
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("SELLPOINT_API_URL"),
            option_env!("SELLPOINT_ADMIN_URL"),
            option_env!("SELLPOINT_TOAST_MS"),
            option_env!("SELLPOINT_LOG"),
        )
    }

    fn from_values(api: Option<&str>, admin: Option<&str>, toast_ms: Option<&str>, log_level: Option<&str>) -> Self {
        Self {
            api_base_url: normalize_base_url(api.unwrap_or(DEFAULT_API_BASE_URL)),
            admin_base_url: normalize_base_url(admin.unwrap_or(DEFAULT_ADMIN_BASE_URL)),
            login_path: LOGIN_PATH,
            register_path: REGISTER_PATH,
            toast_ms: parse_toast_ms(toast_ms),
            log_level: parse_log_level(log_level),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None, None, None)
    }
}

/// Process-wide config, built once on first access.
pub fn current() -> &'static ClientConfig {
    static CONFIG: OnceLock<ClientConfig> = OnceLock::new();
    CONFIG.get_or_init(ClientConfig::from_build_env)
}

fn normalize_base_url(raw: &str) -> String {
    format!("{}/", raw.trim().trim_end_matches('/'))
}

fn parse_toast_ms(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(DEFAULT_TOAST_MS)
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("error") => log::Level::Error,
        Some("warn") => log::Level::Warn,
        Some("debug") => log::Level::Debug,
        Some("trace") => log::Level::Trace,
        _ => log::Level::Info,
    }
}
