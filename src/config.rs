use std::env;

use crate::errors::AppError;

pub const DEFAULT_INTAKE_URL: &str = "https://sheetdb.io/api/v1/4qjluvzagia7u";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub intake_endpoint_url: String,
    pub behavior: BehaviorConfig,
}

/// Tuning knobs for the page behaviors. Defaults match the live site.
#[derive(Clone, Debug, PartialEq)]
pub struct BehaviorConfig {
    pub header_offset_px: f64,
    pub scroll_shadow_threshold_px: f64,
    pub counter_duration_ms: u64,
    pub counter_tick_ms: u64,
    pub counter_visibility_threshold: f64,
    pub success_dismiss_ms: u64,
    pub notice_dismiss_ms: u64,
    pub notice_fade_ms: u64,
    pub scroll_top_enabled: bool,
    pub scroll_top_threshold_px: f64,
    pub default_page: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            header_offset_px: 80.0,
            scroll_shadow_threshold_px: 100.0,
            counter_duration_ms: 2000,
            counter_tick_ms: 16,
            counter_visibility_threshold: 0.5,
            success_dismiss_ms: 10_000,
            notice_dismiss_ms: 3000,
            notice_fade_ms: 300,
            scroll_top_enabled: false,
            scroll_top_threshold_px: 300.0,
            default_page: "index.html".to_string(),
        }
    }
}

fn var_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = BehaviorConfig::default();
        Self {
            port: var_or("PORT", 3000),
            intake_endpoint_url: env::var("INTAKE_ENDPOINT_URL")
                .unwrap_or_else(|_| DEFAULT_INTAKE_URL.to_string()),
            behavior: BehaviorConfig {
                header_offset_px: var_or("HEADER_OFFSET_PX", defaults.header_offset_px),
                scroll_shadow_threshold_px: var_or(
                    "SCROLL_SHADOW_THRESHOLD_PX",
                    defaults.scroll_shadow_threshold_px,
                ),
                counter_duration_ms: var_or("COUNTER_DURATION_MS", defaults.counter_duration_ms),
                counter_tick_ms: var_or("COUNTER_TICK_MS", defaults.counter_tick_ms),
                counter_visibility_threshold: var_or(
                    "COUNTER_VISIBILITY_THRESHOLD",
                    defaults.counter_visibility_threshold,
                ),
                success_dismiss_ms: var_or("SUCCESS_DISMISS_MS", defaults.success_dismiss_ms),
                notice_dismiss_ms: var_or("NOTICE_DISMISS_MS", defaults.notice_dismiss_ms),
                notice_fade_ms: var_or("NOTICE_FADE_MS", defaults.notice_fade_ms),
                scroll_top_enabled: var_or("SCROLL_TOP_ENABLED", defaults.scroll_top_enabled),
                scroll_top_threshold_px: var_or(
                    "SCROLL_TOP_THRESHOLD_PX",
                    defaults.scroll_top_threshold_px,
                ),
                default_page: env::var("DEFAULT_PAGE").unwrap_or(defaults.default_page),
            },
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let url = self.intake_endpoint_url.trim();
        if url.is_empty() {
            return Err(AppError::Config("INTAKE_ENDPOINT_URL must not be empty".into()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "INTAKE_ENDPOINT_URL must be an http(s) URL, got {url}"
            )));
        }
        if self.behavior.counter_tick_ms == 0 {
            return Err(AppError::Config("COUNTER_TICK_MS must be positive".into()));
        }
        Ok(())
    }
}
