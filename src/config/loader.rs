use std::env;

use crate::config::dto::{AiConfig, AppConfig};
use crate::core::error::AppError;

const DEFAULT_PORT: &str = "3000";
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_AI_TIMEOUT_SECS: &str = "30";

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();

    let port = env::var("PORT")
        .unwrap_or_else(|_| DEFAULT_PORT.to_string())
        .parse::<u16>()
        .map_err(|err| AppError::configuration(format!("invalid PORT: {err}")))?;

    let official_email = env::var("OFFICIAL_EMAIL")
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::configuration("OFFICIAL_EMAIL is required".to_string()))?;

    let api_key = env::var("GEMINI_API_KEY")
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());
    if api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; AI requests will fail");
    }

    let timeout_secs = env::var("AI_TIMEOUT_SECS")
        .unwrap_or_else(|_| DEFAULT_AI_TIMEOUT_SECS.to_string())
        .parse::<u64>()
        .map_err(|err| AppError::configuration(format!("invalid AI_TIMEOUT_SECS: {err}")))?;

    let ai = AiConfig {
        api_key,
        model: env_or_default("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
        base_url: env_or_default("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
        timeout_secs,
    };

    Ok(AppConfig {
        port,
        official_email,
        disable_proxy: parse_bool_env("HTTP_DISABLE_PROXY", false),
        ai,
    })
}

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_bool_env(key: &str, default: bool) -> bool {
    env::var(key)
        .map(|value| matches!(value.as_str(), "true" | "1" | "TRUE" | "True"))
        .unwrap_or(default)
}
