use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default per-request timeout for Gemini calls, in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, Deserialize)]
pub struct TriageConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    pub api_key: String,
    /// Model for diagnosis and hospital-lookup prompts (e.g., gemini-2.0-flash)
    pub text_model: String,
    /// Model for per-image issue extraction (e.g., gemini-2.0-flash)
    pub vision_model: String,
    /// Per-request timeout applied to the Gemini HTTP client
    pub request_timeout_secs: u64,
    pub enabled: bool,
}

/// Connection settings for the hospital directory backend.
///
/// The directory currently serves a fixed in-memory seed; these settings are
/// loaded and carried so deployments can configure the backing store ahead
/// of the cutover.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub database: String,
}

impl TriageConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(TriageConfig {
            common: common_config,
            gemini: GeminiSettings {
                api_key: get_env("GEMINI_API_KEY", Some(""), is_prod)?,
                text_model: get_env("GEMINI_TEXT_MODEL", Some("gemini-2.0-flash"), is_prod)?,
                vision_model: get_env("GEMINI_VISION_MODEL", Some("gemini-2.0-flash"), is_prod)?,
                request_timeout_secs: get_env(
                    "GEMINI_REQUEST_TIMEOUT_SECS",
                    Some(&DEFAULT_REQUEST_TIMEOUT_SECS.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
                enabled: env::var("GEMINI_ENABLED")
                    .unwrap_or_else(|_| "false".to_string())
                    .parse()
                    .unwrap_or(false),
            },
            database: DatabaseSettings {
                url: get_env("DATABASE_URL", Some("mysql://localhost:3306"), is_prod)?,
                database: get_env("DATABASE_NAME", Some("medassist"), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
