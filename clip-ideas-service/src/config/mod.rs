use secrecy::Secret;
use serde::Deserialize;
use service_core::config::{self as core_config, get_env, Environment};
use service_core::error::AppError;
use std::time::Duration;

/// Gemini model used when `GENAI_TEXT_MODEL` is not set.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-1.5-flash";

/// Gemini REST base URL used when `GEMINI_API_BASE` is not set.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Upper bound on a single invocation, in seconds.
pub const DEFAULT_MAX_DURATION_SECS: u64 = 60;

#[derive(Debug, Clone, Deserialize)]
pub struct ClipIdeasConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub google: GoogleConfig,
    pub models: ModelConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    pub api_key: Secret<String>,
    pub api_base: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Model for JSON text generation (e.g., gemini-1.5-flash)
    pub text_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Maximum execution time for one request, upstream call included.
    pub max_duration_secs: u64,
}

impl LimitsConfig {
    pub fn max_duration(&self) -> Duration {
        Duration::from_secs(self.max_duration_secs)
    }
}

impl ClipIdeasConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let environment = Environment::current();

        Ok(ClipIdeasConfig {
            common: common_config,
            google: GoogleConfig {
                api_key: Secret::new(get_env("GEMINI_API_KEY", None, environment)?),
                api_base: get_env("GEMINI_API_BASE", Some(DEFAULT_GEMINI_API_BASE), environment)?,
            },
            models: ModelConfig {
                text_model: get_env("GENAI_TEXT_MODEL", Some(DEFAULT_TEXT_MODEL), environment)?,
            },
            limits: LimitsConfig {
                max_duration_secs: parse_max_duration(&get_env(
                    "MAX_DURATION_SECS",
                    Some(&DEFAULT_MAX_DURATION_SECS.to_string()),
                    environment,
                )?)?,
            },
        })
    }

    /// Configuration with defaults and the given key, for tests and embedding.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        ClipIdeasConfig {
            common: core_config::Config {
                port: 0,
                log_level: "info".to_string(),
            },
            google: GoogleConfig {
                api_key: Secret::new(api_key.into()),
                api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            },
            models: ModelConfig {
                text_model: DEFAULT_TEXT_MODEL.to_string(),
            },
            limits: LimitsConfig {
                max_duration_secs: DEFAULT_MAX_DURATION_SECS,
            },
        }
    }
}

/// Unparseable values fall back to the default. Zero is rejected.
fn parse_max_duration(raw: &str) -> Result<u64, AppError> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(AppError::ConfigError(anyhow::anyhow!(
            "MAX_DURATION_SECS must be greater than zero"
        ))),
        Ok(secs) => Ok(secs),
        Err(e) => {
            tracing::warn!(
                value = %raw,
                error = %e,
                default = DEFAULT_MAX_DURATION_SECS,
                "Invalid MAX_DURATION_SECS, using default"
            );
            Ok(DEFAULT_MAX_DURATION_SECS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn with_api_key_uses_defaults() {
        let config = ClipIdeasConfig::with_api_key("test-key");

        assert_eq!(config.google.api_key.expose_secret(), "test-key");
        assert_eq!(config.models.text_model, "gemini-1.5-flash");
        assert_eq!(config.limits.max_duration(), Duration::from_secs(60));
        assert_eq!(config.common.port, 0);
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = ClipIdeasConfig::with_api_key("super-secret-key");
        let debug = format!("{:?}", config);

        assert!(!debug.contains("super-secret-key"));
    }

    #[test]
    fn max_duration_parsing() {
        assert_eq!(parse_max_duration("30").unwrap(), 30);
        assert_eq!(parse_max_duration(" 45 ").unwrap(), 45);
        assert_eq!(
            parse_max_duration("soon").unwrap(),
            DEFAULT_MAX_DURATION_SECS
        );
        assert!(matches!(
            parse_max_duration("0"),
            Err(AppError::ConfigError(_))
        ));
    }
}
