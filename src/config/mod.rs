use std::env;
use std::fmt;
use std::str::FromStr;

use crate::analysis::{EngagementPolicy, SecurityPolicy};

/// Distinguishes runtime behavior for different stages of the embedding
/// application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for hosts embedding the analysis engine.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub security: SecurityPolicy,
    pub engagement: EngagementPolicy,
}

impl AppConfig {
    /// Loads configuration from the environment, with `.env` support.
    /// Unset tuning variables fall back to the reference defaults; values
    /// that are set but unparsable are errors, never silent defaults.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mut security = SecurityPolicy::default();
        if let Some(days) = read_override("APP_STALE_PASSWORD_DAYS")? {
            security.stale_rotation_days = days;
        }
        if let Some(count) = read_override("APP_FAILED_LOGIN_ALERT")? {
            security.failed_login_alert = count;
        }

        let mut engagement = EngagementPolicy::default();
        if let Some(days) = read_override("APP_INACTIVITY_DAYS")? {
            engagement.inactivity_days = days;
        }
        if let Some(score) = read_override("APP_HOT_LEAD_SCORE")? {
            engagement.hot_lead_score = score;
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            security,
            engagement,
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

fn read_override<T: FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { var, value: raw }),
        Err(_) => Ok(None),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { var, value } => {
                write!(f, "invalid numeric value `{}` for {}", value, var)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
