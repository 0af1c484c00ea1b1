use crate::error::{config::ConfigError, AppError};

/// Default number of minutes before an event's start time that the reminder
/// notification is dispatched.
const DEFAULT_REMINDER_LEAD_MINUTES: i64 = 60;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub app_url: String,

    pub oauth_client_id: String,
    pub oauth_client_secret: String,
    pub oauth_redirect_url: String,
    pub oauth_auth_url: String,
    pub oauth_token_url: String,
    pub oauth_userinfo_url: String,

    /// Optional chat webhook for outbound notifications. When unset,
    /// notifications are disabled.
    pub webhook_url: Option<String>,
    pub reminder_lead_minutes: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            app_url: require_env("APP_URL")?,
            oauth_client_id: require_env("OAUTH_CLIENT_ID")?,
            oauth_client_secret: require_env("OAUTH_CLIENT_SECRET")?,
            oauth_redirect_url: require_env("OAUTH_REDIRECT_URL")?,
            oauth_auth_url: require_env("OAUTH_AUTH_URL")?,
            oauth_token_url: require_env("OAUTH_TOKEN_URL")?,
            oauth_userinfo_url: require_env("OAUTH_USERINFO_URL")?,
            webhook_url: std::env::var("WEBHOOK_URL").ok(),
            reminder_lead_minutes: optional_env_i64("REMINDER_LEAD_MINUTES")?
                .unwrap_or(DEFAULT_REMINDER_LEAD_MINUTES),
        })
    }
}

fn require_env(name: &str) -> Result<String, AppError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()).into())
}

fn optional_env_i64(name: &str) -> Result<Option<i64>, AppError> {
    match std::env::var(name) {
        Ok(value) => {
            let parsed = value
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidEnvVar(name.to_string()))?;
            Ok(Some(parsed))
        }
        Err(_) => Ok(None),
    }
}
