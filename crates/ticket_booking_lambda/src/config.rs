//! Process configuration, read once from the environment at startup.

use std::time::Duration;

use thiserror::Error;
use ticket_booking_core::ticket_id::DEFAULT_TICKET_ID_LENGTH;

pub const DEFAULT_NATIONALIZE_BASE_URL: &str = "https://api.nationalize.io/";
pub const DEFAULT_NATIONALITY_TIMEOUT_MS: u64 = 3_000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// What the booking handler does when the nationality lookup itself fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NationalityFailurePolicy {
    /// Persist the booking without a nationality.
    #[default]
    Proceed,
    /// Reject the booking with a server error and write nothing.
    Fail,
}

impl NationalityFailurePolicy {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "proceed" => Some(Self::Proceed),
            "fail" => Some(Self::Fail),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::Json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub table_name: String,
    pub nationalize_base_url: String,
    pub nationality_timeout: Duration,
    pub nationality_failure_policy: NationalityFailurePolicy,
    pub ticket_id_length: usize,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be configured")]
    Missing(&'static str),

    #[error("{key} has invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let table_name = read("TABLE_NAME").ok_or(ConfigError::Missing("TABLE_NAME"))?;

        let nationalize_base_url = read("NATIONALIZE_BASE_URL")
            .unwrap_or_else(|| DEFAULT_NATIONALIZE_BASE_URL.to_string());

        let nationality_timeout = match read("NATIONALITY_TIMEOUT_MS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "NATIONALITY_TIMEOUT_MS",
                        value: raw,
                        reason: "expected a positive number of milliseconds",
                    })
                }
            },
            None => Duration::from_millis(DEFAULT_NATIONALITY_TIMEOUT_MS),
        };

        let nationality_failure_policy = match read("NATIONALITY_FAILURE_POLICY") {
            Some(raw) => {
                NationalityFailurePolicy::parse(&raw).ok_or(ConfigError::Invalid {
                    key: "NATIONALITY_FAILURE_POLICY",
                    value: raw,
                    reason: "expected proceed or fail",
                })?
            }
            None => NationalityFailurePolicy::default(),
        };

        let ticket_id_length = match read("TICKET_ID_LENGTH") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(length) if length > 0 => length,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "TICKET_ID_LENGTH",
                        value: raw,
                        reason: "expected a positive integer",
                    })
                }
            },
            None => DEFAULT_TICKET_ID_LENGTH,
        };

        let format = match read("LOG_FORMAT") {
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "text" | "pretty" => LogFormat::Text,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "LOG_FORMAT",
                        value: raw,
                        reason: "expected json or text",
                    })
                }
            },
            None => LogFormat::default(),
        };

        Ok(Self {
            table_name,
            nationalize_base_url,
            nationality_timeout,
            nationality_failure_policy,
            ticket_id_length,
            logging: LoggingConfig {
                level: read("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
                format,
            },
        })
    }
}
