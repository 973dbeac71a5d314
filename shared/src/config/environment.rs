//! Deployment environment and the logging defaults that follow from it

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Variables consulted, in order, to resolve the environment
pub const ENVIRONMENT_VARIABLES: &[&str] = &["APP_ENV", "NODE_ENV", "ENVIRONMENT"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }

    pub fn is_development(&self) -> bool {
        *self == Environment::Development
    }

    /// Internal error detail may be shown to clients outside production
    pub fn exposes_internal_errors(&self) -> bool {
        !self.is_production()
    }

    /// First parseable value of [`ENVIRONMENT_VARIABLES`], else development
    pub fn from_env() -> Self {
        ENVIRONMENT_VARIABLES
            .iter()
            .filter_map(|key| std::env::var(key).ok())
            .find_map(|value| value.parse().ok())
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    /// Case-insensitive; accepts `dev`, `stage`, `test` and `prod` as aliases
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" | "test" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("Unknown environment: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
    Compact,
}

/// Default log filter and output shape
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `trace`, `debug`, `info`, `warn` or `error`
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    /// Include file and line in each record
    #[serde(default)]
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::for_environment(Environment::Staging)
    }
}

impl LoggingConfig {
    pub fn for_environment(environment: Environment) -> Self {
        let (level, format, source_location) = match environment {
            Environment::Development => ("debug", LogFormat::Pretty, true),
            Environment::Staging => ("info", LogFormat::Json, false),
            Environment::Production => ("warn", LogFormat::Json, false),
        };
        Self {
            level: level.to_string(),
            format,
            source_location,
        }
    }
}
