//! Runtime configuration read from the environment.

use std::str::FromStr;

use thiserror::Error;

pub const LOG_ENV: &str = "GARDEN_ESTIMATOR_LOG";
pub const OUTPUT_ENV: &str = "GARDEN_ESTIMATOR_OUTPUT";
pub const BREAKDOWN_ENV: &str = "GARDEN_ESTIMATOR_BREAKDOWN";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown output format `{0}` (expected `text` or `json`)")]
    InvalidOutput(String),
    #[error("{key} must be a boolean, got `{value}`")]
    InvalidFlag { key: &'static str, value: String },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidOutput(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
    pub output: OutputFormat,
    pub show_breakdown: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            output: OutputFormat::Text,
            show_breakdown: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(filter) = lookup(LOG_ENV)
            .or_else(|| lookup("RUST_LOG"))
            .filter(|value| !value.trim().is_empty())
        {
            config.log_filter = filter;
        }
        if let Some(output) = lookup(OUTPUT_ENV) {
            config.output = output.parse()?;
        }
        if let Some(flag) = lookup(BREAKDOWN_ENV) {
            config.show_breakdown = parse_flag(BREAKDOWN_ENV, &flag)?;
        }

        Ok(config)
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        assert_eq!(config_from(&[]), Ok(AppConfig::default()));
    }

    #[test]
    fn own_log_variable_wins_over_rust_log() {
        let config = config_from(&[(LOG_ENV, "debug"), ("RUST_LOG", "warn")]).unwrap();
        assert_eq!(config.log_filter, "debug");

        let config = config_from(&[("RUST_LOG", "warn")]).unwrap();
        assert_eq!(config.log_filter, "warn");

        let config = config_from(&[(LOG_ENV, "  ")]).unwrap();
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn reads_output_and_breakdown() {
        let config = config_from(&[(OUTPUT_ENV, "JSON"), (BREAKDOWN_ENV, "yes")]).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.show_breakdown);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            config_from(&[(OUTPUT_ENV, "xml")]),
            Err(ConfigError::InvalidOutput("xml".into()))
        );
        assert!(matches!(
            config_from(&[(BREAKDOWN_ENV, "maybe")]),
            Err(ConfigError::InvalidFlag { key: BREAKDOWN_ENV, .. })
        ));
    }
}
