//! Generator configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! command-line arguments.

use randnum_core::Argument;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json, csv")]
    InvalidFormat(String),

    #[error("Invalid seed: {0}. Must be an unsigned 64-bit integer")]
    InvalidSeed(String),

    #[error("Invalid boolean for {key}: {value}")]
    InvalidBool { key: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How generated values are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Generator configuration structure
///
/// `n`, `min` and `max` stay untyped here. A quoted value in the TOML file
/// is text, not a number, and is rejected by the generator with its type
/// error rather than by the configuration loader.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// How many values to draw
    pub n: Argument,
    /// Lower bound
    pub min: Argument,
    /// Upper bound
    pub max: Argument,
    /// Seed for a reproducible stream; a fresh one is drawn when absent
    pub seed: Option<u64>,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
    /// Whether to append descriptive statistics
    pub summary: bool,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            n: Argument::Number(10.0),
            min: Argument::Number(0.0),
            max: Argument::Number(1.0),
            seed: None,
            format: OutputFormat::Table,
            summary: false,
            log_level: LogLevel::Info,
        }
    }
}

/// Environment variable for the count, read by [`GeneratorConfig::apply_env_with`].
pub const ENV_N: &str = "RANDNUM_N";
/// Environment variable for the lower bound.
pub const ENV_MIN: &str = "RANDNUM_MIN";
/// Environment variable for the upper bound.
pub const ENV_MAX: &str = "RANDNUM_MAX";
/// Environment variable for the generator seed.
pub const ENV_SEED: &str = "RANDNUM_SEED";
/// Environment variable for the output format (`table`, `json` or `csv`).
pub const ENV_FORMAT: &str = "RANDNUM_FORMAT";
/// Environment variable toggling the summary block.
pub const ENV_SUMMARY: &str = "RANDNUM_SUMMARY";
/// Environment variable for the log level.
pub const ENV_LOG_LEVEL: &str = "RANDNUM_LOG_LEVEL";

impl GeneratorConfig {
    /// Create a new GeneratorConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Override fields from environment variables looked up through `lookup`
    ///
    /// Variables that are unset are left alone.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(n) = lookup(ENV_N) {
            self.n = Argument::parse(&n);
        }
        if let Some(min) = lookup(ENV_MIN) {
            self.min = Argument::parse(&min);
        }
        if let Some(max) = lookup(ENV_MAX) {
            self.max = Argument::parse(&max);
        }
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = Some(parse_seed(&seed)?);
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = OutputFormat::from_str(&format)?;
        }
        if let Some(summary) = lookup(ENV_SUMMARY) {
            self.summary = parse_bool(ENV_SUMMARY, &summary)?;
        }
        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&log_level)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(n) = &cli.n {
            self.n = Argument::parse(n);
        }
        if let Some(min) = &cli.min {
            self.min = Argument::parse(min);
        }
        if let Some(max) = &cli.max {
            self.max = Argument::parse(max);
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        if cli.summary {
            self.summary = true;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        Ok(())
    }
}

fn parse_seed(s: &str) -> Result<u64, ConfigError> {
    s.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidSeed(s.to_string()))
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Count override, as typed
    pub n: Option<String>,
    /// Lower bound override, as typed
    pub min: Option<String>,
    /// Upper bound override, as typed
    pub max: Option<String>,
    /// Seed override
    pub seed: Option<u64>,
    /// Output format override
    pub format: Option<String>,
    /// Append summary statistics
    pub summary: bool,
    /// Log level override
    pub log_level: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<GeneratorConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<GeneratorConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };

    config.apply_env_with(lookup)?;
    config.merge_with_cli(cli)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.n, Argument::Number(10.0));
        assert_eq!(config.min, Argument::Number(0.0));
        assert_eq!(config.max, Argument::Number(1.0));
        assert_eq!(config.seed, None);
        assert_eq!(config.format, OutputFormat::Table);
        assert!(!config.summary);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_log_level_from_str() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Warn").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_output_format_round_trip_names() {
        for format in [OutputFormat::Table, OutputFormat::Json, OutputFormat::Csv] {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
        assert!(matches!(
            OutputFormat::from_str("xml"),
            Err(ConfigError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            n = 25
            min = -1.5
            max = 2
            seed = 42
            format = "json"
            summary = true
            log_level = "debug"
        "#;

        let config: GeneratorConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.n, Argument::Number(25.0));
        assert_eq!(config.min, Argument::Number(-1.5));
        assert_eq!(config.max, Argument::Number(2.0));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.summary);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: GeneratorConfig = toml::from_str("n = 3").unwrap();
        assert_eq!(config.n, Argument::Number(3.0));
        assert_eq!(config.min, Argument::Number(0.0));
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_quoted_toml_value_stays_text() {
        let config: GeneratorConfig = toml::from_str(r#"n = "five""#).unwrap();
        assert_eq!(config.n, Argument::Text("five".to_string()));
    }

    #[test]
    fn test_invalid_format_in_toml() {
        let result: Result<GeneratorConfig, _> = toml::from_str(r#"format = "xml""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_env() {
        let mut config = GeneratorConfig::default();
        config
            .apply_env_with(env(&[
                (ENV_N, "7"),
                (ENV_MIN, "-3"),
                (ENV_MAX, "three"),
                (ENV_SEED, "99"),
                (ENV_FORMAT, "csv"),
                (ENV_SUMMARY, "yes"),
                (ENV_LOG_LEVEL, "warn"),
            ]))
            .unwrap();

        assert_eq!(config.n, Argument::Number(7.0));
        assert_eq!(config.min, Argument::Number(-3.0));
        assert_eq!(config.max, Argument::Text("three".to_string()));
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.format, OutputFormat::Csv);
        assert!(config.summary);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_env_names_share_prefix() {
        for name in [
            ENV_N,
            ENV_MIN,
            ENV_MAX,
            ENV_SEED,
            ENV_FORMAT,
            ENV_SUMMARY,
            ENV_LOG_LEVEL,
        ] {
            assert!(name.starts_with("RANDNUM_"), "{name}");
        }
    }

    #[test]
    fn test_apply_env_invalid_values() {
        let mut config = GeneratorConfig::default();
        assert!(matches!(
            config.apply_env_with(env(&[(ENV_SEED, "-1")])),
            Err(ConfigError::InvalidSeed(_))
        ));
        assert!(matches!(
            config.apply_env_with(env(&[(ENV_SUMMARY, "maybe")])),
            Err(ConfigError::InvalidBool { .. })
        ));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = GeneratorConfig::default();
        let cli = CliArgs {
            n: Some("5".to_string()),
            min: Some("10".to_string()),
            max: Some("1".to_string()),
            seed: Some(7),
            format: Some("json".to_string()),
            summary: true,
            log_level: Some("error".to_string()),
            config_file: None,
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.n, Argument::Number(5.0));
        assert_eq!(config.min, Argument::Number(10.0));
        assert_eq!(config.max, Argument::Number(1.0));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.summary);
        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[test]
    fn test_precedence_cli_over_env_over_defaults() {
        let cli = CliArgs {
            n: Some("3".to_string()),
            ..Default::default()
        };
        let config =
            build_config_with(&cli, env(&[(ENV_N, "100"), (ENV_MAX, "50")])).unwrap();

        assert_eq!(config.n, Argument::Number(3.0));
        assert_eq!(config.max, Argument::Number(50.0));
        assert_eq!(config.min, Argument::Number(0.0));
    }

    #[test]
    fn test_build_config_with_defaults() {
        let config = build_config_with(&CliArgs::default(), env(&[])).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/randnum.toml")),
            ..Default::default()
        };
        assert!(matches!(
            build_config_with(&cli, env(&[])),
            Err(ConfigError::FileError(_))
        ));
    }
}
