use crate::level::Level;
use crate::record::Properties;
use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid property '{0}': expected KEY=VALUE with a non-empty key")]
    InvalidProperty(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Forward stdin lines as structured NDJSON log records", long_about = None)]
pub struct Config {
    /// Minimum severity written to the destination
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: Level,

    /// Destination file path (standard output when absent)
    #[arg(long, env = "LOG_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Treat input as an error stream: each line becomes an ERROR record
    /// via the write-sink adapter instead of an INFO record
    #[arg(long, env = "ERROR_STREAM")]
    pub error_stream: bool,

    /// Property attached to every record, as KEY=VALUE (repeatable)
    #[arg(long = "property", value_name = "KEY=VALUE")]
    pub properties: Vec<String>,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.error_stream && !self.properties.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "--property cannot be combined with --error-stream".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses the repeatable `--property` arguments into a property map.
    pub fn parsed_properties(&self) -> Result<Properties, ConfigError> {
        let mut map = Properties::new();
        for raw in &self.properties {
            let (key, value) = raw
                .split_once('=')
                .filter(|(key, _)| !key.is_empty())
                .ok_or_else(|| ConfigError::InvalidProperty(raw.clone()))?;
            map.insert(key.to_string(), value.to_string());
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("jsonlog").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]);
        assert_eq!(config.log_level, Level::Info);
        assert!(config.output.is_none());
        assert!(!config.error_stream);
        assert!(config.properties.is_empty());
    }

    #[test]
    fn test_log_level_argument() {
        assert_eq!(parse(&["--log-level", "error"]).log_level, Level::Error);
        assert_eq!(parse(&["--log-level", "off"]).log_level, Level::Off);
        assert!(
            Config::try_parse_from(["jsonlog", "--log-level", "loud"]).is_err(),
            "unknown level must be rejected"
        );
    }

    #[test]
    fn test_property_parsing() {
        let config = parse(&["--property", "service=api", "--property", "env=prod"]);
        let props = config.parsed_properties().expect("valid properties");
        assert_eq!(props.get("service").map(String::as_str), Some("api"));
        assert_eq!(props.get("env").map(String::as_str), Some("prod"));
    }

    #[test]
    fn test_property_value_may_contain_equals() {
        let config = parse(&["--property", "query=a=b"]);
        let props = config.parsed_properties().expect("valid properties");
        assert_eq!(props.get("query").map(String::as_str), Some("a=b"));
    }

    #[test]
    fn test_malformed_property_rejected() {
        for raw in ["bare", "=value", ""] {
            let config = parse(&["--property", raw]);
            assert!(
                matches!(
                    config.parsed_properties(),
                    Err(ConfigError::InvalidProperty(_))
                ),
                "property {raw:?} must be rejected"
            );
        }
    }

    #[test]
    fn test_error_stream_conflicts_with_properties() {
        let config = parse(&["--error-stream", "--property", "k=v"]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidConfig(_))
        ));
        assert!(parse(&["--error-stream"]).validate().is_ok());
    }
}
