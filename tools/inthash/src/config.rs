//! Configuration for the CLI.

use crate::output::OutputFormat;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tracing filter directive (e.g. `warn`, `inthash_cli=debug`).
    pub log_filter: String,

    /// Format of log lines written to stderr.
    pub log_format: LogFormat,

    /// Output format used when `--output` is not given.
    pub output: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_filter = lookup("INTHASH_LOG").unwrap_or_else(|| "warn".to_string());

        let log_format = match lookup("INTHASH_LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        let output = match lookup("INTHASH_OUTPUT").as_deref() {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        };

        Self {
            log_filter,
            log_format,
            output,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("INTHASH_LOG", "debug"),
            ("INTHASH_LOG_FORMAT", "json"),
            ("INTHASH_OUTPUT", "json"),
        ]);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_formats_fall_back_to_text() {
        let config = config_from(&[("INTHASH_LOG_FORMAT", "xml"), ("INTHASH_OUTPUT", "yaml")]);
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.output, OutputFormat::Text);
    }
}
