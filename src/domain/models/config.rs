//! Ambient configuration records.
//!
//! Configuration covers only the execution envelope: credentials and
//! logging. The triage decision tables (assignee pool, label rules) are
//! deliberately static code, not configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// GitHub API settings.
    #[serde(default)]
    pub github: GithubConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// GitHub API settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GithubConfig {
    /// Personal access token. When absent, the `GITHUB_TOKEN`
    /// environment variable is consulted instead.
    #[serde(default)]
    pub token: Option<String>,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, or error.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log output format: json or pretty.
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.github.token.is_none());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "github:\n  token: ghp_example\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.github.token.as_deref(), Some("ghp_example"));
        assert_eq!(config.logging.level, "info");
    }
}
