//! TOML configuration.
//!
//! Every section and key is optional; a missing file path means defaults.
//!
//! ```toml
//! [quiz]
//! timer_secs = 30
//! reveal_delay_ms = 2000
//! xp_per_correct = 50
//! coins_per_correct = 10
//!
//! [assistant]
//! history_cap = 5
//! seed = 42
//!
//! [logging]
//! directory = "logs"
//! level = "info"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assistant::DEFAULT_HISTORY_CAP;
use crate::engine::EngineSettings;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub quiz: QuizConfig,
    pub assistant: AssistantConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Seconds allowed per question.
    pub timer_secs: u32,
    /// How long a revealed answer stays on screen.
    pub reveal_delay_ms: u64,
    pub xp_per_correct: u64,
    pub coins_per_correct: u64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        let engine = EngineSettings::default();
        Self {
            timer_secs: engine.timer_secs,
            reveal_delay_ms: engine.reveal_delay_ms,
            xp_per_correct: engine.xp_per_correct,
            coins_per_correct: engine.coins_per_correct,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub history_cap: usize,
    /// Fixed seed for message selection. Entropy is used when absent.
    pub seed: Option<u64>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            history_cap: DEFAULT_HISTORY_CAP,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: PathBuf,
    /// Filter used when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("logs"),
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Read and validate `path`, or return the defaults when there is none.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        tracing::info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quiz.timer_secs == 0 {
            return Err(ConfigError::Invalid(
                "quiz.timer_secs must be at least 1".to_string(),
            ));
        }
        if self.assistant.history_cap == 0 {
            return Err(ConfigError::Invalid(
                "assistant.history_cap must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            timer_secs: self.quiz.timer_secs,
            reveal_delay_ms: self.quiz.reveal_delay_ms,
            xp_per_correct: self.quiz.xp_per_correct,
            coins_per_correct: self.quiz.coins_per_correct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_document_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.engine_settings(), EngineSettings::default());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = Config::from_toml(
            r#"
            [quiz]
            timer_secs = 10

            [assistant]
            seed = 7
            "#,
        )
        .unwrap();

        assert_eq!(config.quiz.timer_secs, 10);
        assert_eq!(config.quiz.reveal_delay_ms, 2_000);
        assert_eq!(config.assistant.history_cap, DEFAULT_HISTORY_CAP);
        assert_eq!(config.assistant.seed, Some(7));
        assert_eq!(config.logging.directory, PathBuf::from("logs"));
    }

    #[test]
    fn test_zero_timer_is_rejected() {
        let err = Config::from_toml("[quiz]\ntimer_secs = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_zero_history_cap_is_rejected() {
        let err = Config::from_toml("[assistant]\nhistory_cap = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[quiz\ntimer_secs = ").unwrap();

        match Config::load(Some(file.path())) {
            Err(ConfigError::Parse { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_without_path_is_default() {
        assert_eq!(Config::load(None).unwrap(), Config::default());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
