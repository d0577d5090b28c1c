use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::SystemError;

/// Формат вывода событий.
#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

/// Настройки логирования.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Уровень или директива `EnvFilter` ("info", "easylist=debug,warn").
    pub level: String,
    pub format: LogFormat,
    pub with_ansi: bool,
    pub with_target: bool,
    pub with_line_numbers: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            with_ansi: true,
            with_target: true,
            with_line_numbers: false,
        }
    }
}

impl LoggingConfig {
    /// Переопределяет уровень и формат из `EASYLIST_LOG` и
    /// `EASYLIST_LOG_FORMAT`.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("EASYLIST_LOG") {
            self.level = level;
        }
        if let Ok(format) = std::env::var("EASYLIST_LOG_FORMAT") {
            match format.to_ascii_lowercase().as_str() {
                "pretty" => self.format = LogFormat::Pretty,
                "compact" => self.format = LogFormat::Compact,
                "json" => self.format = LogFormat::Json,
                other => eprintln!("Unknown EASYLIST_LOG_FORMAT '{other}', keeping {:?}", self.format),
            }
        }
    }

    /// Проверяет, что `level` является корректной директивой фильтра.
    pub fn validate(&self) -> Result<(), SystemError> {
        if self.level.trim().is_empty() {
            return Err(SystemError::InvalidLogLevel(self.level.clone()));
        }
        EnvFilter::try_new(self.build_filter_directive())
            .map(|_| ())
            .map_err(|_| SystemError::InvalidLogLevel(self.level.clone()))
    }

    pub fn build_filter_directive(&self) -> String {
        self.level.trim().to_string()
    }
}
