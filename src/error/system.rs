use std::any::Any;

use easylist_error::{ErrorExt, StatusCode};
use thiserror::Error;

/// Ошибки окружения бинарника: загрузка конфигурации и инициализация
/// логирования.
#[derive(Error, Debug)]
pub enum SystemError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

impl ErrorExt for SystemError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Config(_) => StatusCode::ConfigError,
            Self::InvalidLogLevel(_) => StatusCode::InvalidConfig,
            Self::Logging(_) => StatusCode::LoggingInit,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use easylist_error::LogLevel;

    use super::*;

    #[test]
    fn test_status_codes() {
        let e = SystemError::InvalidLogLevel("loud".into());
        assert_eq!(e.status_code(), StatusCode::InvalidConfig);
        assert_eq!(e.to_string(), "Invalid log level: loud");

        let e = SystemError::Logging("already set".into());
        assert_eq!(e.status_code(), StatusCode::LoggingInit);
        assert_eq!(e.status_code().log_level(), LogLevel::Error);

        let e = SystemError::from(config::ConfigError::Message("boom".into()));
        assert_eq!(e.status_code(), StatusCode::ConfigError);
        assert!(e.to_string().contains("boom"));
    }
}
