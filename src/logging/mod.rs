pub mod config;
mod filters;
mod formatter;

pub use config::{LogFormat, LoggingConfig};
use tracing_subscriber::{layer::Layered, util::SubscriberInitExt, EnvFilter, Registry};
use tracing_subscriber::layer::SubscriberExt;

use crate::error::SystemError;

/// Инициализация логирования с конфигурацией.
///
/// Устанавливает глобальный subscriber; повторный вызов возвращает
/// [`SystemError::Logging`].
pub fn init_logging(mut config: LoggingConfig) -> Result<(), SystemError> {
    config.apply_env_overrides();
    config.validate()?;

    let env_filter = filters::build_filter_from_config(&config);
    let formatter = formatter::build_formatter_from_config::<Layered<EnvFilter, Registry>>(&config);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(formatter)
        .try_init()
        .map_err(|e| SystemError::Logging(e.to_string()))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.level,
        format = ?config.format,
        "Logging system initialized"
    );

    Ok(())
}
