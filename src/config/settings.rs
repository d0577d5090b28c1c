use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File, Map};
use serde::{Deserialize, Serialize};

use crate::logging::LoggingConfig;

/// Настройки демонстрационного бинарника.
///
/// Источники (по возрастанию приоритета): значения по умолчанию,
/// необязательный файл `easylist.{toml,json,yaml}` в рабочем каталоге,
/// переменные окружения `EASYLIST_*` (разделитель вложенности `__`, списки
/// через запятую).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub demo_items: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            demo_items: ["Food", "Book", "Phone", "Bag"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Settings {
    /// Загружает настройки из `easylist.*` и переменных окружения процесса.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(
            Config::builder().add_source(File::with_name("easylist").required(false)),
            None,
        )
    }

    /// `env`: переменные окружения вместо окружения процесса (`None` читает
    /// `std::env`).
    fn load_from(
        builder: ConfigBuilder<DefaultState>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let cfg = builder
            // Add environment variables with the EASYLIST_ prefix
            .add_source(
                Environment::with_prefix("EASYLIST")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("demo_items")
                    .source(env),
            )
            .build()?;

        // Deserialize the configuration into our structure.
        cfg.try_deserialize()
    }
}
