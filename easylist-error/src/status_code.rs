use std::fmt;

/// Числовые коды ошибок.
///
/// - 2xxx: нарушения границ списка;
/// - 3xxx: конфигурация и логирование бинарника.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
#[non_exhaustive]
pub enum StatusCode {
    IndexOutOfBounds = 2002,
    ListIsEmpty = 2003,
    InvalidRange = 2004,
    NegativeLength = 2005,

    ConfigError = 3000,
    InvalidConfig = 3001,
    LoggingInit = 3002,
}

/// Уровень, на котором стоит логировать ошибку с данным кодом.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Warn,
    Error,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl StatusCode {
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Ошибки границ ожидаемы для вызывающего кода и логируются на `debug`;
    /// сбой инициализации логирования делает бинарник бесполезным.
    pub fn log_level(self) -> LogLevel {
        match self {
            Self::IndexOutOfBounds
            | Self::ListIsEmpty
            | Self::InvalidRange
            | Self::NegativeLength => LogLevel::Debug,
            Self::ConfigError | Self::InvalidConfig => LogLevel::Warn,
            Self::LoggingInit => LogLevel::Error,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для StatusCode
////////////////////////////////////////////////////////////////////////////////

impl From<StatusCode> for u32 {
    fn from(c: StatusCode) -> Self {
        c.code()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{self:?} ({})", self.code())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
