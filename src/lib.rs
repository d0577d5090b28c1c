/// Layered configuration for the demo binary.
pub mod config;
/// Container error taxonomy and ambient (config/logging) errors.
pub mod error;
/// The list container and its live range view.
pub mod list;
/// Tracing subscriber setup.
pub mod logging;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// config
pub use self::config::Settings;
/// Operation errors and result types.
pub use error::{ListError, ListResult, SystemError};
/// Containers: IndexedList and its Sublist view.
pub use list::{IndexedList, Sublist};
/// Logging setup.
pub use logging::{init_logging, LogFormat, LoggingConfig};
