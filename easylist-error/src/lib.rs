//! Общие типы ошибок workspace: коды статуса, трейт [`ErrorExt`] и
//! [`StackError`] с цепочкой контекстов.

mod ext;
mod result_ext;
mod stack;
mod status_code;

pub use ext::ErrorExt;
pub use result_ext::ResultExt;
pub use stack::{ErrorContext, StackError};
pub use status_code::{LogLevel, StatusCode};

pub type EasylistResult<T> = Result<T, StackError>;
