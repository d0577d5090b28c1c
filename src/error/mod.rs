pub mod list;
pub mod system;

pub use list::{ListError, ListResult};
pub use system::SystemError;
