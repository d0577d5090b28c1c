mod bounds;
pub mod list_base;
pub mod sublist;

pub use list_base::IndexedList;
pub use sublist::Sublist;
