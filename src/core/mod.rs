pub mod persistence;
pub mod registry;
pub mod sentences;
pub mod table;

pub use crate::domain::ports::Storage;
