pub mod serializer;
pub use serializer::{Placeholder, Serializer};

pub use sqlutil_core::stmt::Statement;
