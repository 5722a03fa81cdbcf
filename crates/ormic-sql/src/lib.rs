pub mod serializer;
pub use serializer::{Inline, Literal, Params, Placeholder, Serializer};

pub mod stmt;
pub use stmt::Statement;
