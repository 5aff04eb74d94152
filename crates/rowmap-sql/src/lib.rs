pub mod predicate;
pub use predicate::{Fragment, Predicate};

pub mod query;
pub use query::{Query, UpdateStatement};

pub mod serializer;
pub use serializer::{Params, Placeholder, Serializer};

pub mod stmt;
pub use stmt::Statement;
