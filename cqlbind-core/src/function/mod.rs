mod time_uuid;
mod token;

pub use time_uuid::*;
pub use token::*;

use crate::Bindable;

/// Server side functions a filter value can expand into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CqlFunction {
    /// Smallest timeuuid for a millisecond timestamp.
    MinTimeUuid,
    /// Largest timeuuid for a millisecond timestamp.
    MaxTimeUuid,
    /// Partitioner token of the partition key components.
    Token,
}

/// A bindable value rendered as a function call over its placeholders.
pub trait QueryFunction: Bindable {
    fn function(&self) -> CqlFunction;
}
