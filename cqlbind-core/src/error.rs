/// Failure modes of binding values into a statement.
///
/// Returned wrapped in [`crate::Error`], callers recover the kind with
/// `error.downcast_ref::<BindError>()`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// A constructor received a value of the wrong shape.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A value was populated before it was ready.
    #[error("precondition violation: {0}")]
    PreconditionViolation(String),
    #[error("the context id was not assigned")]
    MissingContextId,
    #[error("the context id was already assigned to {0}")]
    ContextIdAlreadySet(u32),
    /// The placeholders of a value do not fit the `u32` id range.
    #[error("{size} placeholders starting at :{id} exceed the id range")]
    IdOverflow { id: u32, size: u64 },
}

impl BindError {
    /// Kind of `error`, if it carries one.
    pub fn of(error: &crate::Error) -> Option<&BindError> {
        error.downcast_ref::<BindError>()
    }
}
