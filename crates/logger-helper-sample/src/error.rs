use thiserror::Error;

/// Errors raised by the sample callables.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BasicError {
    #[error("This is an exception")]
    Deliberate,
    #[error("value field is missing")]
    MissingValue,
}
