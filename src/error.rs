use thiserror::Error;

pub type FixFifoResult<T, E = FixFifoError> = Result<T, E>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FixFifoError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Container is empty")]
    EmptyContainer,

    #[error("Internal error: {0}")]
    Internal(String),
}
