//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Every variant
//! marks a programming error on the caller's side: an unbalanced save/restore, a path command
//! issued out of order, degenerate geometry, or an unusable lattice. Nothing is retried.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("transform stack underflow: restore() without a matching save()")]
    StackUnderflow,

    #[error("invalid path state: {0}")]
    InvalidState(String),

    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("current transform is singular and cannot be inverted")]
    SingularTransform,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
