use std::num::ParseIntError;

use thiserror::Error;

/// A token on the input line is not a 64-bit integer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid integer {token:?} at position {position}")]
pub struct InvalidInputError {
    /// The offending token, as read.
    pub token: String,
    /// 1-based index of the token on the line.
    pub position: usize,
    #[source]
    pub source: ParseIntError,
}

/// Failure while reading the input sequence.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Invalid(#[from] InvalidInputError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strategy {name:?} (expected recursive, memoized, quadratic or patience)")]
pub struct ParseStrategyError {
    pub name: String,
}

pub type Result<T> = std::result::Result<T, ReadError>;
