use seqkit_value::{FieldNotFound, ValueKind};
use thiserror::Error;

use crate::verdict::BoxError;

#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied predicate failed.
    #[error("predicate failed at index {index}")]
    Predicate { index: usize, source: BoxError },
    /// A caller-supplied transform failed.
    #[error("transform failed at index {index}")]
    Transform { index: usize, source: BoxError },
    /// A composition needs at least one function.
    #[error("cannot compose zero functions")]
    EmptyComposition,
    #[error("field not found: {0}")]
    FieldNotFound(String),
    /// A dynamic function received a value of the wrong kind.
    #[error("type error: expected {expected}, found {found}")]
    Type { expected: ValueKind, found: ValueKind },
    /// A dynamic function received the wrong number of arguments.
    #[error("expected {expected} argument(s), found {found}")]
    Arity { expected: usize, found: usize },
}

impl From<FieldNotFound> for Error {
    fn from(e: FieldNotFound) -> Self {
        Error::FieldNotFound(e.0)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
