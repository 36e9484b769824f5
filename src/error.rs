//! Errors surfaced to the calling template context

use thiserror::Error;

/// Errors returned by the template helpers
///
/// Invalid comparator input is not represented here: handing a function,
/// slice or map to [`crate::sort::compare`] is a caller bug and panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The operand kinds have no arithmetic defined for them
    #[error("can't apply the operator to the values")]
    UnsupportedOperands,

    #[error("can't divide the value by 0")]
    DivisionByZero,

    #[error("there is no such an operation: {0:?}")]
    UnsupportedOperator(char),

    #[error("truncate requires a length and a string")]
    MissingArguments,

    #[error("too many arguments passed to truncate")]
    TooManyArguments,

    #[error("ellipsis must be a string")]
    EllipsisNotString,

    #[error("text must be a string")]
    TextNotString,

    /// A loose template cast failed
    #[error("unable to cast {value} of type {type_name} to {target}")]
    Cast {
        value: String,
        type_name: String,
        target: &'static str,
    },

    /// A command-line map could not be read as key/value pairs
    #[error("invalid map input: {0}")]
    InvalidMap(String),

    /// A key that cannot be ordered (slice, map, function)
    #[error("{0} is not a valid map key")]
    UnorderableKey(String),
}

pub type Result<T> = std::result::Result<T, Error>;
