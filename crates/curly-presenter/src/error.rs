use serde::Serialize;
use thiserror::Error;

/// A fault raised by a presenter method while rendering.
///
/// These are ordinary runtime failures; the render pipeline propagates them
/// to its caller without recovery.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
pub enum PresenterError {
    #[error("missing positional argument")]
    MissingPositional,

    #[error("missing keyword argument `{0}`")]
    MissingKeyword(String),

    #[error("invalid value {value:?} for `{name}`: {reason}")]
    InvalidArgument {
        name: String,
        value: String,
        reason: String,
    },

    #[error("{0}")]
    Failed(String),
}

impl PresenterError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Returned by [`Signatures::capability_of`](crate::Signatures::capability_of)
/// for identifiers the presenter does not expose.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
#[error("`{identifier}` is not available on {presenter}")]
pub struct UnavailableMethod {
    pub presenter: String,
    pub identifier: String,
}
