use curly_presenter::PresenterError;
use serde::Serialize;
use thiserror::Error;

use crate::reference::ParseError;
use crate::reference::Reference;

/// Why a reference was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
pub enum Reason {
    #[error("`{identifier}` is not available on {presenter}")]
    UnavailableMethod {
        presenter: String,
        identifier: String,
    },

    #[error("`{identifier}` declares {count} positional parameters, at most one is supported")]
    UnsupportedArity { identifier: String, count: usize },

    #[error("`{identifier}` does not take a parameter")]
    UnexpectedParameter { identifier: String },

    #[error("`{identifier}` requires a parameter")]
    MissingParameter { identifier: String },

    #[error("attribute `{name}` is given more than once")]
    DuplicateAttribute { name: String },

    #[error("`{identifier}` does not accept attribute `{name}`")]
    UnknownAttribute { identifier: String, name: String },

    #[error("`{identifier}` requires attribute `{name}`")]
    MissingRequiredAttribute { identifier: String, name: String },

    #[error("conditional `{identifier}` must end with `?`")]
    NotBooleanShaped { identifier: String },
}

impl Reason {
    #[must_use]
    pub fn diagnostic_code(&self) -> &'static str {
        match self {
            Reason::UnavailableMethod { .. } => "C100",
            Reason::UnsupportedArity { .. } => "C101",
            Reason::UnexpectedParameter { .. } => "C102",
            Reason::MissingParameter { .. } => "C103",
            Reason::DuplicateAttribute { .. } => "C104",
            Reason::UnknownAttribute { .. } => "C105",
            Reason::MissingRequiredAttribute { .. } => "C106",
            Reason::NotBooleanShaped { .. } => "C107",
        }
    }
}

/// A reference that can never be compiled against its presenter.
///
/// Compile errors are deterministic: compiling the same reference against
/// the same presenter type again fails the same way.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
#[error("invalid reference `{reference}`: {reason}")]
pub struct CompileError {
    pub reference: String,
    pub reason: Reason,
}

impl CompileError {
    pub(crate) fn new(reference: &Reference, reason: Reason) -> Self {
        Self {
            reference: reference.text().to_string(),
            reason,
        }
    }

    #[must_use]
    pub fn diagnostic_code(&self) -> &'static str {
        self.reason.diagnostic_code()
    }
}

/// Failure to turn raw reference text into a plan.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
pub enum ReferenceError {
    #[error("invalid reference syntax `{text}`: {source}")]
    Parse { text: String, source: ParseError },

    #[error(transparent)]
    Compile(#[from] CompileError),
}

impl ReferenceError {
    #[must_use]
    pub fn diagnostic_code(&self) -> &'static str {
        match self {
            ReferenceError::Parse { .. } => "C001",
            ReferenceError::Compile(err) => err.diagnostic_code(),
        }
    }
}

/// Failure while executing a plan.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
pub enum RenderError {
    /// The presenter method itself failed.
    #[error(transparent)]
    Presenter(#[from] PresenterError),

    /// The plan was executed against a presenter type that does not expose
    /// the method it was compiled for.
    #[error("`{identifier}` is not available on {presenter}")]
    UnknownMethod {
        presenter: String,
        identifier: String,
    },
}
