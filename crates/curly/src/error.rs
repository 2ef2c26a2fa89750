use curly_compiler::ReferenceError;
use curly_compiler::RenderError;
use serde::Serialize;
use thiserror::Error;

use crate::lexer::Span;

#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
pub enum TemplateError {
    /// A `{{` with no matching `}}`.
    #[error("unterminated tag starting at byte {}", .span.start)]
    Unterminated { span: Span },

    /// Block, collection and partial tags (`{{#…}}`, `{{*…}}`, `{{>…}}`)
    /// need a block-aware template compiler.
    #[error("unsupported `{tag}` tag at byte {}", .span.start)]
    UnsupportedTag { tag: String, span: Span },

    /// A reference that failed to parse or compile. One invalid reference
    /// fails the whole template.
    #[error("{source}")]
    Reference { source: ReferenceError, span: Span },

    /// A presenter method failed while rendering.
    #[error("failed to render `{identifier}`: {source}")]
    Render {
        identifier: String,
        source: RenderError,
    },
}

impl TemplateError {
    /// Get the span start and length of this error, if available
    #[must_use]
    pub fn span(&self) -> Option<(u32, u32)> {
        match self {
            TemplateError::Unterminated { span }
            | TemplateError::UnsupportedTag { span, .. }
            | TemplateError::Reference { span, .. } => Some((span.start, span.length)),
            TemplateError::Render { .. } => None,
        }
    }

    /// Get a diagnostic code string for this error type
    #[must_use]
    pub fn diagnostic_code(&self) -> &'static str {
        match self {
            TemplateError::Unterminated { .. } => "T100",
            TemplateError::UnsupportedTag { .. } => "T101",
            TemplateError::Reference { source, .. } => source.diagnostic_code(),
            TemplateError::Render { .. } => "R100",
        }
    }
}
