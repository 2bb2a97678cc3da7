//! Error types for value and identifier parsing.
//!
//! Only structurally ambiguous input is fatal. Content-level oddities such as
//! a malformed GUID are recovered locally and reported through
//! [`Diagnostics`](crate::diagnostics::Diagnostics) instead.

use thiserror::Error;

use crate::model::BuiltinTypeTag;

/// Stable codes for fatal parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Numeric literal does not parse as the declared kind
    MalformedNumericLiteral,
    /// E002: Identifier literal has a bad segment
    MalformedIdentifier,
    /// E003: Document is not well-formed XML
    MalformedXml,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::MalformedNumericLiteral => "E001",
            ErrorCode::MalformedIdentifier => "E002",
            ErrorCode::MalformedXml => "E003",
        }
    }
}

/// Fatal error while parsing a value or identifier.
///
/// Any of these aborts processing of the enclosing node; callers must not try
/// to salvage a partial value from the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("[E001] malformed {tag:?} literal {text:?}: {reason}")]
    MalformedNumericLiteral {
        tag: BuiltinTypeTag,
        text: String,
        reason: String,
    },

    #[error("[E002] malformed identifier {input:?}: {reason}")]
    MalformedIdentifier { input: String, reason: String },

    #[error("[E003] xml: {0}")]
    Xml(String),
}

impl ParseError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::MalformedNumericLiteral { .. } => ErrorCode::MalformedNumericLiteral,
            ParseError::MalformedIdentifier { .. } => ErrorCode::MalformedIdentifier,
            ParseError::Xml(_) => ErrorCode::MalformedXml,
        }
    }

    pub(crate) fn numeric(tag: BuiltinTypeTag, text: &str, reason: impl ToString) -> Self {
        ParseError::MalformedNumericLiteral {
            tag,
            text: text.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn identifier(input: &str, reason: impl Into<String>) -> Self {
        ParseError::MalformedIdentifier {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
