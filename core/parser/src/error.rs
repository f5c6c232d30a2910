//! Error and result implementation for the parser.

use crate::lexer::Error as LexError;
use sparrow_ast::{Position, Span};
use std::fmt;

/// Result of a parsing operation.
pub type ParseResult<T> = Result<T, Error>;

pub(crate) trait ErrorContext {
    fn context(self, context: &'static str) -> Self;
}

impl<T> ErrorContext for ParseResult<T> {
    fn context(self, context: &'static str) -> Self {
        self.map_err(|e| e.context(context))
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::lex(e)
    }
}

/// An enum which represents errors encountered during parsing an expression
#[derive(Debug)]
pub enum Error {
    /// When it expected a certain kind of token, but got another as part of something
    Expected {
        /// The token(s) that were expected.
        expected: Box<[String]>,
        /// The token that was not expected.
        found: Box<str>,
        /// The parsing context in which the error occurred.
        context: &'static str,
        /// Position of the source code where the error occurred.
        span: Span,
    },
    /// When a token is unexpected
    Unexpected {
        /// The error message.
        message: Option<&'static str>,
        /// The token that was not expected.
        found: Box<str>,
        /// Position of the source code where the error occurred.
        span: Span,
    },
    /// When there is an abrupt end to the parsing
    AbruptEnd,
    /// A lexing error.
    Lex {
        /// The error that occurred during lexing.
        err: LexError,
    },
    /// Catch all General Error
    General {
        /// The error message.
        message: Box<str>,
        /// Position of the source code where the error occurred.
        position: Position,
    },
}

impl Error {
    /// Changes the context of the error, if any.
    fn context(self, new_context: &'static str) -> Self {
        match self {
            Self::Expected {
                expected,
                found,
                span,
                ..
            } => Self::expected(expected, found, span, new_context),
            e => e,
        }
    }

    /// Creates an `Expected` parsing error.
    pub(crate) fn expected<E, F>(expected: E, found: F, span: Span, context: &'static str) -> Self
    where
        E: Into<Box<[String]>>,
        F: Into<Box<str>>,
    {
        Self::Expected {
            expected: expected.into(),
            found: found.into(),
            span,
            context,
        }
    }

    /// Creates an `Unexpected` parsing error.
    pub(crate) fn unexpected<F, C>(found: F, span: Span, message: C) -> Self
    where
        F: Into<Box<str>>,
        C: Into<Option<&'static str>>,
    {
        Self::Unexpected {
            found: found.into(),
            span,
            message: message.into(),
        }
    }

    /// Creates a "general" parsing error.
    pub(crate) fn general<S>(message: S, position: Position) -> Self
    where
        S: Into<Box<str>>,
    {
        Self::General {
            message: message.into(),
            position,
        }
    }

    /// Creates a parsing error from a lexing error.
    pub(crate) fn lex(e: LexError) -> Self {
        Self::Lex { err: e }
    }

    /// Gets the position of the error, if any.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Expected { span, .. } | Self::Unexpected { span, .. } => Some(span.loc.start),
            Self::General { position, .. } => Some(*position),
            Self::Lex { err } => Some(err.position()),
            Self::AbruptEnd => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expected {
                expected,
                found,
                span,
                context,
            } => write!(
                f,
                "expected {}, got '{found}' in {context} at line {}, col {}",
                if expected.len() == 1 {
                    format!(
                        "token '{}'",
                        expected.first().expect("already checked that length is 1")
                    )
                } else {
                    format!(
                        "one of {}",
                        expected
                            .iter()
                            .enumerate()
                            .map(|(i, t)| {
                                format!(
                                    "{}'{t}'",
                                    if i == 0 {
                                        ""
                                    } else if i == expected.len() - 1 {
                                        " or "
                                    } else {
                                        ", "
                                    },
                                )
                            })
                            .collect::<String>()
                    )
                },
                span.loc.start.line,
                span.loc.start.column
            ),
            Self::Unexpected {
                found,
                span,
                message,
            } => write!(
                f,
                "unexpected token '{found}'{} at line {}, col {}",
                if let Some(m) = message {
                    format!(", {m}")
                } else {
                    String::new()
                },
                span.loc.start.line,
                span.loc.start.column
            ),
            Self::AbruptEnd => f.write_str("abrupt end"),
            Self::General { message, position } => write!(
                f,
                "{message} at line {}, col {}",
                position.line, position.column
            ),
            Self::Lex { err } => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex { err } => Some(err),
            _ => None,
        }
    }
}
