//! Error implementation for the lexer.

use sparrow_ast::Position;
use std::fmt;

/// An error that occurred during the lexing.
#[derive(Debug)]
pub struct Error {
    message: Box<str>,
    position: Position,
}

impl Error {
    /// Creates a new syntax error at the given position.
    pub(super) fn syntax<M>(message: M, position: Position) -> Self
    where
        M: Into<Box<str>>,
    {
        Self {
            message: message.into(),
            position,
        }
    }

    /// Gets the position the error occurred at.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Gets the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at line {}, col {}",
            self.message, self.position.line, self.position.column
        )
    }
}

impl std::error::Error for Error {}
