//! Sparrow's **`sparrow_parser`** crate contains the lexer and parser for
//! the ECMAScript language.
//!
//! # Crate Overview
//! The parser consumes the token vector the [`lexer`] produces and emits an
//! ESTree-shaped [`sparrow_ast`] tree, enforcing the full early-error rule
//! set of the language specification along the way: redeclarations, reserved
//! words, cover-grammar resolution, restricted productions, strict-mode
//! restrictions, label resolution, private-name resolution and module export
//! checks.
//!
//! The parser is not error-recovering: the first violation surfaces as an
//! [`Error`] and no partial tree is produced. A [`Parser`] is consumed by
//! its parse, so stale context can never leak between parses; build a fresh
//! one to reparse.
//!
//! # Example
//!
//! ```
//! use sparrow_parser::Parser;
//!
//! let program = Parser::new("let answer = 6 * 7;").parse().unwrap();
//! assert_eq!(program.body.len(), 1);
//! ```
//!
//! # Sparrow Crates
//!  - **sparrow_ast** - Sparrow's ECMAScript Abstract Syntax Tree.
//!  - **sparrow_parser** - Sparrow's lexer and parser.

pub mod error;
pub mod lexer;
mod parser;

pub use self::{
    error::{Error, ParseResult},
    lexer::Lexer,
    parser::Parser,
};

/// Configuration of a [`Parser`].
///
/// These are the only recognized options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Parse the source as a module. Implies strict mode and enables the
    /// module-only constructs.
    pub force_module_mode: bool,
    /// Begin in strict mode even when parsing a script.
    pub force_strict_mode: bool,
}

impl ParserOptions {
    /// Options for parsing a module.
    #[must_use]
    pub const fn module() -> Self {
        Self {
            force_module_mode: true,
            force_strict_mode: false,
        }
    }

    /// Options for parsing a script that starts out strict.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            force_module_mode: false,
            force_strict_mode: true,
        }
    }
}
