//! ECMAScript parser implementation.
//!
//! The parser is a Pratt-style expression parser interlocked with a
//! recursive statement/declaration parser, both reading and writing a set of
//! cross-cutting context stacks: strictness, scope frames, labels,
//! private-name environments and the boolean context cluster.
//!
//! More information:
//!  - [ECMAScript specification][spec]
//!
//! [spec]: https://tc39.es/ecma262/#sec-ecmascript-language-source-code

mod cursor;
mod expression;
mod pattern;
mod scope;
mod state;
mod statement;

#[cfg(test)]
mod tests;

use crate::{
    error::{Error, ParseResult},
    lexer::{Keyword, Lexer, LineMap, Token, TokenKind},
    ParserOptions,
};
use sparrow_ast::{
    expression::Identifier, Location, Position, Program, Span, SourceType, Statement,
};

use self::{
    cursor::Cursor,
    state::{ContextFlags, ParserState},
};

/// Parser for the ECMAScript language.
///
/// A parser owns one source text and parses it exactly once; [`Parser::parse`]
/// consumes the instance, so an error can never leave stale scope or flag
/// state behind for a later parse to observe.
///
/// This parser implementation tries to be conformant to the most recent
/// [ECMAScript language specification][spec], including the full early-error
/// rule set and the [Annex B][annexb] sloppy-mode relaxations.
///
/// [spec]: https://tc39.es/ecma262/#sec-ecmascript-language-source-code
/// [annexb]: https://tc39.es/ecma262/#sec-additional-ecmascript-features-for-web-browsers
#[derive(Debug)]
pub struct Parser<'a> {
    source: &'a str,
    source_type: SourceType,
    cursor: Cursor,
    line_map: LineMap,
    state: ParserState,
}

impl<'a> Parser<'a> {
    /// Creates a new parser over the given source with default options.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, ParserOptions::default())
    }

    /// Creates a new parser over the given source.
    #[must_use]
    pub fn with_options(source: &'a str, options: ParserOptions) -> Self {
        let source_type = if options.force_module_mode {
            SourceType::Module
        } else {
            SourceType::Script
        };
        let mut state = ParserState::new();
        if options.force_strict_mode || options.force_module_mode {
            state.flags.insert(ContextFlags::STRICT);
        }
        if options.force_module_mode {
            state.flags.insert(ContextFlags::AT_MODULE_TOP_LEVEL);
        }
        Self {
            source,
            source_type,
            cursor: Cursor::new(vec![Token::new(
                TokenKind::Eof,
                "".into(),
                Span::new(0, 0, Location::new(Position::new(1, 0), Position::new(1, 0))),
                false,
            )]),
            line_map: LineMap::new(source),
            state,
        }
    }

    /// Parses the full input as a [`Program`].
    ///
    /// # Errors
    ///
    /// Returns the first syntax error of the source; no partial tree is
    /// produced.
    pub fn parse(mut self) -> ParseResult<Program> {
        let tokens = Lexer::new(self.source).tokenize()?;
        self.cursor = Cursor::new(tokens);
        self.state.scopes.push_function();

        let body = self.parse_directive_statement_list(None, false)?;

        // Private references not enclosed by any class resolve against
        // nothing and fail at program close, in the order encountered.
        if let Some(reference) = self.state.pending_private.first() {
            return Err(Error::general(
                format!("private name '#{}' is not declared", reference.name),
                reference.span.loc.start,
            ));
        }

        if self.source_type.is_module() {
            self.resolve_export_bindings()?;
        }

        let end = self.source.len() as u32;
        let span = Span::new(
            0,
            end,
            Location::new(
                self.line_map.position_at(self.source, 0),
                self.line_map.position_at(self.source, end),
            ),
        );
        Ok(Program::new(body, self.source_type, span))
    }

    /// Resolves every `export { x }` specifier against the module's
    /// top-level bindings, in the order encountered.
    fn resolve_export_bindings(&mut self) -> ParseResult<()> {
        for binding in &self.state.pending_exports {
            if !self.state.scopes.is_bound_at_top_level(&binding.name) {
                return Err(Error::general(
                    format!(
                        "exported binding '{}' is not declared in the module",
                        binding.name
                    ),
                    binding.span.loc.start,
                ));
            }
        }
        Ok(())
    }

    // ---- shared helpers --------------------------------------------------

    /// The raw source text of a span.
    pub(crate) fn raw(&self, span: Span) -> &'a str {
        &self.source[span.start as usize..span.end as usize]
    }

    /// The span of the current token, used as the start marker of a node.
    pub(crate) fn mark(&self) -> Span {
        self.cursor.peek().span()
    }

    /// The span from a start marker through the most recently consumed
    /// token.
    pub(crate) fn finish(&self, start: Span) -> Span {
        start.join(self.cursor.previous().span())
    }

    /// Whether the module goal is active.
    pub(crate) fn is_module(&self) -> bool {
        self.source_type.is_module()
    }

    /// Runs `f` with the given flags set and cleared, restoring the whole
    /// flag cluster afterwards, error or not.
    pub(crate) fn with_flags<T>(
        &mut self,
        set: ContextFlags,
        clear: ContextFlags,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let saved = self.state.flags;
        self.state.flags.insert(set);
        self.state.flags.remove(clear);
        let result = f(self);
        self.state.flags = saved;
        result
    }

    /// An error for the current token.
    pub(crate) fn unexpected(&self, message: &'static str) -> Error {
        let token = self.cursor.peek();
        Error::unexpected(token.display(), token.span(), message)
    }

    /// A general error at the start of the given span.
    pub(crate) fn error_at<S>(&self, span: Span, message: S) -> Error
    where
        S: Into<Box<str>>,
    {
        Error::general(message, span.loc.start)
    }

    // ---- identifiers -----------------------------------------------------

    /// The future reserved words of strict mode code.
    pub(crate) fn is_strict_reserved(name: &str) -> bool {
        matches!(
            name,
            "implements"
                | "interface"
                | "package"
                | "private"
                | "protected"
                | "public"
                | "static"
                | "let"
        )
    }

    /// Checks a name used as an identifier reference in the current context.
    ///
    /// `yield` and `await` are admitted as references exactly where they are
    /// not expression keywords: `yield` in sloppy non-generator code, `await`
    /// outside async contexts in scripts.
    pub(crate) fn check_reference_name(&self, name: &str, span: Span) -> ParseResult<()> {
        if self.state.strict() && Self::is_strict_reserved(name) {
            return Err(self.error_at(
                span,
                format!("'{name}' is a reserved word in strict mode"),
            ));
        }
        if name == "yield" && (self.state.strict() || self.state.has(ContextFlags::IN_GENERATOR)) {
            return Err(self.error_at(span, "'yield' is a reserved word here"));
        }
        if name == "await"
            && (self.is_module()
                || self.state.has(ContextFlags::IN_ASYNC)
                || self.state.has(ContextFlags::IN_STATIC_BLOCK))
        {
            return Err(self.error_at(span, "'await' is a reserved word here"));
        }
        if name == "arguments"
            && (self.state.has(ContextFlags::IN_CLASS_FIELD_INIT)
                || self.state.has(ContextFlags::IN_STATIC_BLOCK))
        {
            return Err(self.error_at(
                span,
                "'arguments' is not allowed in class field initializers or static blocks",
            ));
        }
        Ok(())
    }

    /// Parses an identifier reference, the expression use of a name.
    pub(crate) fn parse_identifier_reference(&mut self) -> ParseResult<Identifier> {
        let token = self.cursor.peek();
        let span = token.span();
        let name: Box<str> = match token.kind() {
            TokenKind::Identifier => token.lexeme().into(),
            TokenKind::Keyword(Keyword::Yield) => "yield".into(),
            TokenKind::Keyword(Keyword::Await) => "await".into(),
            _ => return Err(self.unexpected("expected an identifier")),
        };
        self.check_reference_name(&name, span)?;
        self.cursor.advance();
        Ok(Identifier::new(name, span))
    }

    /// Checks a name against the binding restrictions of the current
    /// context.
    pub(crate) fn check_binding_name(&self, name: &str, span: Span) -> ParseResult<()> {
        if self.state.strict() {
            if name == "eval" || name == "arguments" {
                return Err(self.error_at(
                    span,
                    format!("cannot bind '{name}' in strict mode"),
                ));
            }
            if Self::is_strict_reserved(name) {
                return Err(self.error_at(
                    span,
                    format!("'{name}' is a reserved word in strict mode"),
                ));
            }
        }
        if name == "yield" && (self.state.strict() || self.state.has(ContextFlags::IN_GENERATOR)) {
            return Err(self.error_at(span, "cannot bind 'yield' here"));
        }
        if name == "await"
            && (self.is_module()
                || self.state.has(ContextFlags::IN_ASYNC)
                || self.state.has(ContextFlags::IN_STATIC_BLOCK))
        {
            return Err(self.error_at(span, "cannot bind 'await' here"));
        }
        Ok(())
    }

    /// Parses a binding identifier: a name a declaration introduces.
    pub(crate) fn parse_binding_identifier(&mut self) -> ParseResult<Identifier> {
        let token = self.cursor.peek();
        let span = token.span();
        let name: Box<str> = match token.kind() {
            TokenKind::Identifier => token.lexeme().into(),
            // Conditionally reserved words bind in the contexts where they
            // are plain names; check_binding_name rejects the rest.
            TokenKind::Keyword(Keyword::Yield) => "yield".into(),
            TokenKind::Keyword(Keyword::Await) => "await".into(),
            _ => return Err(self.unexpected("expected a binding identifier")),
        };
        self.check_binding_name(&name, span)?;
        self.cursor.advance();
        Ok(Identifier::new(name, span))
    }

    /// Parses an identifier name: the relaxed form after `.` or in property
    /// keys, where every keyword is an ordinary name.
    pub(crate) fn parse_identifier_name(&mut self) -> ParseResult<Identifier> {
        let token = self.cursor.peek();
        let span = token.span();
        let name: Box<str> = match token.kind() {
            TokenKind::Identifier => token.lexeme().into(),
            TokenKind::Keyword(k) => k.as_str().into(),
            TokenKind::BooleanLiteral(b) => if *b { "true" } else { "false" }.into(),
            TokenKind::NullLiteral => "null".into(),
            _ => return Err(self.unexpected("expected an identifier name")),
        };
        self.cursor.advance();
        Ok(Identifier::new(name, span))
    }

    // ---- statement lists and the directive prologue ----------------------

    /// Parses a statement list with no directive prologue, stopping at `}`
    /// when `inside_block` is set, at end of input otherwise.
    pub(crate) fn parse_statement_list(
        &mut self,
        inside_block: bool,
    ) -> ParseResult<Vec<Statement>> {
        let mut body = Vec::new();
        loop {
            if inside_block {
                if self.cursor.check(crate::lexer::Punctuator::CloseBlock) {
                    break;
                }
                if self.cursor.at_end() {
                    return Err(Error::AbruptEnd);
                }
            } else if self.cursor.at_end() {
                break;
            }
            let item = self.parse_statement_list_item()?;
            self.check_cover_errors()?;
            body.push(item);
        }
        Ok(body)
    }

    /// Parses a statement list processing its directive prologue: `"use
    /// strict"` switches the parser to strict mode the moment it is seen, and
    /// every earlier directive is retro-validated against the legacy-octal
    /// escape rule.
    ///
    /// `simple_params` is the simple-parameter-list bit of the enclosing
    /// function, or `None` at program level; a `"use strict"` directive in a
    /// function with a non-simple parameter list is an error.
    pub(crate) fn parse_directive_statement_list(
        &mut self,
        simple_params: Option<bool>,
        inside_block: bool,
    ) -> ParseResult<Vec<Statement>> {
        let mut body = Vec::new();
        let mut in_prologue = true;
        let mut prologue_strings: Vec<(bool, Span)> = Vec::new();

        loop {
            if inside_block {
                if self.cursor.check(crate::lexer::Punctuator::CloseBlock) {
                    break;
                }
                if self.cursor.at_end() {
                    return Err(Error::AbruptEnd);
                }
            } else if self.cursor.at_end() {
                break;
            }

            if !in_prologue {
                let item = self.parse_statement_list_item()?;
                self.check_cover_errors()?;
                body.push(item);
                continue;
            }

            let token = self.cursor.peek();
            let candidate_span = token.span();
            let candidate_octal = match token.kind() {
                TokenKind::StringLiteral {
                    legacy_octal_escape,
                    ..
                } => Some(*legacy_octal_escape),
                _ => None,
            };

            let mut item = self.parse_statement_list_item()?;
            self.check_cover_errors()?;

            let directive = candidate_octal.is_some()
                && matches!(&item, Statement::Expression(stmt)
                    if stmt.span.start == candidate_span.start
                        && stmt.expression.span() == candidate_span);
            if directive {
                let raw = self.raw(candidate_span);
                let text: Box<str> = raw[1..raw.len() - 1].into();
                prologue_strings.push((candidate_octal.unwrap_or(false), candidate_span));
                let is_use_strict = &*text == "use strict";
                if let Statement::Expression(stmt) = &mut item {
                    stmt.directive = Some(text);
                }
                if is_use_strict {
                    if simple_params == Some(false) {
                        return Err(self.error_at(
                            candidate_span,
                            "illegal 'use strict' directive in function with non-simple parameter list",
                        ));
                    }
                    if let Some((_, span)) =
                        prologue_strings.iter().find(|(octal, _)| *octal)
                    {
                        return Err(self.error_at(
                            *span,
                            "legacy octal escape sequences are not allowed in strict mode",
                        ));
                    }
                    self.state.flags.insert(ContextFlags::STRICT);
                }
            } else {
                in_prologue = false;
            }
            body.push(item);
        }
        Ok(body)
    }

    /// Raises the first deferred cover-grammar error, if any. Called at the
    /// end of every statement, once any destructuring conversion that could
    /// have cleared the errors has had its chance.
    pub(crate) fn check_cover_errors(&mut self) -> ParseResult<()> {
        if let Some(error) = self.state.cover_errors.first() {
            return Err(Error::general(error.message, error.position));
        }
        self.state.spread_trailing_commas.clear();
        Ok(())
    }
}
