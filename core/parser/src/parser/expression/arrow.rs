//! Arrow function detection and parsing, plus the `yield` and `await`
//! expression keywords.
//!
//! Arrow detection is a token-level lookahead probe, not speculative
//! parsing: for a `(` the probe scans to the matching `)` and checks for a
//! `=>` on the same line; for a plain identifier it checks the next token.
//! The probe never commits the cursor, so a failed probe falls back to the
//! ordinary expression grammar with no rollback machinery.
//!
//! More information:
//!  - [ECMAScript specification][spec]
//!
//! [spec]: https://tc39.es/ecma262/#sec-arrow-function-definitions

use super::super::{state::ContextFlags, Parser};
use crate::{
    error::ParseResult,
    lexer::{Keyword, Punctuator, TokenKind},
};
use sparrow_ast::{
    expression::{AwaitExpression, Expression, YieldExpression},
    function::{ArrowFunctionBody, ArrowFunctionExpression},
    pattern::Pattern,
};

impl Parser<'_> {
    /// Whether `await` currently is an expression keyword: inside async
    /// functions, and at the top level of a module.
    pub(crate) fn await_is_keyword(&self) -> bool {
        self.state.has(ContextFlags::IN_ASYNC)
            || (self.is_module() && self.state.has(ContextFlags::AT_MODULE_TOP_LEVEL))
    }

    /// Parses an `await` expression.
    pub(crate) fn parse_await_expression(&mut self) -> ParseResult<Expression> {
        if self.state.has(ContextFlags::IN_FORMAL_PARAMETERS) {
            return Err(self.unexpected("'await' expressions cannot be used in parameter defaults"));
        }
        self.check_keyword_escapes()?;
        let start = self.mark();
        self.cursor.advance();
        let argument = self.parse_unary_expression()?;
        let span = self.finish(start);
        Ok(Expression::Await(Box::new(AwaitExpression::new(
            argument, span,
        ))))
    }

    /// Parses a `yield` expression inside a generator.
    pub(crate) fn parse_yield_expression(&mut self) -> ParseResult<Expression> {
        if self.state.has(ContextFlags::IN_FORMAL_PARAMETERS) {
            return Err(self.unexpected("'yield' expressions cannot be used in parameter defaults"));
        }
        self.check_keyword_escapes()?;
        let start = self.mark();
        self.cursor.advance();

        let delegate = !self.cursor.peek().newline_before() && self.cursor.eat(Punctuator::Mul);
        let argument = if delegate {
            Some(self.parse_assignment_expression()?)
        } else if !self.cursor.peek().newline_before() && self.expression_ahead() {
            Some(self.parse_assignment_expression()?)
        } else {
            None
        };
        let span = self.finish(start);
        Ok(Expression::Yield(Box::new(YieldExpression::new(
            argument, delegate, span,
        ))))
    }

    /// Whether the current token can begin an expression, for the optional
    /// `yield` argument.
    fn expression_ahead(&self) -> bool {
        !matches!(
            self.cursor.peek().kind(),
            TokenKind::Eof
                | TokenKind::Punctuator(
                    Punctuator::CloseParen
                        | Punctuator::CloseBracket
                        | Punctuator::CloseBlock
                        | Punctuator::Comma
                        | Punctuator::Semicolon
                        | Punctuator::Colon
                        | Punctuator::Question
                )
                | TokenKind::TemplateMiddle(_)
                | TokenKind::TemplateTail(_)
        )
    }

    // ---- arrow detection -------------------------------------------------

    /// Detects and parses an arrow function at the current token, returning
    /// `None` when the tokens are not an arrow head.
    pub(crate) fn try_parse_arrow_function(&mut self) -> ParseResult<Option<Expression>> {
        let token = self.cursor.peek();
        match token.kind() {
            // `async` can prefix an arrow only as a literal, escape-free
            // word with nothing but same-line tokens following.
            TokenKind::Identifier if token.lexeme() == "async" && !token.contains_escapes() => {
                let next = self.cursor.peek_at(1);
                if !next.newline_before() {
                    let is_ident_param = matches!(
                        next.kind(),
                        TokenKind::Identifier
                            | TokenKind::Keyword(Keyword::Yield | Keyword::Await)
                    );
                    if is_ident_param && self.arrow_follows(self.cursor.index() + 2) {
                        return Ok(Some(self.parse_arrow_function(true)?));
                    }
                    if next.kind() == &TokenKind::Punctuator(Punctuator::OpenParen)
                        && self.paren_arrow_probe(self.cursor.index() + 1)
                    {
                        return Ok(Some(self.parse_arrow_function(true)?));
                    }
                }
                // `async => …` uses `async` itself as the parameter.
                if self.arrow_follows(self.cursor.index() + 1) {
                    return Ok(Some(self.parse_arrow_function(false)?));
                }
                Ok(None)
            }
            TokenKind::Identifier
            | TokenKind::Keyword(Keyword::Yield)
            | TokenKind::Keyword(Keyword::Await) => {
                if self.arrow_follows(self.cursor.index() + 1) {
                    return Ok(Some(self.parse_arrow_function(false)?));
                }
                Ok(None)
            }
            TokenKind::Punctuator(Punctuator::OpenParen) => {
                if self.paren_arrow_probe(self.cursor.index()) {
                    return Ok(Some(self.parse_arrow_function(false)?));
                }
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    /// Whether the token at `index` is a `=>` with no line terminator before
    /// it.
    fn arrow_follows(&self, index: usize) -> bool {
        let token = self.cursor.token_at(index);
        token.kind() == &TokenKind::Punctuator(Punctuator::Arrow) && !token.newline_before()
    }

    /// Scans from the `(` at `index` to its matching `)`, respecting
    /// bracket nesting, and reports whether a same-line `=>` follows.
    fn paren_arrow_probe(&self, index: usize) -> bool {
        let mut depth = 0usize;
        let mut i = index;
        loop {
            let token = self.cursor.token_at(i);
            match token.kind() {
                TokenKind::Punctuator(
                    Punctuator::OpenParen | Punctuator::OpenBracket | Punctuator::OpenBlock,
                ) => depth += 1,
                TokenKind::Punctuator(
                    Punctuator::CloseParen | Punctuator::CloseBracket | Punctuator::CloseBlock,
                ) => {
                    if depth == 0 {
                        return false;
                    }
                    depth -= 1;
                    if depth == 0 {
                        return token.kind() == &TokenKind::Punctuator(Punctuator::CloseParen)
                            && self.arrow_follows(i + 1);
                    }
                }
                TokenKind::Eof => return false,
                _ => {}
            }
            i += 1;
        }
    }

    // ---- arrow parsing ---------------------------------------------------

    /// Parses an arrow function whose head the probe already confirmed.
    ///
    /// The async flag is set before parameter parsing so `await` is rejected
    /// as a parameter name of an async arrow; the generator flag of the
    /// surrounding function still governs `yield` in the parameters. The
    /// body inherits `new.target`, `super` and the class context from the
    /// enclosing function, which is what distinguishes arrows from ordinary
    /// functions.
    fn parse_arrow_function(&mut self, is_async: bool) -> ParseResult<Expression> {
        let start = self.mark();
        if is_async {
            self.cursor.advance();
        }

        self.state.scopes.push_function();
        let saved_labels = std::mem::take(&mut self.state.labels);
        let saved_loop = self.state.loop_depth;
        let saved_switch = self.state.switch_depth;
        self.state.loop_depth = 0;
        self.state.switch_depth = 0;

        let result = self.parse_arrow_function_inner(is_async, start);

        self.state.scopes.pop();
        self.state.labels = saved_labels;
        self.state.loop_depth = saved_loop;
        self.state.switch_depth = saved_switch;
        result
    }

    fn parse_arrow_function_inner(
        &mut self,
        is_async: bool,
        start: sparrow_ast::Span,
    ) -> ParseResult<Expression> {
        let async_set = if is_async {
            ContextFlags::IN_ASYNC
        } else {
            ContextFlags::empty()
        };
        let async_clear = if is_async {
            ContextFlags::empty()
        } else {
            ContextFlags::IN_ASYNC
        };

        // Parameters, in the enclosing generator context but the arrow's own
        // async context.
        let (params, simple) = self.with_flags(async_set, async_clear, |parser| {
            if parser.cursor.check(Punctuator::OpenParen) {
                parser.parse_formal_parameters()
            } else {
                let ident = parser.parse_binding_identifier()?;
                Ok((vec![Pattern::Identifier(ident)], true))
            }
        })?;
        self.check_parameters(&params, simple, true)?;

        self.cursor.expect(Punctuator::Arrow, "arrow function")?;

        let was_strict = self.state.strict();
        let (body, strict_after) = self.with_flags(
            ContextFlags::IN_FUNCTION | ContextFlags::ALLOW_IN | async_set,
            ContextFlags::IN_GENERATOR
                | ContextFlags::IN_FORMAL_PARAMETERS
                | ContextFlags::AT_MODULE_TOP_LEVEL
                | ContextFlags::IN_CLASS_FIELD_INIT
                | ContextFlags::IN_STATIC_BLOCK
                | async_clear,
            |parser| {
                if parser.cursor.check(Punctuator::OpenBlock) {
                    let block_start = parser.mark();
                    parser.cursor.expect(Punctuator::OpenBlock, "arrow function body")?;
                    let body =
                        parser.parse_directive_statement_list(Some(simple), true)?;
                    parser.cursor.expect(Punctuator::CloseBlock, "arrow function body")?;
                    let span = parser.finish(block_start);
                    Ok((
                        ArrowFunctionBody::Block(sparrow_ast::statement::BlockStatement::new(
                            body, span,
                        )),
                        parser.state.strict(),
                    ))
                } else {
                    let expr = parser.parse_assignment_expression()?;
                    Ok((
                        ArrowFunctionBody::Expression(Box::new(expr)),
                        parser.state.strict(),
                    ))
                }
            },
        )?;

        if strict_after && !was_strict {
            self.revalidate_parameters_strict(&params)?;
        }

        let span = self.finish(start);
        Ok(Expression::ArrowFunction(Box::new(
            ArrowFunctionExpression::new(params, body, is_async, span),
        )))
    }

    /// Re-validates parameter names after a `"use strict"` directive in the
    /// body turned the function strict.
    pub(crate) fn revalidate_parameters_strict(&self, params: &[Pattern]) -> ParseResult<()> {
        let mut names = Vec::new();
        for param in params {
            Self::bound_names(param, &mut names);
        }
        let mut seen = rustc_hash::FxHashSet::default();
        for (name, span) in names {
            if matches!(&*name, "eval" | "arguments") {
                return Err(
                    self.error_at(span, format!("cannot bind '{name}' in strict mode"))
                );
            }
            if Self::is_strict_reserved(&name) || &*name == "yield" {
                return Err(self.error_at(
                    span,
                    format!("'{name}' is a reserved word in strict mode"),
                ));
            }
            if !seen.insert(name.clone()) {
                return Err(self.error_at(span, format!("duplicate parameter name '{name}'")));
            }
        }
        Ok(())
    }
}
