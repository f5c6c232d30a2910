//! Iteration statement parsing: `while`, `do … while` and the three `for`
//! forms.
//!
//! More information:
//!  - [MDN documentation][mdn]
//!  - [ECMAScript specification][spec]
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Statements#Iterations
//! [spec]: https://tc39.es/ecma262/#sec-iteration-statements

use super::super::{state::ContextFlags, Parser};
use crate::{
    error::ParseResult,
    lexer::{Keyword, Punctuator, TokenKind},
};
use sparrow_ast::{
    declaration::{VariableDeclaration, VariableDeclarator, VariableKind},
    expression::Expression,
    pattern::Pattern,
    statement::{
        DoWhileStatement, ForInStatement, ForInit, ForOfStatement, ForStatement, ForTarget,
        WhileStatement,
    },
    Span, Statement,
};

/// The parsed head of a `for` statement before the `in`/`of`/`;` decides its
/// form.
enum ForHead {
    None,
    Declaration {
        kind: VariableKind,
        declarations: Vec<VariableDeclarator>,
        start: Span,
    },
    Expression(Expression),
}

impl Parser<'_> {
    pub(crate) fn parse_while_statement(&mut self) -> ParseResult<Statement> {
        let start = self.mark();
        self.check_keyword_escapes()?;
        self.cursor.expect_keyword(Keyword::While, "while statement")?;
        self.cursor.expect(Punctuator::OpenParen, "while statement")?;
        let test = self.with_flags(
            ContextFlags::ALLOW_IN,
            ContextFlags::empty(),
            Self::parse_expression,
        )?;
        self.cursor.expect(Punctuator::CloseParen, "while statement")?;
        let body = self.parse_loop_body()?;
        let span = self.finish(start);
        Ok(Statement::While(Box::new(WhileStatement::new(
            test, body, span,
        ))))
    }

    pub(crate) fn parse_do_while_statement(&mut self) -> ParseResult<Statement> {
        let start = self.mark();
        self.check_keyword_escapes()?;
        self.cursor.expect_keyword(Keyword::Do, "do-while statement")?;
        let body = self.parse_loop_body()?;
        self.cursor.expect_keyword(Keyword::While, "do-while statement")?;
        self.cursor.expect(Punctuator::OpenParen, "do-while statement")?;
        let test = self.with_flags(
            ContextFlags::ALLOW_IN,
            ContextFlags::empty(),
            Self::parse_expression,
        )?;
        self.cursor.expect(Punctuator::CloseParen, "do-while statement")?;
        // The semicolon after `do … while (…)` may always be inserted, even
        // without a line terminator.
        self.cursor.eat(Punctuator::Semicolon);
        let span = self.finish(start);
        Ok(Statement::DoWhile(Box::new(DoWhileStatement::new(
            body, test, span,
        ))))
    }

    /// Parses a loop body with the iteration depth raised, so `break` and
    /// `continue` resolve.
    fn parse_loop_body(&mut self) -> ParseResult<Statement> {
        self.state.loop_depth += 1;
        let body = self.parse_single_statement();
        self.state.loop_depth -= 1;
        body
    }

    pub(crate) fn parse_for_statement(&mut self) -> ParseResult<Statement> {
        let start = self.mark();
        self.check_keyword_escapes()?;
        self.cursor.expect_keyword(Keyword::For, "for statement")?;

        let is_await = if self.cursor.check_keyword(Keyword::Await) {
            if !self.await_is_keyword() {
                return Err(self.unexpected("'for await' is only valid in async contexts"));
            }
            self.check_keyword_escapes()?;
            self.cursor.advance();
            true
        } else {
            false
        };

        self.cursor.expect(Punctuator::OpenParen, "for statement")?;

        // A literal `async of` head is ambiguous with an async arrow and is
        // rejected if the statement turns out to be a plain for-of.
        let async_of = !is_await && self.cursor.check_contextual("async") && {
            let next = self.cursor.peek_at(1);
            matches!(next.kind(), TokenKind::Identifier)
                && next.lexeme() == "of"
                && !next.contains_escapes()
        };

        let mut head_frame = false;
        let head = if self.cursor.check(Punctuator::Semicolon) {
            ForHead::None
        } else if self.cursor.check_keyword(Keyword::Var) {
            let head_start = self.mark();
            self.check_keyword_escapes()?;
            self.cursor.advance();
            let declarations = self.with_flags(
                ContextFlags::empty(),
                ContextFlags::ALLOW_IN,
                |parser| parser.parse_variable_declarations(VariableKind::Var, true),
            )?;
            ForHead::Declaration {
                kind: VariableKind::Var,
                declarations,
                start: head_start,
            }
        } else if self.cursor.check_keyword(Keyword::Const) || self.let_declaration_ahead(false) {
            let head_start = self.mark();
            let kind = if self.cursor.check_keyword(Keyword::Const) {
                self.check_keyword_escapes()?;
                self.cursor.advance();
                VariableKind::Const
            } else {
                self.cursor.advance();
                VariableKind::Let
            };
            // Lexical bindings of the head live in their own frame enclosing
            // the body, so a `var` in the body clashes with them.
            self.state.scopes.push_block();
            head_frame = true;
            let declarations = self.with_flags(
                ContextFlags::empty(),
                ContextFlags::ALLOW_IN,
                |parser| parser.parse_variable_declarations(kind, true),
            )?;
            ForHead::Declaration {
                kind,
                declarations,
                start: head_start,
            }
        } else {
            self.state.paren_non_simple_target = None;
            let expr = self.with_flags(
                ContextFlags::empty(),
                ContextFlags::ALLOW_IN,
                Self::parse_expression,
            )?;
            ForHead::Expression(expr)
        };

        let result = self.parse_for_statement_tail(start, head, is_await, async_of);
        if head_frame {
            self.state.scopes.pop();
        }
        result
    }

    fn parse_for_statement_tail(
        &mut self,
        start: Span,
        head: ForHead,
        is_await: bool,
        async_of: bool,
    ) -> ParseResult<Statement> {
        if self.cursor.check_keyword(Keyword::In) && !matches!(head, ForHead::None) {
            if is_await {
                return Err(self.unexpected("'for await' requires an 'of' loop"));
            }
            self.cursor.advance();
            let left = self.for_target(head, true)?;
            let right = self.with_flags(
                ContextFlags::ALLOW_IN,
                ContextFlags::empty(),
                Self::parse_expression,
            )?;
            self.cursor.expect(Punctuator::CloseParen, "for-in statement")?;
            let body = self.parse_loop_body()?;
            let span = self.finish(start);
            return Ok(Statement::ForIn(Box::new(ForInStatement::new(
                left, right, body, span,
            ))));
        }

        if self.cursor.check_contextual("of") && !matches!(head, ForHead::None) {
            if async_of {
                return Err(self.error_at(
                    start,
                    "the left-hand side of a for-of loop may not be 'async'",
                ));
            }
            self.cursor.advance();
            let left = self.for_target(head, false)?;
            let right = self.with_flags(
                ContextFlags::ALLOW_IN,
                ContextFlags::empty(),
                Self::parse_assignment_expression,
            )?;
            self.cursor.expect(Punctuator::CloseParen, "for-of statement")?;
            let body = self.parse_loop_body()?;
            let span = self.finish(start);
            return Ok(Statement::ForOf(Box::new(ForOfStatement::new(
                left, right, body, is_await, span,
            ))));
        }

        // Classic three-clause loop.
        if is_await {
            return Err(self.error_at(start, "'for await' requires an 'of' loop"));
        }
        let init = match head {
            ForHead::None => None,
            ForHead::Declaration {
                kind,
                declarations,
                start: head_start,
            } => {
                self.enforce_for_initializers(kind, &declarations)?;
                let span = head_start.join(self.cursor.previous().span());
                Some(ForInit::VariableDeclaration(VariableDeclaration::new(
                    kind,
                    declarations,
                    span,
                )))
            }
            ForHead::Expression(expr) => Some(ForInit::Expression(expr)),
        };
        self.cursor.expect(Punctuator::Semicolon, "for statement")?;

        let test = if self.cursor.check(Punctuator::Semicolon) {
            None
        } else {
            Some(self.with_flags(
                ContextFlags::ALLOW_IN,
                ContextFlags::empty(),
                Self::parse_expression,
            )?)
        };
        self.cursor.expect(Punctuator::Semicolon, "for statement")?;

        let update = if self.cursor.check(Punctuator::CloseParen) {
            None
        } else {
            Some(self.with_flags(
                ContextFlags::ALLOW_IN,
                ContextFlags::empty(),
                Self::parse_expression,
            )?)
        };
        self.cursor.expect(Punctuator::CloseParen, "for statement")?;

        let body = self.parse_loop_body()?;
        let span = self.finish(start);
        Ok(Statement::For(Box::new(ForStatement::new(
            init, test, update, body, span,
        ))))
    }

    /// Resolves the head of a `for-in`/`for-of` into its loop target,
    /// enforcing the single-declarator and initializer rules.
    fn for_target(&mut self, head: ForHead, for_in: bool) -> ParseResult<ForTarget> {
        match head {
            ForHead::Declaration {
                kind,
                mut declarations,
                start,
            } => {
                if declarations.len() != 1 {
                    return Err(self.error_at(
                        start,
                        "for-in and for-of loops declare exactly one binding",
                    ));
                }
                let declarator = declarations.pop().expect("length checked above");
                if declarator.init.is_some() {
                    // Annex B tolerates `for (var x = 1 in y)` in sloppy
                    // code with a plain identifier binding.
                    let tolerated = for_in
                        && kind == VariableKind::Var
                        && !self.state.strict()
                        && matches!(declarator.id, Pattern::Identifier(_));
                    if !tolerated {
                        return Err(self.error_at(
                            declarator.span,
                            "for-in and for-of loop bindings may not have initializers",
                        ));
                    }
                }
                let span = start.join(declarator.span);
                Ok(ForTarget::VariableDeclaration(VariableDeclaration::new(
                    kind,
                    vec![declarator],
                    span,
                )))
            }
            ForHead::Expression(expr) => {
                if matches!(expr, Expression::Array(_) | Expression::Object(_)) {
                    if let Some(offset) = self.state.paren_non_simple_target {
                        if offset <= expr.span().start {
                            return Err(self.error_at(
                                expr.span(),
                                "invalid parenthesized assignment pattern",
                            ));
                        }
                    }
                }
                let pattern = self.expression_to_pattern(expr)?;
                if matches!(pattern, Pattern::Assignment(_)) {
                    return Err(self.error_at(
                        pattern.span(),
                        "invalid left-hand side in for loop",
                    ));
                }
                Ok(ForTarget::Pattern(pattern))
            }
            ForHead::None => unreachable!("callers exclude empty heads"),
        }
    }

    /// The initializer requirements of a classic `for` head, deferred while
    /// the head could still have become a `for-in`/`for-of`.
    fn enforce_for_initializers(
        &self,
        kind: VariableKind,
        declarations: &[VariableDeclarator],
    ) -> ParseResult<()> {
        for declarator in declarations {
            if declarator.init.is_none() {
                if kind == VariableKind::Const {
                    return Err(self.error_at(
                        declarator.span,
                        "missing initializer in const declaration",
                    ));
                }
                if !matches!(declarator.id, Pattern::Identifier(_)) {
                    return Err(self.error_at(
                        declarator.span,
                        "missing initializer in destructuring declaration",
                    ));
                }
            }
        }
        Ok(())
    }
}
