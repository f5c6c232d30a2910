//! Control-flow statements: `return`, `break`, `continue`, `throw`,
//! `debugger` and `with`.

use super::super::{state::ContextFlags, Parser};
use crate::{
    error::ParseResult,
    lexer::{Keyword, Punctuator, TokenKind},
};
use sparrow_ast::{
    expression::Identifier,
    statement::{
        BreakStatement, ContinueStatement, DebuggerStatement, ReturnStatement, ThrowStatement,
        WithStatement,
    },
    Statement,
};

impl Parser<'_> {
    /// Parses a `return` statement. The argument is a restricted
    /// production: a line terminator after `return` triggers ASI and the
    /// statement returns nothing.
    pub(crate) fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        let start = self.mark();
        if !self.state.has(ContextFlags::IN_FUNCTION) {
            return Err(self.unexpected("'return' is only valid inside functions"));
        }
        self.check_keyword_escapes()?;
        self.cursor.expect_keyword(Keyword::Return, "return statement")?;

        let argument = if self.return_argument_ahead() {
            Some(self.with_flags(
                ContextFlags::ALLOW_IN,
                ContextFlags::empty(),
                Self::parse_expression,
            )?)
        } else {
            None
        };
        self.cursor.consume_semicolon("return statement")?;
        let span = self.finish(start);
        Ok(Statement::Return(ReturnStatement::new(argument, span)))
    }

    fn return_argument_ahead(&self) -> bool {
        let token = self.cursor.peek();
        !token.newline_before()
            && !matches!(
                token.kind(),
                TokenKind::Eof
                    | TokenKind::Punctuator(Punctuator::Semicolon | Punctuator::CloseBlock)
            )
    }

    /// Parses a `break` statement and resolves its optional label.
    pub(crate) fn parse_break_statement(&mut self) -> ParseResult<Statement> {
        let start = self.mark();
        self.check_keyword_escapes()?;
        self.cursor.expect_keyword(Keyword::Break, "break statement")?;

        let label = self.parse_flow_label()?;
        match &label {
            Some(ident) => {
                if self.state.label_visible(&ident.name).is_none() {
                    return Err(self.error_at(
                        ident.span,
                        format!("use of undeclared label '{}'", ident.name),
                    ));
                }
            }
            None => {
                if self.state.loop_depth == 0 && self.state.switch_depth == 0 {
                    return Err(self.error_at(start, "illegal break statement"));
                }
            }
        }
        self.cursor.consume_semicolon("break statement")?;
        let span = self.finish(start);
        Ok(Statement::Break(BreakStatement::new(label, span)))
    }

    /// Parses a `continue` statement. A labeled `continue` must target a
    /// label of an iteration statement.
    pub(crate) fn parse_continue_statement(&mut self) -> ParseResult<Statement> {
        let start = self.mark();
        self.check_keyword_escapes()?;
        self.cursor.expect_keyword(Keyword::Continue, "continue statement")?;

        let label = self.parse_flow_label()?;
        match &label {
            Some(ident) => match self.state.label_visible(&ident.name) {
                None => {
                    return Err(self.error_at(
                        ident.span,
                        format!("use of undeclared label '{}'", ident.name),
                    ));
                }
                Some(label) if !label.iteration => {
                    return Err(self.error_at(
                        ident.span,
                        format!("label '{}' does not mark an iteration statement", ident.name),
                    ));
                }
                Some(_) => {}
            },
            None => {
                if self.state.loop_depth == 0 {
                    return Err(self.error_at(start, "illegal continue statement"));
                }
            }
        }
        self.cursor.consume_semicolon("continue statement")?;
        let span = self.finish(start);
        Ok(Statement::Continue(ContinueStatement::new(label, span)))
    }

    /// The optional label of a `break`/`continue`: a same-line identifier.
    fn parse_flow_label(&mut self) -> ParseResult<Option<Identifier>> {
        let token = self.cursor.peek();
        if token.newline_before() {
            return Ok(None);
        }
        let name: Box<str> = match token.kind() {
            TokenKind::Identifier => token.lexeme().into(),
            TokenKind::Keyword(Keyword::Yield) => "yield".into(),
            TokenKind::Keyword(Keyword::Await) => "await".into(),
            _ => return Ok(None),
        };
        let span = token.span();
        self.check_reference_name(&name, span)?;
        self.cursor.advance();
        Ok(Some(Identifier::new(name, span)))
    }

    /// Parses a `throw` statement. A line terminator between `throw` and its
    /// argument is an error, never ASI.
    pub(crate) fn parse_throw_statement(&mut self) -> ParseResult<Statement> {
        let start = self.mark();
        self.check_keyword_escapes()?;
        self.cursor.expect_keyword(Keyword::Throw, "throw statement")?;
        if self.cursor.peek().newline_before() {
            return Err(self.error_at(start, "illegal newline after 'throw'"));
        }
        let argument = self.with_flags(
            ContextFlags::ALLOW_IN,
            ContextFlags::empty(),
            Self::parse_expression,
        )?;
        self.cursor.consume_semicolon("throw statement")?;
        let span = self.finish(start);
        Ok(Statement::Throw(ThrowStatement::new(argument, span)))
    }

    pub(crate) fn parse_debugger_statement(&mut self) -> ParseResult<Statement> {
        let start = self.mark();
        self.check_keyword_escapes()?;
        self.cursor.expect_keyword(Keyword::Debugger, "debugger statement")?;
        self.cursor.consume_semicolon("debugger statement")?;
        let span = self.finish(start);
        Ok(Statement::Debugger(DebuggerStatement::new(span)))
    }

    /// Parses a `with` statement. Sloppy mode only.
    pub(crate) fn parse_with_statement(&mut self) -> ParseResult<Statement> {
        let start = self.mark();
        if self.state.strict() {
            return Err(self.error_at(start, "'with' statements are not allowed in strict mode"));
        }
        self.check_keyword_escapes()?;
        self.cursor.expect_keyword(Keyword::With, "with statement")?;
        self.cursor.expect(Punctuator::OpenParen, "with statement")?;
        let object = self.with_flags(
            ContextFlags::ALLOW_IN,
            ContextFlags::empty(),
            Self::parse_expression,
        )?;
        self.cursor.expect(Punctuator::CloseParen, "with statement")?;
        let body = self.parse_single_statement()?;
        let span = self.finish(start);
        Ok(Statement::With(Box::new(WithStatement::new(
            object, body, span,
        ))))
    }
}
