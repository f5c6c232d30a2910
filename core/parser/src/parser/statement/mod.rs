//! Statement and declaration parsing.
//!
//! More information:
//!  - [MDN documentation][mdn]
//!  - [ECMAScript specification][spec]
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Statements
//! [spec]: https://tc39.es/ecma262/#sec-ecmascript-language-statements-and-declarations

mod block;
mod declaration;
mod flow;
mod if_stm;
mod iteration;
mod module;
mod switch;
mod try_stm;
mod variable;

use super::{state::Label, Parser};
use crate::{
    error::ParseResult,
    lexer::{Keyword, Punctuator, TokenKind},
};
use sparrow_ast::{
    expression::Identifier,
    statement::{EmptyStatement, ExpressionStatement, LabeledStatement},
    Statement,
};

impl Parser<'_> {
    /// Parses a statement list item: a declaration or a statement.
    ///
    /// More information:
    ///  - [ECMAScript specification][spec]
    ///
    /// [spec]: https://tc39.es/ecma262/#prod-StatementListItem
    pub(crate) fn parse_statement_list_item(&mut self) -> ParseResult<Statement> {
        // Every statement is a fresh cover-grammar boundary.
        self.state.paren_non_simple_target = None;
        match self.cursor.peek().kind() {
            TokenKind::Keyword(Keyword::Function) => self.parse_function_declaration(false, false),
            TokenKind::Keyword(Keyword::Class) => self.parse_class_declaration(),
            TokenKind::Keyword(Keyword::Const) => self.parse_lexical_declaration_statement(),
            TokenKind::Keyword(Keyword::Import)
                if !matches!(
                    self.cursor.peek_at(1).kind(),
                    TokenKind::Punctuator(Punctuator::OpenParen | Punctuator::Dot)
                ) =>
            {
                self.parse_import_declaration()
            }
            TokenKind::Keyword(Keyword::Export) => self.parse_export_declaration(),
            TokenKind::Identifier if self.async_function_ahead() => {
                self.parse_function_declaration(true, false)
            }
            TokenKind::Identifier if self.let_declaration_ahead(false) => {
                self.parse_lexical_declaration_statement()
            }
            _ => self.parse_statement(),
        }
    }

    /// Parses the body of an `if`, a loop, `with` or a labeled statement:
    /// a single statement in which declarations are not admitted.
    ///
    /// Sloppy mode additionally tolerates a plain function declaration here
    /// (Annex B); it neither contributes to the lexically declared names of
    /// the enclosing scope nor hoists.
    pub(crate) fn parse_single_statement(&mut self) -> ParseResult<Statement> {
        let token = self.cursor.peek();
        match token.kind() {
            TokenKind::Keyword(Keyword::Class) => {
                Err(self.unexpected("class declarations are not allowed here"))
            }
            TokenKind::Keyword(Keyword::Const) => {
                Err(self.unexpected("lexical declarations are not allowed here"))
            }
            TokenKind::Keyword(Keyword::Function) => {
                if self.state.strict() {
                    return Err(self.unexpected(
                        "function declarations are not allowed here in strict mode",
                    ));
                }
                self.parse_function_declaration(false, true)
            }
            TokenKind::Identifier if self.async_function_ahead() => {
                Err(self.unexpected("async function declarations are not allowed here"))
            }
            TokenKind::Identifier
                if self.cursor.check_contextual("let")
                    && self.cursor.peek_at(1).kind()
                        == &TokenKind::Punctuator(Punctuator::OpenBracket) =>
            {
                // `let [` is unconditionally a declaration, which this
                // position cannot hold.
                Err(self.unexpected("lexical declarations are not allowed here"))
            }
            TokenKind::Identifier if self.let_declaration_ahead(true) => {
                Err(self.unexpected("lexical declarations are not allowed here"))
            }
            _ => self.parse_statement(),
        }
    }

    /// Parses a single statement.
    ///
    /// More information:
    ///  - [ECMAScript specification][spec]
    ///
    /// [spec]: https://tc39.es/ecma262/#prod-Statement
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.cursor.peek().kind() {
            TokenKind::Punctuator(Punctuator::OpenBlock) => {
                Ok(Statement::Block(self.parse_block_statement()?))
            }
            TokenKind::Punctuator(Punctuator::Semicolon) => {
                let span = self.cursor.advance().span();
                Ok(Statement::Empty(EmptyStatement::new(span)))
            }
            TokenKind::Keyword(Keyword::Var) => self.parse_variable_statement(),
            TokenKind::Keyword(Keyword::If) => self.parse_if_statement(),
            TokenKind::Keyword(Keyword::Do) => self.parse_do_while_statement(),
            TokenKind::Keyword(Keyword::While) => self.parse_while_statement(),
            TokenKind::Keyword(Keyword::For) => self.parse_for_statement(),
            TokenKind::Keyword(Keyword::Switch) => self.parse_switch_statement(),
            TokenKind::Keyword(Keyword::Continue) => self.parse_continue_statement(),
            TokenKind::Keyword(Keyword::Break) => self.parse_break_statement(),
            TokenKind::Keyword(Keyword::Return) => self.parse_return_statement(),
            TokenKind::Keyword(Keyword::Throw) => self.parse_throw_statement(),
            TokenKind::Keyword(Keyword::Try) => self.parse_try_statement(),
            TokenKind::Keyword(Keyword::With) => self.parse_with_statement(),
            TokenKind::Keyword(Keyword::Debugger) => self.parse_debugger_statement(),
            TokenKind::Keyword(Keyword::Function) => {
                Err(self.unexpected("unexpected function declaration"))
            }
            TokenKind::Keyword(Keyword::Class) => {
                Err(self.unexpected("unexpected class declaration"))
            }
            TokenKind::Identifier | TokenKind::Keyword(Keyword::Yield | Keyword::Await)
                if self.cursor.peek_at(1).kind()
                    == &TokenKind::Punctuator(Punctuator::Colon) =>
            {
                self.parse_labeled_statement()
            }
            _ => self.parse_expression_statement(),
        }
    }

    /// Whether `async function` starts here on one line, with a literal
    /// `async`.
    pub(crate) fn async_function_ahead(&self) -> bool {
        self.cursor.check_contextual("async")
            && self.cursor.peek_at(1).kind() == &TokenKind::Keyword(Keyword::Function)
            && !self.cursor.peek_at(1).newline_before()
    }

    /// Decides the `let` ambiguity: whether a leading `let` identifier token
    /// opens a lexical declaration.
    ///
    /// `let [` always does. `let {`, `let <ident>`, `let yield`, `let await`
    /// do as well, except in a statement-only context when a line terminator
    /// separates the two tokens, where ASI turns `let` into an expression
    /// statement. An escaped `let` is never a declaration keyword.
    pub(crate) fn let_declaration_ahead(&self, single_statement: bool) -> bool {
        if !self.cursor.check_contextual("let") {
            return false;
        }
        let next = self.cursor.peek_at(1);
        match next.kind() {
            TokenKind::Punctuator(Punctuator::OpenBracket) => true,
            TokenKind::Punctuator(Punctuator::OpenBlock)
            | TokenKind::Identifier
            | TokenKind::Keyword(Keyword::Yield | Keyword::Await) => {
                !(single_statement && next.newline_before())
            }
            _ => false,
        }
    }

    // ---- labeled statements ----------------------------------------------

    fn parse_labeled_statement(&mut self) -> ParseResult<Statement> {
        let start = self.mark();
        let token = self.cursor.advance();
        let name: Box<str> = match token.kind() {
            TokenKind::Identifier => token.lexeme().into(),
            TokenKind::Keyword(Keyword::Yield) => "yield".into(),
            TokenKind::Keyword(Keyword::Await) => "await".into(),
            _ => return Err(self.unexpected("expected a label")),
        };
        let label_span = token.span();
        self.check_reference_name(&name, label_span)?;
        self.cursor.expect(Punctuator::Colon, "labeled statement")?;

        if self.state.label_visible(&name).is_some() {
            return Err(self.error_at(label_span, format!("label '{name}' has already been declared")));
        }

        let iteration = self.iteration_statement_ahead();
        self.state.labels.push(Label {
            name: name.clone(),
            iteration,
        });
        let body = self.parse_single_statement();
        self.state.labels.pop();
        let body = body?;

        let span = self.finish(start);
        Ok(Statement::Labeled(Box::new(LabeledStatement::new(
            Identifier::new(name, label_span),
            body,
            span,
        ))))
    }

    /// Whether the statement ahead, past any further `label:` prefixes, is
    /// an iteration statement. Labels over iteration statements are the ones
    /// `continue` may target.
    fn iteration_statement_ahead(&self) -> bool {
        let mut index = self.cursor.index();
        loop {
            let token = self.cursor.token_at(index);
            match token.kind() {
                TokenKind::Keyword(Keyword::While | Keyword::Do | Keyword::For) => return true,
                TokenKind::Identifier | TokenKind::Keyword(Keyword::Yield | Keyword::Await)
                    if self.cursor.token_at(index + 1).kind()
                        == &TokenKind::Punctuator(Punctuator::Colon) =>
                {
                    index += 2;
                }
                _ => return false,
            }
        }
    }

    // ---- expression statements -------------------------------------------

    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        // A statement is a fresh cover-grammar boundary.
        self.state.paren_non_simple_target = None;
        let start = self.mark();
        let expression = self.parse_expression()?;
        self.cursor.consume_semicolon("expression statement")?;
        let span = self.finish(start);
        Ok(Statement::Expression(ExpressionStatement::new(
            expression, span,
        )))
    }
}
