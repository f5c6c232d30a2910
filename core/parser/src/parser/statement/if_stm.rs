//! If statement parsing.
//!
//! More information:
//!  - [MDN documentation][mdn]
//!  - [ECMAScript specification][spec]
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Statements/if...else
//! [spec]: https://tc39.es/ecma262/#prod-IfStatement

use super::super::{state::ContextFlags, Parser};
use crate::{
    error::ParseResult,
    lexer::{Keyword, Punctuator},
};
use sparrow_ast::{statement::IfStatement, Statement};

impl Parser<'_> {
    pub(crate) fn parse_if_statement(&mut self) -> ParseResult<Statement> {
        let start = self.mark();
        self.check_keyword_escapes()?;
        self.cursor.expect_keyword(Keyword::If, "if statement")?;
        self.cursor.expect(Punctuator::OpenParen, "if statement")?;
        let test = self.with_flags(
            ContextFlags::ALLOW_IN,
            ContextFlags::empty(),
            Self::parse_expression,
        )?;
        self.cursor.expect(Punctuator::CloseParen, "if statement")?;

        let consequent = self.parse_single_statement()?;
        let alternate = if self.cursor.check_keyword(Keyword::Else) {
            self.check_keyword_escapes()?;
            self.cursor.advance();
            Some(self.parse_single_statement()?)
        } else {
            None
        };

        let span = self.finish(start);
        Ok(Statement::If(Box::new(IfStatement::new(
            test, consequent, alternate, span,
        ))))
    }
}
