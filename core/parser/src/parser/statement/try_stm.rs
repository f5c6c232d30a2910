//! Try statement parsing.
//!
//! More information:
//!  - [MDN documentation][mdn]
//!  - [ECMAScript specification][spec]
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Statements/try...catch
//! [spec]: https://tc39.es/ecma262/#prod-TryStatement

use super::super::{scope::Declare, Parser};
use crate::{
    error::ParseResult,
    lexer::{Keyword, Punctuator},
};
use sparrow_ast::{
    statement::{CatchClause, TryStatement},
    Statement,
};

impl Parser<'_> {
    pub(crate) fn parse_try_statement(&mut self) -> ParseResult<Statement> {
        let start = self.mark();
        self.check_keyword_escapes()?;
        self.cursor.expect_keyword(Keyword::Try, "try statement")?;
        let block = self.parse_block_statement()?;

        let handler = if self.cursor.check_keyword(Keyword::Catch) {
            Some(self.parse_catch_clause()?)
        } else {
            None
        };

        let finalizer = if self.cursor.check_keyword(Keyword::Finally) {
            self.check_keyword_escapes()?;
            self.cursor.advance();
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        if handler.is_none() && finalizer.is_none() {
            return Err(self.unexpected("missing 'catch' or 'finally' after 'try'"));
        }

        let span = self.finish(start);
        Ok(Statement::Try(Box::new(TryStatement::new(
            block, handler, finalizer, span,
        ))))
    }

    fn parse_catch_clause(&mut self) -> ParseResult<CatchClause> {
        let start = self.mark();
        self.check_keyword_escapes()?;
        self.cursor.expect_keyword(Keyword::Catch, "catch clause")?;

        if !self.cursor.check(Punctuator::OpenParen) {
            // Optional catch binding.
            let body = self.parse_block_statement()?;
            let span = self.finish(start);
            return Ok(CatchClause::new(None, body, span));
        }

        self.cursor.advance();
        // The parameter and the handler block share one frame, so a
        // redeclaration of the parameter inside the block is caught.
        self.state.scopes.push_block();
        let result = (|| {
            let param = self.parse_binding_pattern()?;
            let mut names = Vec::new();
            Self::bound_names(&param, &mut names);
            for (name, span) in names {
                if self.state.scopes.declare_lexical(&name) == Declare::Redeclared {
                    return Err(self.error_at(
                        span,
                        format!("'{name}' has already been declared"),
                    ));
                }
            }
            self.cursor.expect(Punctuator::CloseParen, "catch clause")?;
            let body = self.parse_block_in_current_frame()?;
            Ok((param, body))
        })();
        self.state.scopes.pop();
        let (param, body) = result?;

        let span = self.finish(start);
        Ok(CatchClause::new(Some(param), body, span))
    }
}
