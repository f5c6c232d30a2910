//! Switch statement parsing.
//!
//! More information:
//!  - [MDN documentation][mdn]
//!  - [ECMAScript specification][spec]
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Statements/switch
//! [spec]: https://tc39.es/ecma262/#prod-SwitchStatement

use super::super::{state::ContextFlags, Parser};
use crate::{
    error::ParseResult,
    lexer::{Keyword, Punctuator, TokenKind},
};
use sparrow_ast::{
    statement::{SwitchCase, SwitchStatement},
    Statement,
};

impl Parser<'_> {
    pub(crate) fn parse_switch_statement(&mut self) -> ParseResult<Statement> {
        let start = self.mark();
        self.check_keyword_escapes()?;
        self.cursor.expect_keyword(Keyword::Switch, "switch statement")?;
        self.cursor.expect(Punctuator::OpenParen, "switch statement")?;
        let discriminant = self.with_flags(
            ContextFlags::ALLOW_IN,
            ContextFlags::empty(),
            Self::parse_expression,
        )?;
        self.cursor.expect(Punctuator::CloseParen, "switch statement")?;
        self.cursor.expect(Punctuator::OpenBlock, "switch statement")?;

        // The entire case block shares one lexical scope.
        self.state.scopes.push_block();
        self.state.switch_depth += 1;
        let cases = self.parse_case_block();
        self.state.switch_depth -= 1;
        self.state.scopes.pop();
        let cases = cases?;

        let span = self.finish(start);
        Ok(Statement::Switch(Box::new(SwitchStatement::new(
            discriminant,
            cases,
            span,
        ))))
    }

    fn parse_case_block(&mut self) -> ParseResult<Vec<SwitchCase>> {
        let mut cases = Vec::new();
        let mut default_seen = false;
        loop {
            if self.cursor.eat(Punctuator::CloseBlock) {
                break;
            }
            let case_start = self.mark();
            let test = match self.cursor.peek().kind() {
                TokenKind::Keyword(Keyword::Case) => {
                    self.check_keyword_escapes()?;
                    self.cursor.advance();
                    let test = self.with_flags(
                        ContextFlags::ALLOW_IN,
                        ContextFlags::empty(),
                        Self::parse_expression,
                    )?;
                    Some(test)
                }
                TokenKind::Keyword(Keyword::Default) => {
                    if default_seen {
                        return Err(
                            self.unexpected("more than one 'default' clause in switch statement")
                        );
                    }
                    default_seen = true;
                    self.check_keyword_escapes()?;
                    self.cursor.advance();
                    None
                }
                _ => {
                    return Err(self.unexpected("expected 'case' or 'default'"));
                }
            };
            self.cursor.expect(Punctuator::Colon, "switch case")?;

            let mut consequent = Vec::new();
            while !matches!(
                self.cursor.peek().kind(),
                TokenKind::Keyword(Keyword::Case | Keyword::Default)
                    | TokenKind::Punctuator(Punctuator::CloseBlock)
                    | TokenKind::Eof
            ) {
                let item = self.parse_statement_list_item()?;
                self.check_cover_errors()?;
                consequent.push(item);
            }
            let span = self.finish(case_start);
            cases.push(SwitchCase::new(test, consequent, span));
        }
        Ok(cases)
    }
}
