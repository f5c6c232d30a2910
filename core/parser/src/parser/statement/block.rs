//! Block statement parsing.

use super::super::Parser;
use crate::{error::ParseResult, lexer::Punctuator};
use sparrow_ast::statement::BlockStatement;

impl Parser<'_> {
    /// Parses a `{ … }` block with its own lexical scope frame.
    pub(crate) fn parse_block_statement(&mut self) -> ParseResult<BlockStatement> {
        self.state.scopes.push_block();
        let result = self.parse_block_in_current_frame();
        self.state.scopes.pop();
        result
    }

    /// Parses a `{ … }` block into the scope frame the caller prepared.
    /// Catch clauses and function bodies bind their parameters in the same
    /// frame as the block statements, which is what makes
    /// `catch (e) { let e }` a redeclaration.
    pub(crate) fn parse_block_in_current_frame(&mut self) -> ParseResult<BlockStatement> {
        let start = self.mark();
        self.cursor.expect(Punctuator::OpenBlock, "block statement")?;
        let body = self.parse_statement_list(true)?;
        self.cursor.expect(Punctuator::CloseBlock, "block statement")?;
        let span = self.finish(start);
        Ok(BlockStatement::new(body, span))
    }
}
