//! Variable statement and lexical declaration parsing.
//!
//! More information:
//!  - [MDN documentation][mdn]
//!  - [ECMAScript specification][spec]
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Statements/var
//! [spec]: https://tc39.es/ecma262/#sec-declarations-and-the-variable-statement

use super::super::{scope::Declare, Parser};
use crate::{
    error::ParseResult,
    lexer::{Keyword, Punctuator},
};
use sparrow_ast::{
    declaration::{VariableDeclaration, VariableDeclarator, VariableKind},
    pattern::Pattern,
    Statement,
};

impl Parser<'_> {
    /// Parses a `var` statement.
    pub(crate) fn parse_variable_statement(&mut self) -> ParseResult<Statement> {
        let start = self.mark();
        self.check_keyword_escapes()?;
        self.cursor.expect_keyword(Keyword::Var, "variable statement")?;
        let declarations = self.parse_variable_declarations(VariableKind::Var, false)?;
        self.cursor.consume_semicolon("variable statement")?;
        let span = self.finish(start);
        Ok(Statement::VariableDeclaration(VariableDeclaration::new(
            VariableKind::Var,
            declarations,
            span,
        )))
    }

    /// Parses a `let` or `const` declaration statement.
    pub(crate) fn parse_lexical_declaration_statement(&mut self) -> ParseResult<Statement> {
        let start = self.mark();
        let kind = if self.cursor.check_keyword(Keyword::Const) {
            self.check_keyword_escapes()?;
            self.cursor.advance();
            VariableKind::Const
        } else {
            // The dispatcher only sends us here for an escape-free `let`.
            self.cursor.advance();
            VariableKind::Let
        };
        let declarations = self.parse_variable_declarations(kind, false)?;
        self.cursor.consume_semicolon("lexical declaration")?;
        let span = self.finish(start);
        Ok(Statement::VariableDeclaration(VariableDeclaration::new(
            kind,
            declarations,
            span,
        )))
    }

    /// Parses a comma-separated declarator list, declaring every bound name
    /// as it goes.
    ///
    /// With `in_for_head`, the initializer requirements (`const` and
    /// destructuring declarations must be initialized) are deferred to the
    /// `for` parser, which only enforces them when the head turns out not to
    /// be a `for-in`/`for-of`.
    pub(crate) fn parse_variable_declarations(
        &mut self,
        kind: VariableKind,
        in_for_head: bool,
    ) -> ParseResult<Vec<VariableDeclarator>> {
        let mut declarations = Vec::new();
        loop {
            let start = self.mark();
            let pattern = self.parse_binding_pattern()?;
            self.declare_pattern(&pattern, kind)?;

            let init = if self.cursor.eat(Punctuator::Assign) {
                Some(self.parse_assignment_expression()?)
            } else {
                None
            };
            if init.is_none() && !in_for_head {
                if kind == VariableKind::Const {
                    return Err(self.error_at(
                        start,
                        "missing initializer in const declaration",
                    ));
                }
                if !matches!(pattern, Pattern::Identifier(_)) {
                    return Err(self.error_at(
                        start,
                        "missing initializer in destructuring declaration",
                    ));
                }
            }

            let span = self.finish(start);
            declarations.push(VariableDeclarator::new(pattern, init, span));
            if !self.cursor.eat(Punctuator::Comma) {
                break;
            }
        }
        Ok(declarations)
    }

    /// Declares every name a pattern binds, under the given declaration
    /// kind.
    pub(crate) fn declare_pattern(
        &mut self,
        pattern: &Pattern,
        kind: VariableKind,
    ) -> ParseResult<()> {
        let mut names = Vec::new();
        Self::bound_names(pattern, &mut names);
        for (name, span) in names {
            if kind.is_lexical() && &*name == "let" {
                return Err(self.error_at(
                    span,
                    "'let' is not a valid lexical binding name",
                ));
            }
            let declared = if kind.is_lexical() {
                self.state.scopes.declare_lexical(&name)
            } else {
                self.state.scopes.declare_var(&name)
            };
            if declared == Declare::Redeclared {
                return Err(self.error_at(
                    span,
                    format!("'{name}' has already been declared"),
                ));
            }
        }
        Ok(())
    }
}
