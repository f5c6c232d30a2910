//! Function parsing: declarations, expressions and methods share one core
//! that swaps the function-boundary context in and out around the parameter
//! list and body.
//!
//! More information:
//!  - [MDN documentation][mdn]
//!  - [ECMAScript specification][spec]
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Statements/function
//! [spec]: https://tc39.es/ecma262/#sec-function-definitions

use super::super::super::{scope::Declare, state::ContextFlags, Parser};
use crate::{
    error::ParseResult,
    lexer::{Keyword, Punctuator, TokenKind},
};
use sparrow_ast::{
    expression::Identifier,
    function::Function,
    pattern::Pattern,
    property::PropertyKind,
    statement::BlockStatement,
    NodeType, Span, Statement,
};

impl Parser<'_> {
    /// Parses a function, generator or async function declaration and
    /// declares its name.
    ///
    /// In a sloppy single-statement position (Annex B) the declaration is
    /// admitted but its name neither joins the lexically declared names of
    /// the enclosing scope nor hoists; generators and async functions stay
    /// rejected there.
    pub(crate) fn parse_function_declaration(
        &mut self,
        is_async: bool,
        single_statement: bool,
    ) -> ParseResult<Statement> {
        let start = self.mark();
        if is_async {
            if single_statement {
                return Err(
                    self.unexpected("async function declarations are not allowed here")
                );
            }
            self.cursor.advance();
        }
        self.check_keyword_escapes()?;
        if single_statement
            && self.cursor.peek_at(1).kind() == &TokenKind::Punctuator(Punctuator::Mul)
        {
            return Err(self.unexpected("generator declarations are not allowed here"));
        }

        let function =
            self.parse_function_common(NodeType::FunctionDeclaration, is_async, start, true)?;

        if !single_statement {
            let id = function.id.as_ref().expect("declaration name was required");
            let plain = !function.generator && !function.is_async;
            if self
                .state
                .scopes
                .declare_function(&id.name, plain, !self.state.strict())
                == Declare::Redeclared
            {
                return Err(self.error_at(
                    id.span,
                    format!("'{}' has already been declared", id.name),
                ));
            }
        }
        Ok(Statement::FunctionDeclaration(Box::new(function)))
    }

    /// Parses a function past any `async` prefix: the `function` keyword,
    /// an optional `*`, the optional name, parameters and body.
    ///
    /// `name_required` is set for declarations outside `export default`.
    /// The name of a declaration is validated against the enclosing context,
    /// the name of an expression against the function's own; both are
    /// re-validated when a late `"use strict"` directive turns the function
    /// strict.
    pub(crate) fn parse_function_common(
        &mut self,
        node_type: NodeType,
        is_async: bool,
        start: Span,
        name_required: bool,
    ) -> ParseResult<Function> {
        self.cursor.expect_keyword(Keyword::Function, "function")?;
        let generator = self.cursor.eat(Punctuator::Mul);
        let is_expression = node_type == NodeType::FunctionExpression;

        let id_parts: Option<(Box<str>, Span)> = match self.cursor.peek().kind() {
            TokenKind::Identifier => {
                let token = self.cursor.advance();
                Some((token.lexeme().into(), token.span()))
            }
            TokenKind::Keyword(Keyword::Yield) => {
                let token = self.cursor.advance();
                Some(("yield".into(), token.span()))
            }
            TokenKind::Keyword(Keyword::Await) => {
                let token = self.cursor.advance();
                Some(("await".into(), token.span()))
            }
            _ => None,
        };
        if name_required && id_parts.is_none() {
            return Err(self.unexpected("expected a function name"));
        }
        if !is_expression {
            if let Some((name, span)) = &id_parts {
                self.check_binding_name(name, *span)?;
            }
        }

        let was_strict = self.state.strict();
        let mut context = ContextFlags::IN_FUNCTION
            | ContextFlags::ALLOW_NEW_TARGET
            | ContextFlags::ALLOW_IN;
        if generator {
            context.insert(ContextFlags::IN_GENERATOR);
        }
        if is_async {
            context.insert(ContextFlags::IN_ASYNC);
        }
        let mut clear = ContextFlags::ALLOW_SUPER_CALL
            | ContextFlags::ALLOW_SUPER_PROPERTY
            | ContextFlags::IN_DERIVED_CLASS
            | ContextFlags::IN_STATIC_BLOCK
            | ContextFlags::IN_CLASS_FIELD_INIT
            | ContextFlags::IN_FORMAL_PARAMETERS
            | ContextFlags::AT_MODULE_TOP_LEVEL;
        if !generator {
            clear.insert(ContextFlags::IN_GENERATOR);
        }
        if !is_async {
            clear.insert(ContextFlags::IN_ASYNC);
        }

        self.state.scopes.push_function();
        let saved_labels = std::mem::take(&mut self.state.labels);
        let saved_loop = self.state.loop_depth;
        let saved_switch = self.state.switch_depth;
        self.state.loop_depth = 0;
        self.state.switch_depth = 0;

        let result = self.with_flags(context, clear, |parser| {
            if is_expression {
                if let Some((name, span)) = &id_parts {
                    parser.check_binding_name(name, *span)?;
                }
            }
            let (params, simple) = parser.parse_formal_parameters()?;
            parser.check_parameters(&params, simple, false)?;

            let body_start = parser.mark();
            parser.cursor.expect(Punctuator::OpenBlock, "function body")?;
            let body = parser.parse_directive_statement_list(Some(simple), true)?;
            parser.cursor.expect(Punctuator::CloseBlock, "function body")?;
            let body = BlockStatement::new(body, parser.finish(body_start));

            if parser.state.strict() {
                if let Some((name, span)) = &id_parts {
                    parser.check_function_name_strict(name, *span)?;
                }
                if !was_strict {
                    parser.revalidate_parameters_strict(&params)?;
                }
            }
            Ok((params, body))
        });

        self.state.scopes.pop();
        self.state.labels = saved_labels;
        self.state.loop_depth = saved_loop;
        self.state.switch_depth = saved_switch;
        let (params, body) = result?;

        let id = id_parts.map(|(name, span)| Identifier::new(name, span));
        let span = self.finish(start);
        Ok(Function::new(
            node_type, id, params, body, generator, is_async, span,
        ))
    }

    /// The strict-mode restrictions on a function name, applied after the
    /// body turned out to be strict.
    pub(crate) fn check_function_name_strict(&self, name: &str, span: Span) -> ParseResult<()> {
        if matches!(name, "eval" | "arguments") {
            return Err(self.error_at(
                span,
                format!("cannot name a strict function '{name}'"),
            ));
        }
        if Self::is_strict_reserved(name) || name == "yield" {
            return Err(self.error_at(
                span,
                format!("'{name}' is a reserved word in strict mode"),
            ));
        }
        Ok(())
    }

    /// Parses the parameter list and body of a method, getter, setter or
    /// constructor; the cursor sits on the `(`.
    pub(crate) fn parse_method_function(
        &mut self,
        is_async: bool,
        is_generator: bool,
        accessor: Option<PropertyKind>,
    ) -> ParseResult<Function> {
        self.parse_method_function_with_super(is_async, is_generator, accessor, false)
    }

    /// The method core. `allow_super_call` is set for the constructor of a
    /// derived class.
    pub(crate) fn parse_method_function_with_super(
        &mut self,
        is_async: bool,
        is_generator: bool,
        accessor: Option<PropertyKind>,
        allow_super_call: bool,
    ) -> ParseResult<Function> {
        let start = self.mark();
        let was_strict = self.state.strict();

        let mut context = ContextFlags::IN_FUNCTION
            | ContextFlags::ALLOW_NEW_TARGET
            | ContextFlags::ALLOW_SUPER_PROPERTY
            | ContextFlags::ALLOW_IN;
        if is_generator {
            context.insert(ContextFlags::IN_GENERATOR);
        }
        if is_async {
            context.insert(ContextFlags::IN_ASYNC);
        }
        if allow_super_call {
            // Only the constructor of a derived class can call `super`.
            context.insert(ContextFlags::ALLOW_SUPER_CALL | ContextFlags::IN_DERIVED_CLASS);
        }
        let mut clear = ContextFlags::IN_STATIC_BLOCK
            | ContextFlags::IN_CLASS_FIELD_INIT
            | ContextFlags::IN_FORMAL_PARAMETERS
            | ContextFlags::AT_MODULE_TOP_LEVEL;
        if !allow_super_call {
            clear.insert(ContextFlags::ALLOW_SUPER_CALL);
        }
        if !is_generator {
            clear.insert(ContextFlags::IN_GENERATOR);
        }
        if !is_async {
            clear.insert(ContextFlags::IN_ASYNC);
        }

        self.state.scopes.push_function();
        let saved_labels = std::mem::take(&mut self.state.labels);
        let saved_loop = self.state.loop_depth;
        let saved_switch = self.state.switch_depth;
        self.state.loop_depth = 0;
        self.state.switch_depth = 0;

        let result = self.with_flags(context, clear, |parser| {
            let (params, simple) = parser.parse_formal_parameters()?;
            match accessor {
                Some(PropertyKind::Get) if !params.is_empty() => {
                    return Err(parser.error_at(start, "getters cannot have parameters"));
                }
                Some(PropertyKind::Set)
                    if params.len() != 1 || matches!(params[0], Pattern::Rest(_)) =>
                {
                    return Err(parser.error_at(
                        start,
                        "setters must have exactly one non-rest parameter",
                    ));
                }
                _ => {}
            }
            parser.check_parameters(&params, simple, true)?;

            let body_start = parser.mark();
            parser.cursor.expect(Punctuator::OpenBlock, "method body")?;
            let body = parser.parse_directive_statement_list(Some(simple), true)?;
            parser.cursor.expect(Punctuator::CloseBlock, "method body")?;
            let body = BlockStatement::new(body, parser.finish(body_start));

            if parser.state.strict() && !was_strict {
                parser.revalidate_parameters_strict(&params)?;
            }
            Ok((params, body))
        });

        self.state.scopes.pop();
        self.state.labels = saved_labels;
        self.state.loop_depth = saved_loop;
        self.state.switch_depth = saved_switch;
        let (params, body) = result?;

        let span = self.finish(start);
        Ok(Function::new(
            NodeType::FunctionExpression,
            None,
            params,
            body,
            is_generator,
            is_async,
            span,
        ))
    }
}
