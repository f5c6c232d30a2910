//! Primary expression parsing: literals, identifiers, `this`, `super`,
//! parenthesized expressions, array and object initializers, templates,
//! `new`, dynamic `import`, and the subscript loop that grows them into
//! member accesses, calls and optional chains.
//!
//! More information:
//!  - [ECMAScript specification][spec]
//!
//! [spec]: https://tc39.es/ecma262/#prod-PrimaryExpression

use super::super::{
    state::{ContextFlags, CoverError},
    Parser,
};
use crate::{
    error::ParseResult,
    lexer::{Keyword, Numeric, NumericFlavor, Punctuator, TokenKind},
};
use sparrow_ast::{
    expression::{
        ArrayExpression, CallExpression, ChainExpression, Expression, ExpressionOrSpread,
        Identifier, ImportExpression, Literal, LiteralValue, MemberExpression, MetaProperty,
        NewExpression, ObjectExpression, ObjectExpressionProperty, PrivateIdentifier,
        SpreadElement, SuperExpression, TaggedTemplateExpression, TemplateElement,
        TemplateLiteral, ThisExpression,
    },
    property::{Property, PropertyKind},
    AssignOp, Location, NodeType, Span,
};

impl Parser<'_> {
    /// Parses a primary expression, dispatching on the leading token.
    pub(crate) fn parse_primary_expression(&mut self) -> ParseResult<Expression> {
        let token = self.cursor.peek();
        match token.kind() {
            TokenKind::Keyword(Keyword::This) => {
                self.check_keyword_escapes()?;
                let span = self.cursor.advance().span();
                Ok(Expression::This(ThisExpression::new(span)))
            }
            TokenKind::Keyword(Keyword::Super) => self.parse_super_expression(),
            TokenKind::Keyword(Keyword::Import) => self.parse_import_call_or_meta(),
            TokenKind::Keyword(Keyword::Function) => {
                self.check_keyword_escapes()?;
                let start = self.mark();
                let function = self.parse_function_common(
                    NodeType::FunctionExpression,
                    false,
                    start,
                    false,
                )?;
                Ok(Expression::Function(Box::new(function)))
            }
            TokenKind::Keyword(Keyword::Class) => {
                self.check_keyword_escapes()?;
                let class = self.parse_class_common(NodeType::ClassExpression, false)?;
                Ok(Expression::Class(Box::new(class)))
            }
            TokenKind::Identifier
                if token.lexeme() == "async"
                    && !token.contains_escapes()
                    && self.cursor.peek_at(1).kind() == &TokenKind::Keyword(Keyword::Function)
                    && !self.cursor.peek_at(1).newline_before() =>
            {
                let start = self.mark();
                self.cursor.advance();
                let function = self.parse_function_common(
                    NodeType::FunctionExpression,
                    true,
                    start,
                    false,
                )?;
                Ok(Expression::Function(Box::new(function)))
            }
            TokenKind::Identifier
            | TokenKind::Keyword(Keyword::Yield)
            | TokenKind::Keyword(Keyword::Await) => {
                Ok(Expression::Identifier(self.parse_identifier_reference()?))
            }
            TokenKind::BooleanLiteral(_)
            | TokenKind::NullLiteral
            | TokenKind::NumericLiteral { .. }
            | TokenKind::StringLiteral { .. }
            | TokenKind::RegularExpressionLiteral { .. } => {
                Ok(Expression::Literal(self.parse_literal()?))
            }
            TokenKind::TemplateNoSubstitution(_) | TokenKind::TemplateHead(_) => {
                let template = self.parse_template_literal(false)?;
                Ok(Expression::TemplateLiteral(Box::new(template)))
            }
            TokenKind::Punctuator(Punctuator::OpenBracket) => self.parse_array_literal(),
            TokenKind::Punctuator(Punctuator::OpenBlock) => self.parse_object_literal(),
            TokenKind::Punctuator(Punctuator::OpenParen) => {
                self.parse_parenthesized_expression()
            }
            TokenKind::PrivateIdentifier => self.parse_private_in_test(),
            _ => Err(self.unexpected("expected an expression")),
        }
    }

    /// Rejects a keyword written with Unicode escapes in a keyword position.
    pub(crate) fn check_keyword_escapes(&self) -> ParseResult<()> {
        let token = self.cursor.peek();
        if token.contains_escapes() {
            return Err(self.error_at(
                token.span(),
                "keywords must not contain escaped characters",
            ));
        }
        Ok(())
    }

    // ---- literals --------------------------------------------------------

    /// Parses one literal token into a [`Literal`] node, enforcing the
    /// strict-mode restrictions on legacy octal forms.
    pub(crate) fn parse_literal(&mut self) -> ParseResult<Literal> {
        let token = self.cursor.peek();
        let span = token.span();
        let literal = match token.kind() {
            TokenKind::BooleanLiteral(value) => {
                if token.contains_escapes() {
                    return Err(self.error_at(
                        span,
                        "keywords must not contain escaped characters",
                    ));
                }
                Literal::new(
                    LiteralValue::Boolean(*value),
                    self.raw(span).into(),
                    span,
                )
            }
            TokenKind::NullLiteral => {
                if token.contains_escapes() {
                    return Err(self.error_at(
                        span,
                        "keywords must not contain escaped characters",
                    ));
                }
                Literal::new(LiteralValue::Null, self.raw(span).into(), span)
            }
            TokenKind::StringLiteral {
                value,
                legacy_octal_escape,
                ..
            } => {
                if *legacy_octal_escape && self.state.strict() {
                    return Err(self.error_at(
                        span,
                        "legacy octal escape sequences are not allowed in strict mode",
                    ));
                }
                Literal::new(
                    LiteralValue::String(value.clone()),
                    self.raw(span).into(),
                    span,
                )
            }
            TokenKind::NumericLiteral { value, flavor } => {
                if matches!(
                    flavor,
                    NumericFlavor::LegacyOctal | NumericFlavor::NonOctalDecimal
                ) && self.state.strict()
                {
                    return Err(self.error_at(
                        span,
                        "legacy octal literals are not allowed in strict mode",
                    ));
                }
                match value {
                    Numeric::Number(number) => Literal::new(
                        LiteralValue::Number(*number),
                        self.raw(span).into(),
                        span,
                    ),
                    Numeric::BigInt(digits) => {
                        Literal::bigint(digits.clone(), self.raw(span).into(), span)
                    }
                }
            }
            TokenKind::RegularExpressionLiteral { pattern, flags } => Literal::regex(
                pattern.clone(),
                flags.clone(),
                self.raw(span).into(),
                span,
            ),
            _ => return Err(self.unexpected("expected a literal")),
        };
        self.cursor.advance();
        Ok(literal)
    }

    // ---- super, private names, import ------------------------------------

    fn parse_super_expression(&mut self) -> ParseResult<Expression> {
        self.check_keyword_escapes()?;
        let span = self.cursor.peek().span();
        match self.cursor.peek_at(1).kind() {
            TokenKind::Punctuator(Punctuator::OpenParen) => {
                if !self.state.has(ContextFlags::ALLOW_SUPER_CALL) {
                    return Err(self.error_at(
                        span,
                        "'super' calls are only valid in derived class constructors",
                    ));
                }
            }
            TokenKind::Punctuator(Punctuator::Dot | Punctuator::OpenBracket) => {
                if !self.state.has(ContextFlags::ALLOW_SUPER_PROPERTY) {
                    return Err(self.error_at(
                        span,
                        "'super' properties are only valid in methods and class elements",
                    ));
                }
            }
            TokenKind::Punctuator(Punctuator::Optional) => {
                return Err(self.error_at(span, "'super' cannot start an optional chain"));
            }
            _ => return Err(self.error_at(span, "unexpected 'super'")),
        }
        self.cursor.advance();
        Ok(Expression::Super(SuperExpression::new(span)))
    }

    /// Parses a `#name in obj` test. A private name in any other expression
    /// position is an error.
    fn parse_private_in_test(&mut self) -> ParseResult<Expression> {
        let token = self.cursor.peek();
        let span = token.span();
        let name: Box<str> = token.lexeme().into();
        if !self.state.has(ContextFlags::ALLOW_IN) || !matches!(
            self.cursor.peek_at(1).kind(),
            TokenKind::Keyword(Keyword::In)
        ) {
            return Err(self.error_at(span, "unexpected private name"));
        }
        self.cursor.advance();
        self.state.record_private_reference(name.clone(), span);
        Ok(Expression::PrivateIdentifier(PrivateIdentifier::new(
            name, span,
        )))
    }

    fn parse_import_call_or_meta(&mut self) -> ParseResult<Expression> {
        self.check_keyword_escapes()?;
        let start = self.mark();
        match self.cursor.peek_at(1).kind() {
            TokenKind::Punctuator(Punctuator::Dot) => {
                self.cursor.advance();
                self.cursor.advance();
                let meta = Identifier::new("import".into(), start);
                if !self.cursor.check_contextual("meta") {
                    return Err(self.unexpected("expected 'meta' after 'import.'"));
                }
                if !self.is_module() {
                    return Err(self.error_at(start, "'import.meta' is only valid in modules"));
                }
                let property = self.parse_identifier_name()?;
                let span = self.finish(start);
                Ok(Expression::MetaProperty(MetaProperty::new(
                    meta, property, span,
                )))
            }
            TokenKind::Punctuator(Punctuator::OpenParen) => {
                self.cursor.advance();
                self.cursor.expect(Punctuator::OpenParen, "import call")?;
                self.with_flags(ContextFlags::ALLOW_IN, ContextFlags::empty(), |parser| {
                    let source = parser.parse_assignment_expression()?;
                    let mut options = None;
                    if parser.cursor.eat(Punctuator::Comma)
                        && !parser.cursor.check(Punctuator::CloseParen)
                    {
                        options = Some(parser.parse_assignment_expression()?);
                        parser.cursor.eat(Punctuator::Comma);
                    }
                    parser.cursor.expect(Punctuator::CloseParen, "import call")?;
                    let span = parser.finish(start);
                    Ok(Expression::Import(Box::new(ImportExpression::new(
                        source, options, span,
                    ))))
                })
            }
            _ => Err(self.unexpected("unexpected 'import' outside a declaration")),
        }
    }

    // ---- parenthesized cover ---------------------------------------------

    /// Parses a parenthesized expression, the expression half of the
    /// arrow-parameter cover grammar; the arrow half is taken earlier by the
    /// lookahead probe.
    fn parse_parenthesized_expression(&mut self) -> ParseResult<Expression> {
        self.cursor.expect(Punctuator::OpenParen, "parenthesized expression")?;
        let expr = self.with_flags(
            ContextFlags::ALLOW_IN,
            ContextFlags::empty(),
            Self::parse_expression,
        )?;
        self.cursor
            .expect(Punctuator::CloseParen, "parenthesized expression")?;
        let span = expr.span();
        self.state.last_parenthesized = Some((span.start, span.end));
        if !Self::is_simple_target(&expr) {
            self.state.paren_non_simple_target = Some(span.start);
        }
        Ok(expr)
    }

    // ---- array and object initializers -----------------------------------

    fn parse_array_literal(&mut self) -> ParseResult<Expression> {
        let start = self.mark();
        self.cursor.expect(Punctuator::OpenBracket, "array literal")?;
        let mut elements: Vec<Option<ExpressionOrSpread>> = Vec::new();
        let mut comma_after_spread = false;

        self.with_flags(ContextFlags::ALLOW_IN, ContextFlags::empty(), |parser| {
            loop {
                if parser.cursor.eat(Punctuator::CloseBracket) {
                    break;
                }
                // A comma in element position is an elision.
                if parser.cursor.eat(Punctuator::Comma) {
                    elements.push(None);
                    continue;
                }
                let element = if parser.cursor.check(Punctuator::Spread) {
                    let spread_start = parser.mark();
                    parser.cursor.advance();
                    let argument = parser.parse_assignment_expression()?;
                    let span = parser.finish(spread_start);
                    ExpressionOrSpread::Spread(SpreadElement::new(argument, span))
                } else {
                    ExpressionOrSpread::Expression(parser.parse_assignment_expression()?)
                };
                let was_spread = matches!(element, ExpressionOrSpread::Spread(_));
                elements.push(Some(element));
                if parser.cursor.eat(Punctuator::Comma) {
                    if was_spread && parser.cursor.check(Punctuator::CloseBracket) {
                        comma_after_spread = true;
                    }
                    continue;
                }
                parser
                    .cursor
                    .expect(Punctuator::CloseBracket, "array literal")?;
                break;
            }
            Ok(())
        })?;

        let span = self.finish(start);
        if comma_after_spread {
            self.state.spread_trailing_commas.insert(span.start);
        }
        Ok(Expression::Array(Box::new(ArrayExpression::new(
            elements, span,
        ))))
    }

    fn parse_object_literal(&mut self) -> ParseResult<Expression> {
        let start = self.mark();
        self.cursor.expect(Punctuator::OpenBlock, "object literal")?;
        let mut properties = Vec::new();
        let mut proto_count = 0u32;
        let mut comma_after_spread = false;

        self.with_flags(ContextFlags::ALLOW_IN, ContextFlags::empty(), |parser| {
            loop {
                if parser.cursor.eat(Punctuator::CloseBlock) {
                    break;
                }
                if parser.cursor.check(Punctuator::Spread) {
                    let spread_start = parser.mark();
                    parser.cursor.advance();
                    let argument = parser.parse_assignment_expression()?;
                    let span = parser.finish(spread_start);
                    properties.push(ObjectExpressionProperty::Spread(SpreadElement::new(
                        argument, span,
                    )));
                } else {
                    let property = parser.parse_object_property(&mut proto_count)?;
                    properties.push(ObjectExpressionProperty::Property(property));
                }
                if parser.cursor.eat(Punctuator::Comma) {
                    if parser.cursor.check(Punctuator::CloseBlock)
                        && matches!(
                            properties.last(),
                            Some(ObjectExpressionProperty::Spread(_))
                        )
                    {
                        comma_after_spread = true;
                    }
                    continue;
                }
                parser.cursor.expect(Punctuator::CloseBlock, "object literal")?;
                break;
            }
            Ok(())
        })?;

        let span = self.finish(start);
        if comma_after_spread {
            self.state.spread_trailing_commas.insert(span.start);
        }
        Ok(Expression::Object(Box::new(ObjectExpression::new(
            properties, span,
        ))))
    }

    /// Parses one property of an object literal: plain, shorthand, method,
    /// accessor, or the `{x = v}` cover form that only a destructuring
    /// conversion can legitimize.
    fn parse_object_property(&mut self, proto_count: &mut u32) -> ParseResult<Property> {
        let start = self.mark();

        // Accessor and async/generator prefixes. A `get`/`set`/`async` token
        // directly followed by `:`/`,`/`}`/`(`/`=` is an ordinary key.
        let mut kind = PropertyKind::Init;
        let mut is_async = false;
        let mut is_generator = false;

        if (self.cursor.check_contextual("get") || self.cursor.check_contextual("set"))
            && !Self::ends_property_name(self.cursor.peek_at(1).kind())
        {
            kind = if self.cursor.check_contextual("get") {
                PropertyKind::Get
            } else {
                PropertyKind::Set
            };
            self.cursor.advance();
        } else if self.cursor.check_contextual("async")
            && !self.cursor.peek_at(1).newline_before()
            && !Self::ends_property_name(self.cursor.peek_at(1).kind())
        {
            is_async = true;
            self.cursor.advance();
            if self.cursor.eat(Punctuator::Mul) {
                is_generator = true;
            }
        } else if self.cursor.eat(Punctuator::Mul) {
            is_generator = true;
        }

        let (key, computed) = self.parse_property_key()?;

        if kind != PropertyKind::Init {
            let function = self.parse_method_function(false, false, Some(kind))?;
            let span = self.finish(start);
            return Ok(Property::new(
                key,
                Expression::Function(Box::new(function)),
                kind,
                computed,
                false,
                false,
                span,
            ));
        }

        if is_async || is_generator || self.cursor.check(Punctuator::OpenParen) {
            let function = self.parse_method_function(is_async, is_generator, None)?;
            let span = self.finish(start);
            return Ok(Property::new(
                key,
                Expression::Function(Box::new(function)),
                PropertyKind::Init,
                computed,
                true,
                false,
                span,
            ));
        }

        if self.cursor.eat(Punctuator::Colon) {
            if !computed && Self::is_proto_key(&key) {
                *proto_count += 1;
                if *proto_count > 1 {
                    self.state.cover_errors.push(CoverError {
                        offset: start.start,
                        position: start.loc.start,
                        message: "duplicate '__proto__' properties are not allowed in object literals",
                    });
                }
            }
            let value = self.parse_assignment_expression()?;
            let span = self.finish(start);
            return Ok(Property::new(
                key,
                value,
                PropertyKind::Init,
                computed,
                false,
                false,
                span,
            ));
        }

        // Shorthand property, possibly the covered `{x = v}` form.
        let Expression::Identifier(ident) = &key else {
            return Err(self.unexpected("expected ':' after property key"));
        };
        if computed {
            return Err(self.unexpected("expected ':' after computed property key"));
        }
        self.check_reference_name(&ident.name, ident.span)?;

        if self.cursor.check(Punctuator::Assign) {
            self.state.cover_errors.push(CoverError {
                offset: start.start,
                position: self.cursor.peek().span().loc.start,
                message: "shorthand property initializers are only valid in destructuring patterns",
            });
            self.cursor.advance();
            let default = self.parse_assignment_expression()?;
            let span = self.finish(start);
            let value = Expression::Assignment(Box::new(
                sparrow_ast::expression::AssignmentExpression::new(
                    AssignOp::Assign,
                    sparrow_ast::expression::AssignmentTarget::Expression(key.clone()),
                    default,
                    span,
                ),
            ));
            return Ok(Property::new(
                key,
                value,
                PropertyKind::Init,
                false,
                false,
                true,
                span,
            ));
        }

        let span = self.finish(start);
        Ok(Property::new(
            key.clone(),
            key,
            PropertyKind::Init,
            false,
            false,
            true,
            span,
        ))
    }

    /// Whether a token after `get`/`set`/`async` means the word was the
    /// property name itself.
    fn ends_property_name(kind: &TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::Punctuator(
                Punctuator::Colon
                    | Punctuator::Comma
                    | Punctuator::CloseBlock
                    | Punctuator::OpenParen
                    | Punctuator::Assign
            ) | TokenKind::Eof
        )
    }

    fn is_proto_key(key: &Expression) -> bool {
        match key {
            Expression::Identifier(ident) => &*ident.name == "__proto__",
            Expression::Literal(literal) => literal.as_string() == Some("__proto__"),
            _ => false,
        }
    }

    /// Parses a property key: an identifier name, string or number literal,
    /// or a computed `[expr]` key.
    pub(crate) fn parse_property_key(&mut self) -> ParseResult<(Expression, bool)> {
        match self.cursor.peek().kind() {
            TokenKind::Punctuator(Punctuator::OpenBracket) => {
                self.cursor.advance();
                let key = self.with_flags(
                    ContextFlags::ALLOW_IN,
                    ContextFlags::empty(),
                    Self::parse_assignment_expression,
                )?;
                self.cursor.expect(Punctuator::CloseBracket, "computed property key")?;
                Ok((key, true))
            }
            TokenKind::StringLiteral { .. } | TokenKind::NumericLiteral { .. } => {
                Ok((Expression::Literal(self.parse_literal()?), false))
            }
            TokenKind::PrivateIdentifier => {
                Err(self.unexpected("private names are only valid in classes"))
            }
            _ => Ok((Expression::Identifier(self.parse_identifier_name()?), false)),
        }
    }

    // ---- templates -------------------------------------------------------

    /// Parses a template literal. `tagged` templates tolerate undecodable
    /// escape sequences by carrying a null cooked value; untagged templates
    /// reject them.
    pub(crate) fn parse_template_literal(&mut self, tagged: bool) -> ParseResult<TemplateLiteral> {
        let start = self.mark();
        let mut quasis = Vec::new();
        let mut expressions = Vec::new();

        let token = self.cursor.advance();
        match token.kind() {
            TokenKind::TemplateNoSubstitution(ts) => {
                let element =
                    self.template_element(&ts.raw, ts.cooked.clone(), true, token.span(), 1)?;
                if !tagged && element.value.cooked.is_none() {
                    return Err(self.error_at(
                        token.span(),
                        "invalid escape sequence in template literal",
                    ));
                }
                quasis.push(element);
            }
            TokenKind::TemplateHead(ts) => {
                let element =
                    self.template_element(&ts.raw, ts.cooked.clone(), false, token.span(), 2)?;
                if !tagged && element.value.cooked.is_none() {
                    return Err(self.error_at(
                        token.span(),
                        "invalid escape sequence in template literal",
                    ));
                }
                quasis.push(element);
                loop {
                    let expression = self.with_flags(
                        ContextFlags::ALLOW_IN,
                        ContextFlags::empty(),
                        Self::parse_expression,
                    )?;
                    expressions.push(expression);
                    let token = self.cursor.advance();
                    match token.kind() {
                        TokenKind::TemplateMiddle(ts) => {
                            let element = self.template_element(
                                &ts.raw,
                                ts.cooked.clone(),
                                false,
                                token.span(),
                                2,
                            )?;
                            if !tagged && element.value.cooked.is_none() {
                                return Err(self.error_at(
                                    token.span(),
                                    "invalid escape sequence in template literal",
                                ));
                            }
                            quasis.push(element);
                        }
                        TokenKind::TemplateTail(ts) => {
                            let element = self.template_element(
                                &ts.raw,
                                ts.cooked.clone(),
                                true,
                                token.span(),
                                1,
                            )?;
                            if !tagged && element.value.cooked.is_none() {
                                return Err(self.error_at(
                                    token.span(),
                                    "invalid escape sequence in template literal",
                                ));
                            }
                            quasis.push(element);
                            break;
                        }
                        _ => {
                            // The lexer only emits middle and tail tokens
                            // when the substitution braces match.
                            return Err(
                                self.error_at(token.span(), "unterminated template literal")
                            );
                        }
                    }
                }
            }
            _ => return Err(self.unexpected("expected a template literal")),
        }

        let span = self.finish(start);
        Ok(TemplateLiteral::new(quasis, expressions, span))
    }

    /// Builds one template element with a synthesized interior span: the
    /// token span minus the delimiters, located through the line map.
    fn template_element(
        &self,
        raw: &str,
        cooked: Option<Box<str>>,
        tail: bool,
        token_span: Span,
        end_trim: u32,
    ) -> ParseResult<TemplateElement> {
        let start = token_span.start + 1;
        let end = token_span.end - end_trim;
        let span = Span::new(
            start,
            end,
            Location::new(
                self.line_map.position_at(self.source, start),
                self.line_map.position_at(self.source, end),
            ),
        );
        Ok(TemplateElement::new(raw.into(), cooked, tail, span))
    }

    // ---- new, subscripts, calls ------------------------------------------

    /// Parses a `new` expression or the `new.target` meta property.
    pub(crate) fn parse_new_expression(&mut self) -> ParseResult<Expression> {
        self.check_keyword_escapes()?;
        let start = self.mark();
        self.cursor.expect_keyword(Keyword::New, "new expression")?;

        if self.cursor.eat(Punctuator::Dot) {
            if !self.cursor.check_contextual("target") {
                return Err(self.unexpected("expected 'target' after 'new.'"));
            }
            if !self.state.has(ContextFlags::ALLOW_NEW_TARGET) {
                return Err(self.error_at(start, "'new.target' is only valid inside functions"));
            }
            let meta = Identifier::new("new".into(), start);
            let property = self.parse_identifier_name()?;
            let span = self.finish(start);
            return Ok(Expression::MetaProperty(MetaProperty::new(
                meta, property, span,
            )));
        }

        let callee = if self.cursor.check_keyword(Keyword::New) {
            self.parse_new_expression()?
        } else {
            let primary = self.parse_primary_expression()?;
            self.parse_subscripts(primary, false)?
        };
        if matches!(callee, Expression::Super(_)) {
            return Err(self.error_at(callee.span(), "'super' cannot be constructed"));
        }

        let arguments = if self.cursor.check(Punctuator::OpenParen) {
            self.parse_arguments()?
        } else {
            Vec::new()
        };
        let span = self.finish(start);
        Ok(Expression::New(Box::new(NewExpression::new(
            callee, arguments, span,
        ))))
    }

    /// Grows an expression with member accesses, calls, tagged templates and
    /// optional chains. `allow_call` is false in `new` callee position,
    /// which also outlaws optional chains there.
    pub(crate) fn parse_subscripts(
        &mut self,
        mut lhs: Expression,
        allow_call: bool,
    ) -> ParseResult<Expression> {
        let mut in_chain = false;

        loop {
            match self.cursor.peek().kind() {
                TokenKind::Punctuator(Punctuator::Dot) => {
                    self.cursor.advance();
                    let property = self.parse_member_property()?;
                    let span = lhs.span().join(property.span());
                    lhs = Expression::Member(Box::new(MemberExpression::new(
                        lhs, property, false, false, span,
                    )));
                }
                TokenKind::Punctuator(Punctuator::OpenBracket) => {
                    if self.arrow_asi_applies(&lhs) {
                        break;
                    }
                    self.cursor.advance();
                    let property = self.with_flags(
                        ContextFlags::ALLOW_IN,
                        ContextFlags::empty(),
                        Self::parse_expression,
                    )?;
                    self.cursor.expect(Punctuator::CloseBracket, "member access")?;
                    let span = self.finish(lhs.span());
                    lhs = Expression::Member(Box::new(MemberExpression::new(
                        lhs, property, true, false, span,
                    )));
                }
                TokenKind::Punctuator(Punctuator::OpenParen) if allow_call => {
                    if self.arrow_asi_applies(&lhs) {
                        break;
                    }
                    let arguments = self.parse_arguments()?;
                    let span = self.finish(lhs.span());
                    lhs = Expression::Call(Box::new(CallExpression::new(
                        lhs, arguments, false, span,
                    )));
                }
                TokenKind::Punctuator(Punctuator::Optional) => {
                    if !allow_call {
                        return Err(self.unexpected(
                            "optional chains are not valid in 'new' callee position",
                        ));
                    }
                    in_chain = true;
                    self.cursor.advance();
                    match self.cursor.peek().kind() {
                        TokenKind::Punctuator(Punctuator::OpenParen) => {
                            let arguments = self.parse_arguments()?;
                            let span = self.finish(lhs.span());
                            lhs = Expression::Call(Box::new(CallExpression::new(
                                lhs, arguments, true, span,
                            )));
                        }
                        TokenKind::Punctuator(Punctuator::OpenBracket) => {
                            self.cursor.advance();
                            let property = self.with_flags(
                                ContextFlags::ALLOW_IN,
                                ContextFlags::empty(),
                                Self::parse_expression,
                            )?;
                            self.cursor.expect(Punctuator::CloseBracket, "member access")?;
                            let span = self.finish(lhs.span());
                            lhs = Expression::Member(Box::new(MemberExpression::new(
                                lhs, property, true, true, span,
                            )));
                        }
                        TokenKind::TemplateHead(_) | TokenKind::TemplateNoSubstitution(_) => {
                            return Err(self.unexpected(
                                "tagged templates are not valid in optional chains",
                            ));
                        }
                        _ => {
                            let property = self.parse_member_property()?;
                            let span = lhs.span().join(property.span());
                            lhs = Expression::Member(Box::new(MemberExpression::new(
                                lhs, property, false, true, span,
                            )));
                        }
                    }
                }
                TokenKind::TemplateHead(_) | TokenKind::TemplateNoSubstitution(_) => {
                    if in_chain {
                        return Err(self.unexpected(
                            "tagged templates are not valid in optional chains",
                        ));
                    }
                    let quasi = self.parse_template_literal(true)?;
                    let span = lhs.span().join(quasi.span);
                    lhs = Expression::TaggedTemplate(Box::new(TaggedTemplateExpression::new(
                        lhs, quasi, span,
                    )));
                }
                _ => break,
            }
        }

        if in_chain {
            let span = lhs.span();
            lhs = Expression::Chain(Box::new(ChainExpression::new(lhs, span)));
        }
        Ok(lhs)
    }

    /// A member property after `.` or `?.`: an identifier name or a private
    /// name.
    fn parse_member_property(&mut self) -> ParseResult<Expression> {
        if matches!(self.cursor.peek().kind(), TokenKind::PrivateIdentifier) {
            let token = self.cursor.advance();
            let span = token.span();
            let name: Box<str> = token.lexeme().into();
            self.state.record_private_reference(name.clone(), span);
            return Ok(Expression::PrivateIdentifier(PrivateIdentifier::new(
                name, span,
            )));
        }
        Ok(Expression::Identifier(self.parse_identifier_name()?))
    }

    /// Parses a parenthesized argument list, spreads and trailing comma
    /// included.
    pub(crate) fn parse_arguments(&mut self) -> ParseResult<Vec<ExpressionOrSpread>> {
        self.cursor.expect(Punctuator::OpenParen, "argument list")?;
        self.with_flags(ContextFlags::ALLOW_IN, ContextFlags::empty(), |parser| {
            let mut arguments = Vec::new();
            loop {
                if parser.cursor.eat(Punctuator::CloseParen) {
                    break;
                }
                let argument = if parser.cursor.check(Punctuator::Spread) {
                    let start = parser.mark();
                    parser.cursor.advance();
                    let expr = parser.parse_assignment_expression()?;
                    let span = parser.finish(start);
                    ExpressionOrSpread::Spread(SpreadElement::new(expr, span))
                } else {
                    ExpressionOrSpread::Expression(parser.parse_assignment_expression()?)
                };
                arguments.push(argument);
                if !parser.cursor.eat(Punctuator::Comma) {
                    parser.cursor.expect(Punctuator::CloseParen, "argument list")?;
                    break;
                }
            }
            Ok(arguments)
        })
    }
}
