//! Binding patterns and conversion of expressions to patterns.
//!
//! Binding positions (declarators, formal parameters, catch parameters)
//! parse patterns directly. Assignment positions parse the cover grammar as
//! an expression first and convert here once an `=`, `in` or `of` commits
//! the literal to being a destructuring target.
//!
//! More information:
//!  - [ECMAScript specification][spec]
//!
//! [spec]: https://tc39.es/ecma262/#sec-destructuring-binding-patterns

use super::{state::ContextFlags, Parser};
use crate::{
    error::ParseResult,
    lexer::{Punctuator, TokenKind},
};
use sparrow_ast::{
    expression::{AssignmentTarget, Expression},
    pattern::{
        ArrayPattern, AssignmentPattern, ObjectPattern, ObjectPatternProperty, Pattern,
        PatternProperty, RestElement,
    },
    property::PropertyKind,
    AssignOp, Span,
};

impl Parser<'_> {
    // ---- binding patterns ------------------------------------------------

    /// Parses a binding pattern: an identifier, an array pattern or an
    /// object pattern.
    pub(crate) fn parse_binding_pattern(&mut self) -> ParseResult<Pattern> {
        match self.cursor.peek().kind() {
            TokenKind::Punctuator(Punctuator::OpenBracket) => self.parse_array_binding_pattern(),
            TokenKind::Punctuator(Punctuator::OpenBlock) => self.parse_object_binding_pattern(),
            _ => Ok(Pattern::Identifier(self.parse_binding_identifier()?)),
        }
    }

    /// Parses a binding element: a binding pattern with an optional default
    /// value.
    pub(crate) fn parse_binding_element(&mut self) -> ParseResult<Pattern> {
        let start = self.mark();
        let pattern = self.parse_binding_pattern()?;
        if self.cursor.eat(Punctuator::Assign) {
            let default = self.parse_assignment_expression()?;
            let span = self.finish(start);
            return Ok(Pattern::Assignment(Box::new(AssignmentPattern::new(
                pattern, default, span,
            ))));
        }
        Ok(pattern)
    }

    fn parse_array_binding_pattern(&mut self) -> ParseResult<Pattern> {
        let start = self.mark();
        self.cursor.expect(Punctuator::OpenBracket, "array binding pattern")?;
        let mut elements = Vec::new();
        loop {
            if self.cursor.eat(Punctuator::CloseBracket) {
                break;
            }
            if self.cursor.eat(Punctuator::Comma) {
                elements.push(None);
                continue;
            }
            if self.cursor.check(Punctuator::Spread) {
                let rest = self.parse_rest_element(false)?;
                elements.push(Some(rest));
                if self.cursor.check(Punctuator::Comma) {
                    return Err(self.unexpected("rest element must be the last element"));
                }
                self.cursor
                    .expect(Punctuator::CloseBracket, "array binding pattern")?;
                break;
            }
            elements.push(Some(self.parse_binding_element()?));
            if !self.cursor.eat(Punctuator::Comma) {
                self.cursor
                    .expect(Punctuator::CloseBracket, "array binding pattern")?;
                break;
            }
        }
        let span = self.finish(start);
        Ok(Pattern::Array(Box::new(ArrayPattern::new(elements, span))))
    }

    fn parse_object_binding_pattern(&mut self) -> ParseResult<Pattern> {
        let start = self.mark();
        self.cursor.expect(Punctuator::OpenBlock, "object binding pattern")?;
        let mut properties = Vec::new();
        loop {
            if self.cursor.eat(Punctuator::CloseBlock) {
                break;
            }
            if self.cursor.check(Punctuator::Spread) {
                let rest = self.parse_rest_element(true)?;
                let Pattern::Rest(rest) = rest else {
                    unreachable!("parse_rest_element returns a rest pattern")
                };
                properties.push(ObjectPatternProperty::Rest(*rest));
                if self.cursor.check(Punctuator::Comma) {
                    return Err(self.unexpected("rest element must be the last property"));
                }
                self.cursor
                    .expect(Punctuator::CloseBlock, "object binding pattern")?;
                break;
            }

            let prop_start = self.mark();
            let (key, computed) = self.parse_property_key()?;
            let property = if self.cursor.eat(Punctuator::Colon) {
                let value = self.parse_binding_element()?;
                PatternProperty::new(key, value, computed, false, self.finish(prop_start))
            } else {
                // Shorthand: the key is itself the bound name.
                let Expression::Identifier(ident) = &key else {
                    return Err(self.unexpected("expected ':' after property key"));
                };
                if computed {
                    return Err(self.unexpected("expected ':' after computed property key"));
                }
                self.check_binding_name(&ident.name, ident.span)?;
                let bound = Pattern::Identifier(ident.clone());
                let value = if self.cursor.eat(Punctuator::Assign) {
                    let default = self.parse_assignment_expression()?;
                    let span = self.finish(prop_start);
                    Pattern::Assignment(Box::new(AssignmentPattern::new(bound, default, span)))
                } else {
                    bound
                };
                PatternProperty::new(key, value, false, true, self.finish(prop_start))
            };
            properties.push(ObjectPatternProperty::Property(property));

            if !self.cursor.eat(Punctuator::Comma) {
                self.cursor
                    .expect(Punctuator::CloseBlock, "object binding pattern")?;
                break;
            }
        }
        let span = self.finish(start);
        Ok(Pattern::Object(Box::new(ObjectPattern::new(
            properties, span,
        ))))
    }

    /// Parses a `...rest` element. Object rest targets must be plain
    /// identifiers; array rest admits nested patterns.
    fn parse_rest_element(&mut self, identifier_only: bool) -> ParseResult<Pattern> {
        let start = self.mark();
        self.cursor.expect(Punctuator::Spread, "rest element")?;
        let argument = if identifier_only {
            Pattern::Identifier(self.parse_binding_identifier()?)
        } else {
            self.parse_binding_pattern()?
        };
        if self.cursor.check(Punctuator::Assign) {
            return Err(self.unexpected("rest element may not have a default"));
        }
        let span = self.finish(start);
        Ok(Pattern::Rest(Box::new(RestElement::new(argument, span))))
    }

    /// Collects the names a pattern binds, in source order.
    pub(crate) fn bound_names(pattern: &Pattern, out: &mut Vec<(Box<str>, Span)>) {
        match pattern {
            Pattern::Identifier(ident) => out.push((ident.name.clone(), ident.span)),
            Pattern::Array(array) => {
                for element in array.elements.iter().flatten() {
                    Self::bound_names(element, out);
                }
            }
            Pattern::Object(object) => {
                for property in &object.properties {
                    match property {
                        ObjectPatternProperty::Property(prop) => {
                            Self::bound_names(&prop.value, out);
                        }
                        ObjectPatternProperty::Rest(rest) => {
                            Self::bound_names(&rest.argument, out);
                        }
                    }
                }
            }
            Pattern::Rest(rest) => Self::bound_names(&rest.argument, out),
            Pattern::Assignment(assignment) => Self::bound_names(&assignment.left, out),
            Pattern::Member(_) => {}
        }
    }

    // ---- assignment targets ----------------------------------------------

    /// Whether the expression is a simple assignment target: an identifier
    /// or a member access.
    pub(crate) fn is_simple_target(expr: &Expression) -> bool {
        matches!(expr, Expression::Identifier(_) | Expression::Member(_))
    }

    /// Checks an expression used as the target of a compound assignment, an
    /// update expression or a `for` head without destructuring.
    pub(crate) fn check_simple_target(&self, expr: &Expression) -> ParseResult<()> {
        match expr {
            Expression::Identifier(ident) => {
                if self.state.strict() && matches!(&*ident.name, "eval" | "arguments") {
                    return Err(self.error_at(
                        ident.span,
                        format!("cannot assign to '{}' in strict mode", ident.name),
                    ));
                }
                Ok(())
            }
            Expression::Member(_) => Ok(()),
            _ => Err(self.error_at(expr.span(), "invalid assignment target")),
        }
    }

    /// Resolves the left side of an assignment: destructuring literals are
    /// converted to patterns, everything else must be a simple target.
    pub(crate) fn resolve_assignment_target(
        &mut self,
        expr: Expression,
        operator: AssignOp,
    ) -> ParseResult<AssignmentTarget> {
        let is_literal = matches!(expr, Expression::Array(_) | Expression::Object(_));
        if operator == AssignOp::Assign && is_literal {
            // A parenthesized literal stays an expression and can never be
            // reinterpreted as a pattern.
            let start = expr.span().start;
            if let Some(offset) = self.state.paren_non_simple_target {
                if offset <= start {
                    return Err(
                        self.error_at(expr.span(), "invalid parenthesized assignment pattern")
                    );
                }
            }
            let pattern = self.expression_to_pattern(expr)?;
            return Ok(AssignmentTarget::Pattern(pattern));
        }
        self.check_simple_target(&expr)?;
        Ok(AssignmentTarget::Expression(expr))
    }

    /// Converts an expression produced by the cover grammar into a pattern,
    /// re-validating names along the way. Rejects everything the
    /// destructuring grammar cannot cover.
    pub(crate) fn expression_to_pattern(&mut self, expr: Expression) -> ParseResult<Pattern> {
        match expr {
            Expression::Identifier(ident) => {
                if self.state.strict() && matches!(&*ident.name, "eval" | "arguments") {
                    return Err(self.error_at(
                        ident.span,
                        format!("cannot assign to '{}' in strict mode", ident.name),
                    ));
                }
                Ok(Pattern::Identifier(ident))
            }
            Expression::Member(member) => Ok(Pattern::Member(member)),
            Expression::Array(array) => {
                let span = array.span;
                if self.state.spread_trailing_commas.contains(&span.start) {
                    return Err(
                        self.error_at(span, "rest element may not have a trailing comma")
                    );
                }
                let count = array.elements.len();
                let mut elements = Vec::with_capacity(count);
                for (index, element) in array.elements.into_iter().enumerate() {
                    match element {
                        None => elements.push(None),
                        Some(sparrow_ast::expression::ExpressionOrSpread::Expression(e)) => {
                            elements.push(Some(self.expression_to_pattern(e)?));
                        }
                        Some(sparrow_ast::expression::ExpressionOrSpread::Spread(spread)) => {
                            if index + 1 != count {
                                return Err(self.error_at(
                                    spread.span,
                                    "rest element must be the last element",
                                ));
                            }
                            let rest = self.spread_to_rest(spread)?;
                            elements.push(Some(Pattern::Rest(Box::new(rest))));
                        }
                    }
                }
                self.state.clear_cover_range(span);
                Ok(Pattern::Array(Box::new(ArrayPattern::new(elements, span))))
            }
            Expression::Object(object) => {
                let span = object.span;
                if self.state.spread_trailing_commas.contains(&span.start) {
                    return Err(
                        self.error_at(span, "rest element may not have a trailing comma")
                    );
                }
                let count = object.properties.len();
                let mut properties = Vec::with_capacity(count);
                for (index, property) in object.properties.into_iter().enumerate() {
                    match property {
                        sparrow_ast::expression::ObjectExpressionProperty::Property(prop) => {
                            if prop.kind != PropertyKind::Init || prop.method {
                                return Err(self.error_at(
                                    prop.span,
                                    "object patterns cannot contain methods or accessors",
                                ));
                            }
                            let value = self.expression_to_pattern(prop.value)?;
                            properties.push(ObjectPatternProperty::Property(PatternProperty::new(
                                prop.key,
                                value,
                                prop.computed,
                                prop.shorthand,
                                prop.span,
                            )));
                        }
                        sparrow_ast::expression::ObjectExpressionProperty::Spread(spread) => {
                            if index + 1 != count {
                                return Err(self.error_at(
                                    spread.span,
                                    "rest element must be the last property",
                                ));
                            }
                            let rest = self.spread_to_rest(spread)?;
                            if !matches!(rest.argument, Pattern::Identifier(_) | Pattern::Member(_))
                            {
                                return Err(self.error_at(
                                    rest.span,
                                    "object rest target must be an identifier or member access",
                                ));
                            }
                            properties.push(ObjectPatternProperty::Rest(rest));
                        }
                    }
                }
                self.state.clear_cover_range(span);
                Ok(Pattern::Object(Box::new(ObjectPattern::new(
                    properties, span,
                ))))
            }
            Expression::Assignment(assignment) => {
                if assignment.operator != AssignOp::Assign {
                    return Err(self.error_at(
                        assignment.span,
                        "invalid destructuring assignment target",
                    ));
                }
                let left = match assignment.left {
                    AssignmentTarget::Pattern(pattern) => pattern,
                    AssignmentTarget::Expression(e) => self.expression_to_pattern(e)?,
                };
                Ok(Pattern::Assignment(Box::new(AssignmentPattern::new(
                    left,
                    assignment.right,
                    assignment.span,
                ))))
            }
            other => Err(self.error_at(other.span(), "invalid destructuring assignment target")),
        }
    }

    fn spread_to_rest(
        &mut self,
        spread: sparrow_ast::expression::SpreadElement,
    ) -> ParseResult<RestElement> {
        if matches!(spread.argument, Expression::Assignment(_)) {
            return Err(self.error_at(spread.span, "rest element may not have a default"));
        }
        let argument = self.expression_to_pattern(spread.argument)?;
        Ok(RestElement::new(argument, spread.span))
    }

    // ---- formal parameters ----------------------------------------------

    /// Parses a parenthesized formal parameter list into patterns,
    /// returning the patterns and whether the list is simple (identifiers
    /// only).
    pub(crate) fn parse_formal_parameters(&mut self) -> ParseResult<(Vec<Pattern>, bool)> {
        self.cursor.expect(Punctuator::OpenParen, "formal parameters")?;
        self.with_flags(
            ContextFlags::IN_FORMAL_PARAMETERS | ContextFlags::ALLOW_IN,
            ContextFlags::empty(),
            |parser| {
                let mut params = Vec::new();
                let mut simple = true;
                loop {
                    if parser.cursor.eat(Punctuator::CloseParen) {
                        break;
                    }
                    if parser.cursor.check(Punctuator::Spread) {
                        simple = false;
                        let rest = parser.parse_rest_element(false)?;
                        params.push(rest);
                        if parser.cursor.check(Punctuator::Comma) {
                            return Err(
                                parser.unexpected("rest parameter must be the last parameter")
                            );
                        }
                        parser
                            .cursor
                            .expect(Punctuator::CloseParen, "formal parameters")?;
                        break;
                    }
                    let param = parser.parse_binding_element()?;
                    if !matches!(param, Pattern::Identifier(_)) {
                        simple = false;
                    }
                    params.push(param);
                    if !parser.cursor.eat(Punctuator::Comma) {
                        parser
                            .cursor
                            .expect(Punctuator::CloseParen, "formal parameters")?;
                        break;
                    }
                }
                Ok((params, simple))
            },
        )
    }

    /// Checks a parameter list for duplicates and declares the parameter
    /// names in the current function frame.
    ///
    /// Duplicates are tolerated only in sloppy-mode simple lists; when
    /// `force_unique` is set (arrows, methods, strict functions) they are
    /// always an error.
    pub(crate) fn check_parameters(
        &mut self,
        params: &[Pattern],
        simple: bool,
        force_unique: bool,
    ) -> ParseResult<()> {
        let mut names = Vec::new();
        for param in params {
            Self::bound_names(param, &mut names);
        }
        let unique_required = force_unique || !simple || self.state.strict();
        let mut seen = rustc_hash::FxHashSet::default();
        for (name, span) in &names {
            if !seen.insert(name.clone()) && unique_required {
                return Err(self.error_at(*span, format!("duplicate parameter name '{name}'")));
            }
            if self.state.strict() && matches!(&**name, "eval" | "arguments") {
                return Err(
                    self.error_at(*span, format!("cannot bind '{name}' in strict mode"))
                );
            }
        }
        // Parameters behave like function-scoped bindings: a top-level
        // `let` of the same name in the body must clash, a `var` must not.
        for (name, _) in names {
            let _ = self.state.scopes.declare_var(&name);
        }
        Ok(())
    }
}
