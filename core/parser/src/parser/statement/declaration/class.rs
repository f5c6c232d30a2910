//! Class parsing: declarations, expressions, class bodies, private-name
//! environments and their deferred validation.
//!
//! More information:
//!  - [MDN documentation][mdn]
//!  - [ECMAScript specification][spec]
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Classes
//! [spec]: https://tc39.es/ecma262/#sec-class-definitions

use super::super::super::{
    scope::Declare,
    state::{ContextFlags, PrivateKind},
    Parser,
};
use crate::{
    error::{Error, ParseResult},
    lexer::{Keyword, Punctuator, TokenKind},
};
use sparrow_ast::{
    expression::{Expression, PrivateIdentifier},
    function::{Class, ClassBody, ClassElement, MethodDefinition, MethodKind, PropertyDefinition,
        StaticBlock},
    property::PropertyKind,
    NodeType, Span, Statement,
};

impl Parser<'_> {
    /// Parses a class declaration and declares its name as a lexical
    /// binding.
    pub(crate) fn parse_class_declaration(&mut self) -> ParseResult<Statement> {
        let class = self.parse_class_common(NodeType::ClassDeclaration, true)?;
        Ok(Statement::ClassDeclaration(Box::new(class)))
    }

    /// Parses a class. The entire class, heritage included, is strict mode
    /// code. The heritage expression is parsed before the class's
    /// private-name frame is pushed, so its private references resolve
    /// against the outer environment.
    pub(crate) fn parse_class_common(
        &mut self,
        node_type: NodeType,
        name_required: bool,
    ) -> ParseResult<Class> {
        let start = self.mark();
        self.check_keyword_escapes()?;
        self.cursor.expect_keyword(Keyword::Class, "class")?;

        self.with_flags(ContextFlags::STRICT, ContextFlags::empty(), |parser| {
            let id = if matches!(
                parser.cursor.peek().kind(),
                TokenKind::Identifier | TokenKind::Keyword(Keyword::Yield | Keyword::Await)
            ) {
                Some(parser.parse_binding_identifier()?)
            } else {
                None
            };
            if name_required && id.is_none() && node_type == NodeType::ClassDeclaration {
                return Err(parser.unexpected("expected a class name"));
            }
            if node_type == NodeType::ClassDeclaration {
                if let Some(id) = &id {
                    if parser.state.scopes.declare_lexical(&id.name) == Declare::Redeclared {
                        return Err(parser.error_at(
                            id.span,
                            format!("'{}' has already been declared", id.name),
                        ));
                    }
                }
            }

            let super_class = if parser.cursor.check_keyword(Keyword::Extends) {
                parser.check_keyword_escapes()?;
                parser.cursor.advance();
                Some(parser.parse_heritage_expression()?)
            } else {
                None
            };

            parser.state.private_frames.push(Default::default());
            let derived = super_class.is_some();
            let body = parser.parse_class_body(derived)?;
            parser.validate_pending_privates()?;
            parser.state.private_frames.pop();

            let span = parser.finish(start);
            Ok(Class::new(node_type, id, super_class, body, span))
        })
    }

    /// The `extends` clause is a left-hand-side expression: a primary
    /// expression grown by subscripts, calls included.
    fn parse_heritage_expression(&mut self) -> ParseResult<Expression> {
        if self.cursor.check_keyword(Keyword::New) {
            let callee = self.parse_new_expression()?;
            return self.parse_subscripts(callee, true);
        }
        let primary = self.parse_primary_expression()?;
        self.parse_subscripts(primary, true)
    }

    /// Validates every pending private reference recorded inside the class
    /// whose frame is on top of the stack, in the order encountered.
    /// References that fail to resolve are kept for an enclosing class, or
    /// raised when there is none.
    pub(crate) fn validate_pending_privates(&mut self) -> ParseResult<()> {
        let current = self.state.private_frames.len();
        let pending = std::mem::take(&mut self.state.pending_private);
        let mut kept = Vec::new();
        let mut error: Option<Error> = None;

        for reference in pending {
            if reference.depth < current {
                kept.push(reference);
                continue;
            }
            if self.state.private_name_visible(&reference.name) {
                continue;
            }
            if current == 1 {
                if error.is_none() {
                    error = Some(Error::general(
                        format!("private name '#{}' is not declared", reference.name),
                        reference.span.loc.start,
                    ));
                }
            } else {
                kept.push(reference);
            }
        }

        self.state.pending_private = kept;
        match error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    // ---- class bodies ----------------------------------------------------

    fn parse_class_body(&mut self, derived: bool) -> ParseResult<ClassBody> {
        let start = self.mark();
        self.cursor.expect(Punctuator::OpenBlock, "class body")?;
        let mut elements = Vec::new();
        let mut constructor_seen = false;
        loop {
            if self.cursor.eat(Punctuator::CloseBlock) {
                break;
            }
            if self.cursor.eat(Punctuator::Semicolon) {
                continue;
            }
            elements.push(self.parse_class_element(derived, &mut constructor_seen)?);
        }
        let span = self.finish(start);
        Ok(ClassBody::new(elements, span))
    }

    fn parse_class_element(
        &mut self,
        derived: bool,
        constructor_seen: &mut bool,
    ) -> ParseResult<ClassElement> {
        let start = self.mark();

        // `static` is contextual: followed by `(` or `=` it is a name.
        let mut is_static = false;
        if self.cursor.check_contextual("static")
            && !Self::ends_class_element_name(self.cursor.peek_at(1).kind())
        {
            is_static = true;
            self.cursor.advance();
        }

        if is_static && self.cursor.check(Punctuator::OpenBlock) {
            return self.parse_static_block(start);
        }

        // Accessor and async/generator prefixes, the same shapes as in
        // object literals.
        let mut accessor = None;
        let mut is_async = false;
        let mut is_generator = false;
        if (self.cursor.check_contextual("get") || self.cursor.check_contextual("set"))
            && !Self::ends_class_element_name(self.cursor.peek_at(1).kind())
        {
            accessor = Some(if self.cursor.check_contextual("get") {
                PropertyKind::Get
            } else {
                PropertyKind::Set
            });
            self.cursor.advance();
        } else if self.cursor.check_contextual("async")
            && !self.cursor.peek_at(1).newline_before()
            && !Self::ends_class_element_name(self.cursor.peek_at(1).kind())
        {
            is_async = true;
            self.cursor.advance();
            if self.cursor.eat(Punctuator::Mul) {
                is_generator = true;
            }
        } else if self.cursor.eat(Punctuator::Mul) {
            is_generator = true;
        }

        let (key, computed, private_name) = self.parse_class_element_name()?;

        let is_method = accessor.is_some()
            || is_async
            || is_generator
            || self.cursor.check(Punctuator::OpenParen);

        if let Some((name, span)) = &private_name {
            if &**name == "constructor" {
                return Err(self.error_at(*span, "classes cannot have a '#constructor' member"));
            }
            let kind = match accessor {
                _ if !is_method => PrivateKind::Other,
                Some(PropertyKind::Get) => PrivateKind::Getter,
                Some(PropertyKind::Set) => PrivateKind::Setter,
                _ => PrivateKind::Other,
            };
            self.declare_private_name(name, *span, kind)?;
        }

        if is_method {
            let plain_name = Self::plain_element_name(&key, computed);
            let is_constructor = !is_static
                && private_name.is_none()
                && plain_name == Some("constructor");
            if is_constructor {
                if accessor.is_some() {
                    return Err(self.error_at(start, "class constructors cannot be accessors"));
                }
                if is_generator {
                    return Err(self.error_at(start, "class constructors cannot be generators"));
                }
                if is_async {
                    return Err(self.error_at(start, "class constructors cannot be async"));
                }
                if *constructor_seen {
                    return Err(
                        self.error_at(start, "classes may only have one constructor")
                    );
                }
                *constructor_seen = true;
            }
            if is_static && plain_name == Some("prototype") {
                return Err(
                    self.error_at(start, "classes cannot have a static 'prototype' member")
                );
            }

            let value = self.parse_method_function_with_super(
                is_async,
                is_generator,
                accessor,
                is_constructor && derived,
            )?;
            let kind = if is_constructor {
                MethodKind::Constructor
            } else {
                match accessor {
                    Some(PropertyKind::Get) => MethodKind::Get,
                    Some(PropertyKind::Set) => MethodKind::Set,
                    _ => MethodKind::Method,
                }
            };
            let span = self.finish(start);
            return Ok(ClassElement::Method(MethodDefinition::new(
                key, value, kind, computed, is_static, span,
            )));
        }

        // A class field.
        let plain_name = Self::plain_element_name(&key, computed);
        if plain_name == Some("constructor") {
            return Err(self.error_at(start, "classes cannot have a field named 'constructor'"));
        }
        if is_static && plain_name == Some("prototype") {
            return Err(self.error_at(start, "classes cannot have a static 'prototype' member"));
        }

        let value = if self.cursor.eat(Punctuator::Assign) {
            let initializer = self.with_flags(
                ContextFlags::IN_CLASS_FIELD_INIT
                    | ContextFlags::ALLOW_SUPER_PROPERTY
                    | ContextFlags::ALLOW_NEW_TARGET
                    | ContextFlags::ALLOW_IN,
                ContextFlags::IN_ASYNC
                    | ContextFlags::IN_GENERATOR
                    | ContextFlags::IN_FUNCTION
                    | ContextFlags::IN_FORMAL_PARAMETERS
                    | ContextFlags::IN_STATIC_BLOCK
                    | ContextFlags::ALLOW_SUPER_CALL
                    | ContextFlags::AT_MODULE_TOP_LEVEL,
                Self::parse_assignment_expression,
            )?;
            Some(initializer)
        } else {
            None
        };
        self.cursor.consume_semicolon("class field")?;
        let span = self.finish(start);
        Ok(ClassElement::Property(PropertyDefinition::new(
            key, value, computed, is_static, span,
        )))
    }

    /// Whether a token after `static`/`get`/`set`/`async` makes the word
    /// the element name itself.
    fn ends_class_element_name(kind: &TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::Punctuator(
                Punctuator::OpenParen
                    | Punctuator::Assign
                    | Punctuator::Semicolon
                    | Punctuator::CloseBlock
            ) | TokenKind::Eof
        )
    }

    /// Parses a class element name: a property key or a private name.
    fn parse_class_element_name(
        &mut self,
    ) -> ParseResult<(Expression, bool, Option<(Box<str>, Span)>)> {
        if matches!(self.cursor.peek().kind(), TokenKind::PrivateIdentifier) {
            let token = self.cursor.advance();
            let span = token.span();
            let name: Box<str> = token.lexeme().into();
            let key = Expression::PrivateIdentifier(PrivateIdentifier::new(name.clone(), span));
            return Ok((key, false, Some((name, span))));
        }
        let (key, computed) = self.parse_property_key()?;
        Ok((key, computed, None))
    }

    /// The name of a non-computed identifier or string key, for the
    /// `constructor`/`prototype` checks.
    fn plain_element_name(key: &Expression, computed: bool) -> Option<&str> {
        if computed {
            return None;
        }
        match key {
            Expression::Identifier(ident) => Some(&ident.name),
            Expression::Literal(literal) => literal.as_string(),
            _ => None,
        }
    }

    /// Declares a private name in the innermost class frame. A getter and a
    /// setter of the same name complement each other; any other repetition
    /// is an error.
    fn declare_private_name(
        &mut self,
        name: &str,
        span: Span,
        kind: PrivateKind,
    ) -> ParseResult<()> {
        let frame = self
            .state
            .private_frames
            .last_mut()
            .expect("class body pushes a private frame");
        match frame.get(name).copied() {
            None => {
                frame.insert(name.into(), kind);
                Ok(())
            }
            Some(PrivateKind::Getter) if kind == PrivateKind::Setter => {
                frame.insert(name.into(), PrivateKind::Other);
                Ok(())
            }
            Some(PrivateKind::Setter) if kind == PrivateKind::Getter => {
                frame.insert(name.into(), PrivateKind::Other);
                Ok(())
            }
            Some(_) => Err(self.error_at(
                span,
                format!("private name '#{name}' has already been declared"),
            )),
        }
    }

    /// Parses a `static { … }` initialization block. `return`, `await` and
    /// `yield` are unavailable inside; `super.property` and `new.target`
    /// remain accessible.
    fn parse_static_block(&mut self, start: Span) -> ParseResult<ClassElement> {
        self.state.scopes.push_function();
        let saved_labels = std::mem::take(&mut self.state.labels);
        let saved_loop = self.state.loop_depth;
        let saved_switch = self.state.switch_depth;
        self.state.loop_depth = 0;
        self.state.switch_depth = 0;

        let result = self.with_flags(
            ContextFlags::IN_STATIC_BLOCK
                | ContextFlags::ALLOW_SUPER_PROPERTY
                | ContextFlags::ALLOW_NEW_TARGET
                | ContextFlags::ALLOW_IN,
            ContextFlags::IN_ASYNC
                | ContextFlags::IN_GENERATOR
                | ContextFlags::IN_FUNCTION
                | ContextFlags::IN_CLASS_FIELD_INIT
                | ContextFlags::ALLOW_SUPER_CALL
                | ContextFlags::AT_MODULE_TOP_LEVEL,
            |parser| {
                parser.cursor.expect(Punctuator::OpenBlock, "static block")?;
                let body = parser.parse_statement_list(true)?;
                parser.cursor.expect(Punctuator::CloseBlock, "static block")?;
                Ok(body)
            },
        );

        self.state.scopes.pop();
        self.state.labels = saved_labels;
        self.state.loop_depth = saved_loop;
        self.state.switch_depth = saved_switch;
        let body = result?;

        let span = self.finish(start);
        Ok(ClassElement::StaticBlock(StaticBlock::new(body, span)))
    }
}
