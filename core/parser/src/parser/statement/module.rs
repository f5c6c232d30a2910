//! Import and export declaration parsing.
//!
//! Both are only admitted at the top level of a module. Exported names are
//! checked for duplicates as they appear; `export { x }` specifiers without
//! a source are resolved against the module's top-level bindings when the
//! whole module has been parsed.
//!
//! More information:
//!  - [MDN documentation][mdn]
//!  - [ECMAScript specification][spec]
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Statements/import
//! [spec]: https://tc39.es/ecma262/#sec-modules

use super::super::{
    scope::Declare,
    state::{ContextFlags, PendingExportBinding},
    Parser,
};
use crate::{
    error::ParseResult,
    lexer::{Keyword, Punctuator, TokenKind},
};
use rustc_hash::FxHashSet;
use sparrow_ast::{
    declaration::{
        Declaration, ExportAllDeclaration, ExportDefaultDeclaration, ExportDefaultKind,
        ExportNamedDeclaration, ExportSpecifier, ImportAttribute, ImportDeclaration,
        ImportDeclarationSpecifier, ImportDefaultSpecifier, ImportNamespaceSpecifier,
        ImportSpecifier, ModuleExportName,
    },
    expression::{Identifier, Literal},
    NodeType, Span, Statement,
};

impl Parser<'_> {
    fn check_module_position(&self, what: &'static str, span: Span) -> ParseResult<()> {
        if !self.is_module()
            || !self.state.has(ContextFlags::AT_MODULE_TOP_LEVEL)
            || self.state.scopes.depth() != 1
        {
            return Err(self.error_at(
                span,
                format!("'{what}' declarations are only valid at the top level of a module"),
            ));
        }
        Ok(())
    }

    // ---- imports ---------------------------------------------------------

    pub(crate) fn parse_import_declaration(&mut self) -> ParseResult<Statement> {
        let start = self.mark();
        self.check_keyword_escapes()?;
        self.cursor.expect_keyword(Keyword::Import, "import declaration")?;
        self.check_module_position("import", start)?;

        // A bare `import "mod"` has no specifiers.
        if matches!(self.cursor.peek().kind(), TokenKind::StringLiteral { .. }) {
            let source = self.parse_module_specifier()?;
            let attributes = self.parse_import_attributes()?;
            self.cursor.consume_semicolon("import declaration")?;
            let span = self.finish(start);
            return Ok(Statement::ImportDeclaration(Box::new(
                ImportDeclaration::new(Vec::new(), source, attributes, span),
            )));
        }

        let mut specifiers = Vec::new();

        // Default binding.
        if matches!(
            self.cursor.peek().kind(),
            TokenKind::Identifier | TokenKind::Keyword(Keyword::Yield | Keyword::Await)
        ) {
            let spec_start = self.mark();
            let local = self.parse_import_binding()?;
            let span = self.finish(spec_start);
            specifiers.push(ImportDeclarationSpecifier::Default(
                ImportDefaultSpecifier::new(local, span),
            ));
            if self.cursor.eat(Punctuator::Comma) {
                self.parse_import_clause_tail(&mut specifiers)?;
            }
        } else {
            self.parse_import_clause_tail(&mut specifiers)?;
        }

        if !self.cursor.eat_contextual("from") {
            return Err(self.unexpected("expected 'from' after the import clause"));
        }
        let source = self.parse_module_specifier()?;
        let attributes = self.parse_import_attributes()?;
        self.cursor.consume_semicolon("import declaration")?;
        let span = self.finish(start);
        Ok(Statement::ImportDeclaration(Box::new(
            ImportDeclaration::new(specifiers, source, attributes, span),
        )))
    }

    /// The namespace or named-imports part of an import clause.
    fn parse_import_clause_tail(
        &mut self,
        specifiers: &mut Vec<ImportDeclarationSpecifier>,
    ) -> ParseResult<()> {
        if self.cursor.check(Punctuator::Mul) {
            let spec_start = self.mark();
            self.cursor.advance();
            if !self.cursor.eat_contextual("as") {
                return Err(self.unexpected("expected 'as' after '*'"));
            }
            let local = self.parse_import_binding()?;
            let span = self.finish(spec_start);
            specifiers.push(ImportDeclarationSpecifier::Namespace(
                ImportNamespaceSpecifier::new(local, span),
            ));
            return Ok(());
        }

        self.cursor.expect(Punctuator::OpenBlock, "import clause")?;
        loop {
            if self.cursor.eat(Punctuator::CloseBlock) {
                break;
            }
            let spec_start = self.mark();
            let imported = self.parse_module_export_name()?;
            let local = if self.cursor.eat_contextual("as") {
                self.parse_import_binding()?
            } else {
                match &imported {
                    ModuleExportName::Identifier(ident) => {
                        self.check_binding_name(&ident.name, ident.span)?;
                        self.declare_import_binding(&ident.name, ident.span)?;
                        ident.clone()
                    }
                    ModuleExportName::Literal(literal) => {
                        return Err(self.error_at(
                            literal.span,
                            "string import names require an 'as' rename",
                        ));
                    }
                }
            };
            let span = self.finish(spec_start);
            specifiers.push(ImportDeclarationSpecifier::Named(ImportSpecifier::new(
                imported, local, span,
            )));
            if !self.cursor.eat(Punctuator::Comma) {
                self.cursor.expect(Punctuator::CloseBlock, "import clause")?;
                break;
            }
        }
        Ok(())
    }

    /// Parses an imported local binding and declares it lexically.
    fn parse_import_binding(&mut self) -> ParseResult<Identifier> {
        let ident = self.parse_binding_identifier()?;
        self.declare_import_binding(&ident.name, ident.span)?;
        Ok(ident)
    }

    fn declare_import_binding(&mut self, name: &str, span: Span) -> ParseResult<()> {
        if self.state.scopes.declare_lexical(name) == Declare::Redeclared {
            return Err(self.error_at(span, format!("'{name}' has already been declared")));
        }
        Ok(())
    }

    /// A module specifier string. Strings containing unpaired surrogate
    /// escapes cannot name a module.
    fn parse_module_specifier(&mut self) -> ParseResult<Literal> {
        let token = self.cursor.peek();
        let TokenKind::StringLiteral { lone_surrogate, .. } = token.kind() else {
            return Err(self.unexpected("expected a module specifier string"));
        };
        if *lone_surrogate {
            return Err(self.error_at(
                token.span(),
                "module names may not contain unpaired surrogates",
            ));
        }
        self.parse_literal()
    }

    /// A `ModuleExportName`: an identifier name or a string literal.
    fn parse_module_export_name(&mut self) -> ParseResult<ModuleExportName> {
        if let TokenKind::StringLiteral { lone_surrogate, .. } = self.cursor.peek().kind() {
            if *lone_surrogate {
                return Err(self.error_at(
                    self.cursor.peek().span(),
                    "export names may not contain unpaired surrogates",
                ));
            }
            return Ok(ModuleExportName::Literal(self.parse_literal()?));
        }
        Ok(ModuleExportName::Identifier(self.parse_identifier_name()?))
    }

    /// Parses a `with { key: "value", … }` attribute list, rejecting
    /// duplicate keys.
    fn parse_import_attributes(&mut self) -> ParseResult<Vec<ImportAttribute>> {
        if !self.cursor.check_keyword(Keyword::With) {
            return Ok(Vec::new());
        }
        self.check_keyword_escapes()?;
        self.cursor.advance();
        self.cursor.expect(Punctuator::OpenBlock, "import attributes")?;

        let mut attributes: Vec<ImportAttribute> = Vec::new();
        let mut keys: FxHashSet<Box<str>> = FxHashSet::default();
        loop {
            if self.cursor.eat(Punctuator::CloseBlock) {
                break;
            }
            let attr_start = self.mark();
            let key = self.parse_module_export_name()?;
            if !keys.insert(key.as_str().into()) {
                return Err(self.error_at(
                    key.span(),
                    format!("duplicate import attribute key '{}'", key.as_str()),
                ));
            }
            self.cursor.expect(Punctuator::Colon, "import attribute")?;
            if !matches!(self.cursor.peek().kind(), TokenKind::StringLiteral { .. }) {
                return Err(self.unexpected("import attribute values must be string literals"));
            }
            let value = self.parse_literal()?;
            let span = self.finish(attr_start);
            attributes.push(ImportAttribute::new(key, value, span));
            if !self.cursor.eat(Punctuator::Comma) {
                self.cursor.expect(Punctuator::CloseBlock, "import attributes")?;
                break;
            }
        }
        Ok(attributes)
    }

    // ---- exports ---------------------------------------------------------

    /// Records an exported name, rejecting duplicates.
    fn add_exported_name(&mut self, name: &str, span: Span) -> ParseResult<()> {
        if !self.state.exported_names.insert(name.into()) {
            return Err(self.error_at(span, format!("duplicate export of '{name}'")));
        }
        Ok(())
    }

    pub(crate) fn parse_export_declaration(&mut self) -> ParseResult<Statement> {
        let start = self.mark();
        self.check_keyword_escapes()?;
        self.cursor.expect_keyword(Keyword::Export, "export declaration")?;
        self.check_module_position("export", start)?;

        // export * [as name] from "mod"
        if self.cursor.check(Punctuator::Mul) {
            self.cursor.advance();
            let exported = if self.cursor.eat_contextual("as") {
                let name = self.parse_module_export_name()?;
                self.add_exported_name(name.as_str(), name.span())?;
                Some(name)
            } else {
                None
            };
            if !self.cursor.eat_contextual("from") {
                return Err(self.unexpected("expected 'from' after 'export *'"));
            }
            let source = self.parse_module_specifier()?;
            let attributes = self.parse_import_attributes()?;
            self.cursor.consume_semicolon("export declaration")?;
            let span = self.finish(start);
            return Ok(Statement::ExportAllDeclaration(Box::new(
                ExportAllDeclaration::new(exported, source, attributes, span),
            )));
        }

        // export default …
        if self.cursor.check_keyword(Keyword::Default) {
            self.check_keyword_escapes()?;
            self.cursor.advance();
            self.add_exported_name("default", start)?;
            return self.parse_export_default(start);
        }

        // export { … } [from "mod"]
        if self.cursor.check(Punctuator::OpenBlock) {
            return self.parse_export_named_specifiers(start);
        }

        // export <declaration>
        let declaration = match self.cursor.peek().kind() {
            TokenKind::Keyword(Keyword::Var) => {
                let Statement::VariableDeclaration(decl) = self.parse_variable_statement()?
                else {
                    unreachable!("variable statements parse to variable declarations")
                };
                self.export_declared_names_variable(&decl)?;
                Declaration::Variable(decl)
            }
            TokenKind::Keyword(Keyword::Const) => {
                let Statement::VariableDeclaration(decl) =
                    self.parse_lexical_declaration_statement()?
                else {
                    unreachable!("lexical declarations parse to variable declarations")
                };
                self.export_declared_names_variable(&decl)?;
                Declaration::Variable(decl)
            }
            TokenKind::Identifier if self.let_declaration_ahead(false) => {
                let Statement::VariableDeclaration(decl) =
                    self.parse_lexical_declaration_statement()?
                else {
                    unreachable!("lexical declarations parse to variable declarations")
                };
                self.export_declared_names_variable(&decl)?;
                Declaration::Variable(decl)
            }
            TokenKind::Keyword(Keyword::Function) => {
                let Statement::FunctionDeclaration(function) =
                    self.parse_function_declaration(false, false)?
                else {
                    unreachable!("function declarations parse to function statements")
                };
                let id = function.id.as_ref().expect("declaration name was required");
                self.add_exported_name(&id.name, id.span)?;
                Declaration::Function(function)
            }
            TokenKind::Identifier if self.async_function_ahead() => {
                let Statement::FunctionDeclaration(function) =
                    self.parse_function_declaration(true, false)?
                else {
                    unreachable!("function declarations parse to function statements")
                };
                let id = function.id.as_ref().expect("declaration name was required");
                self.add_exported_name(&id.name, id.span)?;
                Declaration::Function(function)
            }
            TokenKind::Keyword(Keyword::Class) => {
                let Statement::ClassDeclaration(class) = self.parse_class_declaration()? else {
                    unreachable!("class declarations parse to class statements")
                };
                let id = class.id.as_ref().expect("declaration name was required");
                self.add_exported_name(&id.name, id.span)?;
                Declaration::Class(class)
            }
            _ => return Err(self.unexpected("expected a declaration or specifier list")),
        };

        let span = self.finish(start);
        Ok(Statement::ExportNamedDeclaration(Box::new(
            ExportNamedDeclaration::new(Some(declaration), Vec::new(), None, Vec::new(), span),
        )))
    }

    fn export_declared_names_variable(
        &mut self,
        declaration: &sparrow_ast::declaration::VariableDeclaration,
    ) -> ParseResult<()> {
        let mut names = Vec::new();
        for declarator in &declaration.declarations {
            Self::bound_names(&declarator.id, &mut names);
        }
        for (name, span) in names {
            self.add_exported_name(&name, span)?;
        }
        Ok(())
    }

    fn parse_export_default(&mut self, start: Span) -> ParseResult<Statement> {
        let declaration = match self.cursor.peek().kind() {
            TokenKind::Keyword(Keyword::Function) => {
                let function = self.parse_default_function(false)?;
                ExportDefaultKind::Declaration(function)
            }
            TokenKind::Identifier if self.async_function_ahead() => {
                let function = self.parse_default_function(true)?;
                ExportDefaultKind::Declaration(function)
            }
            TokenKind::Keyword(Keyword::Class) => {
                let class = self.parse_class_common(NodeType::ClassDeclaration, false)?;
                ExportDefaultKind::Declaration(Declaration::Class(Box::new(class)))
            }
            _ => {
                let expression = self.parse_assignment_expression()?;
                self.cursor.consume_semicolon("export declaration")?;
                ExportDefaultKind::Expression(expression)
            }
        };
        let span = self.finish(start);
        Ok(Statement::ExportDefaultDeclaration(Box::new(
            ExportDefaultDeclaration::new(declaration, span),
        )))
    }

    /// An `export default` function declaration, which may be anonymous.
    fn parse_default_function(&mut self, is_async: bool) -> ParseResult<Declaration> {
        let start = self.mark();
        if is_async {
            self.cursor.advance();
        }
        self.check_keyword_escapes()?;
        let function =
            self.parse_function_common(NodeType::FunctionDeclaration, is_async, start, false)?;
        if let Some(id) = &function.id {
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
        Ok(Declaration::Function(Box::new(function)))
    }

    fn parse_export_named_specifiers(&mut self, start: Span) -> ParseResult<Statement> {
        self.cursor.expect(Punctuator::OpenBlock, "export declaration")?;
        let mut specifiers = Vec::new();
        // Local names that need a module binding, held back until we know
        // whether a `from` clause turns this into a re-export.
        let mut locals: Vec<PendingExportBinding> = Vec::new();
        let mut string_local: Option<Span> = None;

        loop {
            if self.cursor.eat(Punctuator::CloseBlock) {
                break;
            }
            let spec_start = self.mark();
            let local = self.parse_module_export_name()?;
            match &local {
                ModuleExportName::Identifier(ident) => locals.push(PendingExportBinding {
                    name: ident.name.clone(),
                    span: ident.span,
                }),
                ModuleExportName::Literal(literal) => {
                    string_local.get_or_insert(literal.span);
                }
            }
            let exported = if self.cursor.eat_contextual("as") {
                self.parse_module_export_name()?
            } else {
                local.clone()
            };
            self.add_exported_name(exported.as_str(), exported.span())?;
            let span = self.finish(spec_start);
            specifiers.push(ExportSpecifier::new(local, exported, span));
            if !self.cursor.eat(Punctuator::Comma) {
                self.cursor.expect(Punctuator::CloseBlock, "export declaration")?;
                break;
            }
        }

        let (source, attributes) = if self.cursor.check_contextual("from") {
            self.cursor.advance();
            let source = self.parse_module_specifier()?;
            let attributes = self.parse_import_attributes()?;
            (Some(source), attributes)
        } else {
            // Without a source the local names reference module bindings,
            // resolved when the whole module has been parsed. String names
            // have no binding to reference.
            if let Some(span) = string_local {
                return Err(self.error_at(
                    span,
                    "string export names are only valid in re-export declarations",
                ));
            }
            self.state.pending_exports.append(&mut locals);
            (None, Vec::new())
        };
        self.cursor.consume_semicolon("export declaration")?;
        let span = self.finish(start);
        Ok(Statement::ExportNamedDeclaration(Box::new(
            ExportNamedDeclaration::new(None, specifiers, source, attributes, span),
        )))
    }
}
