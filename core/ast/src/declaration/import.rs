//! Import declaration nodes.
//!
//! More information:
//!  - [MDN documentation][mdn]
//!  - [ECMAScript specification][spec]
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Statements/import
//! [spec]: https://tc39.es/ecma262/#sec-imports

use crate::{
    expression::{Identifier, Literal},
    NodeType, Span,
};

/// The public name of an imported or exported binding: an identifier, or an
/// arbitrary string for names that are not valid identifiers.
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleExportName {
    /// A plain identifier name.
    Identifier(Identifier),
    /// A string literal name.
    Literal(Literal),
}

impl ModuleExportName {
    /// Gets the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Identifier(ident) => &ident.name,
            Self::Literal(lit) => lit.as_string().unwrap_or_default(),
        }
    }

    /// Gets the source span of the name.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Identifier(ident) => ident.span,
            Self::Literal(lit) => lit.span,
        }
    }
}

/// One `key: "value"` entry of a `with { … }` import attribute list.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ImportAttribute {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The attribute key.
    pub key: ModuleExportName,
    /// The attribute value; always a string literal.
    pub value: Literal,
}

impl ImportAttribute {
    /// Creates a new `ImportAttribute`.
    #[must_use]
    pub fn new(key: ModuleExportName, value: Literal, span: Span) -> Self {
        Self {
            node_type: NodeType::ImportAttribute,
            span,
            key,
            value,
        }
    }
}

/// A named import specifier, `{ imported as local }`.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSpecifier {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The name exported by the source module.
    pub imported: ModuleExportName,
    /// The local binding.
    pub local: Identifier,
}

impl ImportSpecifier {
    /// Creates a new `ImportSpecifier`.
    #[must_use]
    pub fn new(imported: ModuleExportName, local: Identifier, span: Span) -> Self {
        Self {
            node_type: NodeType::ImportSpecifier,
            span,
            imported,
            local,
        }
    }
}

/// A default import specifier, `import local from …`.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDefaultSpecifier {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The local binding.
    pub local: Identifier,
}

impl ImportDefaultSpecifier {
    /// Creates a new `ImportDefaultSpecifier`.
    #[must_use]
    pub fn new(local: Identifier, span: Span) -> Self {
        Self {
            node_type: NodeType::ImportDefaultSpecifier,
            span,
            local,
        }
    }
}

/// A namespace import specifier, `* as local`.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ImportNamespaceSpecifier {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The local binding.
    pub local: Identifier,
}

impl ImportNamespaceSpecifier {
    /// Creates a new `ImportNamespaceSpecifier`.
    #[must_use]
    pub fn new(local: Identifier, span: Span) -> Self {
        Self {
            node_type: NodeType::ImportNamespaceSpecifier,
            span,
            local,
        }
    }
}

/// Any specifier of an [`ImportDeclaration`].
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum ImportDeclarationSpecifier {
    /// A named specifier.
    Named(ImportSpecifier),
    /// The default specifier.
    Default(ImportDefaultSpecifier),
    /// A namespace specifier.
    Namespace(ImportNamespaceSpecifier),
}

/// An `import` declaration.
///
/// More information:
///  - [ECMAScript specification][spec]
///
/// [spec]: https://tc39.es/ecma262/#prod-ImportDeclaration
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDeclaration {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The imported bindings; empty for a bare `import "mod"`.
    pub specifiers: Vec<ImportDeclarationSpecifier>,
    /// The module specifier.
    pub source: Literal,
    /// The `with { … }` import attributes.
    pub attributes: Vec<ImportAttribute>,
}

impl ImportDeclaration {
    /// Creates a new `ImportDeclaration`.
    #[must_use]
    pub fn new(
        specifiers: Vec<ImportDeclarationSpecifier>,
        source: Literal,
        attributes: Vec<ImportAttribute>,
        span: Span,
    ) -> Self {
        Self {
            node_type: NodeType::ImportDeclaration,
            span,
            specifiers,
            source,
            attributes,
        }
    }
}
