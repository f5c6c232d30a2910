//! Export declaration nodes.
//!
//! More information:
//!  - [MDN documentation][mdn]
//!  - [ECMAScript specification][spec]
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Statements/export
//! [spec]: https://tc39.es/ecma262/#sec-exports

use super::{
    import::{ImportAttribute, ModuleExportName},
    Declaration,
};
use crate::{expression::Expression, Literal, NodeType, Span};

/// A named export specifier, `{ local as exported }`.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSpecifier {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The local name, or the imported name for re-exports.
    pub local: ModuleExportName,
    /// The name visible to importers.
    pub exported: ModuleExportName,
}

impl ExportSpecifier {
    /// Creates a new `ExportSpecifier`.
    #[must_use]
    pub fn new(local: ModuleExportName, exported: ModuleExportName, span: Span) -> Self {
        Self {
            node_type: NodeType::ExportSpecifier,
            span,
            local,
            exported,
        }
    }
}

/// An `export { … }`, `export { … } from …` or `export <declaration>`
/// declaration.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ExportNamedDeclaration {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The exported declaration, for the `export <declaration>` form.
    pub declaration: Option<Declaration>,
    /// The export specifiers, for the `export { … }` forms.
    pub specifiers: Vec<ExportSpecifier>,
    /// The source module, for the re-export form.
    pub source: Option<Literal>,
    /// The `with { … }` attributes of the re-export form.
    pub attributes: Vec<ImportAttribute>,
}

impl ExportNamedDeclaration {
    /// Creates a new `ExportNamedDeclaration`.
    #[must_use]
    pub fn new(
        declaration: Option<Declaration>,
        specifiers: Vec<ExportSpecifier>,
        source: Option<Literal>,
        attributes: Vec<ImportAttribute>,
        span: Span,
    ) -> Self {
        Self {
            node_type: NodeType::ExportNamedDeclaration,
            span,
            declaration,
            specifiers,
            source,
            attributes,
        }
    }
}

/// The exported value of an [`ExportDefaultDeclaration`].
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum ExportDefaultKind {
    /// A function or class declaration, possibly anonymous.
    Declaration(Declaration),
    /// An arbitrary expression.
    Expression(Expression),
}

/// An `export default` declaration.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDefaultDeclaration {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The exported value.
    pub declaration: ExportDefaultKind,
}

impl ExportDefaultDeclaration {
    /// Creates a new `ExportDefaultDeclaration`.
    #[must_use]
    pub fn new(declaration: ExportDefaultKind, span: Span) -> Self {
        Self {
            node_type: NodeType::ExportDefaultDeclaration,
            span,
            declaration,
        }
    }
}

/// An `export * from …` or `export * as ns from …` declaration.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ExportAllDeclaration {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The namespace name, for the `export * as ns` form.
    pub exported: Option<ModuleExportName>,
    /// The source module.
    pub source: Literal,
    /// The `with { … }` attributes.
    pub attributes: Vec<ImportAttribute>,
}

impl ExportAllDeclaration {
    /// Creates a new `ExportAllDeclaration`.
    #[must_use]
    pub fn new(
        exported: Option<ModuleExportName>,
        source: Literal,
        attributes: Vec<ImportAttribute>,
        span: Span,
    ) -> Self {
        Self {
            node_type: NodeType::ExportAllDeclaration,
            span,
            exported,
            source,
            attributes,
        }
    }
}
