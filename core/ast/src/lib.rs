//! Sparrow's **`sparrow_ast`** crate implements an ESTree-shaped ECMAScript
//! abstract syntax tree.
//!
//! # Crate Overview
//! **sparrow_ast** contains representations of [**Parse Nodes**][grammar] as
//! defined by the ECMAScript spec, in the [ESTree][estree] shape: plain
//! records with a `type` tag, `[start, end)` byte offsets and a line/column
//! `loc` on every node. Nodes own their children; there are no parent links
//! and no cycles.
//!
//! A lot of grammar productions are only used to throw
//! [**Early Errors**][early] and don't influence the shape of the tree
//! itself; those are enforced by the parser and have no node here.
//!
//! With the `serde` feature enabled, every node serializes to
//! ESTree-compatible JSON.
//!
//! # Sparrow Crates
//!  - **sparrow_ast** - Sparrow's ECMAScript Abstract Syntax Tree.
//!  - **sparrow_parser** - Sparrow's lexer and parser.
//!
//! [grammar]: https://tc39.es/ecma262/#sec-syntactic-grammar
//! [early]: https://tc39.es/ecma262/#sec-static-semantic-rules
//! [estree]: https://github.com/estree/estree

mod node_type;
mod position;

pub mod declaration;
pub mod expression;
pub mod function;
pub mod pattern;
pub mod property;
pub mod statement;

pub use self::{
    expression::{
        AssignOp, BinaryOp, Expression, Identifier, Literal, LogicalOp, UnaryOp, UpdateOp,
    },
    node_type::NodeType,
    pattern::Pattern,
    position::{Location, Position, Span},
    statement::Statement,
};

/// The goal symbol a source was parsed with.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    /// A classic script.
    Script,
    /// An ECMAScript module.
    Module,
}

impl SourceType {
    /// Whether this is the module goal.
    #[must_use]
    pub const fn is_module(self) -> bool {
        matches!(self, Self::Module)
    }
}

/// The root node of a parse.
///
/// More information:
///  - [ECMAScript specification][spec]
///
/// [spec]: https://tc39.es/ecma262/#prod-Program
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span, covering the entire source text.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The top-level statements and declarations.
    pub body: Vec<Statement>,
    /// The goal symbol the source was parsed with.
    pub source_type: SourceType,
}

impl Program {
    /// Creates a new `Program`.
    #[must_use]
    pub fn new(body: Vec<Statement>, source_type: SourceType, span: Span) -> Self {
        Self {
            node_type: NodeType::Program,
            span,
            body,
            source_type,
        }
    }
}
