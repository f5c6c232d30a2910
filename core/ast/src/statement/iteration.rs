//! Iteration statement nodes.
//!
//! More information:
//!  - [MDN documentation][mdn]
//!  - [ECMAScript specification][spec]
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Statements#Iterations
//! [spec]: https://tc39.es/ecma262/#sec-iteration-statements

use super::Statement;
use crate::{
    declaration::VariableDeclaration, expression::Expression, pattern::Pattern, NodeType, Span,
};

/// A `while` loop.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The loop condition.
    pub test: Expression,
    /// The loop body.
    pub body: Box<Statement>,
}

impl WhileStatement {
    /// Creates a new `WhileStatement`.
    #[must_use]
    pub fn new(test: Expression, body: Statement, span: Span) -> Self {
        Self {
            node_type: NodeType::WhileStatement,
            span,
            test,
            body: Box::new(body),
        }
    }
}

/// A `do … while` loop.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileStatement {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The loop body.
    pub body: Box<Statement>,
    /// The loop condition.
    pub test: Expression,
}

impl DoWhileStatement {
    /// Creates a new `DoWhileStatement`.
    #[must_use]
    pub fn new(body: Statement, test: Expression, span: Span) -> Self {
        Self {
            node_type: NodeType::DoWhileStatement,
            span,
            body: Box::new(body),
            test,
        }
    }
}

/// The init clause of a [`ForStatement`].
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    /// A `var`/`let`/`const` declaration.
    VariableDeclaration(VariableDeclaration),
    /// A plain expression.
    Expression(Expression),
}

/// A classic three-clause `for` loop.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The init clause.
    pub init: Option<ForInit>,
    /// The loop condition.
    pub test: Option<Expression>,
    /// The update clause.
    pub update: Option<Expression>,
    /// The loop body.
    pub body: Box<Statement>,
}

impl ForStatement {
    /// Creates a new `ForStatement`.
    #[must_use]
    pub fn new(
        init: Option<ForInit>,
        test: Option<Expression>,
        update: Option<Expression>,
        body: Statement,
        span: Span,
    ) -> Self {
        Self {
            node_type: NodeType::ForStatement,
            span,
            init,
            test,
            update,
            body: Box::new(body),
        }
    }
}

/// The left-hand side of a `for … in` or `for … of` loop.
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum ForTarget {
    /// A fresh `var`/`let`/`const` binding.
    VariableDeclaration(VariableDeclaration),
    /// An existing target, possibly a destructuring pattern.
    Pattern(Pattern),
}

/// A `for … in` loop.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ForInStatement {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The loop target.
    pub left: ForTarget,
    /// The enumerated object.
    pub right: Expression,
    /// The loop body.
    pub body: Box<Statement>,
}

impl ForInStatement {
    /// Creates a new `ForInStatement`.
    #[must_use]
    pub fn new(left: ForTarget, right: Expression, body: Statement, span: Span) -> Self {
        Self {
            node_type: NodeType::ForInStatement,
            span,
            left,
            right,
            body: Box::new(body),
        }
    }
}

/// A `for … of` loop.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct ForOfStatement {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The loop target.
    pub left: ForTarget,
    /// The iterated object.
    pub right: Expression,
    /// The loop body.
    pub body: Box<Statement>,
    /// Whether this is a `for await … of` loop.
    #[cfg_attr(feature = "serde", serde(rename = "await"))]
    pub is_await: bool,
}

impl ForOfStatement {
    /// Creates a new `ForOfStatement`.
    #[must_use]
    pub fn new(
        left: ForTarget,
        right: Expression,
        body: Statement,
        is_await: bool,
        span: Span,
    ) -> Self {
        Self {
            node_type: NodeType::ForOfStatement,
            span,
            left,
            right,
            body: Box::new(body),
            is_await,
        }
    }
}
