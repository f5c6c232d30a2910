//! Statement nodes.
//!
//! More information:
//!  - [MDN documentation][mdn]
//!  - [ECMAScript specification][spec]
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Statements
//! [spec]: https://tc39.es/ecma262/#sec-ecmascript-language-statements-and-declarations

pub mod iteration;

pub use self::iteration::{
    DoWhileStatement, ForInStatement, ForInit, ForOfStatement, ForStatement, ForTarget,
    WhileStatement,
};

use crate::{
    declaration::{
        ExportAllDeclaration, ExportDefaultDeclaration, ExportNamedDeclaration, ImportDeclaration,
        VariableDeclaration,
    },
    expression::{Expression, Identifier},
    function::{Class, Function},
    pattern::Pattern,
    NodeType, Span,
};

/// A statement node.
///
/// Declarations are statements in the ESTree shape, so `var`, function,
/// class, and module declarations all appear here.
///
/// More information:
///  - [ECMAScript specification][spec]
///
/// [spec]: https://tc39.es/ecma262/#prod-Statement
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An expression used as a statement.
    Expression(ExpressionStatement),
    /// A `{ … }` block.
    Block(BlockStatement),
    /// A lone `;`.
    Empty(EmptyStatement),
    /// A `debugger` statement.
    Debugger(DebuggerStatement),
    /// A `with` statement.
    With(Box<WithStatement>),
    /// A `return` statement.
    Return(ReturnStatement),
    /// A `label: stmt` statement.
    Labeled(Box<LabeledStatement>),
    /// A `break` statement.
    Break(BreakStatement),
    /// A `continue` statement.
    Continue(ContinueStatement),
    /// An `if` statement.
    If(Box<IfStatement>),
    /// A `switch` statement.
    Switch(Box<SwitchStatement>),
    /// A `throw` statement.
    Throw(ThrowStatement),
    /// A `try` statement.
    Try(Box<TryStatement>),
    /// A `while` loop.
    While(Box<WhileStatement>),
    /// A `do … while` loop.
    DoWhile(Box<DoWhileStatement>),
    /// A classic `for` loop.
    For(Box<ForStatement>),
    /// A `for … in` loop.
    ForIn(Box<ForInStatement>),
    /// A `for … of` loop.
    ForOf(Box<ForOfStatement>),
    /// A `var`/`let`/`const` declaration.
    VariableDeclaration(VariableDeclaration),
    /// A function declaration.
    FunctionDeclaration(Box<Function>),
    /// A class declaration.
    ClassDeclaration(Box<Class>),
    /// An `import` declaration.
    ImportDeclaration(Box<ImportDeclaration>),
    /// An `export { … }` or `export <declaration>` declaration.
    ExportNamedDeclaration(Box<ExportNamedDeclaration>),
    /// An `export default` declaration.
    ExportDefaultDeclaration(Box<ExportDefaultDeclaration>),
    /// An `export *` declaration.
    ExportAllDeclaration(Box<ExportAllDeclaration>),
}

impl Statement {
    /// Gets the source span of the statement.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Expression(n) => n.span,
            Self::Block(n) => n.span,
            Self::Empty(n) => n.span,
            Self::Debugger(n) => n.span,
            Self::With(n) => n.span,
            Self::Return(n) => n.span,
            Self::Labeled(n) => n.span,
            Self::Break(n) => n.span,
            Self::Continue(n) => n.span,
            Self::If(n) => n.span,
            Self::Switch(n) => n.span,
            Self::Throw(n) => n.span,
            Self::Try(n) => n.span,
            Self::While(n) => n.span,
            Self::DoWhile(n) => n.span,
            Self::For(n) => n.span,
            Self::ForIn(n) => n.span,
            Self::ForOf(n) => n.span,
            Self::VariableDeclaration(n) => n.span,
            Self::FunctionDeclaration(n) => n.span,
            Self::ClassDeclaration(n) => n.span,
            Self::ImportDeclaration(n) => n.span,
            Self::ExportNamedDeclaration(n) => n.span,
            Self::ExportDefaultDeclaration(n) => n.span,
            Self::ExportAllDeclaration(n) => n.span,
        }
    }
}

/// An expression used as a statement.
///
/// The `directive` field carries the raw directive text when the statement is
/// part of a directive prologue, e.g. `use strict`.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The expression.
    pub expression: Expression,
    /// The directive text, without quotes, for prologue directives.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub directive: Option<Box<str>>,
}

impl ExpressionStatement {
    /// Creates a new `ExpressionStatement`.
    #[must_use]
    pub fn new(expression: Expression, span: Span) -> Self {
        Self {
            node_type: NodeType::ExpressionStatement,
            span,
            expression,
            directive: None,
        }
    }
}

/// A `{ … }` statement block.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The statements of the block.
    pub body: Vec<Statement>,
}

impl BlockStatement {
    /// Creates a new `BlockStatement`.
    #[must_use]
    pub fn new(body: Vec<Statement>, span: Span) -> Self {
        Self {
            node_type: NodeType::BlockStatement,
            span,
            body,
        }
    }
}

/// A lone `;`.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStatement {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
}

impl EmptyStatement {
    /// Creates a new `EmptyStatement`.
    #[must_use]
    pub fn new(span: Span) -> Self {
        Self {
            node_type: NodeType::EmptyStatement,
            span,
        }
    }
}

/// A `debugger` statement.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebuggerStatement {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
}

impl DebuggerStatement {
    /// Creates a new `DebuggerStatement`.
    #[must_use]
    pub fn new(span: Span) -> Self {
        Self {
            node_type: NodeType::DebuggerStatement,
            span,
        }
    }
}

/// A `with` statement. Sloppy mode only.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct WithStatement {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The scope object expression.
    pub object: Expression,
    /// The statement to run inside the extended scope.
    pub body: Statement,
}

impl WithStatement {
    /// Creates a new `WithStatement`.
    #[must_use]
    pub fn new(object: Expression, body: Statement, span: Span) -> Self {
        Self {
            node_type: NodeType::WithStatement,
            span,
            object,
            body,
        }
    }
}

/// A `return` statement.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The returned value, if any.
    pub argument: Option<Expression>,
}

impl ReturnStatement {
    /// Creates a new `ReturnStatement`.
    #[must_use]
    pub fn new(argument: Option<Expression>, span: Span) -> Self {
        Self {
            node_type: NodeType::ReturnStatement,
            span,
            argument,
        }
    }
}

/// A `label: stmt` statement.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledStatement {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The label.
    pub label: Identifier,
    /// The labeled statement.
    pub body: Statement,
}

impl LabeledStatement {
    /// Creates a new `LabeledStatement`.
    #[must_use]
    pub fn new(label: Identifier, body: Statement, span: Span) -> Self {
        Self {
            node_type: NodeType::LabeledStatement,
            span,
            label,
            body,
        }
    }
}

/// A `break` statement.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BreakStatement {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The target label, if any.
    pub label: Option<Identifier>,
}

impl BreakStatement {
    /// Creates a new `BreakStatement`.
    #[must_use]
    pub fn new(label: Option<Identifier>, span: Span) -> Self {
        Self {
            node_type: NodeType::BreakStatement,
            span,
            label,
        }
    }
}

/// A `continue` statement.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStatement {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The target label, if any.
    pub label: Option<Identifier>,
}

impl ContinueStatement {
    /// Creates a new `ContinueStatement`.
    #[must_use]
    pub fn new(label: Option<Identifier>, span: Span) -> Self {
        Self {
            node_type: NodeType::ContinueStatement,
            span,
            label,
        }
    }
}

/// An `if` statement.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The condition.
    pub test: Expression,
    /// The statement to run when the condition is truthy.
    pub consequent: Statement,
    /// The `else` statement, if any.
    pub alternate: Option<Statement>,
}

impl IfStatement {
    /// Creates a new `IfStatement`.
    #[must_use]
    pub fn new(
        test: Expression,
        consequent: Statement,
        alternate: Option<Statement>,
        span: Span,
    ) -> Self {
        Self {
            node_type: NodeType::IfStatement,
            span,
            test,
            consequent,
            alternate,
        }
    }
}

/// One `case`/`default` clause of a [`SwitchStatement`].
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The tested expression, or `None` for the `default` clause.
    pub test: Option<Expression>,
    /// The statements of the clause.
    pub consequent: Vec<Statement>,
}

impl SwitchCase {
    /// Creates a new `SwitchCase`.
    #[must_use]
    pub fn new(test: Option<Expression>, consequent: Vec<Statement>, span: Span) -> Self {
        Self {
            node_type: NodeType::SwitchCase,
            span,
            test,
            consequent,
        }
    }
}

/// A `switch` statement.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStatement {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The switched expression.
    pub discriminant: Expression,
    /// The clauses, in source order.
    pub cases: Vec<SwitchCase>,
}

impl SwitchStatement {
    /// Creates a new `SwitchStatement`.
    #[must_use]
    pub fn new(discriminant: Expression, cases: Vec<SwitchCase>, span: Span) -> Self {
        Self {
            node_type: NodeType::SwitchStatement,
            span,
            discriminant,
            cases,
        }
    }
}

/// A `throw` statement.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ThrowStatement {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The thrown value.
    pub argument: Expression,
}

impl ThrowStatement {
    /// Creates a new `ThrowStatement`.
    #[must_use]
    pub fn new(argument: Expression, span: Span) -> Self {
        Self {
            node_type: NodeType::ThrowStatement,
            span,
            argument,
        }
    }
}

/// The `catch` clause of a [`TryStatement`].
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The caught-value binding, or `None` for a bare `catch { }`.
    pub param: Option<Pattern>,
    /// The handler block.
    pub body: BlockStatement,
}

impl CatchClause {
    /// Creates a new `CatchClause`.
    #[must_use]
    pub fn new(param: Option<Pattern>, body: BlockStatement, span: Span) -> Self {
        Self {
            node_type: NodeType::CatchClause,
            span,
            param,
            body,
        }
    }
}

/// A `try` statement.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TryStatement {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The guarded block.
    pub block: BlockStatement,
    /// The `catch` clause, if any.
    pub handler: Option<CatchClause>,
    /// The `finally` block, if any.
    pub finalizer: Option<BlockStatement>,
}

impl TryStatement {
    /// Creates a new `TryStatement`.
    #[must_use]
    pub fn new(
        block: BlockStatement,
        handler: Option<CatchClause>,
        finalizer: Option<BlockStatement>,
        span: Span,
    ) -> Self {
        Self {
            node_type: NodeType::TryStatement,
            span,
            block,
            handler,
            finalizer,
        }
    }
}
