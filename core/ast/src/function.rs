//! Function and class nodes.
//!
//! More information:
//!  - [MDN documentation][mdn]
//!  - [ECMAScript specification][spec]
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Functions
//! [spec]: https://tc39.es/ecma262/#sec-ecmascript-language-functions-and-classes

use crate::{
    expression::{Expression, Identifier},
    pattern::Pattern,
    statement::{BlockStatement, Statement},
    NodeType, Span,
};

/// A function declaration or function expression.
///
/// The same record backs both forms; the [`NodeType`] distinguishes them.
/// The identifier is absent for anonymous function expressions and for
/// anonymous `export default function` declarations.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// ESTree node tag: `FunctionDeclaration` or `FunctionExpression`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The name of the function, if any.
    pub id: Option<Identifier>,
    /// The formal parameter patterns.
    pub params: Vec<Pattern>,
    /// The function body.
    pub body: BlockStatement,
    /// Whether the function is a generator.
    pub generator: bool,
    /// Whether the function is async.
    #[cfg_attr(feature = "serde", serde(rename = "async"))]
    pub is_async: bool,
}

impl Function {
    /// Creates a new `Function`.
    ///
    /// `node_type` must be [`NodeType::FunctionDeclaration`] or
    /// [`NodeType::FunctionExpression`].
    #[must_use]
    pub fn new(
        node_type: NodeType,
        id: Option<Identifier>,
        params: Vec<Pattern>,
        body: BlockStatement,
        generator: bool,
        is_async: bool,
        span: Span,
    ) -> Self {
        Self {
            node_type,
            span,
            id,
            params,
            body,
            generator,
            is_async,
        }
    }
}

/// The body of an arrow function: a block or a bare expression.
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum ArrowFunctionBody {
    /// A `{ … }` body.
    Block(BlockStatement),
    /// A concise expression body.
    Expression(Box<Expression>),
}

/// An arrow function.
///
/// More information:
///  - [ECMAScript specification][spec]
///
/// [spec]: https://tc39.es/ecma262/#sec-arrow-function-definitions
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowFunctionExpression {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// Always `None`; arrow functions are anonymous.
    pub id: Option<Identifier>,
    /// The formal parameter patterns.
    pub params: Vec<Pattern>,
    /// The body of the arrow function.
    pub body: ArrowFunctionBody,
    /// Whether the body is a concise expression body.
    pub expression: bool,
    /// Always `false`; arrow functions cannot be generators.
    pub generator: bool,
    /// Whether the arrow function is async.
    #[cfg_attr(feature = "serde", serde(rename = "async"))]
    pub is_async: bool,
}

impl ArrowFunctionExpression {
    /// Creates a new `ArrowFunctionExpression`.
    #[must_use]
    pub fn new(params: Vec<Pattern>, body: ArrowFunctionBody, is_async: bool, span: Span) -> Self {
        let expression = matches!(body, ArrowFunctionBody::Expression(_));
        Self {
            node_type: NodeType::ArrowFunctionExpression,
            span,
            id: None,
            params,
            body,
            expression,
            generator: false,
            is_async,
        }
    }
}

/// A class declaration or class expression.
///
/// The same record backs both forms; the [`NodeType`] distinguishes them.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    /// ESTree node tag: `ClassDeclaration` or `ClassExpression`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The name of the class, if any.
    pub id: Option<Identifier>,
    /// The `extends` heritage expression.
    pub super_class: Option<Expression>,
    /// The class body.
    pub body: ClassBody,
}

impl Class {
    /// Creates a new `Class`.
    ///
    /// `node_type` must be [`NodeType::ClassDeclaration`] or
    /// [`NodeType::ClassExpression`].
    #[must_use]
    pub fn new(
        node_type: NodeType,
        id: Option<Identifier>,
        super_class: Option<Expression>,
        body: ClassBody,
        span: Span,
    ) -> Self {
        Self {
            node_type,
            span,
            id,
            super_class,
            body,
        }
    }
}

/// The body of a class.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ClassBody {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The elements of the class body.
    pub body: Vec<ClassElement>,
}

impl ClassBody {
    /// Creates a new `ClassBody`.
    #[must_use]
    pub fn new(body: Vec<ClassElement>, span: Span) -> Self {
        Self {
            node_type: NodeType::ClassBody,
            span,
            body,
        }
    }
}

/// One element of a class body.
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum ClassElement {
    /// A method, getter, setter or constructor.
    Method(MethodDefinition),
    /// A class field.
    Property(PropertyDefinition),
    /// A `static { … }` initialization block.
    StaticBlock(StaticBlock),
}

/// The kind of a [`MethodDefinition`].
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    /// The class constructor.
    Constructor,
    /// A plain method.
    Method,
    /// A getter.
    Get,
    /// A setter.
    Set,
}

/// A method, getter, setter or constructor of a class.
///
/// More information:
///  - [ECMAScript specification][spec]
///
/// [spec]: https://tc39.es/ecma262/#prod-MethodDefinition
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDefinition {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The method name: an identifier, literal, private identifier, or an
    /// arbitrary expression when `computed` is set.
    pub key: Expression,
    /// The method function; always a [`Function`] with the
    /// `FunctionExpression` tag.
    pub value: Function,
    /// The kind of the method.
    pub kind: MethodKind,
    /// Whether the key is a computed `[expr]` key.
    pub computed: bool,
    /// Whether the method is static.
    #[cfg_attr(feature = "serde", serde(rename = "static"))]
    pub is_static: bool,
}

impl MethodDefinition {
    /// Creates a new `MethodDefinition`.
    #[must_use]
    pub fn new(
        key: Expression,
        value: Function,
        kind: MethodKind,
        computed: bool,
        is_static: bool,
        span: Span,
    ) -> Self {
        Self {
            node_type: NodeType::MethodDefinition,
            span,
            key,
            value,
            kind,
            computed,
            is_static,
        }
    }
}

/// A class field.
///
/// More information:
///  - [ECMAScript specification][spec]
///
/// [spec]: https://tc39.es/ecma262/#prod-FieldDefinition
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDefinition {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The field name.
    pub key: Expression,
    /// The field initializer, if any.
    pub value: Option<Expression>,
    /// Whether the key is a computed `[expr]` key.
    pub computed: bool,
    /// Whether the field is static.
    #[cfg_attr(feature = "serde", serde(rename = "static"))]
    pub is_static: bool,
}

impl PropertyDefinition {
    /// Creates a new `PropertyDefinition`.
    #[must_use]
    pub fn new(
        key: Expression,
        value: Option<Expression>,
        computed: bool,
        is_static: bool,
        span: Span,
    ) -> Self {
        Self {
            node_type: NodeType::PropertyDefinition,
            span,
            key,
            value,
            computed,
            is_static,
        }
    }
}

/// A `static { … }` class initialization block.
///
/// More information:
///  - [ECMAScript specification][spec]
///
/// [spec]: https://tc39.es/ecma262/#prod-ClassStaticBlock
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct StaticBlock {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The statements of the block.
    pub body: Vec<Statement>,
}

impl StaticBlock {
    /// Creates a new `StaticBlock`.
    #[must_use]
    pub fn new(body: Vec<Statement>, span: Span) -> Self {
        Self {
            node_type: NodeType::StaticBlock,
            span,
            body,
        }
    }
}
