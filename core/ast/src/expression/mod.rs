//! Expression nodes.
//!
//! More information:
//!  - [MDN documentation][mdn]
//!  - [ECMAScript specification][spec]
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Operators
//! [spec]: https://tc39.es/ecma262/#sec-ecmascript-language-expressions

pub mod literal;
pub mod operator;
pub mod template;

pub use self::{
    literal::{Literal, LiteralValue, RegExpLiteral},
    operator::{AssignOp, BinaryOp, LogicalOp, UnaryOp, UpdateOp},
    template::{TaggedTemplateExpression, TemplateElement, TemplateLiteral},
};

use crate::{
    function::{ArrowFunctionExpression, Class, Function},
    pattern::Pattern,
    property::Property,
    NodeType, Span,
};

/// An expression node.
///
/// More information:
///  - [ECMAScript specification][spec]
///
/// [spec]: https://tc39.es/ecma262/#prod-Expression
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// An identifier reference.
    Identifier(Identifier),
    /// A `#name` private member name, valid as the left operand of `in` and
    /// as a member property.
    PrivateIdentifier(PrivateIdentifier),
    /// A literal.
    Literal(Literal),
    /// An untagged template literal.
    TemplateLiteral(Box<TemplateLiteral>),
    /// A tagged template.
    TaggedTemplate(Box<TaggedTemplateExpression>),
    /// The `this` expression.
    This(ThisExpression),
    /// The `super` pseudo-expression, valid as a callee or member object.
    Super(SuperExpression),
    /// An array literal.
    Array(Box<ArrayExpression>),
    /// An object literal.
    Object(Box<ObjectExpression>),
    /// A function expression.
    Function(Box<Function>),
    /// An arrow function.
    ArrowFunction(Box<ArrowFunctionExpression>),
    /// A class expression.
    Class(Box<Class>),
    /// A prefix unary operator expression.
    Unary(Box<UnaryExpression>),
    /// A `++`/`--` expression.
    Update(Box<UpdateExpression>),
    /// A binary operator expression.
    Binary(Box<BinaryExpression>),
    /// A `&&`, `||` or `??` expression.
    Logical(Box<LogicalExpression>),
    /// An assignment expression.
    Assignment(Box<AssignmentExpression>),
    /// A `?:` conditional expression.
    Conditional(Box<ConditionalExpression>),
    /// A call expression.
    Call(Box<CallExpression>),
    /// A `new` expression.
    New(Box<NewExpression>),
    /// A comma sequence expression.
    Sequence(Box<SequenceExpression>),
    /// A member access expression.
    Member(Box<MemberExpression>),
    /// A `yield` expression.
    Yield(Box<YieldExpression>),
    /// An `await` expression.
    Await(Box<AwaitExpression>),
    /// `new.target` or `import.meta`.
    MetaProperty(MetaProperty),
    /// A dynamic `import()` expression.
    Import(Box<ImportExpression>),
    /// The wrapper around an optional-chaining subtree.
    Chain(Box<ChainExpression>),
}

impl Expression {
    /// Gets the source span of the expression.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Identifier(n) => n.span,
            Self::PrivateIdentifier(n) => n.span,
            Self::Literal(n) => n.span,
            Self::TemplateLiteral(n) => n.span,
            Self::TaggedTemplate(n) => n.span,
            Self::This(n) => n.span,
            Self::Super(n) => n.span,
            Self::Array(n) => n.span,
            Self::Object(n) => n.span,
            Self::Function(n) => n.span,
            Self::ArrowFunction(n) => n.span,
            Self::Class(n) => n.span,
            Self::Unary(n) => n.span,
            Self::Update(n) => n.span,
            Self::Binary(n) => n.span,
            Self::Logical(n) => n.span,
            Self::Assignment(n) => n.span,
            Self::Conditional(n) => n.span,
            Self::Call(n) => n.span,
            Self::New(n) => n.span,
            Self::Sequence(n) => n.span,
            Self::Member(n) => n.span,
            Self::Yield(n) => n.span,
            Self::Await(n) => n.span,
            Self::MetaProperty(n) => n.span,
            Self::Import(n) => n.span,
            Self::Chain(n) => n.span,
        }
    }

    /// Returns the identifier if this expression is a plain identifier
    /// reference.
    #[must_use]
    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Self::Identifier(ident) => Some(ident),
            _ => None,
        }
    }
}

/// An expression or a spread element, as found in call arguments and array
/// literals.
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionOrSpread {
    /// A plain expression.
    Expression(Expression),
    /// A `...expr` spread element.
    Spread(SpreadElement),
}

impl ExpressionOrSpread {
    /// Gets the source span of the element.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Expression(expr) => expr.span(),
            Self::Spread(spread) => spread.span,
        }
    }
}

/// An identifier.
///
/// More information:
///  - [ECMAScript specification][spec]
///
/// [spec]: https://tc39.es/ecma262/#prod-Identifier
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The name of the identifier, escapes decoded.
    pub name: Box<str>,
}

impl Identifier {
    /// Creates a new `Identifier`.
    #[must_use]
    pub fn new(name: Box<str>, span: Span) -> Self {
        Self {
            node_type: NodeType::Identifier,
            span,
            name,
        }
    }
}

/// A `#name` private class member name.
///
/// More information:
///  - [ECMAScript specification][spec]
///
/// [spec]: https://tc39.es/ecma262/#prod-PrivateIdentifier
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateIdentifier {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The name after the `#`.
    pub name: Box<str>,
}

impl PrivateIdentifier {
    /// Creates a new `PrivateIdentifier`.
    #[must_use]
    pub fn new(name: Box<str>, span: Span) -> Self {
        Self {
            node_type: NodeType::PrivateIdentifier,
            span,
            name,
        }
    }
}

/// The `this` expression.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThisExpression {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
}

impl ThisExpression {
    /// Creates a new `ThisExpression`.
    #[must_use]
    pub fn new(span: Span) -> Self {
        Self {
            node_type: NodeType::ThisExpression,
            span,
        }
    }
}

/// The `super` pseudo-expression.
///
/// Only valid as the callee of a super call or the object of a super property
/// access; the parser enforces both.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuperExpression {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
}

impl SuperExpression {
    /// Creates a new `SuperExpression`.
    #[must_use]
    pub fn new(span: Span) -> Self {
        Self {
            node_type: NodeType::Super,
            span,
        }
    }
}

/// An array literal.
///
/// Elisions are represented by `None` elements.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayExpression {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The elements of the array; `None` for elisions.
    pub elements: Vec<Option<ExpressionOrSpread>>,
}

impl ArrayExpression {
    /// Creates a new `ArrayExpression`.
    #[must_use]
    pub fn new(elements: Vec<Option<ExpressionOrSpread>>, span: Span) -> Self {
        Self {
            node_type: NodeType::ArrayExpression,
            span,
            elements,
        }
    }
}

/// A property or a spread element of an object literal.
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectExpressionProperty {
    /// A `key: value`, shorthand, method or accessor property.
    Property(Property),
    /// A `...expr` spread property.
    Spread(SpreadElement),
}

/// An object literal.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectExpression {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The properties of the object.
    pub properties: Vec<ObjectExpressionProperty>,
}

impl ObjectExpression {
    /// Creates a new `ObjectExpression`.
    #[must_use]
    pub fn new(properties: Vec<ObjectExpressionProperty>, span: Span) -> Self {
        Self {
            node_type: NodeType::ObjectExpression,
            span,
            properties,
        }
    }
}

/// A `...expr` spread element.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadElement {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The expression being spread.
    pub argument: Expression,
}

impl SpreadElement {
    /// Creates a new `SpreadElement`.
    #[must_use]
    pub fn new(argument: Expression, span: Span) -> Self {
        Self {
            node_type: NodeType::SpreadElement,
            span,
            argument,
        }
    }
}

/// A prefix unary operator expression.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The operator.
    pub operator: UnaryOp,
    /// Always `true`; unary operators are prefix only.
    pub prefix: bool,
    /// The operand.
    pub argument: Expression,
}

impl UnaryExpression {
    /// Creates a new `UnaryExpression`.
    #[must_use]
    pub fn new(operator: UnaryOp, argument: Expression, span: Span) -> Self {
        Self {
            node_type: NodeType::UnaryExpression,
            span,
            operator,
            prefix: true,
            argument,
        }
    }
}

/// A `++`/`--` expression, prefix or postfix.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The operator.
    pub operator: UpdateOp,
    /// Whether the operator precedes its operand.
    pub prefix: bool,
    /// The operand.
    pub argument: Expression,
}

impl UpdateExpression {
    /// Creates a new `UpdateExpression`.
    #[must_use]
    pub fn new(operator: UpdateOp, prefix: bool, argument: Expression, span: Span) -> Self {
        Self {
            node_type: NodeType::UpdateExpression,
            span,
            operator,
            prefix,
            argument,
        }
    }
}

/// A binary operator expression.
///
/// The left operand is a [`PrivateIdentifier`] only for the `#name in obj`
/// form.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The operator.
    pub operator: BinaryOp,
    /// The left operand.
    pub left: Expression,
    /// The right operand.
    pub right: Expression,
}

impl BinaryExpression {
    /// Creates a new `BinaryExpression`.
    #[must_use]
    pub fn new(operator: BinaryOp, left: Expression, right: Expression, span: Span) -> Self {
        Self {
            node_type: NodeType::BinaryExpression,
            span,
            operator,
            left,
            right,
        }
    }
}

/// A `&&`, `||` or `??` expression.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpression {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The operator.
    pub operator: LogicalOp,
    /// The left operand.
    pub left: Expression,
    /// The right operand.
    pub right: Expression,
}

impl LogicalExpression {
    /// Creates a new `LogicalExpression`.
    #[must_use]
    pub fn new(operator: LogicalOp, left: Expression, right: Expression, span: Span) -> Self {
        Self {
            node_type: NodeType::LogicalExpression,
            span,
            operator,
            left,
            right,
        }
    }
}

/// The left-hand side of an [`AssignmentExpression`].
///
/// A destructuring target converted from an array or object literal is a
/// [`Pattern`]; every other target stays an [`Expression`].
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentTarget {
    /// A destructuring pattern target.
    Pattern(Pattern),
    /// A simple expression target.
    Expression(Expression),
}

impl AssignmentTarget {
    /// Gets the source span of the target.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Pattern(pattern) => pattern.span(),
            Self::Expression(expr) => expr.span(),
        }
    }
}

/// An assignment expression.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpression {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The operator.
    pub operator: AssignOp,
    /// The assignment target.
    pub left: AssignmentTarget,
    /// The assigned value.
    pub right: Expression,
}

impl AssignmentExpression {
    /// Creates a new `AssignmentExpression`.
    #[must_use]
    pub fn new(operator: AssignOp, left: AssignmentTarget, right: Expression, span: Span) -> Self {
        Self {
            node_type: NodeType::AssignmentExpression,
            span,
            operator,
            left,
            right,
        }
    }
}

/// A `?:` conditional expression.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpression {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The condition.
    pub test: Expression,
    /// The value when the condition is truthy.
    pub consequent: Expression,
    /// The value when the condition is falsy.
    pub alternate: Expression,
}

impl ConditionalExpression {
    /// Creates a new `ConditionalExpression`.
    #[must_use]
    pub fn new(test: Expression, consequent: Expression, alternate: Expression, span: Span) -> Self {
        Self {
            node_type: NodeType::ConditionalExpression,
            span,
            test,
            consequent,
            alternate,
        }
    }
}

/// A call expression.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The called expression.
    pub callee: Expression,
    /// The call arguments.
    pub arguments: Vec<ExpressionOrSpread>,
    /// Whether the call is an optional `?.()` call.
    pub optional: bool,
}

impl CallExpression {
    /// Creates a new `CallExpression`.
    #[must_use]
    pub fn new(
        callee: Expression,
        arguments: Vec<ExpressionOrSpread>,
        optional: bool,
        span: Span,
    ) -> Self {
        Self {
            node_type: NodeType::CallExpression,
            span,
            callee,
            arguments,
            optional,
        }
    }
}

/// A `new` expression.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpression {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The constructed expression.
    pub callee: Expression,
    /// The constructor arguments.
    pub arguments: Vec<ExpressionOrSpread>,
}

impl NewExpression {
    /// Creates a new `NewExpression`.
    #[must_use]
    pub fn new(callee: Expression, arguments: Vec<ExpressionOrSpread>, span: Span) -> Self {
        Self {
            node_type: NodeType::NewExpression,
            span,
            callee,
            arguments,
        }
    }
}

/// A comma sequence expression.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceExpression {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The expressions of the sequence, in source order.
    pub expressions: Vec<Expression>,
}

impl SequenceExpression {
    /// Creates a new `SequenceExpression`.
    #[must_use]
    pub fn new(expressions: Vec<Expression>, span: Span) -> Self {
        Self {
            node_type: NodeType::SequenceExpression,
            span,
            expressions,
        }
    }
}

/// A member access expression.
///
/// The property is a [`PrivateIdentifier`] for `obj.#name` accesses and an
/// arbitrary expression for computed `obj[expr]` accesses.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpression {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The object being accessed.
    pub object: Expression,
    /// The accessed property.
    pub property: Expression,
    /// Whether the access is a computed `[expr]` access.
    pub computed: bool,
    /// Whether the access is an optional `?.` access.
    pub optional: bool,
}

impl MemberExpression {
    /// Creates a new `MemberExpression`.
    #[must_use]
    pub fn new(
        object: Expression,
        property: Expression,
        computed: bool,
        optional: bool,
        span: Span,
    ) -> Self {
        Self {
            node_type: NodeType::MemberExpression,
            span,
            object,
            property,
            computed,
            optional,
        }
    }
}

/// A `yield` expression.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct YieldExpression {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The yielded value, if any.
    pub argument: Option<Expression>,
    /// Whether this is a `yield*` delegation.
    pub delegate: bool,
}

impl YieldExpression {
    /// Creates a new `YieldExpression`.
    #[must_use]
    pub fn new(argument: Option<Expression>, delegate: bool, span: Span) -> Self {
        Self {
            node_type: NodeType::YieldExpression,
            span,
            argument,
            delegate,
        }
    }
}

/// An `await` expression.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AwaitExpression {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The awaited value.
    pub argument: Expression,
}

impl AwaitExpression {
    /// Creates a new `AwaitExpression`.
    #[must_use]
    pub fn new(argument: Expression, span: Span) -> Self {
        Self {
            node_type: NodeType::AwaitExpression,
            span,
            argument,
        }
    }
}

/// `new.target` or `import.meta`.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaProperty {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The `new` or `import` part.
    pub meta: Identifier,
    /// The `target` or `meta` part.
    pub property: Identifier,
}

impl MetaProperty {
    /// Creates a new `MetaProperty`.
    #[must_use]
    pub fn new(meta: Identifier, property: Identifier, span: Span) -> Self {
        Self {
            node_type: NodeType::MetaProperty,
            span,
            meta,
            property,
        }
    }
}

/// A dynamic `import()` expression.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ImportExpression {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The module specifier expression.
    pub source: Expression,
    /// The import options, the optional second argument.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub options: Option<Expression>,
}

impl ImportExpression {
    /// Creates a new `ImportExpression`.
    #[must_use]
    pub fn new(source: Expression, options: Option<Expression>, span: Span) -> Self {
        Self {
            node_type: NodeType::ImportExpression,
            span,
            source,
            options,
        }
    }
}

/// The wrapper around a member/call subtree that contains at least one
/// optional `?.` link.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ChainExpression {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The chained member or call expression.
    pub expression: Expression,
}

impl ChainExpression {
    /// Creates a new `ChainExpression`.
    #[must_use]
    pub fn new(expression: Expression, span: Span) -> Self {
        Self {
            node_type: NodeType::ChainExpression,
            span,
            expression,
        }
    }
}
