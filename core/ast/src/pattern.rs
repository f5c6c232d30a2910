//! Destructuring and binding pattern nodes.
//!
//! More information:
//!  - [MDN documentation][mdn]
//!  - [ECMAScript specification][spec]
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Operators/Destructuring_assignment
//! [spec]: https://tc39.es/ecma262/#sec-destructuring-binding-patterns

use crate::{
    expression::{Expression, Identifier, MemberExpression},
    property::PropertyKind,
    NodeType, Span,
};

/// A binding or destructuring pattern.
///
/// Member expressions occur only inside destructuring assignment targets
/// (`[a.b] = c`), never in binding positions; the parser enforces this.
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// A single-name binding.
    Identifier(Identifier),
    /// An object destructuring pattern.
    Object(Box<ObjectPattern>),
    /// An array destructuring pattern.
    Array(Box<ArrayPattern>),
    /// A `...rest` element.
    Rest(Box<RestElement>),
    /// A pattern with a default value.
    Assignment(Box<AssignmentPattern>),
    /// A member expression target of a destructuring assignment.
    Member(Box<MemberExpression>),
}

impl Pattern {
    /// Gets the source span of the pattern.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Identifier(n) => n.span,
            Self::Object(n) => n.span,
            Self::Array(n) => n.span,
            Self::Rest(n) => n.span,
            Self::Assignment(n) => n.span,
            Self::Member(n) => n.span,
        }
    }
}

/// A `Property` of an [`ObjectPattern`], with a pattern as its value.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PatternProperty {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The property key.
    pub key: Expression,
    /// The bound pattern.
    pub value: Pattern,
    /// Always [`PropertyKind::Init`]; accessors cannot appear in patterns.
    pub kind: PropertyKind,
    /// Whether the key is a computed `[expr]` key.
    pub computed: bool,
    /// Always `false`; methods cannot appear in patterns.
    pub method: bool,
    /// Whether the property is a `{x}` or `{x = default}` shorthand.
    pub shorthand: bool,
}

impl PatternProperty {
    /// Creates a new `PatternProperty`.
    #[must_use]
    pub fn new(
        key: Expression,
        value: Pattern,
        computed: bool,
        shorthand: bool,
        span: Span,
    ) -> Self {
        Self {
            node_type: NodeType::Property,
            span,
            key,
            value,
            kind: PropertyKind::Init,
            computed,
            method: false,
            shorthand,
        }
    }
}

/// A property or rest element of an [`ObjectPattern`].
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectPatternProperty {
    /// A `key: pattern` or shorthand property.
    Property(PatternProperty),
    /// A `...rest` property.
    Rest(RestElement),
}

/// An object destructuring pattern.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectPattern {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The properties of the pattern.
    pub properties: Vec<ObjectPatternProperty>,
}

impl ObjectPattern {
    /// Creates a new `ObjectPattern`.
    #[must_use]
    pub fn new(properties: Vec<ObjectPatternProperty>, span: Span) -> Self {
        Self {
            node_type: NodeType::ObjectPattern,
            span,
            properties,
        }
    }
}

/// An array destructuring pattern.
///
/// Elisions are represented by `None` elements.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayPattern {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The element patterns; `None` for elisions.
    pub elements: Vec<Option<Pattern>>,
}

impl ArrayPattern {
    /// Creates a new `ArrayPattern`.
    #[must_use]
    pub fn new(elements: Vec<Option<Pattern>>, span: Span) -> Self {
        Self {
            node_type: NodeType::ArrayPattern,
            span,
            elements,
        }
    }
}

/// A `...rest` element of a pattern or parameter list.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RestElement {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The pattern bound to the rest of the values.
    pub argument: Pattern,
}

impl RestElement {
    /// Creates a new `RestElement`.
    #[must_use]
    pub fn new(argument: Pattern, span: Span) -> Self {
        Self {
            node_type: NodeType::RestElement,
            span,
            argument,
        }
    }
}

/// A pattern with a default value.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentPattern {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The bound pattern.
    pub left: Pattern,
    /// The default value.
    pub right: Expression,
}

impl AssignmentPattern {
    /// Creates a new `AssignmentPattern`.
    #[must_use]
    pub fn new(left: Pattern, right: Expression, span: Span) -> Self {
        Self {
            node_type: NodeType::AssignmentPattern,
            span,
            left,
            right,
        }
    }
}
