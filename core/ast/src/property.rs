//! Object literal property nodes.
//!
//! More information:
//!  - [MDN documentation][mdn]
//!  - [ECMAScript specification][spec]
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Operators/Object_initializer
//! [spec]: https://tc39.es/ecma262/#prod-PropertyDefinition

use crate::{expression::Expression, NodeType, Span};

/// The kind of a [`Property`].
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// A plain `key: value`, shorthand or method property.
    Init,
    /// A getter.
    Get,
    /// A setter.
    Set,
}

/// One property of an object literal.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The property key: an identifier, a string or number literal, or an
    /// arbitrary expression when `computed` is set.
    pub key: Expression,
    /// The property value.
    pub value: Expression,
    /// Whether the property is a plain value, a getter or a setter.
    pub kind: PropertyKind,
    /// Whether the key is a computed `[expr]` key.
    pub computed: bool,
    /// Whether the property is a method.
    pub method: bool,
    /// Whether the property is a `{x}` or `{x = default}` shorthand.
    pub shorthand: bool,
}

impl Property {
    /// Creates a new `Property`.
    #[must_use]
    pub fn new(
        key: Expression,
        value: Expression,
        kind: PropertyKind,
        computed: bool,
        method: bool,
        shorthand: bool,
        span: Span,
    ) -> Self {
        Self {
            node_type: NodeType::Property,
            span,
            key,
            value,
            kind,
            computed,
            method,
            shorthand,
        }
    }
}
