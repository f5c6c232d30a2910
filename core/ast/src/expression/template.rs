//! Template literal nodes.
//!
//! More information:
//!  - [MDN documentation][mdn]
//!  - [ECMAScript specification][spec]
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Template_literals
//! [spec]: https://tc39.es/ecma262/#sec-template-literals

use super::Expression;
use crate::{NodeType, Span};

/// The raw and cooked strings of a [`TemplateElement`].
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateElementValue {
    /// The source text of the element, escapes untouched.
    pub raw: Box<str>,
    /// The decoded text, or `None` when the element contains an escape
    /// sequence that cannot be decoded. Only tagged templates may carry such
    /// elements.
    pub cooked: Option<Box<str>>,
}

/// One span of literal text inside a template literal.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateElement {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The raw and cooked text.
    pub value: TemplateElementValue,
    /// Whether this is the last element of the template.
    pub tail: bool,
}

impl TemplateElement {
    /// Creates a new `TemplateElement`.
    #[must_use]
    pub fn new(raw: Box<str>, cooked: Option<Box<str>>, tail: bool, span: Span) -> Self {
        Self {
            node_type: NodeType::TemplateElement,
            span,
            value: TemplateElementValue { raw, cooked },
            tail,
        }
    }
}

/// A template literal.
///
/// `quasis` always has exactly one more element than `expressions`; the
/// elements and expressions interleave in source order.
///
/// More information:
///  - [ECMAScript specification][spec]
///
/// [spec]: https://tc39.es/ecma262/#prod-TemplateLiteral
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateLiteral {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The literal text elements.
    pub quasis: Vec<TemplateElement>,
    /// The interpolated expressions.
    pub expressions: Vec<Expression>,
}

impl TemplateLiteral {
    /// Creates a new `TemplateLiteral`.
    #[must_use]
    pub fn new(quasis: Vec<TemplateElement>, expressions: Vec<Expression>, span: Span) -> Self {
        Self {
            node_type: NodeType::TemplateLiteral,
            span,
            quasis,
            expressions,
        }
    }
}

/// A tagged template expression.
///
/// More information:
///  - [ECMAScript specification][spec]
///
/// [spec]: https://tc39.es/ecma262/#sec-tagged-templates
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedTemplateExpression {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The tag function.
    pub tag: Expression,
    /// The template literal the tag is applied to.
    pub quasi: TemplateLiteral,
}

impl TaggedTemplateExpression {
    /// Creates a new `TaggedTemplateExpression`.
    #[must_use]
    pub fn new(tag: Expression, quasi: TemplateLiteral, span: Span) -> Self {
        Self {
            node_type: NodeType::TaggedTemplateExpression,
            span,
            tag,
            quasi,
        }
    }
}
