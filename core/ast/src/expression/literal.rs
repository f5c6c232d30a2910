//! Literal expression nodes.
//!
//! More information:
//!  - [MDN documentation][mdn]
//!  - [ECMAScript specification][spec]
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Lexical_grammar#Literals
//! [spec]: https://tc39.es/ecma262/#sec-primary-expression-literals

use crate::{NodeType, Span};

/// The decoded value of a [`Literal`].
///
/// BigInt and regular expression literals have no JSON-representable value;
/// their `value` serializes as `null` and the decoded content lives in the
/// [`Literal::bigint`] and [`Literal::regex`] fields instead.
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The value of a `null`, BigInt or regular expression literal.
    Null,
    /// The value of a boolean literal.
    Boolean(bool),
    /// The value of a numeric literal.
    Number(f64),
    /// The value of a string literal, escapes decoded.
    String(Box<str>),
}

/// The pattern and flags of a regular expression literal.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegExpLiteral {
    /// The pattern between the slashes, verbatim.
    pub pattern: Box<str>,
    /// The flags after the closing slash.
    pub flags: Box<str>,
}

/// A literal expression: string, number, BigInt, boolean, `null` or regular
/// expression.
///
/// More information:
///  - [ECMAScript specification][spec]
///
/// [spec]: https://tc39.es/ecma262/#sec-primary-expression-literals
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    /// ESTree node tag.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    /// Source span.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub span: Span,
    /// The decoded value.
    pub value: LiteralValue,
    /// The literal exactly as written in the source.
    pub raw: Box<str>,
    /// The digits of a BigInt literal as a normalized decimal string.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub bigint: Option<Box<str>>,
    /// The pattern and flags of a regular expression literal.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub regex: Option<RegExpLiteral>,
}

impl Literal {
    /// Creates a plain literal from its decoded value and raw text.
    #[must_use]
    pub fn new(value: LiteralValue, raw: Box<str>, span: Span) -> Self {
        Self {
            node_type: NodeType::Literal,
            span,
            value,
            raw,
            bigint: None,
            regex: None,
        }
    }

    /// Creates a BigInt literal from its normalized decimal digits.
    #[must_use]
    pub fn bigint(digits: Box<str>, raw: Box<str>, span: Span) -> Self {
        Self {
            node_type: NodeType::Literal,
            span,
            value: LiteralValue::Null,
            raw,
            bigint: Some(digits),
            regex: None,
        }
    }

    /// Creates a regular expression literal.
    #[must_use]
    pub fn regex(pattern: Box<str>, flags: Box<str>, raw: Box<str>, span: Span) -> Self {
        Self {
            node_type: NodeType::Literal,
            span,
            value: LiteralValue::Null,
            raw,
            bigint: None,
            regex: Some(RegExpLiteral { pattern, flags }),
        }
    }

    /// Returns the decoded string value if this is a string literal.
    #[must_use]
    pub fn as_string(&self) -> Option<&str> {
        match &self.value {
            LiteralValue::String(s) => Some(s),
            _ => None,
        }
    }
}
