//! This module implements all of the [Token]s used in the ECMAScript
//! language.
//!
//! More information:
//!  - [ECMAScript reference][spec]
//!
//! [spec]: https://tc39.es/ecma262/#sec-tokens

use super::{Keyword, Punctuator};
use sparrow_ast::Span;

/// The flavor a numeric literal was written in.
///
/// The legacy flavors are accepted by the lexer and rejected by the parser in
/// strict code; they cannot carry a BigInt suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericFlavor {
    /// A plain decimal literal.
    Decimal,
    /// A `0x` hexadecimal literal.
    Hex,
    /// A `0o` octal literal.
    Octal,
    /// A `0b` binary literal.
    Binary,
    /// A legacy `017`-style octal literal.
    LegacyOctal,
    /// A legacy `089`-style decimal literal with a leading zero.
    NonOctalDecimal,
}

/// The value of a numeric literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Numeric {
    /// A double precision number.
    Number(f64),
    /// A BigInt, as normalized decimal digits.
    BigInt(Box<str>),
}

/// The raw and cooked halves of a template literal token.
///
/// `cooked` is `None` when the text contains an escape sequence that cannot
/// be decoded; only tagged templates may contain such tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateString {
    /// The text between the delimiters, escapes untouched.
    pub raw: Box<str>,
    /// The decoded text.
    pub cooked: Option<Box<str>>,
}

/// Represents the type of Token and the data it has inside.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A boolean literal, which is either `true` or `false`.
    BooleanLiteral(bool),

    /// The end of the file.
    Eof,

    /// An identifier.
    Identifier,

    /// A `#name` private identifier. The lexeme holds the name without `#`.
    PrivateIdentifier,

    /// A keyword.
    Keyword(Keyword),

    /// A `null` literal.
    NullLiteral,

    /// A numeric literal.
    NumericLiteral {
        /// The decoded value.
        value: Numeric,
        /// How the literal was written.
        flavor: NumericFlavor,
    },

    /// A piece of punctuation.
    Punctuator(Punctuator),

    /// A string literal.
    StringLiteral {
        /// The decoded value.
        value: Box<str>,
        /// Whether the source contained a legacy octal or non-octal decimal
        /// escape sequence (`\1`..`\9`, `\0` followed by a digit).
        legacy_octal_escape: bool,
        /// Whether the source contained an unpaired surrogate escape.
        lone_surrogate: bool,
    },

    /// A template with no substitution.
    TemplateNoSubstitution(TemplateString),

    /// The start of a template up to the first substitution.
    TemplateHead(TemplateString),

    /// The part of a template between two substitutions.
    TemplateMiddle(TemplateString),

    /// The tail of a template after the last substitution.
    TemplateTail(TemplateString),

    /// A regular expression, consisting of pattern and flags.
    RegularExpressionLiteral {
        /// The pattern between the slashes, verbatim.
        pattern: Box<str>,
        /// The flags after the closing slash.
        flags: Box<str>,
    },
}

impl TokenKind {
    /// Implements the `ToString` functionality for the `TokenKind`.
    #[must_use]
    pub fn to_string(&self) -> String {
        match self {
            Self::BooleanLiteral(val) => val.to_string(),
            Self::Eof => "end of file".to_owned(),
            Self::Identifier | Self::PrivateIdentifier => "identifier".to_owned(),
            Self::Keyword(word) => word.as_str().to_owned(),
            Self::NullLiteral => "null".to_owned(),
            Self::NumericLiteral {
                value: Numeric::Number(num),
                ..
            } => num.to_string(),
            Self::NumericLiteral {
                value: Numeric::BigInt(num),
                ..
            } => format!("{num}n"),
            Self::Punctuator(punc) => punc.as_str().to_owned(),
            Self::StringLiteral { .. } => "string".to_owned(),
            Self::TemplateNoSubstitution(ts)
            | Self::TemplateHead(ts)
            | Self::TemplateMiddle(ts)
            | Self::TemplateTail(ts) => ts.raw.to_string(),
            Self::RegularExpressionLiteral { pattern, flags } => {
                format!("/{pattern}/{flags}")
            }
        }
    }
}

/// This represents the smallest individual words, phrases, or characters that
/// ECMAScript can understand.
///
/// More information:
///  - [ECMAScript reference][spec]
///
/// [spec]: https://tc39.es/ecma262/#sec-tokens
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token kind, which contains the actual data of the token.
    kind: TokenKind,
    /// The identifier, keyword or contextual word text, escapes decoded.
    lexeme: Box<str>,
    /// The token position in the original source code.
    span: Span,
    /// Whether a line terminator (or a comment containing one) occurred
    /// between the previous token and this one.
    newline_before: bool,
}

impl Token {
    /// Create a new detailed token from its kind, decoded lexeme and span.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: Box<str>, span: Span, newline_before: bool) -> Self {
        Self {
            kind,
            lexeme,
            span,
            newline_before,
        }
    }

    /// Gets the kind of the token.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Gets the decoded lexeme of the token.
    #[inline]
    #[must_use]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Gets the token span in the original source code.
    #[inline]
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Whether a line terminator preceded this token.
    #[inline]
    #[must_use]
    pub fn newline_before(&self) -> bool {
        self.newline_before
    }

    /// Whether the token was written with escape sequences.
    ///
    /// The raw source length differs from the decoded lexeme length exactly
    /// when an escape was used, which is how an escaped `of` stays
    /// distinguishable from a literal `of`.
    #[must_use]
    pub fn contains_escapes(&self) -> bool {
        (self.span.end - self.span.start) as usize != self.lexeme.len()
    }

    /// Converts the token to a `String`.
    pub(crate) fn display(&self) -> String {
        match self.kind {
            TokenKind::Identifier => self.lexeme.to_string(),
            _ => self.kind.to_string(),
        }
    }
}
