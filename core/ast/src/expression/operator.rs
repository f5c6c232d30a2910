//! Operator enums for unary, update, binary, logical and assignment
//! expressions.
//!
//! More information:
//!  - [MDN documentation][mdn]
//!  - [ECMAScript specification][spec]
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Operators
//! [spec]: https://tc39.es/ecma262/#sec-ecmascript-language-expressions

use std::fmt;

/// A binary operator.
///
/// More information:
///  - [ECMAScript specification][spec]
///
/// [spec]: https://tc39.es/ecma262/#prod-MultiplicativeOperator
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `==`
    #[cfg_attr(feature = "serde", serde(rename = "=="))]
    Eq,
    /// `!=`
    #[cfg_attr(feature = "serde", serde(rename = "!="))]
    NotEq,
    /// `===`
    #[cfg_attr(feature = "serde", serde(rename = "==="))]
    StrictEq,
    /// `!==`
    #[cfg_attr(feature = "serde", serde(rename = "!=="))]
    StrictNotEq,
    /// `<`
    #[cfg_attr(feature = "serde", serde(rename = "<"))]
    LessThan,
    /// `<=`
    #[cfg_attr(feature = "serde", serde(rename = "<="))]
    LessThanOrEq,
    /// `>`
    #[cfg_attr(feature = "serde", serde(rename = ">"))]
    GreaterThan,
    /// `>=`
    #[cfg_attr(feature = "serde", serde(rename = ">="))]
    GreaterThanOrEq,
    /// `<<`
    #[cfg_attr(feature = "serde", serde(rename = "<<"))]
    LeftShift,
    /// `>>`
    #[cfg_attr(feature = "serde", serde(rename = ">>"))]
    RightShift,
    /// `>>>`
    #[cfg_attr(feature = "serde", serde(rename = ">>>"))]
    UnsignedRightShift,
    /// `+`
    #[cfg_attr(feature = "serde", serde(rename = "+"))]
    Add,
    /// `-`
    #[cfg_attr(feature = "serde", serde(rename = "-"))]
    Sub,
    /// `*`
    #[cfg_attr(feature = "serde", serde(rename = "*"))]
    Mul,
    /// `/`
    #[cfg_attr(feature = "serde", serde(rename = "/"))]
    Div,
    /// `%`
    #[cfg_attr(feature = "serde", serde(rename = "%"))]
    Mod,
    /// `**`
    #[cfg_attr(feature = "serde", serde(rename = "**"))]
    Exp,
    /// `|`
    #[cfg_attr(feature = "serde", serde(rename = "|"))]
    BitOr,
    /// `^`
    #[cfg_attr(feature = "serde", serde(rename = "^"))]
    BitXor,
    /// `&`
    #[cfg_attr(feature = "serde", serde(rename = "&"))]
    BitAnd,
    /// `in`
    #[cfg_attr(feature = "serde", serde(rename = "in"))]
    In,
    /// `instanceof`
    #[cfg_attr(feature = "serde", serde(rename = "instanceof"))]
    InstanceOf,
}

impl BinaryOp {
    /// Retrieves the operation as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::StrictEq => "===",
            Self::StrictNotEq => "!==",
            Self::LessThan => "<",
            Self::LessThanOrEq => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEq => ">=",
            Self::LeftShift => "<<",
            Self::RightShift => ">>",
            Self::UnsignedRightShift => ">>>",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Exp => "**",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::BitAnd => "&",
            Self::In => "in",
            Self::InstanceOf => "instanceof",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logical operator.
///
/// More information:
///  - [ECMAScript specification][spec]
///
/// [spec]: https://tc39.es/ecma262/#sec-binary-logical-operators
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    /// `&&`
    #[cfg_attr(feature = "serde", serde(rename = "&&"))]
    And,
    /// `||`
    #[cfg_attr(feature = "serde", serde(rename = "||"))]
    Or,
    /// `??`
    #[cfg_attr(feature = "serde", serde(rename = "??"))]
    Coalesce,
}

impl LogicalOp {
    /// Retrieves the operation as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Or => "||",
            Self::Coalesce => "??",
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A prefix unary operator.
///
/// More information:
///  - [ECMAScript specification][spec]
///
/// [spec]: https://tc39.es/ecma262/#prod-UnaryExpression
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-`
    #[cfg_attr(feature = "serde", serde(rename = "-"))]
    Minus,
    /// `+`
    #[cfg_attr(feature = "serde", serde(rename = "+"))]
    Plus,
    /// `!`
    #[cfg_attr(feature = "serde", serde(rename = "!"))]
    Not,
    /// `~`
    #[cfg_attr(feature = "serde", serde(rename = "~"))]
    Tilde,
    /// `typeof`
    #[cfg_attr(feature = "serde", serde(rename = "typeof"))]
    TypeOf,
    /// `void`
    #[cfg_attr(feature = "serde", serde(rename = "void"))]
    Void,
    /// `delete`
    #[cfg_attr(feature = "serde", serde(rename = "delete"))]
    Delete,
}

impl UnaryOp {
    /// Retrieves the operation as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minus => "-",
            Self::Plus => "+",
            Self::Not => "!",
            Self::Tilde => "~",
            Self::TypeOf => "typeof",
            Self::Void => "void",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An increment or decrement operator.
///
/// More information:
///  - [ECMAScript specification][spec]
///
/// [spec]: https://tc39.es/ecma262/#sec-update-expressions
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOp {
    /// `++`
    #[cfg_attr(feature = "serde", serde(rename = "++"))]
    Increment,
    /// `--`
    #[cfg_attr(feature = "serde", serde(rename = "--"))]
    Decrement,
}

impl UpdateOp {
    /// Retrieves the operation as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Increment => "++",
            Self::Decrement => "--",
        }
    }
}

impl fmt::Display for UpdateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An assignment operator.
///
/// More information:
///  - [ECMAScript specification][spec]
///
/// [spec]: https://tc39.es/ecma262/#prod-AssignmentOperator
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    /// `=`
    #[cfg_attr(feature = "serde", serde(rename = "="))]
    Assign,
    /// `+=`
    #[cfg_attr(feature = "serde", serde(rename = "+="))]
    Add,
    /// `-=`
    #[cfg_attr(feature = "serde", serde(rename = "-="))]
    Sub,
    /// `*=`
    #[cfg_attr(feature = "serde", serde(rename = "*="))]
    Mul,
    /// `/=`
    #[cfg_attr(feature = "serde", serde(rename = "/="))]
    Div,
    /// `%=`
    #[cfg_attr(feature = "serde", serde(rename = "%="))]
    Mod,
    /// `**=`
    #[cfg_attr(feature = "serde", serde(rename = "**="))]
    Exp,
    /// `<<=`
    #[cfg_attr(feature = "serde", serde(rename = "<<="))]
    LeftShift,
    /// `>>=`
    #[cfg_attr(feature = "serde", serde(rename = ">>="))]
    RightShift,
    /// `>>>=`
    #[cfg_attr(feature = "serde", serde(rename = ">>>="))]
    UnsignedRightShift,
    /// `|=`
    #[cfg_attr(feature = "serde", serde(rename = "|="))]
    BitOr,
    /// `^=`
    #[cfg_attr(feature = "serde", serde(rename = "^="))]
    BitXor,
    /// `&=`
    #[cfg_attr(feature = "serde", serde(rename = "&="))]
    BitAnd,
    /// `&&=`
    #[cfg_attr(feature = "serde", serde(rename = "&&="))]
    BoolAnd,
    /// `||=`
    #[cfg_attr(feature = "serde", serde(rename = "||="))]
    BoolOr,
    /// `??=`
    #[cfg_attr(feature = "serde", serde(rename = "??="))]
    Coalesce,
}

impl AssignOp {
    /// Retrieves the operation as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::Add => "+=",
            Self::Sub => "-=",
            Self::Mul => "*=",
            Self::Div => "/=",
            Self::Mod => "%=",
            Self::Exp => "**=",
            Self::LeftShift => "<<=",
            Self::RightShift => ">>=",
            Self::UnsignedRightShift => ">>>=",
            Self::BitOr => "|=",
            Self::BitXor => "^=",
            Self::BitAnd => "&=",
            Self::BoolAnd => "&&=",
            Self::BoolOr => "||=",
            Self::Coalesce => "??=",
        }
    }
}

impl fmt::Display for AssignOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
