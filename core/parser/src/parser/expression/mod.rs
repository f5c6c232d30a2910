//! Expression parsing.
//!
//! A single Pratt loop drives every expression: a prefix layer dispatches on
//! the leading token, a subscript loop consumes member accesses, calls and
//! optional chains, and the infix loop below folds binary, logical,
//! conditional, assignment and sequence operators by binding power.
//!
//! More information:
//!  - [MDN documentation][mdn]
//!  - [ECMAScript specification][spec]
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Operators
//! [spec]: https://tc39.es/ecma262/#sec-ecmascript-language-expressions

mod arrow;
mod primary;

#[cfg(test)]
mod tests;

use super::{state::ContextFlags, Parser};
use crate::{
    error::ParseResult,
    lexer::{Keyword, Punctuator, TokenKind},
};
use sparrow_ast::{
    expression::{
        AssignmentExpression, BinaryExpression, ConditionalExpression, Expression,
        LogicalExpression, SequenceExpression, UnaryExpression, UpdateExpression,
    },
    function::{ArrowFunctionBody, ArrowFunctionExpression},
    AssignOp, BinaryOp, LogicalOp, UnaryOp, UpdateOp,
};

/// The binding-power ladder of the operator grammar, from the comma operator
/// up to the postfix operators.
pub(crate) mod bp {
    pub(crate) const COMMA: u8 = 1;
    pub(crate) const ASSIGN: u8 = 2;
    pub(crate) const TERNARY: u8 = 3;
    pub(crate) const COALESCE: u8 = 4;
    pub(crate) const LOGICAL_OR: u8 = 5;
    pub(crate) const LOGICAL_AND: u8 = 6;
    pub(crate) const BIT_OR: u8 = 7;
    pub(crate) const BIT_XOR: u8 = 8;
    pub(crate) const BIT_AND: u8 = 9;
    pub(crate) const EQUALITY: u8 = 10;
    pub(crate) const RELATIONAL: u8 = 11;
    pub(crate) const SHIFT: u8 = 12;
    pub(crate) const ADDITIVE: u8 = 13;
    pub(crate) const MULTIPLICATIVE: u8 = 14;
    pub(crate) const EXPONENT: u8 = 15;
    pub(crate) const UNARY: u8 = 16;
    pub(crate) const POSTFIX: u8 = 17;
}

/// A binary or logical operator with its binding power.
#[derive(Debug, Clone, Copy)]
enum InfixOp {
    Binary(BinaryOp),
    Logical(LogicalOp),
}

impl Parser<'_> {
    /// Parses a full expression, comma sequences included.
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.parse_expr(bp::COMMA)
    }

    /// Parses a single assignment-level expression.
    pub(crate) fn parse_assignment_expression(&mut self) -> ParseResult<Expression> {
        self.parse_expr(bp::ASSIGN)
    }

    /// The Pratt entry point. Entering a fresh expression boundary resets
    /// the `??`/`&&`-`||` chain bookkeeping, so parenthesized subchains mix
    /// freely while an unparenthesized mix stays an error.
    pub(crate) fn parse_expr(&mut self, min_bp: u8) -> ParseResult<Expression> {
        debug_assert!((bp::COMMA..=bp::POSTFIX).contains(&min_bp));
        if min_bp <= bp::TERNARY {
            let chains = ContextFlags::IN_COALESCE_CHAIN | ContextFlags::IN_LOGICAL_CHAIN;
            let saved = self.state.flags & chains;
            self.state.flags.remove(chains);
            let result = self.parse_expr_ladder(min_bp);
            self.state.flags.remove(chains);
            self.state.flags.insert(saved);
            result
        } else {
            self.parse_expr_ladder(min_bp)
        }
    }

    fn parse_expr_ladder(&mut self, min_bp: u8) -> ParseResult<Expression> {
        let mut lhs = self.parse_unary_expression()?;

        loop {
            let token = self.cursor.peek();
            match token.kind() {
                TokenKind::Punctuator(Punctuator::Comma) if bp::COMMA >= min_bp => {
                    let mut expressions = vec![lhs];
                    while self.cursor.eat(Punctuator::Comma) {
                        expressions.push(self.parse_expr(bp::ASSIGN)?);
                    }
                    let span = expressions[0]
                        .span()
                        .join(expressions.last().expect("nonempty sequence").span());
                    lhs = Expression::Sequence(Box::new(SequenceExpression::new(
                        expressions,
                        span,
                    )));
                }
                TokenKind::Punctuator(Punctuator::Question) if bp::TERNARY >= min_bp => {
                    self.cursor.advance();
                    let consequent = self.with_flags(
                        ContextFlags::ALLOW_IN,
                        ContextFlags::empty(),
                        Self::parse_assignment_expression,
                    )?;
                    self.cursor.expect(Punctuator::Colon, "conditional expression")?;
                    let alternate = self.parse_assignment_expression()?;
                    let span = lhs.span().join(alternate.span());
                    lhs = Expression::Conditional(Box::new(ConditionalExpression::new(
                        lhs, consequent, alternate, span,
                    )));
                }
                TokenKind::Punctuator(p) => {
                    if let Some(op) = assign_op(*p) {
                        if bp::ASSIGN < min_bp {
                            break;
                        }
                        self.cursor.advance();
                        let left = self.resolve_assignment_target(lhs, op)?;
                        let right = self.parse_expr(bp::ASSIGN)?;
                        let span = left.span().join(right.span());
                        lhs = Expression::Assignment(Box::new(AssignmentExpression::new(
                            op, left, right, span,
                        )));
                        continue;
                    }
                    let Some((power, op)) = self.infix_op() else { break };
                    if power < min_bp {
                        break;
                    }
                    lhs = self.parse_infix(lhs, power, op)?;
                }
                TokenKind::Keyword(Keyword::In | Keyword::InstanceOf) => {
                    let Some((power, op)) = self.infix_op() else { break };
                    if power < min_bp {
                        break;
                    }
                    lhs = self.parse_infix(lhs, power, op)?;
                }
                _ => break,
            }
        }

        Ok(lhs)
    }

    /// Folds one binary or logical operator application, checking the
    /// operator-specific early errors.
    fn parse_infix(&mut self, lhs: Expression, power: u8, op: InfixOp) -> ParseResult<Expression> {
        if matches!(self.cursor.peek().kind(), TokenKind::Keyword(_)) {
            self.check_keyword_escapes()?;
        }
        let op_span = self.cursor.peek().span();
        match op {
            InfixOp::Logical(LogicalOp::Coalesce) => {
                if self.state.has(ContextFlags::IN_LOGICAL_CHAIN) {
                    return Err(self.error_at(
                        op_span,
                        "cannot mix '??' with '&&' or '||' without parentheses",
                    ));
                }
                self.state.flags.insert(ContextFlags::IN_COALESCE_CHAIN);
            }
            InfixOp::Logical(_) => {
                if self.state.has(ContextFlags::IN_COALESCE_CHAIN) {
                    return Err(self.error_at(
                        op_span,
                        "cannot mix '??' with '&&' or '||' without parentheses",
                    ));
                }
                self.state.flags.insert(ContextFlags::IN_LOGICAL_CHAIN);
            }
            InfixOp::Binary(BinaryOp::Exp) => {
                // An unparenthesized unary or await operand of `**` is
                // ambiguous and must be rejected.
                if matches!(lhs, Expression::Unary(_) | Expression::Await(_))
                    && !self.was_parenthesized(&lhs)
                {
                    return Err(self.error_at(
                        op_span,
                        "unary operand of '**' must be parenthesized",
                    ));
                }
            }
            InfixOp::Binary(_) => {}
        }

        self.cursor.advance();
        let right_assoc = power == bp::EXPONENT;
        let rhs = self.parse_expr_ladder(if right_assoc { power } else { power + 1 })?;

        if matches!(op, InfixOp::Binary(BinaryOp::In)) {
            if matches!(lhs, Expression::PrivateIdentifier(_)) {
                if matches!(rhs, Expression::PrivateIdentifier(_)) {
                    return Err(self.error_at(
                        rhs.span(),
                        "private name cannot appear on the right of 'in'",
                    ));
                }
                if matches!(rhs, Expression::ArrowFunction(_)) {
                    return Err(self.error_at(
                        rhs.span(),
                        "arrow function on the right of a private 'in' test must be parenthesized",
                    ));
                }
            }
        } else if matches!(lhs, Expression::PrivateIdentifier(_))
            || matches!(rhs, Expression::PrivateIdentifier(_))
        {
            // Private names only participate in `#name in obj` tests.
            return Err(self.error_at(op_span, "unexpected private name"));
        }

        let span = lhs.span().join(rhs.span());
        Ok(match op {
            InfixOp::Binary(op) => {
                Expression::Binary(Box::new(BinaryExpression::new(op, lhs, rhs, span)))
            }
            InfixOp::Logical(op) => {
                Expression::Logical(Box::new(LogicalExpression::new(op, lhs, rhs, span)))
            }
        })
    }

    /// The binary/logical operator starting at the current token, if any.
    fn infix_op(&self) -> Option<(u8, InfixOp)> {
        use Punctuator as P;
        let op = match self.cursor.peek().kind() {
            TokenKind::Keyword(Keyword::In) => {
                if !self.state.has(ContextFlags::ALLOW_IN) {
                    return None;
                }
                (bp::RELATIONAL, InfixOp::Binary(BinaryOp::In))
            }
            TokenKind::Keyword(Keyword::InstanceOf) => {
                (bp::RELATIONAL, InfixOp::Binary(BinaryOp::InstanceOf))
            }
            TokenKind::Punctuator(p) => match p {
                P::Coalesce => (bp::COALESCE, InfixOp::Logical(LogicalOp::Coalesce)),
                P::BoolOr => (bp::LOGICAL_OR, InfixOp::Logical(LogicalOp::Or)),
                P::BoolAnd => (bp::LOGICAL_AND, InfixOp::Logical(LogicalOp::And)),
                P::Or => (bp::BIT_OR, InfixOp::Binary(BinaryOp::BitOr)),
                P::Xor => (bp::BIT_XOR, InfixOp::Binary(BinaryOp::BitXor)),
                P::And => (bp::BIT_AND, InfixOp::Binary(BinaryOp::BitAnd)),
                P::Eq => (bp::EQUALITY, InfixOp::Binary(BinaryOp::Eq)),
                P::NotEq => (bp::EQUALITY, InfixOp::Binary(BinaryOp::NotEq)),
                P::StrictEq => (bp::EQUALITY, InfixOp::Binary(BinaryOp::StrictEq)),
                P::StrictNotEq => (bp::EQUALITY, InfixOp::Binary(BinaryOp::StrictNotEq)),
                P::LessThan => (bp::RELATIONAL, InfixOp::Binary(BinaryOp::LessThan)),
                P::LessThanOrEq => (bp::RELATIONAL, InfixOp::Binary(BinaryOp::LessThanOrEq)),
                P::GreaterThan => (bp::RELATIONAL, InfixOp::Binary(BinaryOp::GreaterThan)),
                P::GreaterThanOrEq => {
                    (bp::RELATIONAL, InfixOp::Binary(BinaryOp::GreaterThanOrEq))
                }
                P::LeftSh => (bp::SHIFT, InfixOp::Binary(BinaryOp::LeftShift)),
                P::RightSh => (bp::SHIFT, InfixOp::Binary(BinaryOp::RightShift)),
                P::URightSh => (bp::SHIFT, InfixOp::Binary(BinaryOp::UnsignedRightShift)),
                P::Add => (bp::ADDITIVE, InfixOp::Binary(BinaryOp::Add)),
                P::Sub => (bp::ADDITIVE, InfixOp::Binary(BinaryOp::Sub)),
                P::Mul => (bp::MULTIPLICATIVE, InfixOp::Binary(BinaryOp::Mul)),
                P::Div => (bp::MULTIPLICATIVE, InfixOp::Binary(BinaryOp::Div)),
                P::Mod => (bp::MULTIPLICATIVE, InfixOp::Binary(BinaryOp::Mod)),
                P::Pow => (bp::EXPONENT, InfixOp::Binary(BinaryOp::Exp)),
                _ => return None,
            },
            _ => return None,
        };
        Some(op)
    }

    /// Whether the expression was the interior of the most recently closed
    /// pair of parentheses.
    pub(crate) fn was_parenthesized(&self, expr: &Expression) -> bool {
        let span = expr.span();
        self.state.last_parenthesized == Some((span.start, span.end))
    }

    // ---- the prefix layer ------------------------------------------------

    /// Parses a unary-level expression: prefix operators, `await`, `yield`,
    /// updates, and below them the postfix layer.
    pub(crate) fn parse_unary_expression(&mut self) -> ParseResult<Expression> {
        let token = self.cursor.peek();
        let unary_op = match token.kind() {
            TokenKind::Keyword(Keyword::Delete) => Some(UnaryOp::Delete),
            TokenKind::Keyword(Keyword::Void) => Some(UnaryOp::Void),
            TokenKind::Keyword(Keyword::TypeOf) => Some(UnaryOp::TypeOf),
            TokenKind::Punctuator(Punctuator::Not) => Some(UnaryOp::Not),
            TokenKind::Punctuator(Punctuator::Neg) => Some(UnaryOp::Tilde),
            TokenKind::Punctuator(Punctuator::Add) => Some(UnaryOp::Plus),
            TokenKind::Punctuator(Punctuator::Sub) => Some(UnaryOp::Minus),
            _ => None,
        };

        if let Some(op) = unary_op {
            if matches!(token.kind(), TokenKind::Keyword(_)) {
                self.check_keyword_escapes()?;
            }
            let start = self.mark();
            self.cursor.advance();
            let argument = self.parse_expr_ladder(bp::UNARY)?;
            if matches!(argument, Expression::PrivateIdentifier(_)) {
                return Err(self.error_at(argument.span(), "unexpected private name"));
            }
            if op == UnaryOp::Delete {
                self.check_delete_target(&argument)?;
            }
            let span = self.finish(start);
            return Ok(Expression::Unary(Box::new(UnaryExpression::new(
                op, argument, span,
            ))));
        }

        match self.cursor.peek().kind() {
            TokenKind::Punctuator(p @ (Punctuator::Inc | Punctuator::Dec)) => {
                let op = if *p == Punctuator::Inc {
                    UpdateOp::Increment
                } else {
                    UpdateOp::Decrement
                };
                let start = self.mark();
                self.cursor.advance();
                let argument = self.parse_unary_expression()?;
                self.check_simple_target(&argument)?;
                let span = self.finish(start);
                Ok(Expression::Update(Box::new(UpdateExpression::new(
                    op, true, argument, span,
                ))))
            }
            TokenKind::Keyword(Keyword::Await) if self.await_is_keyword() => {
                self.parse_await_expression()
            }
            TokenKind::Keyword(Keyword::Yield)
                if self.state.has(ContextFlags::IN_GENERATOR) =>
            {
                self.parse_yield_expression()
            }
            _ => self.parse_postfix_expression(),
        }
    }

    /// The `delete` early errors: no bare identifiers in strict code, no
    /// private members ever.
    fn check_delete_target(&self, argument: &Expression) -> ParseResult<()> {
        if self.state.strict() {
            if let Expression::Identifier(ident) = argument {
                return Err(self.error_at(
                    ident.span,
                    "cannot delete an unqualified identifier in strict mode",
                ));
            }
        }
        let member = match argument {
            Expression::Member(member) => Some(member),
            Expression::Chain(chain) => match &chain.expression {
                Expression::Member(member) => Some(member),
                _ => None,
            },
            _ => None,
        };
        if let Some(member) = member {
            if matches!(member.property, Expression::PrivateIdentifier(_)) {
                return Err(
                    self.error_at(member.span, "private members cannot be deleted")
                );
            }
        }
        Ok(())
    }

    /// Parses the postfix layer: arrow detection, `new`, primary
    /// expressions, subscripts and the postfix update operators.
    fn parse_postfix_expression(&mut self) -> ParseResult<Expression> {
        let mut lhs = if let Some(arrow) = self.try_parse_arrow_function()? {
            arrow
        } else if self.cursor.check_keyword(Keyword::New) {
            let callee = self.parse_new_expression()?;
            self.parse_subscripts(callee, true)?
        } else {
            let primary = self.parse_primary_expression()?;
            self.parse_subscripts(primary, true)?
        };

        // Postfix update operators obey the no-line-terminator restriction,
        // so `a\n++b` parses as two statements under ASI.
        if !self.cursor.peek().newline_before() {
            let op = match self.cursor.peek().kind() {
                TokenKind::Punctuator(Punctuator::Inc) => Some(UpdateOp::Increment),
                TokenKind::Punctuator(Punctuator::Dec) => Some(UpdateOp::Decrement),
                _ => None,
            };
            if let Some(op) = op {
                self.check_simple_target(&lhs)?;
                self.cursor.advance();
                let span = self.finish(lhs.span());
                lhs = Expression::Update(Box::new(UpdateExpression::new(op, false, lhs, span)));
            }
        }

        Ok(lhs)
    }

    /// Whether an arrow function sits to the left and has a block body, in
    /// which case ASI separates it from a `(` or `[` on the next line.
    fn arrow_with_block_body(expr: &Expression) -> bool {
        matches!(
            expr,
            Expression::ArrowFunction(arrow)
                if matches!(
                    **arrow,
                    ArrowFunctionExpression { body: ArrowFunctionBody::Block(_), .. }
                )
        )
    }

    pub(crate) fn arrow_asi_applies(&self, lhs: &Expression) -> bool {
        self.cursor.peek().newline_before() && Self::arrow_with_block_body(lhs)
    }
}

/// The assignment operator starting at the given punctuator, if any.
fn assign_op(punct: Punctuator) -> Option<AssignOp> {
    use Punctuator as P;
    Some(match punct {
        P::Assign => AssignOp::Assign,
        P::AssignAdd => AssignOp::Add,
        P::AssignSub => AssignOp::Sub,
        P::AssignMul => AssignOp::Mul,
        P::AssignDiv => AssignOp::Div,
        P::AssignMod => AssignOp::Mod,
        P::AssignPow => AssignOp::Exp,
        P::AssignLeftSh => AssignOp::LeftShift,
        P::AssignRightSh => AssignOp::RightShift,
        P::AssignURightSh => AssignOp::UnsignedRightShift,
        P::AssignOr => AssignOp::BitOr,
        P::AssignXor => AssignOp::BitXor,
        P::AssignAnd => AssignOp::BitAnd,
        P::AssignBoolAnd => AssignOp::BoolAnd,
        P::AssignBoolOr => AssignOp::BoolOr,
        P::AssignCoalesce => AssignOp::Coalesce,
        _ => return None,
    })
}
