use crate::parser::{
    ast::expr::{Expr, Primary},
    error::Error,
    token::op::BinOp,
    Associativity,
    Parser,
    Precedence,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// After parsing the left-hand-side, the operator, and the right-hand-side of a potential
    /// binary expression, parse ahead to see if the right-hand-side is incomplete.
    ///
    /// If we are parsing the expression `1 + 2 * 3`, we will first parse the left-hand-side `1`,
    /// then the operator `+`, then the right-hand-side `2`. However, before we build the
    /// corresponding AST node, we should check if the operator after `2` has higher precedence
    /// than `+` (if it exists).
    ///
    /// If it does, we should parse the expression starting with `2` first, so that we get `2 * 3`
    /// as the right-hand-side to the `1 +` node. This works by calling into [`Self::parse_expr`]
    /// again, but with `rhs` (`2` in this case) as the `lhs` argument.
    ///
    /// Both operators of the language are right-associative, so an operator of the *same*
    /// precedence also continues the right-hand-side: `x * y * z` becomes `x * (y * z)`.
    fn complete_rhs(input: &mut Parser, op: &BinOp, mut rhs: Expr) -> Result<Expr, Error> {
        let precedence = op.precedence();

        // peek at the following operator without consuming it
        while let Some(next_op) = input.peek_parse::<BinOp>() {
            if next_op.precedence() > precedence
                || (next_op.precedence() == precedence && next_op.associativity() == Associativity::Right) {
                rhs = input.nested(|input| Self::parse_expr(input, rhs, next_op.precedence()))?;
            } else {
                // this operator has lower precedence, such as the `+` in `1 * 2 + 3`
                //
                // break out of the loop and let `lhs` become `1 * 2`; the operator is picked up
                // by the outer call to `parse_expr`
                break;
            }
        }

        Ok(rhs)
    }

    /// Parses a binary expression with the given left-hand-side, consuming operators whose
    /// precedence is at least `precedence`.
    pub(crate) fn parse_expr(
        input: &mut Parser,
        mut lhs: Expr,
        precedence: Precedence,
    ) -> Result<Expr, Error> {
        loop {
            match input.peek_parse::<BinOp>() {
                Some(op) if op.precedence() >= precedence => (),
                _ => break,
            }

            let op = input.try_parse::<BinOp>()?;
            let rhs = input.try_parse::<Primary>()?.into();
            let rhs = Self::complete_rhs(input, &op, rhs)?;

            let span = lhs.span().start..rhs.span().end;
            lhs = Expr::Binary(Binary {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
                span,
            });
        }

        Ok(lhs)
    }
}

impl std::fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.lhs, self.op.kind, self.rhs)
    }
}
