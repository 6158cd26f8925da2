//! A representation of polynomial expressions that is easier to manipulate than an AST.
//!
//! The [`Expr`](expresso_parser::parser::ast::expr::Expr) type from `expresso_parser` keeps
//! parentheses and source spans around, which is convenient for reporting errors but gets in the
//! way of algebra. [`Expression`] drops both: it is a plain binary tree of constants, variables,
//! additions and multiplications.
//!
//! # Structural equality
//!
//! The [`PartialEq`] and [`Eq`] implementations for [`Expression`] compare trees **structurally**:
//! two expressions are equal if and only if they have the same shape and the same leaves. Since
//! both operators are right-associative, `x*y*z` is the same tree as `x*(y*z)`, but not the same
//! tree as `(x*y)*z`, even though all three are mathematically equal. Constants compare by value,
//! so `1` and `1.00000` are equal.
//!
//! Mathematical equality of monomials is handled separately by
//! [`PolynomialTerm`](crate::symbolic::term::PolynomialTerm).
//!
//! ```
//! use expresso_compute::symbolic::expr::Expression;
//! use expresso_parser::parser::{ast::Expr, Parser};
//!
//! let parse = |s| -> Expression {
//!     Parser::new(s).try_parse_full::<Expr>().unwrap().into()
//! };
//!
//! assert_eq!(parse("x*y*z"), parse("x*(y*z)"));
//! assert_ne!(parse("x*y*z"), parse("(x*y)*z"));
//! ```

use crate::fmt::fmt_real;
use expresso_parser::parser::{
    ast::{expr::Expr as AstExpr, literal::Literal},
    token::op::BinOpKind,
};
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A non-negative, finite real constant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Constant(f64);

impl Constant {
    /// Creates a new constant. Returns [`None`] if the value is negative, infinite or `NaN`.
    pub fn new(value: f64) -> Option<Self> {
        // `+ 0.0` turns `-0.0` into `0.0`
        (value.is_finite() && value >= 0.0).then_some(Self(value + 0.0))
    }

    /// Returns the value of the constant.
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// [`Eq`] is implemented manually to allow hashing and comparing [`Constant`]s. A [`Constant`]
/// can never hold `NaN` or `-0.0`, so bitwise and numeric equality agree.
impl Eq for Constant {}

impl std::hash::Hash for Constant {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_real(f, self.0)
    }
}

/// A named variable, made of ASCII letters only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Variable(String);

impl Variable {
    /// Creates a new variable. Returns [`None`] if the name is empty or contains anything other
    /// than ASCII letters.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        is_variable_name(&name).then_some(Self(name))
    }

    /// Returns the name of the variable.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns true if the given string is a valid variable name, i.e. a non-empty string of ASCII
/// letters.
pub fn is_variable_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphabetic())
}

/// An immutable polynomial expression tree.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Expression {
    /// A constant, such as `4.2`.
    Constant(Constant),

    /// A variable, such as `x`.
    Variable(Variable),

    /// Two expressions added together.
    Add(Box<Expression>, Box<Expression>),

    /// Two expressions multiplied together.
    Mul(Box<Expression>, Box<Expression>),
}

impl Expression {
    /// Creates a constant expression. Returns [`None`] if the value is not a valid [`Constant`].
    pub fn constant(value: f64) -> Option<Self> {
        Constant::new(value).map(Self::Constant)
    }

    /// Creates a variable expression. Returns [`None`] if the name is not a valid [`Variable`].
    pub fn variable(name: impl Into<String>) -> Option<Self> {
        Variable::new(name).map(Self::Variable)
    }

    /// Creates the expression `lhs + rhs`.
    pub fn add(lhs: Expression, rhs: Expression) -> Self {
        Self::Add(Box::new(lhs), Box::new(rhs))
    }

    /// Creates the expression `lhs*rhs`.
    pub fn mul(lhs: Expression, rhs: Expression) -> Self {
        Self::Mul(Box::new(lhs), Box::new(rhs))
    }

    /// Returns the operands of an addition or multiplication, or [`None`] for a literal.
    pub fn children(&self) -> Option<(&Expression, &Expression)> {
        match self {
            Self::Constant(_) | Self::Variable(_) => None,
            Self::Add(lhs, rhs) | Self::Mul(lhs, rhs) => Some((lhs, rhs)),
        }
    }

    /// Returns true if the expression is a constant or a variable.
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Constant(_) | Self::Variable(_))
    }

    /// Returns true if the expression can be differentiated against, i.e. it is a variable.
    pub fn is_parameterizable(&self) -> bool {
        matches!(self, Self::Variable(_))
    }

    /// Returns true if the expression is a multiplication, which may be distributed over an
    /// addition.
    pub fn is_distributable(&self) -> bool {
        matches!(self, Self::Mul(..))
    }

    /// Returns the number of terms the expanded form of this expression will have, without
    /// expanding it. The count saturates at [`usize::MAX`].
    ///
    /// A literal is one term, a sum has the terms of both operands, and a product has one term
    /// for every pair of terms of its operands.
    pub fn term_count(&self) -> usize {
        self.fold(|expr, lhs, rhs| match expr {
            Self::Constant(_) | Self::Variable(_) => 1,
            Self::Add(..) => lhs.saturating_add(rhs),
            Self::Mul(..) => lhs.saturating_mul(rhs),
        })
    }

    /// Returns the height of the expression tree. A literal has depth 1.
    pub fn depth(&self) -> usize {
        self.fold(|expr, lhs, rhs| match expr {
            Self::Constant(_) | Self::Variable(_) => 1,
            _ => lhs.max(rhs) + 1,
        })
    }

    /// Folds the tree bottom-up, without recursion. For each node, `f` receives the node and the
    /// folded values of its operands (zero for literals).
    fn fold(&self, f: impl Fn(&Expression, usize, usize) -> usize) -> usize {
        // `true` once the operands of the node have been pushed
        let mut pending = vec![(self, false)];
        let mut values = Vec::new();

        while let Some((expr, expanded)) = pending.pop() {
            match expr.children() {
                Some((lhs, rhs)) if !expanded => {
                    pending.push((expr, true));
                    pending.push((rhs, false));
                    pending.push((lhs, false));
                },
                Some(_) => {
                    let rhs = values.pop().unwrap_or_default();
                    let lhs = values.pop().unwrap_or_default();
                    values.push(f(expr, lhs, rhs));
                },
                None => values.push(f(expr, 0, 0)),
            }
        }

        values.pop().unwrap_or_default()
    }

    /// Writes an operand, wrapped in parentheses unless it is a literal.
    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_literal() {
            write!(f, "{}", self)
        } else {
            write!(f, "({})", self)
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(constant) => constant.fmt(f),
            Self::Variable(variable) => variable.fmt(f),
            Self::Add(lhs, rhs) => {
                lhs.fmt_operand(f)?;
                write!(f, " + ")?;
                rhs.fmt_operand(f)
            },
            Self::Mul(lhs, rhs) => {
                lhs.fmt_operand(f)?;
                write!(f, "*")?;
                rhs.fmt_operand(f)
            },
        }
    }
}

/// Converts the parser's AST into an [`Expression`], dropping parentheses and spans.
impl From<AstExpr> for Expression {
    fn from(expr: AstExpr) -> Self {
        match expr {
            // the tokenizer only produces unsigned decimals and letter-only names, and the parser
            // rejects non-finite numbers, so the leaves can be built directly
            AstExpr::Literal(Literal::Number(num)) => Self::Constant(Constant(num.value + 0.0)),
            AstExpr::Literal(Literal::Symbol(sym)) => Self::Variable(Variable(sym.name)),
            AstExpr::Paren(paren) => paren.into_innermost().into(),
            AstExpr::Binary(binary) => {
                let lhs = Self::from(*binary.lhs);
                let rhs = Self::from(*binary.rhs);
                match binary.op.kind {
                    BinOpKind::Add => Self::add(lhs, rhs),
                    BinOpKind::Mul => Self::mul(lhs, rhs),
                }
            },
        }
    }
}
