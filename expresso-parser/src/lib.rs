//! Tokenizer and parser for Expresso expressions.
//!
//! The language is deliberately tiny: unsigned decimal constants, variables made of letters,
//! parentheses, and the two right-associative operators `+` and `*` (with `*` binding tighter).
//! Whitespace is insignificant.
//!
//! ```
//! use expresso_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("4 * (x*y + y*x)");
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.to_string(), "4*(x*y+y*x)");
//! ```

pub mod parser;
pub mod tokenizer;
