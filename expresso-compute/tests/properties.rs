//! Algebraic properties of the canonical form, checked on generated expressions.
//!
//! Generated expressions only use small integer constants, so that coefficient arithmetic is
//! exact and results can be compared without tolerances.

use expresso_compute::{
    differentiate,
    simplify,
    symbolic::{self, Expression},
    Options,
};
use expresso_parser::parser::{ast::Expr, Parser};
use quickcheck::{Arbitrary, Gen, QuickCheck, TestResult};
use std::collections::HashMap;

/// A randomly generated, valid expression string.
#[derive(Debug, Clone)]
struct Source(String);

impl Arbitrary for Source {
    fn arbitrary(g: &mut Gen) -> Self {
        Source(gen_expr(g, 3))
    }
}

fn gen_expr(g: &mut Gen, depth: usize) -> String {
    if depth == 0 || u8::arbitrary(g) % 4 == 0 {
        match u8::arbitrary(g) % 6 {
            0 => "x".to_string(),
            1 => "y".to_string(),
            2 => "z".to_string(),
            _ => (u8::arbitrary(g) % 5).to_string(),
        }
    } else {
        let op = if bool::arbitrary(g) { "+" } else { "*" };
        format!("({} {} {})", gen_expr(g, depth - 1), op, gen_expr(g, depth - 1))
    }
}

/// The terms of the canonical form of `source`, keyed by their sorted variables and exponents.
/// Zero terms are left out.
fn terms(source: &str) -> HashMap<Vec<(String, u32)>, f64> {
    let expr: Expression = Parser::new(source).try_parse_full::<Expr>().unwrap().into();
    symbolic::simplify(expr, &Options::default())
        .unwrap()
        .terms()
        .iter()
        .filter(|term| !term.is_zero())
        .map(|term| {
            let key = term.exponents()
                .key()
                .into_iter()
                .map(|(name, exp)| (name.to_string(), exp))
                .collect();
            (key, term.coefficient())
        })
        .collect()
}

#[test]
fn simplify_is_idempotent() {
    fn prop(source: Source) -> bool {
        let once = simplify(&source.0).unwrap();
        let twice = simplify(&once).unwrap();
        once == twice
    }

    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(Source) -> bool);
}

#[test]
fn differentiation_is_linear() {
    fn prop(a: Source, b: Source) -> bool {
        let sum = differentiate(&format!("{} + {}", a.0, b.0), "x").unwrap();
        let da = differentiate(&a.0, "x").unwrap();
        let db = differentiate(&b.0, "x").unwrap();
        terms(&sum) == terms(&format!("{}+{}", da, db))
    }

    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(Source, Source) -> bool);
}

#[test]
fn simplify_preserves_terms_of_parts() {
    // the canonical form of a sum is the sum of the canonical forms
    fn prop(a: Source, b: Source) -> bool {
        let sa = simplify(&a.0).unwrap();
        let sb = simplify(&b.0).unwrap();
        terms(&format!("{} + {}", a.0, b.0)) == terms(&format!("{}+{}", sa, sb))
    }

    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(Source, Source) -> bool);
}

#[test]
fn parser_never_panics() {
    fn prop(input: String) -> TestResult {
        let _ = simplify(&input);
        TestResult::passed()
    }

    QuickCheck::new()
        .tests(1000)
        .quickcheck(prop as fn(String) -> TestResult);
}

#[test]
fn degree_reduction() {
    for coefficient in 1..5 {
        for power in 1..6u32 {
            let mut source = coefficient.to_string();
            for _ in 0..power {
                source.push_str("*v");
            }
            source.push_str("*w");

            let derivative = terms(&differentiate(&source, "v").unwrap());
            let mut key = Vec::new();
            if power > 1 {
                key.push(("v".to_string(), power - 1));
            }
            key.push(("w".to_string(), 1));

            let expected = HashMap::from([(key, f64::from(coefficient * power))]);
            assert_eq!(derivative, expected, "d/dv {}", source);

            assert_eq!(differentiate(&source, "u").unwrap(), "0.0");
        }
    }
}

#[test]
fn commuted_products_are_equal_terms() {
    assert_eq!(terms("x*y"), terms("y*x"));
    assert_eq!(terms("2*x*y*x"), terms("x*x*2*y"));

    // the trees themselves differ
    let parse = |s| -> Expression { Parser::new(s).try_parse_full::<Expr>().unwrap().into() };
    assert_ne!(parse("x*y"), parse("y*x"));
}
