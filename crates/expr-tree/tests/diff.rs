//! Symbolic differentiation correctness, checked numerically: build the
//! derivative tree, then evaluate it at concrete points.

use expr_tree::{parse_flat_postfix, parse_prefix, Var};

fn diff_at(src: &str, v: Var, x: f64, y: f64, z: f64) -> f64 {
    parse_prefix(src)
        .unwrap_or_else(|e| panic!("parse_prefix({:?}) failed: {}", src, e))
        .diff(v)
        .evaluate(x, y, z)
}

// ---------------------------------------------------------------- primitives

#[test]
fn test_sum_rule() {
    assert_eq!(diff_at("(+ x y)", Var::X, 5.0, 7.0, 0.0), 1.0);
    assert_eq!(diff_at("(+ x y)", Var::Z, 5.0, 7.0, 0.0), 0.0);
}

#[test]
fn test_difference_rule() {
    assert_eq!(diff_at("(- x y)", Var::Y, 5.0, 7.0, 0.0), -1.0);
}

#[test]
fn test_product_rule() {
    // d/dx (x * y) = y
    assert_eq!(diff_at("(* x y)", Var::X, 3.0, 4.0, 0.0), 4.0);
    // d/dx (x * x) = 2x
    assert_eq!(diff_at("(* x x)", Var::X, 3.0, 0.0, 0.0), 6.0);
}

#[test]
fn test_quotient_rule() {
    // d/dx (x / y) = 1 / y
    assert_eq!(diff_at("(/ x y)", Var::X, 1.0, 2.0, 0.0), 0.5);
    // d/dy (x / y) = -x / y^2
    assert_eq!(diff_at("(/ x y)", Var::Y, 1.0, 2.0, 0.0), -0.25);
}

#[test]
fn test_negate_rule() {
    assert_eq!(diff_at("(negate (* x x))", Var::X, 3.0, 0.0, 0.0), -6.0);
}

#[test]
fn test_constant_derivative_is_zero() {
    assert_eq!(diff_at("42", Var::X, 9.0, 9.0, 9.0), 0.0);
    assert_eq!(parse_prefix("100").unwrap().diff(Var::Y).prefix(), "0");
}

// ------------------------------------------------------------ macro operators

#[test]
fn test_sumrec_diff() {
    // d/dx (1/x + 1/y) = -1/x^2
    assert_eq!(diff_at("(sumrec2 x y)", Var::X, 2.0, 5.0, 0.0), -0.25);
    // Independent of the variables it does not mention.
    assert_eq!(diff_at("(sumrec2 x y)", Var::Z, 2.0, 5.0, 0.0), 0.0);
}

#[test]
fn test_sumrec_diff_through_flat_parser() {
    let expr = parse_flat_postfix("x y sumrec2").unwrap();
    assert_eq!(expr.diff(Var::X).evaluate(2.0, 5.0, 0.0), -0.25);
}

#[test]
fn test_hmean_diff() {
    // hmean2(x, y) = 2 / (1/x + 1/y); at x = y = 1 the x-derivative is 1/2.
    assert_eq!(diff_at("(hmean2 x y)", Var::X, 1.0, 1.0, 0.0), 0.5);
}

#[test]
fn test_macro_diff_builds_primitive_tree() {
    // The derivative of a macro operator must not contain the macro itself.
    let derivative = parse_prefix("(sumrec3 x y z)").unwrap().diff(Var::X);
    assert!(!derivative.prefix().contains("sumrec"));
}

// ------------------------------------------------------------------- repeated

#[test]
fn test_second_derivative() {
    // d2/dx2 (x * x) = 2
    let expr = parse_prefix("(* x x)").unwrap();
    let second = expr.diff(Var::X).diff(Var::X);
    assert_eq!(second.evaluate(7.0, 0.0, 0.0), 2.0);
}

#[test]
fn test_diff_leaves_original_intact() {
    let expr = parse_prefix("(/ (* x y) (+ y 1))").unwrap();
    let rendered = expr.prefix();
    let _dx = expr.diff(Var::X);
    let _dy = expr.diff(Var::Y);
    assert_eq!(expr.prefix(), rendered);
}

#[test]
fn test_derivative_round_trips_as_text() {
    let dx = parse_prefix("(* x y)").unwrap().diff(Var::X);
    let reparsed = parse_prefix(&dx.prefix()).unwrap();
    assert_eq!(reparsed, dx);
}
