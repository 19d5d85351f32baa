//! Numeric evaluation through each front end.

use expr_tree::parse_flat_postfix;
use expr_tree::parse_postfix;
use expr_tree::parse_prefix;

fn eval_flat(src: &str, x: f64, y: f64, z: f64) -> f64 {
    parse_flat_postfix(src)
        .unwrap_or_else(|e| panic!("parse_flat_postfix({:?}) failed: {}", src, e))
        .evaluate(x, y, z)
}

// --------------------------------------------------------------- binaries

#[test]
fn test_binary_operators() {
    assert_eq!(eval_flat("3 4 +", 0.0, 0.0, 0.0), 7.0);
    assert_eq!(eval_flat("3 4 -", 0.0, 0.0, 0.0), -1.0);
    assert_eq!(eval_flat("3 4 *", 0.0, 0.0, 0.0), 12.0);
    assert_eq!(eval_flat("3 4 /", 0.0, 0.0, 0.0), 0.75);
}

#[test]
fn test_division_is_floating_point() {
    // Integer literals still divide like floats.
    assert_eq!(eval_flat("7 2 /", 0.0, 0.0, 0.0), 3.5);
    assert!(eval_flat("1 0 /", 0.0, 0.0, 0.0).is_infinite());
    assert!(eval_flat("0 0 /", 0.0, 0.0, 0.0).is_nan());
}

#[test]
fn test_variables_bind_positionally() {
    assert_eq!(eval_flat("x 2 *", 5.0, 0.0, 0.0), 10.0);
    assert_eq!(eval_flat("x y z + +", 1.0, 2.0, 3.0), 6.0);
}

#[test]
fn test_negate() {
    assert_eq!(eval_flat("x negate", 8.0, 0.0, 0.0), -8.0);
}

// ----------------------------------------------------- reciprocal family

#[test]
fn test_sumrec() {
    assert_eq!(eval_flat("2 4 sumrec2", 0.0, 0.0, 0.0), 0.75);
    assert_eq!(eval_flat("1 1 1 1 1 sumrec5", 0.0, 0.0, 0.0), 5.0);
    let expr = parse_prefix("(sumrec3 x y z)").unwrap();
    assert_eq!(expr.evaluate(1.0, 2.0, 4.0), 1.75);
}

#[test]
fn test_hmean() {
    assert_eq!(eval_flat("2 2 hmean2", 0.0, 0.0, 0.0), 2.0);
    assert!((eval_flat("1 3 hmean2", 0.0, 0.0, 0.0) - 1.5).abs() < 1e-12);
    let expr = parse_postfix("(x y z hmean3)").unwrap();
    assert!((expr.evaluate(3.0, 3.0, 3.0) - 3.0).abs() < 1e-12);
}

// ----------------------------------------------------------------- purity

#[test]
fn test_evaluation_is_idempotent() {
    let expr = parse_prefix("(/ (+ x y) (- y z))").unwrap();
    let first = expr.evaluate(1.0, 2.0, 3.0);
    let second = expr.evaluate(1.0, 2.0, 3.0);
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_same_tree_many_bindings() {
    let expr = parse_flat_postfix("x y +").unwrap();
    assert_eq!(expr.evaluate(1.0, 2.0, 0.0), 3.0);
    assert_eq!(expr.evaluate(-5.0, 5.0, 0.0), 0.0);
    assert_eq!(expr.evaluate(0.5, 0.25, 0.0), 0.75);
}
