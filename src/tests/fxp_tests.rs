// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::types::scalar::Fixed;
use crate::fxp::ops::{fxp_add, fxp_sub, fxp_mul, fxp_mul_wide, fxp_div, fxp_div_wide};
use crate::fxp::convert::{from_f64, to_f64, from_int, to_int};
use crate::error::FixedError;
use crate::config::SCALE;

const EPSILON: f64 = 1.0 / (SCALE as f64);

#[test]
fn test_fxp_conversions() {
    let f = 1.0;
    let s = from_f64(f);
    assert_eq!(s.0, SCALE);
    assert_eq!(s, Fixed::ONE);
    assert!((to_f64(s) - f).abs() <= EPSILON);

    let f = -2.5;
    let s = from_f64(f);
    assert_eq!(s.0, -2 * SCALE - SCALE / 2);
    assert_eq!(to_f64(s), f);

    assert_eq!(from_f64(0.0), Fixed::ZERO);
    assert_eq!(from_f64(-0.0), Fixed::ZERO);
    assert_eq!(from_f64(0.25).0, SCALE / 4);
}

#[test]
fn test_fxp_conversion_edges() {
    assert_eq!(from_f64(f64::NAN), Fixed::ZERO);
    assert_eq!(from_f64(f64::INFINITY), Fixed::MAX);
    assert_eq!(from_f64(f64::NEG_INFINITY), Fixed::MIN);
    assert_eq!(from_f64(40000.0), Fixed::MAX);
    assert_eq!(from_f64(-32768.0), Fixed::MIN);
    // below one raw unit
    assert_eq!(from_f64(1e-20), Fixed::ZERO);
    assert_eq!(from_f64(f64::MIN_POSITIVE / 2.0), Fixed::ZERO);
    // exactly one raw unit
    assert_eq!(from_f64(EPSILON), Fixed::EPSILON);
}

#[test]
fn test_fxp_int_conversions() {
    assert_eq!(from_int(3), from_f64(3.0));
    assert_eq!(from_int(-3), from_f64(-3.0));
    assert_eq!(from_int(0), Fixed::ZERO);
    assert_eq!(from_int(-32768), Fixed::MIN);
    assert_eq!(from_int(40000), Fixed::MAX);
    assert_eq!(from_int(-40000), Fixed::MIN);

    assert_eq!(to_int(from_f64(2.75)), 2);
    assert_eq!(to_int(from_f64(-2.75)), -2);
    assert_eq!(to_int(from_int(-7)), -7);
    assert_eq!(to_int(Fixed::MIN), -32768);
}

#[test]
fn test_fxp_add() {
    let a = from_f64(1.5);
    let b = from_f64(2.25);
    let c = fxp_add(a, b);
    assert_eq!(to_f64(c), 3.75);
    assert_eq!(a + b, c);
}

#[test]
fn test_fxp_sub() {
    let a = from_f64(3.5);
    let b = from_f64(1.25);
    let c = fxp_sub(a, b);
    assert_eq!(to_f64(c), 2.25);
    assert_eq!(a - b, c);
    assert_eq!(-c, from_f64(-2.25));
}

#[test]
fn test_fxp_mul() {
    let a = from_f64(2.0);
    let b = from_f64(3.0);
    let c = fxp_mul(a, b);
    assert_eq!(to_f64(c), 6.0);

    let a = from_f64(0.5);
    let b = from_f64(0.5);
    assert_eq!(fxp_mul(a, b), from_f64(0.25));

    // Test negative
    let a = from_f64(-2.0);
    let b = from_f64(3.0);
    assert_eq!(fxp_mul(a, b), from_f64(-6.0));

    let a = from_f64(-1.5);
    assert_eq!(a * a, from_f64(2.25));
    assert_eq!(fxp_mul(Fixed::ZERO, from_f64(-4.0)), Fixed::ZERO);
}

#[test]
fn test_fxp_mul_close_to_wide() {
    let pairs = [(1.1, 2.3), (-7.77, 0.125), (0.333, -0.666), (99.5, 3.0625), (-12.1, -11.9)];
    for &(x, y) in &pairs {
        let (a, b) = (from_f64(x), from_f64(y));
        let split = fxp_mul(a, b);
        let wide = fxp_mul_wide(a, b);
        assert!((split.0 - wide.0).abs() <= 1 << 26, "{} * {}: {} vs {}", x, y, split, wide);
        assert!((to_f64(wide) - x * y).abs() < 1e-9);
    }
}

#[test]
fn test_fxp_mul_wide_saturates() {
    let big = from_f64(30000.0);
    assert_eq!(fxp_mul_wide(big, big), Fixed::MAX);
    assert_eq!(fxp_mul_wide(big, -big), Fixed::MIN);
}

#[test]
fn test_fxp_mul_sign_is_forced() {
    // 30000^2 overflows the magnitude arithmetic; the sign still follows the operands.
    let big = from_f64(30000.0);
    assert!(fxp_mul(big, big).0 >= 0);
    assert!(fxp_mul(big, -big).0 <= 0);
}

#[test]
fn test_fxp_div_integer_divisor() {
    assert_eq!(fxp_div(from_f64(6.0), from_f64(3.0)), from_f64(2.0));
    assert_eq!(fxp_div(from_f64(-7.0), from_f64(2.0)), from_f64(-3.5));
    assert_eq!(fxp_div(from_f64(7.0), from_f64(-2.0)), from_f64(-3.5));
    assert_eq!(fxp_div(from_f64(-7.0), from_f64(-2.0)), from_f64(3.5));
    assert!((to_f64(Fixed::ONE / from_int(3)) - 1.0 / 3.0).abs() <= EPSILON);
}

#[test]
fn test_fxp_div_fractional_divisor() {
    assert_eq!(fxp_div(Fixed::ONE, from_f64(0.5)), Fixed::TWO);
    let q = fxp_div(Fixed::ONE, from_f64(1.5));
    assert!((to_f64(q) - 2.0 / 3.0).abs() < 1e-6);
    let q = fxp_div(from_f64(-5.0), from_f64(0.75));
    assert!((to_f64(q) + 5.0 / 0.75).abs() < 1e-6);
}

#[test]
fn test_fxp_div_tiny_divisor() {
    // 2^-38 / 2^-28 = 2^-10
    let q = fxp_div(Fixed(1 << 10), Fixed(1 << 20));
    assert_eq!(q, Fixed(1 << 38));
    assert_eq!(fxp_div(Fixed::ONE, Fixed::EPSILON), Fixed::MAX);
    assert!(fxp_div(-Fixed::ONE, Fixed::EPSILON).0 < 0);
}

#[test]
fn test_fxp_div_wide() {
    let q = fxp_div_wide(Fixed::ONE, from_f64(1.5));
    assert_eq!(q, Fixed((2 * SCALE) / 3));
    assert_eq!(fxp_div_wide(from_f64(-7.0), from_f64(2.0)), from_f64(-3.5));
    assert_eq!(fxp_div_wide(from_f64(-5.0), from_f64(-0.25)), from_f64(20.0));
    assert_eq!(fxp_div_wide(Fixed::ONE, Fixed::EPSILON), Fixed::MAX);
    assert_eq!(fxp_div_wide(Fixed::ONE, Fixed::ZERO), Fixed::DIV_ZERO);
    assert_eq!(Fixed::TWO.div_wide(Fixed::TWO), Fixed::ONE);
}

#[test]
fn test_fxp_div_by_zero() {
    assert_eq!(Fixed::ONE.checked_div(Fixed::ZERO), Err(FixedError::DivideByZero));
    assert_eq!(fxp_div(from_f64(3.0), Fixed::ZERO), Fixed::DIV_ZERO);
    assert_eq!(from_f64(-3.0) / Fixed::ZERO, Fixed::DIV_ZERO);
    assert_eq!(Fixed::DIV_ZERO.0, -0x7fff_ffff_ffff_ffff);
}

#[test]
fn test_fxp_rounding() {
    let f = |v: f64| from_f64(v);

    assert_eq!(f(2.5).floor(), f(2.0));
    assert_eq!(f(-2.5).floor(), f(-3.0));
    assert_eq!(f(-0.5).floor(), f(-1.0));
    assert_eq!(f(3.0).floor(), f(3.0));
    assert_eq!(f(-3.0).floor(), f(-3.0));

    assert_eq!(f(2.5).ceil(), f(3.0));
    assert_eq!(f(-2.5).ceil(), f(-2.0));
    assert_eq!(f(-0.5).ceil(), Fixed::ZERO);
    assert_eq!(f(-3.0).ceil(), f(-3.0));

    assert_eq!(f(2.5).round(), f(3.0));
    assert_eq!(f(2.4).round(), f(2.0));
    assert_eq!(f(-2.5).round(), f(-2.0));
    assert_eq!(f(-2.6).round(), f(-3.0));
    assert_eq!(f(-0.4).round(), Fixed::ZERO);
    assert_eq!(f(7.0).round(), f(7.0));
}

#[test]
fn test_fxp_display() {
    assert_eq!(from_f64(-3.5).to_string(), "-3.5");
    assert_eq!(from_int(2).to_string(), "2");
    assert_eq!(from_f64(0.25).to_string(), "0.25");
    assert_eq!(Fixed::ZERO.to_string(), "0");
    assert_eq!(from_f64(-0.75).to_string(), "-0.75");
    assert_eq!(from_f64(12.0625).to_string(), "12.0625");
}

#[test]
fn test_fxp_integer_queries() {
    assert!(from_f64(4.0).is_integer());
    assert!(!from_f64(4.5).is_integer());
    assert!(from_f64(-1.0).is_negative());
    assert_eq!(from_f64(-1.25).abs(), from_f64(1.25));
}
