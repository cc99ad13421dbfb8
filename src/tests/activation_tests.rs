// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::activation::*;
use crate::fxp::convert::{from_f64, from_int, to_f64};
use crate::matrix::Matrix;
use crate::types::scalar::Fixed;

#[test]
fn test_sigmoid_fixed_points() {
    assert_eq!(sigmoid(Fixed::ZERO), Fixed::ONE_HALF);
    assert_eq!(sigmoid(from_int(-11)), Fixed::ZERO);
    assert_eq!(sigmoid(from_int(40)), Fixed::ONE);
    assert!(sigmoid(from_int(-10)) > Fixed::ZERO);
}

#[test]
fn test_sigmoid_accuracy() {
    for &x in &[-6.0f64, -2.0, -0.5, 0.5, 2.0, 6.0] {
        let want = 1.0 / (1.0 + (-x).exp());
        let got = to_f64(sigmoid(from_f64(x)));
        assert!((got - want).abs() < 1e-5, "sigmoid({}) = {}, want {}", x, got, want);
    }
}

#[test]
fn test_sigmoid_monotonic() {
    let step = Fixed::ONE.0 / 4;
    let mut x = from_int(-12);
    let mut prev = sigmoid(x);
    while x < from_int(12) {
        x = Fixed(x.0 + step);
        let y = sigmoid(x);
        assert!(y >= prev, "sigmoid not monotonic at {}", x);
        assert!(y >= Fixed::ZERO && y <= Fixed::ONE);
        prev = y;
    }
}

#[test]
fn test_sigmoid_matrix_and_prime() {
    let m = Matrix::from_f64(1, 3, &[-20.0, 0.0, 40.0]).unwrap();
    let s = sigmoid_matrix(&m);
    assert_eq!(s.as_slice(), &[Fixed::ZERO, Fixed::ONE_HALF, Fixed::ONE]);

    let d = sigmoid_prime(&s);
    assert_eq!(d.as_slice(), &[Fixed::ZERO, from_f64(0.25), Fixed::ZERO]);
    assert_eq!(sigmoid_slope(Fixed::ONE_HALF), from_f64(0.25));
}

#[test]
fn test_relu() {
    let m = Matrix::from_f64(1, 4, &[-1.5, 0.0, 0.25, 3.0]).unwrap();
    assert_eq!(relu_matrix(&m).to_f64_vec(), vec![0.0, 0.0, 0.25, 3.0]);
    assert_eq!(relu_prime(&m).to_f64_vec(), vec![0.0, 0.0, 1.0, 1.0]);
    assert_eq!(relu(from_int(-3)), Fixed::ZERO);
    assert_eq!(relu_slope(Fixed::EPSILON), Fixed::ONE);
}
