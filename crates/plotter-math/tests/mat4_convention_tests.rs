// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Pins the storage and multiplication convention: row-major rows, column
//! vectors on the right, `(A * B) * v == A * (B * v)`.

use plotter_math::{multiply, transform, transpose, Mat4, Vec4};

const EPS: f32 = 1e-6;

fn approx_eq16(a: [f32; 16], b: [f32; 16]) {
    for i in 0..16 {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

fn sample() -> Mat4 {
    Mat4::from([
        [1.0, 2.0, 3.0, 4.0],
        [5.0, 6.0, 7.0, 8.0],
        [9.0, 10.0, 11.0, 12.0],
        [13.0, 14.0, 15.0, 16.0],
    ])
}

#[test]
fn matrix_vector_dots_rows_against_vector() {
    let v = Vec4::new(1.0, 0.0, -1.0, 2.0);
    let out = sample() * v;
    // row0: 1 - 3 + 8, row1: 5 - 7 + 16, ...
    assert_eq!(out.to_array(), [6.0, 14.0, 22.0, 30.0]);
    assert_eq!(transform(&sample(), &v), out);
}

#[test]
fn matrix_product_is_row_by_column() {
    let a = sample();
    let b = Mat4::from([
        [0.0, 1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    // Right-multiplying by a column permutation swaps columns 0 and 1.
    let ab = a * b;
    assert_eq!(ab.row(0).to_array(), [2.0, 1.0, 3.0, 4.0]);
    assert_eq!(ab.row(3).to_array(), [14.0, 13.0, 15.0, 16.0]);
    // Left-multiplying swaps rows.
    let ba = multiply(&b, &a);
    assert_eq!(ba.row(0), a.row(1));
    assert_eq!(ba.row(1), a.row(0));
}

#[test]
fn product_applies_right_operand_first() {
    let a = sample();
    let b = transpose(&sample());
    let v = Vec4::new(0.5, -1.0, 2.0, 1.0);
    let lhs = (a * b) * v;
    let rhs = a * (b * v);
    for i in 0..4 {
        assert!((lhs[i] - rhs[i]).abs() <= 1e-3, "component {i}: {lhs:?} vs {rhs:?}");
    }
}

#[test]
fn identity_is_neutral_on_both_sides() {
    let m = sample();
    assert_eq!(Mat4::IDENTITY * m, m);
    assert_eq!(m * Mat4::IDENTITY, m);
    assert_eq!(Mat4::diagonal(1.0), Mat4::IDENTITY);
    assert_eq!(Mat4::default(), Mat4::IDENTITY);
}

#[test]
fn mul_assign_variants_match_operator() {
    let rhs = transpose(&sample());
    let expected = (sample() * rhs).to_rows_array();

    let mut owned = sample();
    owned *= rhs;
    approx_eq16(owned.to_rows_array(), expected);

    let mut borrowed = sample();
    borrowed *= &rhs;
    approx_eq16(borrowed.to_rows_array(), expected);
}
