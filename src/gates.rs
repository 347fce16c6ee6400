//! Catalog of named gate matrices. Every constructor returns a fresh
//! unitary `Matrix` with the usual numeric conventions: RZ(t) =
//! diag(e^{-it/2}, e^{it/2}), T = diag(1, e^{i pi/4}).
//!
//! Multi-qubit matrices are laid out for the embedding's bit order: the
//! first entry of a target list becomes the least-significant local bit.
//! For CNOT and Toffoli the control qubit(s) come first in the target list,
//! so the control condition lives in the low local bits.

use crate::matrix::Matrix;
use num_complex::Complex64;
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4};

#[inline]
fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

pub fn identity() -> Matrix {
    Matrix::identity(2)
}

pub fn x() -> Matrix {
    Matrix::from_rows(vec![
        vec![c(0.0, 0.0), c(1.0, 0.0)],
        vec![c(1.0, 0.0), c(0.0, 0.0)],
    ])
}

pub fn y() -> Matrix {
    Matrix::from_rows(vec![
        vec![c(0.0, 0.0), c(0.0, -1.0)],
        vec![c(0.0, 1.0), c(0.0, 0.0)],
    ])
}

pub fn z() -> Matrix {
    Matrix::from_rows(vec![
        vec![c(1.0, 0.0), c(0.0, 0.0)],
        vec![c(0.0, 0.0), c(-1.0, 0.0)],
    ])
}

pub fn h() -> Matrix {
    Matrix::from_rows(vec![
        vec![c(FRAC_1_SQRT_2, 0.0), c(FRAC_1_SQRT_2, 0.0)],
        vec![c(FRAC_1_SQRT_2, 0.0), c(-FRAC_1_SQRT_2, 0.0)],
    ])
}

pub fn s() -> Matrix {
    phase(FRAC_PI_2)
}

pub fn t() -> Matrix {
    phase(FRAC_PI_4)
}

pub fn sdg() -> Matrix {
    phase(-FRAC_PI_2)
}

pub fn tdg() -> Matrix {
    phase(-FRAC_PI_4)
}

pub fn rx(theta: f64) -> Matrix {
    let cos = (theta / 2.0).cos();
    let sin = (theta / 2.0).sin();
    Matrix::from_rows(vec![
        vec![c(cos, 0.0), c(0.0, -sin)],
        vec![c(0.0, -sin), c(cos, 0.0)],
    ])
}

pub fn ry(theta: f64) -> Matrix {
    let cos = (theta / 2.0).cos();
    let sin = (theta / 2.0).sin();
    Matrix::from_rows(vec![
        vec![c(cos, 0.0), c(-sin, 0.0)],
        vec![c(sin, 0.0), c(cos, 0.0)],
    ])
}

pub fn rz(theta: f64) -> Matrix {
    Matrix::from_rows(vec![
        vec![Complex64::from_polar(1.0, -theta / 2.0), c(0.0, 0.0)],
        vec![c(0.0, 0.0), Complex64::from_polar(1.0, theta / 2.0)],
    ])
}

pub fn phase(theta: f64) -> Matrix {
    Matrix::from_rows(vec![
        vec![c(1.0, 0.0), c(0.0, 0.0)],
        vec![c(0.0, 0.0), Complex64::from_polar(1.0, theta)],
    ])
}

/// CNOT for a `[control, target]` list: local bit 0 is the control, local
/// bit 1 the flipped bit, so |c=1,t=0> (index 1) and |c=1,t=1> (index 3)
/// exchange.
pub fn cnot() -> Matrix {
    let mut m = Matrix::identity(4);
    m.set(1, 1, c(0.0, 0.0));
    m.set(3, 3, c(0.0, 0.0));
    m.set(1, 3, c(1.0, 0.0));
    m.set(3, 1, c(1.0, 0.0));
    m
}

pub fn cz() -> Matrix {
    let mut m = Matrix::identity(4);
    m.set(3, 3, c(-1.0, 0.0));
    m
}

/// Controlled phase: diag(1, 1, 1, e^{i theta}).
pub fn cphase(theta: f64) -> Matrix {
    let mut m = Matrix::identity(4);
    m.set(3, 3, Complex64::from_polar(1.0, theta));
    m
}

pub fn swap() -> Matrix {
    Matrix::from_rows(vec![
        vec![c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        vec![c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)],
        vec![c(0.0, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        vec![c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)],
    ])
}

pub fn iswap() -> Matrix {
    Matrix::from_rows(vec![
        vec![c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
        vec![c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0)],
        vec![c(0.0, 0.0), c(0.0, 1.0), c(0.0, 0.0), c(0.0, 0.0)],
        vec![c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)],
    ])
}

/// Doubly-controlled NOT for a `[control1, control2, target]` list: both
/// controls set means local bits 0 and 1, so indices 3 and 7 exchange.
pub fn toffoli() -> Matrix {
    let mut m = Matrix::identity(8);
    m.set(3, 3, c(0.0, 0.0));
    m.set(7, 7, c(0.0, 0.0));
    m.set(3, 7, c(1.0, 0.0));
    m.set(7, 3, c(1.0, 0.0));
    m
}

/// Controlled swap for a `[control, target1, target2]` list: with the
/// control (local bit 0) set, the two target bits exchange, i.e. indices 3
/// and 5.
pub fn fredkin() -> Matrix {
    let mut m = Matrix::identity(8);
    m.set(3, 3, c(0.0, 0.0));
    m.set(5, 5, c(0.0, 0.0));
    m.set(3, 5, c(1.0, 0.0));
    m.set(5, 3, c(1.0, 0.0));
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    // a matrix U is unitary when U * U-dagger is the identity
    fn assert_unitary(m: &Matrix) {
        let product = m
            .multiply(&m.conjugate_transpose())
            .expect("square matrix times its adjoint");
        assert!(
            product.approx_eq(&Matrix::identity(m.rows()), 1e-9),
            "matrix is not unitary"
        );
    }

    #[test]
    fn catalog_matrices_are_unitary() {
        for gate in [
            identity(),
            x(),
            y(),
            z(),
            h(),
            s(),
            t(),
            sdg(),
            tdg(),
            rx(0.7),
            ry(1.3),
            rz(2.1),
            phase(0.4),
            cnot(),
            cz(),
            cphase(0.9),
            swap(),
            iswap(),
            toffoli(),
            fredkin(),
        ] {
            assert_unitary(&gate);
        }
    }

    #[test]
    fn s_is_t_squared() {
        let tt = t().multiply(&t()).unwrap();
        assert!(tt.approx_eq(&s(), 1e-12));
    }

    #[test]
    fn sdg_undoes_s() {
        let product = s().multiply(&sdg()).unwrap();
        assert!(product.approx_eq(&Matrix::identity(2), 1e-12));
    }
}
