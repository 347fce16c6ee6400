//! Derived metrics over pure-state amplitude vectors: fidelity, trace
//! distance, entropy of the measurement distribution, purity and two-qubit
//! concurrence.

use crate::error::{Result, SimulatorError};
use num_complex::Complex64;

fn check_same_length(a: &[Complex64], b: &[Complex64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(SimulatorError::DimensionMismatch(format!(
            "states have lengths {} and {}",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}

/// |<a|b>|^2 for two pure states of equal dimension.
pub fn state_fidelity(a: &[Complex64], b: &[Complex64]) -> Result<f64> {
    check_same_length(a, b)?;
    let inner: Complex64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| x.conj() * y)
        .sum();
    Ok(inner.norm_sqr())
}

/// Euclidean distance between the amplitude vectors, scaled by 1/sqrt(2).
pub fn trace_distance(a: &[Complex64], b: &[Complex64]) -> Result<f64> {
    check_same_length(a, b)?;
    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).norm_sqr())
        .sum();
    Ok(sum.sqrt() / 2.0_f64.sqrt())
}

/// Shannon entropy (bits) of the computational-basis distribution.
pub fn entropy(amps: &[Complex64]) -> f64 {
    amps.iter()
        .map(|amp| amp.norm_sqr())
        .filter(|&p| p > 1e-10)
        .map(|p| -p * p.log2())
        .sum()
}

/// Sum of squared basis probabilities; 1 exactly when all weight sits on a
/// single basis state.
pub fn purity(amps: &[Complex64]) -> f64 {
    amps.iter().map(|amp| amp.norm_sqr().powi(2)).sum()
}

/// Concurrence of a 2-qubit pure state: 2 |a00*a11 - a01*a10|. Ranges from
/// 0 (product state) to 1 (maximally entangled).
pub fn concurrence(amps: &[Complex64]) -> Result<f64> {
    if amps.len() != 4 {
        return Err(SimulatorError::DimensionMismatch(format!(
            "concurrence needs a 2-qubit state (length 4), got length {}",
            amps.len()
        )));
    }
    let det = amps[0] * amps[3] - amps[1] * amps[2];
    Ok(2.0 * det.norm())
}
