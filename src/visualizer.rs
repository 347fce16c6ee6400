//! Text rendering of simulator outputs: amplitude listings, probability and
//! frequency histograms, Bloch coordinates. Pure string producers; the
//! caller decides where the text goes.

use crate::error::{Result, SimulatorError};
use crate::register::format_basis_index;
use num_complex::Complex64;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Renders a complex number as `a + bi` with a fixed precision.
pub fn format_complex(value: Complex64, precision: usize) -> String {
    let sign = if value.im >= 0.0 { '+' } else { '-' };
    format!(
        "{:.prec$} {} {:.prec$}i",
        value.re,
        sign,
        value.im.abs(),
        prec = precision
    )
}

/// Lists every basis state carrying more than 1e-10 probability with its
/// amplitude and probability.
pub fn format_state(amps: &[Complex64], precision: usize) -> String {
    let num_qubits = amps.len().trailing_zeros() as usize;
    let mut out = String::from("Quantum State:\n");
    for (i, amp) in amps.iter().enumerate() {
        let probability = amp.norm_sqr();
        if probability > 1e-10 {
            let _ = writeln!(
                out,
                "|{}>: {} (P: {:.prec$})",
                format_basis_index(i, num_qubits),
                format_complex(*amp, precision),
                probability,
                prec = precision
            );
        }
    }
    out
}

/// Histogram of a probability (or frequency) map, highest first, with a
/// proportional bar.
pub fn format_probabilities(probs: &BTreeMap<String, f64>, precision: usize) -> String {
    let mut out = String::from("Measurement Probabilities:\n");
    let mut sorted: Vec<(&String, &f64)> = probs.iter().collect();
    sorted.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
    for (state, &prob) in sorted {
        let bar = "#".repeat((prob * 50.0).floor() as usize);
        let _ = writeln!(
            out,
            "|{}>: {:.prec$}% {}",
            state,
            prob * 100.0,
            bar,
            prec = precision
        );
    }
    out
}

/// Histogram of sampled outcome counts.
pub fn format_counts(counts: &BTreeMap<String, u64>, shots: usize) -> String {
    let mut out = format!("Sampled outcomes ({} shots):\n", shots);
    for (state, &count) in counts {
        let frequency = count as f64 / shots as f64;
        let bar = "#".repeat((frequency * 50.0).floor() as usize);
        let _ = writeln!(out, "|{}>: {:6} ({:.4}) {}", state, count, frequency, bar);
    }
    out
}

/// Bloch-sphere coordinates (x, y, z) of a single-qubit state.
pub fn bloch_vector(amps: &[Complex64]) -> Result<[f64; 3]> {
    if amps.len() != 2 {
        return Err(SimulatorError::DimensionMismatch(format!(
            "Bloch sphere rendering needs a single qubit (length 2), got length {}",
            amps.len()
        )));
    }
    let theta = 2.0 * amps[0].norm().min(1.0).acos();
    let phi = amps[1].arg() - amps[0].arg();
    Ok([
        theta.sin() * phi.cos(),
        theta.sin() * phi.sin(),
        theta.cos(),
    ])
}
