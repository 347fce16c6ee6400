//! Noise channels as pure functions over amplitude arrays. These operate on
//! a raw state vector rather than a register; callers feed the result back
//! through `Register::set_state` (which renormalizes) when they want a
//! register-level noisy state. Randomness is always threaded in explicitly.

use num_complex::Complex64;
use rand::Rng;

/// With probability `probability`, applies a uniformly chosen Pauli error
/// (X, Y or Z) to a uniformly chosen qubit. Returns the (possibly
/// unchanged) amplitude vector.
pub fn depolarizing_channel<R: Rng>(
    amps: &[Complex64],
    probability: f64,
    rng: &mut R,
) -> Vec<Complex64> {
    let mut noisy = amps.to_vec();
    if rng.gen::<f64>() < probability {
        let num_qubits = amps.len().trailing_zeros() as usize;
        if num_qubits == 0 {
            return noisy;
        }
        let qubit = rng.gen_range(0..num_qubits);
        match rng.gen_range(0..3) {
            0 => apply_pauli_x(&mut noisy, qubit),
            1 => apply_pauli_y(&mut noisy, qubit),
            _ => apply_pauli_z(&mut noisy, qubit),
        }
    }
    noisy
}

/// Amplitude damping on one qubit: a fraction `gamma` of each |1> weight
/// decays into the paired |0> component. Not trace-preserving on a pure
/// state vector; renormalize afterwards if needed.
pub fn amplitude_damping(amps: &[Complex64], qubit: usize, gamma: f64) -> Vec<Complex64> {
    let mask = 1usize << qubit;
    let keep = (1.0 - gamma).sqrt();
    let decay = gamma.sqrt();
    let mut noisy = amps.to_vec();
    for i in 0..amps.len() {
        if i & mask != 0 {
            noisy[i] = amps[i] * keep;
            noisy[i ^ mask] += amps[i] * decay;
        }
    }
    noisy
}

/// Phase damping: uniform magnitude decay by e^{-lambda/2}.
pub fn phase_damping(amps: &[Complex64], lambda: f64) -> Vec<Complex64> {
    let factor = (-lambda / 2.0).exp();
    amps.iter().map(|amp| amp * factor).collect()
}

fn apply_pauli_x(amps: &mut [Complex64], qubit: usize) {
    let mask = 1usize << qubit;
    for i in 0..amps.len() {
        if i & mask == 0 {
            amps.swap(i, i | mask);
        }
    }
}

fn apply_pauli_z(amps: &mut [Complex64], qubit: usize) {
    let mask = 1usize << qubit;
    for (i, amp) in amps.iter_mut().enumerate() {
        if i & mask != 0 {
            *amp = -*amp;
        }
    }
}

fn apply_pauli_y(amps: &mut [Complex64], qubit: usize) {
    // Y = iXZ: flip, negate the components that started in |1>, scale by i
    let mask = 1usize << qubit;
    let i_unit = Complex64::new(0.0, 1.0);
    apply_pauli_x(amps, qubit);
    for (i, amp) in amps.iter_mut().enumerate() {
        if i & mask == 0 {
            *amp = -*amp;
        }
        *amp *= i_unit;
    }
}
