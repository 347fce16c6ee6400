//! Pre-assembled example circuits. These are plain builders over
//! [`Circuit`]; nothing here touches a register directly.

use crate::circuit::Circuit;
use crate::error::{Result, SimulatorError};
use std::f64::consts::PI;

/// H on qubit 0 followed by CNOT(0, 1): (|00> + |11>)/sqrt(2).
pub fn bell_state() -> Result<Circuit> {
    let mut circuit = Circuit::new(2);
    circuit.h(0)?.cnot(0, 1)?;
    Ok(circuit)
}

/// Generalized Bell state over `num_qubits` qubits.
pub fn ghz_state(num_qubits: usize) -> Result<Circuit> {
    let mut circuit = Circuit::new(num_qubits);
    circuit.h(0)?;
    for i in 1..num_qubits {
        circuit.cnot(0, i)?;
    }
    Ok(circuit)
}

/// Quantum Fourier transform: Hadamards with controlled phase rotations,
/// then the qubit-order reversal swaps.
pub fn quantum_fourier_transform(num_qubits: usize) -> Result<Circuit> {
    let mut circuit = Circuit::new(num_qubits);
    for i in 0..num_qubits {
        circuit.h(i)?;
        for j in (i + 1)..num_qubits {
            let angle = PI / (1u64 << (j - i)) as f64;
            circuit.cphase(j, i, angle)?;
        }
    }
    for i in 0..num_qubits / 2 {
        circuit.swap(i, num_qubits - 1 - i)?;
    }
    Ok(circuit)
}

/// Inverse of [`quantum_fourier_transform`]: same structure reversed with
/// negated rotation angles.
pub fn inverse_qft(num_qubits: usize) -> Result<Circuit> {
    let mut circuit = Circuit::new(num_qubits);
    for i in (0..num_qubits / 2).rev() {
        circuit.swap(i, num_qubits - 1 - i)?;
    }
    for i in (0..num_qubits).rev() {
        for j in ((i + 1)..num_qubits).rev() {
            let angle = -PI / (1u64 << (j - i)) as f64;
            circuit.cphase(j, i, angle)?;
        }
        circuit.h(i)?;
    }
    Ok(circuit)
}

/// Deutsch-Jozsa over `num_qubits` input qubits plus one ancilla. The
/// caller supplies the oracle as a closure that appends gates to the
/// circuit; input qubits are 0..num_qubits, the ancilla is `num_qubits`.
pub fn deutsch_jozsa<F>(oracle: F, num_qubits: usize) -> Result<Circuit>
where
    F: FnOnce(&mut Circuit) -> Result<()>,
{
    let mut circuit = Circuit::new(num_qubits + 1);
    circuit.x(num_qubits)?;
    for i in 0..=num_qubits {
        circuit.h(i)?;
    }
    oracle(&mut circuit)?;
    for i in 0..num_qubits {
        circuit.h(i)?;
    }
    Ok(circuit)
}

/// Grover search amplifying the given marked basis states. Supports up to
/// three qubits, the range the multi-controlled Z construction covers.
pub fn grover_search(marked_states: &[usize], num_qubits: usize) -> Result<Circuit> {
    if num_qubits == 0 || num_qubits > 3 {
        return Err(SimulatorError::InvalidArgument(format!(
            "Grover search is implemented for 1 to 3 qubits, got {}",
            num_qubits
        )));
    }
    let size = 1usize << num_qubits;
    for &state in marked_states {
        if state >= size {
            return Err(SimulatorError::InvalidArgument(format!(
                "marked state {} out of range for {} qubit(s)",
                state, num_qubits
            )));
        }
    }

    let mut circuit = Circuit::new(num_qubits);
    for i in 0..num_qubits {
        circuit.h(i)?;
    }

    let iterations = ((PI / 4.0) * (size as f64).sqrt()).floor().max(1.0) as usize;
    for _ in 0..iterations {
        for &state in marked_states {
            apply_phase_oracle(&mut circuit, state, num_qubits)?;
        }
        apply_diffusion(&mut circuit, num_qubits)?;
    }
    Ok(circuit)
}

// flips the sign of exactly one basis state: X-conjugate the zero bits so
// the state becomes |1...1>, apply a multi-controlled Z, flip back
fn apply_phase_oracle(circuit: &mut Circuit, state: usize, num_qubits: usize) -> Result<()> {
    for i in 0..num_qubits {
        if state & (1 << i) == 0 {
            circuit.x(i)?;
        }
    }
    multi_controlled_z(circuit, num_qubits)?;
    for i in 0..num_qubits {
        if state & (1 << i) == 0 {
            circuit.x(i)?;
        }
    }
    Ok(())
}

// inversion about the mean: H-wrap, X-wrap, multi-controlled Z
fn apply_diffusion(circuit: &mut Circuit, num_qubits: usize) -> Result<()> {
    for i in 0..num_qubits {
        circuit.h(i)?;
    }
    for i in 0..num_qubits {
        circuit.x(i)?;
    }
    multi_controlled_z(circuit, num_qubits)?;
    for i in 0..num_qubits {
        circuit.x(i)?;
    }
    for i in 0..num_qubits {
        circuit.h(i)?;
    }
    Ok(())
}

fn multi_controlled_z(circuit: &mut Circuit, num_qubits: usize) -> Result<()> {
    match num_qubits {
        1 => circuit.z(0).map(|_| ()),
        2 => circuit.cz(0, 1).map(|_| ()),
        3 => {
            // CCZ = H on the target around a Toffoli
            circuit.h(2)?;
            circuit.toffoli(0, 1, 2)?;
            circuit.h(2)?;
            Ok(())
        }
        n => Err(SimulatorError::InvalidArgument(format!(
            "multi-controlled Z not implemented for {} qubits",
            n
        ))),
    }
}

/// Teleportation skeleton over three qubits: Bell pair between 1 and 2,
/// Alice's entangling operations, Bob's coherent corrections.
pub fn quantum_teleportation() -> Result<Circuit> {
    let mut circuit = Circuit::new(3);
    circuit.h(1)?.cnot(1, 2)?;
    circuit.cnot(0, 1)?.h(0)?;
    circuit.cnot(1, 2)?.cz(0, 2)?;
    Ok(circuit)
}

/// Superdense coding of two classical bits through one Bell pair. After the
/// decoding step the register measures as the bit string `bit1 bit0`.
pub fn superdense_coding(bit1: bool, bit0: bool) -> Result<Circuit> {
    let mut circuit = Circuit::new(2);
    circuit.h(0)?.cnot(0, 1)?;
    // X on the shared qubit lands in the high outcome bit, Z in the low one
    if bit1 {
        circuit.x(0)?;
    }
    if bit0 {
        circuit.z(0)?;
    }
    circuit.cnot(0, 1)?.h(0)?;
    Ok(circuit)
}
