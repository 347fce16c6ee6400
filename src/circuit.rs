//! Ordered, validated gate programs. A circuit records (operator, targets)
//! operations and replays them against a fresh register on execution; the
//! program itself is never consumed.

use crate::embed;
use crate::error::Result;
use crate::gates;
use crate::matrix::Matrix;
use crate::register::Register;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One recorded gate application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    pub matrix: Matrix,
    pub targets: Vec<usize>,
    pub name: String,
    pub parameters: Option<Vec<f64>>,
}

/// An append-only sequence of operations over a fixed qubit count.
///
/// Gate methods validate and return `Result<&mut Self>`, so programs chain
/// with `?`:
///
/// ```
/// # use qcsim::circuit::Circuit;
/// # fn build() -> qcsim::error::Result<Circuit> {
/// let mut circuit = Circuit::new(2);
/// circuit.h(0)?.cnot(0, 1)?;
/// # Ok(circuit)
/// # }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circuit {
    num_qubits: usize,
    operations: Vec<Operation>,
}

impl Circuit {
    pub fn new(num_qubits: usize) -> Self {
        Circuit {
            num_qubits,
            operations: Vec::new(),
        }
    }

    /// Records an operation after checking the target indices against the
    /// qubit count and the operator size against the target count. Nothing
    /// invalid is ever recorded, so execution cannot fail on bad targets.
    pub fn append(
        &mut self,
        matrix: Matrix,
        targets: &[usize],
        name: &str,
        parameters: Option<Vec<f64>>,
    ) -> Result<&mut Self> {
        embed::validate_targets(self.num_qubits, targets)?;
        embed::validate_operator_size(&matrix, targets)?;
        self.operations.push(Operation {
            matrix,
            targets: targets.to_vec(),
            name: name.to_string(),
            parameters,
        });
        Ok(self)
    }

    // single-qubit gates

    pub fn h(&mut self, qubit: usize) -> Result<&mut Self> {
        self.append(gates::h(), &[qubit], "H", None)
    }

    pub fn x(&mut self, qubit: usize) -> Result<&mut Self> {
        self.append(gates::x(), &[qubit], "X", None)
    }

    pub fn y(&mut self, qubit: usize) -> Result<&mut Self> {
        self.append(gates::y(), &[qubit], "Y", None)
    }

    pub fn z(&mut self, qubit: usize) -> Result<&mut Self> {
        self.append(gates::z(), &[qubit], "Z", None)
    }

    pub fn s(&mut self, qubit: usize) -> Result<&mut Self> {
        self.append(gates::s(), &[qubit], "S", None)
    }

    pub fn t(&mut self, qubit: usize) -> Result<&mut Self> {
        self.append(gates::t(), &[qubit], "T", None)
    }

    pub fn sdg(&mut self, qubit: usize) -> Result<&mut Self> {
        self.append(gates::sdg(), &[qubit], "SDG", None)
    }

    pub fn tdg(&mut self, qubit: usize) -> Result<&mut Self> {
        self.append(gates::tdg(), &[qubit], "TDG", None)
    }

    pub fn rx(&mut self, qubit: usize, theta: f64) -> Result<&mut Self> {
        self.append(gates::rx(theta), &[qubit], "RX", Some(vec![theta]))
    }

    pub fn ry(&mut self, qubit: usize, theta: f64) -> Result<&mut Self> {
        self.append(gates::ry(theta), &[qubit], "RY", Some(vec![theta]))
    }

    pub fn rz(&mut self, qubit: usize, theta: f64) -> Result<&mut Self> {
        self.append(gates::rz(theta), &[qubit], "RZ", Some(vec![theta]))
    }

    pub fn phase(&mut self, qubit: usize, theta: f64) -> Result<&mut Self> {
        self.append(gates::phase(theta), &[qubit], "Phase", Some(vec![theta]))
    }

    // two-qubit gates

    pub fn cnot(&mut self, control: usize, target: usize) -> Result<&mut Self> {
        self.append(gates::cnot(), &[control, target], "CNOT", None)
    }

    pub fn cx(&mut self, control: usize, target: usize) -> Result<&mut Self> {
        self.cnot(control, target)
    }

    pub fn cz(&mut self, control: usize, target: usize) -> Result<&mut Self> {
        self.append(gates::cz(), &[control, target], "CZ", None)
    }

    pub fn cphase(&mut self, control: usize, target: usize, theta: f64) -> Result<&mut Self> {
        self.append(
            gates::cphase(theta),
            &[control, target],
            "CPhase",
            Some(vec![theta]),
        )
    }

    pub fn swap(&mut self, qubit1: usize, qubit2: usize) -> Result<&mut Self> {
        self.append(gates::swap(), &[qubit1, qubit2], "SWAP", None)
    }

    pub fn iswap(&mut self, qubit1: usize, qubit2: usize) -> Result<&mut Self> {
        self.append(gates::iswap(), &[qubit1, qubit2], "ISWAP", None)
    }

    // three-qubit gates

    pub fn toffoli(&mut self, control1: usize, control2: usize, target: usize) -> Result<&mut Self> {
        self.append(gates::toffoli(), &[control1, control2, target], "TOFFOLI", None)
    }

    pub fn ccx(&mut self, control1: usize, control2: usize, target: usize) -> Result<&mut Self> {
        self.toffoli(control1, control2, target)
    }

    pub fn fredkin(&mut self, control: usize, target1: usize, target2: usize) -> Result<&mut Self> {
        self.append(gates::fredkin(), &[control, target1, target2], "FREDKIN", None)
    }

    /// Replays every recorded operation, in append order, against a fresh
    /// entropy-seeded register and returns it.
    pub fn execute(&self, initial_basis_index: usize) -> Result<Register> {
        let register = Register::new(self.num_qubits, initial_basis_index)?;
        self.run(register)
    }

    /// Like [`execute`](Self::execute), but the returned register's
    /// measurement draws are determined by `seed`.
    pub fn execute_with_seed(&self, initial_basis_index: usize, seed: u64) -> Result<Register> {
        let register = Register::with_seed(self.num_qubits, initial_basis_index, seed)?;
        self.run(register)
    }

    fn run(&self, mut register: Register) -> Result<Register> {
        log::debug!(
            "executing {} operation(s) on {} qubit(s)",
            self.operations.len(),
            self.num_qubits
        );
        for op in &self.operations {
            register.apply_operator(&op.matrix, &op.targets)?;
        }
        Ok(register)
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Drops all recorded operations.
    pub fn clear(&mut self) {
        self.operations.clear();
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Quantum Circuit ({} qubits)", self.num_qubits)?;
        writeln!(f, "{}", "=".repeat(40))?;
        for (i, op) in self.operations.iter().enumerate() {
            write!(f, "{}. {}", i + 1, op.name)?;
            if let Some(params) = &op.parameters {
                let rendered: Vec<String> = params.iter().map(|p| format!("{:.4}", p)).collect();
                write!(f, "({})", rendered.join(", "))?;
            }
            let targets: Vec<String> = op.targets.iter().map(|t| t.to_string()).collect();
            writeln!(f, " on qubit(s): {}", targets.join(", "))?;
        }
        Ok(())
    }
}
