//! The mutable quantum register: owns the amplitude vector, applies embedded
//! operators to it and performs probabilistic measurement with collapse.

use crate::embed;
use crate::error::{Result, SimulatorError};
use crate::matrix::Matrix;
use num_complex::Complex64;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One recorded measurement: the classical outcome (a full n-bit string for
/// a projective measurement, "0"/"1" for a targeted one) and the probability
/// mass it was drawn from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub outcome: String,
    pub probability: f64,
}

/// Dense state-vector register for `num_qubits` qubits. The amplitude vector
/// always has length 2^num_qubits; basis index bit q holds qubit q's
/// classical value. Every operator application and measurement mutates the
/// register in place; measurements are irreversible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Register {
    num_qubits: usize,
    amps: Vec<Complex64>,
    history: Vec<Measurement>,
    // measurement draws come from this explicitly seeded generator so a
    // caller-supplied seed fully determines probabilistic behaviour
    #[serde(skip_serializing, skip_deserializing)]
    rng: Option<ChaCha8Rng>,
}

impl Register {
    /// Creates a register in the given computational basis state with a
    /// fresh entropy-seeded generator (non-reproducible draws).
    pub fn new(num_qubits: usize, initial_basis_index: usize) -> Result<Self> {
        Self::build(num_qubits, initial_basis_index, ChaCha8Rng::from_entropy())
    }

    /// Creates a register whose measurement draws are fully determined by
    /// `seed`.
    pub fn with_seed(num_qubits: usize, initial_basis_index: usize, seed: u64) -> Result<Self> {
        Self::build(num_qubits, initial_basis_index, ChaCha8Rng::seed_from_u64(seed))
    }

    fn build(num_qubits: usize, initial_basis_index: usize, rng: ChaCha8Rng) -> Result<Self> {
        if num_qubits > 14 {
            log::warn!(
                "{} qubits means {}x{} embedded operators per gate; expect heavy memory use",
                num_qubits,
                1usize << num_qubits,
                1usize << num_qubits
            );
        }
        let amps = initial_amplitudes(num_qubits, initial_basis_index)?;
        Ok(Register {
            num_qubits,
            amps,
            history: Vec::new(),
            rng: Some(rng),
        })
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amps
    }

    /// Applies a k-qubit operator to the listed target qubits by embedding
    /// it into the full 2^n space and multiplying the amplitude vector.
    /// Unitary inputs preserve normalization; nothing is renormalized here.
    pub fn apply_operator(&mut self, operator: &Matrix, targets: &[usize]) -> Result<()> {
        let embedded = embed::embed_operator(operator, targets, self.num_qubits)?;
        self.amps = embedded.apply_to_vector(&self.amps)?;
        Ok(())
    }

    /// Replaces the amplitude vector wholesale and renormalizes it.
    pub fn set_state(&mut self, amplitudes: Vec<Complex64>) -> Result<()> {
        let expected = 1usize << self.num_qubits;
        if amplitudes.len() != expected {
            return Err(SimulatorError::DimensionMismatch(format!(
                "state vector has length {}, register needs {}",
                amplitudes.len(),
                expected
            )));
        }
        let norm_sqr: f64 = amplitudes.par_iter().map(|a| a.norm_sqr()).sum();
        if norm_sqr < 1e-12 {
            return Err(SimulatorError::InvalidArgument(
                "cannot normalize an all-zero state vector".into(),
            ));
        }
        let norm = norm_sqr.sqrt();
        self.amps = amplitudes;
        self.amps.par_iter_mut().for_each(|amp| *amp /= norm);
        Ok(())
    }

    /// Measures a single qubit, collapses the state to be consistent with
    /// the outcome and rescales the survivors. Returns the outcome together
    /// with the probability it was drawn from.
    pub fn measure_qubit(&mut self, qubit: usize) -> Result<Measurement> {
        if qubit >= self.num_qubits {
            return Err(SimulatorError::InvalidQubitIndex {
                index: qubit,
                num_qubits: self.num_qubits,
            });
        }

        let mask = 1usize << qubit;
        let prob_zero: f64 = self
            .amps
            .par_iter()
            .enumerate()
            .filter(|(i, _)| i & mask == 0)
            .map(|(_, amp)| amp.norm_sqr())
            .sum();

        let draw = self.next_draw();
        let outcome = if draw < prob_zero { 0u8 } else { 1u8 };
        let probability = if outcome == 0 { prob_zero } else { 1.0 - prob_zero };

        // zero the inconsistent amplitudes, rescale the rest by the square
        // root of the conditional probability
        let scale = 1.0 / probability.sqrt();
        self.amps.par_iter_mut().enumerate().for_each(|(i, amp)| {
            let bit = ((i & mask) != 0) as u8;
            if bit != outcome {
                *amp = Complex64::new(0.0, 0.0);
            } else {
                *amp *= scale;
            }
        });

        let measurement = Measurement {
            outcome: outcome.to_string(),
            probability,
        };
        self.history.push(measurement.clone());
        Ok(measurement)
    }

    /// Full projective measurement: draws one basis index from the squared
    /// magnitudes and collapses the register to that pure state. The outcome
    /// is the left-zero-padded n-bit string of the selected index.
    pub fn measure_all(&mut self) -> Measurement {
        let draw = self.next_draw();

        // walk the cumulative distribution; floating drift can leave the
        // running sum just below the draw, in which case the last index wins
        let mut selected = self.amps.len() - 1;
        let mut cumulative = 0.0;
        for (i, amp) in self.amps.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if draw < cumulative {
                selected = i;
                break;
            }
        }
        let probability = self.amps[selected].norm_sqr();

        self.amps.par_iter_mut().for_each(|amp| *amp = Complex64::new(0.0, 0.0));
        self.amps[selected] = Complex64::new(1.0, 0.0);

        let measurement = Measurement {
            outcome: format_basis_index(selected, self.num_qubits),
            probability,
        };
        self.history.push(measurement.clone());
        measurement
    }

    /// Probability of each basis state, keyed by its n-bit string and
    /// sorted by key; entries below 1e-10 are dropped.
    pub fn probabilities(&self) -> BTreeMap<String, f64> {
        let mut probs = BTreeMap::new();
        for (i, amp) in self.amps.iter().enumerate() {
            let p = amp.norm_sqr();
            if p > 1e-10 {
                probs.insert(format_basis_index(i, self.num_qubits), p);
            }
        }
        probs
    }

    pub fn history(&self) -> &[Measurement] {
        &self.history
    }

    /// Reinitializes the amplitudes to a basis state and clears the
    /// measurement history. The generator keeps its stream.
    pub fn reset(&mut self, initial_basis_index: usize) -> Result<()> {
        self.amps = initial_amplitudes(self.num_qubits, initial_basis_index)?;
        self.history.clear();
        Ok(())
    }

    /// Sum of squared magnitudes; 1 within float error for any state
    /// reached by unitary evolution.
    pub fn norm_squared(&self) -> f64 {
        self.amps.par_iter().map(|a| a.norm_sqr()).sum()
    }

    fn next_draw(&mut self) -> f64 {
        // take the rng out while drawing so the borrow does not overlap the
        // amplitude mutation that follows
        let mut rng = self.rng.take().unwrap_or_else(ChaCha8Rng::from_entropy);
        let draw: f64 = rng.gen();
        self.rng = Some(rng);
        draw
    }
}

fn initial_amplitudes(num_qubits: usize, initial_basis_index: usize) -> Result<Vec<Complex64>> {
    let size = 1usize << num_qubits;
    if initial_basis_index >= size {
        return Err(SimulatorError::InvalidArgument(format!(
            "initial basis index {} out of range for {} qubit(s)",
            initial_basis_index, num_qubits
        )));
    }
    let mut amps = vec![Complex64::new(0.0, 0.0); size];
    amps[initial_basis_index] = Complex64::new(1.0, 0.0);
    Ok(amps)
}

/// Left-zero-padded binary rendering of a basis index; bit q of the index is
/// qubit q, so the string reads qubit n-1 first.
pub fn format_basis_index(index: usize, num_qubits: usize) -> String {
    format!("{:0width$b}", index, width = num_qubits)
}
