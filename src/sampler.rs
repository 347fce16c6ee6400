//! Shot-based sampling: replay a circuit many times, measure every replay
//! once and aggregate the outcome statistics.

use crate::circuit::Circuit;
use crate::error::Result;
use crate::register::Register;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use num_complex::Complex64;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

// shot counts below this finish fast enough that a progress bar is noise
const PROGRESS_THRESHOLD: usize = 5000;

/// Everything one sampling run produces: the exact final state and its
/// probability distribution, plus the empirical tallies over all shots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    pub num_qubits: usize,
    pub final_state: Vec<Complex64>,
    pub probabilities: BTreeMap<String, f64>,
    pub counts: BTreeMap<String, u64>,
    pub frequencies: BTreeMap<String, f64>,
    pub shots: usize,
    pub elapsed: Duration,
}

/// Repeatedly executes a circuit to gather outcome statistics. A master
/// generator, seeded explicitly or from entropy, hands a derived seed to
/// every shot, so a given sampler seed reproduces the exact tallies while
/// the shots themselves run in parallel and share no state.
pub struct Sampler {
    shots: usize,
    rng: ChaCha8Rng,
}

impl Sampler {
    pub fn new(shots: usize) -> Self {
        Sampler {
            shots,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn with_seed(shots: usize, seed: u64) -> Self {
        Sampler {
            shots,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn shots(&self) -> usize {
        self.shots
    }

    pub fn set_shots(&mut self, shots: usize) {
        self.shots = shots;
    }

    /// Executes the circuit once for the exact final state and probability
    /// distribution, then runs `shots` independent replays, each ending in
    /// one full projective measurement, and tallies the outcome strings.
    pub fn simulate(&mut self, circuit: &Circuit, initial_basis_index: usize) -> Result<SimulationResult> {
        let start = Instant::now();

        let register = circuit.execute(initial_basis_index)?;
        let final_state = register.amplitudes().to_vec();
        let probabilities = register.probabilities();

        // derive the per-shot seeds sequentially from the master rng, then
        // let the shots run in parallel over the fixed seed list
        let seeds: Vec<u64> = (0..self.shots).map(|_| self.rng.gen()).collect();
        log::debug!("sampling {} shot(s)", self.shots);

        let outcomes: Vec<String> = if self.shots >= PROGRESS_THRESHOLD {
            seeds
                .into_par_iter()
                .progress_with(shot_progress_bar(self.shots))
                .map(|seed| self.run_shot(circuit, initial_basis_index, seed))
                .collect::<Result<_>>()?
        } else {
            seeds
                .into_par_iter()
                .map(|seed| self.run_shot(circuit, initial_basis_index, seed))
                .collect::<Result<_>>()?
        };

        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for outcome in outcomes {
            *counts.entry(outcome).or_insert(0) += 1;
        }
        let frequencies = counts
            .iter()
            .map(|(state, &count)| (state.clone(), count as f64 / self.shots as f64))
            .collect();

        Ok(SimulationResult {
            num_qubits: circuit.num_qubits(),
            final_state,
            probabilities,
            counts,
            frequencies,
            shots: self.shots,
            elapsed: start.elapsed(),
        })
    }

    fn run_shot(&self, circuit: &Circuit, initial_basis_index: usize, seed: u64) -> Result<String> {
        let mut register = Register::with_seed(circuit.num_qubits(), initial_basis_index, seed)?;
        for op in circuit.operations() {
            register.apply_operator(&op.matrix, &op.targets)?;
        }
        Ok(register.measure_all().outcome)
    }

    /// Repeats [`simulate`](Self::simulate) and collects, per observed
    /// outcome string, the ordered sequence of per-experiment counts.
    /// Experiments where an outcome never occurred contribute a zero, so
    /// every sequence has length `experiments` and variance analysis lines
    /// up.
    pub fn run_multiple_experiments(
        &mut self,
        circuit: &Circuit,
        experiments: usize,
        initial_basis_index: usize,
    ) -> Result<BTreeMap<String, Vec<u64>>> {
        let mut results: BTreeMap<String, Vec<u64>> = BTreeMap::new();
        for experiment in 0..experiments {
            let result = self.simulate(circuit, initial_basis_index)?;
            record_experiment(&mut results, &result.counts, experiment);
        }
        Ok(results)
    }
}

// folds one experiment's tallies into the per-outcome series. an outcome
// seen for the first time gets a zero for every earlier experiment, and an
// outcome absent from this experiment gets a zero appended, so all series
// stay aligned at length experiment + 1.
fn record_experiment(
    results: &mut BTreeMap<String, Vec<u64>>,
    counts: &BTreeMap<String, u64>,
    experiment: usize,
) {
    for (state, &count) in counts {
        results
            .entry(state.clone())
            .or_insert_with(|| vec![0; experiment])
            .push(count);
    }
    for series in results.values_mut() {
        if series.len() < experiment + 1 {
            series.push(0);
        }
    }
}

fn shot_progress_bar(shots: usize) -> ProgressBar {
    let bar = ProgressBar::new(shots as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} shots ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_experiment_zero_fills_absent_outcomes() {
        let mut results = BTreeMap::new();
        let exp0 = BTreeMap::from([("0".to_string(), 5u64)]);
        let exp1 = BTreeMap::from([("0".to_string(), 3u64), ("1".to_string(), 2u64)]);
        let exp2 = BTreeMap::from([("0".to_string(), 5u64)]);

        record_experiment(&mut results, &exp0, 0);
        record_experiment(&mut results, &exp1, 1);
        record_experiment(&mut results, &exp2, 2);

        assert_eq!(results["0"], vec![5, 3, 5]);
        // zero-filled before its first appearance and for the later miss
        assert_eq!(results["1"], vec![0, 2, 0]);
    }
}
