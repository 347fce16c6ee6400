//! qcsim: a dense state-vector quantum circuit simulator.
//!
//! The joint state of n qubits is a complex amplitude vector of length 2^n;
//! gates are small unitary matrices embedded into the full space and applied
//! by matrix-vector product. Measurement collapses the state irreversibly;
//! the sampler replays circuits shot by shot to gather outcome statistics.

pub mod algorithms;
pub mod circuit;
pub mod embed;
pub mod error;
pub mod gates;
pub mod matrix;
pub mod noise;
pub mod register;
pub mod sampler;
pub mod tomography;
pub mod visualizer;


pub use circuit::Circuit;
pub use error::{Result, SimulatorError};
pub use matrix::Matrix;
pub use register::{Measurement, Register};
pub use sampler::{Sampler, SimulationResult};
