use thiserror::Error;

/// Errors surfaced by the simulator core. All of these are fail-fast
/// precondition violations: nothing is retried and no state is mutated
/// before the check fires.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulatorError {
    /// A target qubit index is out of range for the register, or the same
    /// index appears twice within one operation.
    #[error("invalid qubit index {index} for {num_qubits}-qubit system")]
    InvalidQubitIndex { index: usize, num_qubits: usize },

    /// Matrix or vector dimensions do not line up.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// A scalar argument is outside its allowed range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, SimulatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offender() {
        let err = SimulatorError::InvalidQubitIndex {
            index: 5,
            num_qubits: 3,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("5"));
        assert!(msg.contains("3"));

        let err = SimulatorError::DimensionMismatch("expected 4, got 8".into());
        assert!(format!("{}", err).contains("expected 4"));
    }
}
