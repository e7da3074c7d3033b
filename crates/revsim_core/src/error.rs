use std::fmt;

/// Errors returned by the simulation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationError {
    /// A run was requested with zero iterations
    InvalidIterationCount,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidIterationCount => {
                write!(f, "iteration count must be at least 1")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

pub type Result<T> = std::result::Result<T, SimulationError>;
