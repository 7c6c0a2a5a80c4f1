//! Error types for data generation, solving and persistence.

use thiserror::Error;

/// Errors raised by a `Solver` backend.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("invalid lattice: {dim} points over radius {radius}")]
    InvalidLattice { dim: usize, radius: f64 },

    #[error("invalid time step {0}")]
    InvalidTimeStep(f64),

    #[error("wavefunction diverged after {iteration} iterations")]
    Diverged { iteration: usize },
}

#[derive(Error, Debug)]
pub enum BecError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to (de)serialize dataset: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("failed to parse config: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("invalid coupling range [{low}, {high})")]
    InvalidRange { low: f64, high: f64 },

    #[error("a dataset needs at least one sample")]
    NoSamples,

    #[error("plotting failed: {0}")]
    Plot(String),
}

pub type Result<T> = std::result::Result<T, BecError>;
