//! neuralbec - training data for 1D Bose-Einstein condensates
//!
//! This crate sweeps the interaction strength `g` of a trapped 1D condensate,
//! relaxes each configuration to its ground state with an imaginary-time
//! split-step solver and stores the resulting density profiles as a dataset
//! for machine learning.

pub mod error;
pub mod potential;
pub mod lattice;
pub mod solver;
pub mod simulation;
pub mod dataset;
pub mod io;
pub mod plot;

// Re-export commonly used types at crate root
pub use error::{BecError, SolverError, Result};
pub use potential::{harmonic_potential, custom_potential_1, PotentialKind};
pub use lattice::Lattice1D;
pub use solver::{State, Hamiltonian, Solver, SplitStepSolver};
pub use simulation::{BecParams, Bec1D, particle_density_bec1d, normalize_density};
pub use dataset::{Reference, Datapoint, Dataset, DensityModel, generate_varg, generate_varg_with, sample_couplings};
pub use io::{save, load, load_dataset, read_run_config, RunConfig, GenerationConfig, DEFAULT_DATA_DIR};
pub use plot::{plot_wave_function, PlotOptions};
