//! Solver module - wavefunction state, Hamiltonian and time evolution backends.

mod traits;
mod split_step;

pub use traits::{State, Hamiltonian, Solver};
pub use split_step::SplitStepSolver;
