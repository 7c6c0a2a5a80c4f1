//! Particle density of a 1D BEC in a trap.
//!
//! The runner wires lattice, initial state, potential and Hamiltonian
//! together, hands them to a `Solver` for imaginary-time evolution and
//! reduces the relaxed state to a normalized profile √ρ(x) / max √ρ.

use log::debug;
use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use crate::dataset::{DensityModel, Reference};
use crate::error::Result;
use crate::lattice::Lattice1D;
use crate::potential::PotentialKind;
use crate::solver::{Hamiltonian, Solver, SplitStepSolver, State};

/// Fixed parameters of a coupling sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BecParams {
    /// Number of lattice points
    pub dim: usize,
    /// Physical half-extent of the lattice
    pub radius: f64,
    /// Angular momentum quantum number
    #[serde(default)]
    pub angular_momentum: f64,
    /// Imaginary time step
    pub time_step: f64,
    /// Number of solver iterations
    pub iterations: usize,
    #[serde(default)]
    pub potential: PotentialKind,
}

/// Reusable runner; keeps one solver alive across couplings.
pub struct Bec1D<S: Solver> {
    pub params: BecParams,
    solver: S,
}

impl Bec1D<SplitStepSolver> {
    pub fn new(params: BecParams) -> Self {
        Self::with_solver(params, SplitStepSolver::new())
    }
}

impl<S: Solver> Bec1D<S> {
    pub fn with_solver(params: BecParams, solver: S) -> Self {
        Self { params, solver }
    }

    /// Relax the condensate at coupling `g` and return the grid together with
    /// its normalized density profile.
    pub fn run(&mut self, coupling: f64) -> Result<(Reference, Vec<f64>)> {
        let p = &self.params;

        let lattice = Lattice1D::new(p.dim, p.radius)?;
        let mut state = State::new(&lattice, p.angular_momentum);
        let amplitude = 1.0 / p.radius.sqrt();
        state.init_state(|_| amplitude);

        let kind = p.potential;
        let hamiltonian = Hamiltonian::from_potential(&lattice, |x, y| kind.eval(x, y), 1.0, coupling);

        debug!("relaxing condensate at g = {}", coupling);
        self.solver
            .evolve(&hamiltonian, &mut state, p.time_step, p.iterations, true)?;

        let psi = normalize_density(&state.particle_density());
        let reference = Reference { x: lattice.x_axis().as_slice().to_vec() };
        Ok((reference, psi.as_slice().to_vec()))
    }
}

impl<S: Solver> DensityModel for Bec1D<S> {
    fn particle_density(&mut self, coupling: f64) -> Result<(Reference, Vec<f64>)> {
        self.run(coupling)
    }
}

/// √ρ rescaled so its maximum is 1. A vanishing profile is returned as is.
pub fn normalize_density(density: &DVector<f64>) -> DVector<f64> {
    let psi = density.map(f64::sqrt);
    let peak = psi.max();
    if peak > 0.0 {
        psi / peak
    } else {
        psi
    }
}

/// Estimate the particle density of a 1-dimensional BEC in a harmonic trap
/// with the default split-step solver.
pub fn particle_density_bec1d(
    dim: usize,
    radius: f64,
    angular_momentum: f64,
    time_step: f64,
    coupling: f64,
    iterations: usize,
) -> Result<(Reference, Vec<f64>)> {
    let params = BecParams {
        dim,
        radius,
        angular_momentum,
        time_step,
        iterations,
        potential: PotentialKind::Harmonic,
    };
    Bec1D::new(params).run(coupling)
}
