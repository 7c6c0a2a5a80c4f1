//! Inputs of a time evolution and the backend trait that performs it.
//!
//! A run is assembled the way a Trotter-Suzuki solver expects it: a lattice,
//! a `State` living on that lattice, and a `Hamiltonian`
//!
//! ```text
//! H = -1/(2m) d²/dx² + V(x) + g|ψ|²
//! ```
//!
//! sampled on the same lattice. A `Solver` then evolves the state in place.

use nalgebra::DVector;
use rustfft::num_complex::Complex;
use crate::error::SolverError;
use crate::lattice::Lattice1D;

/// Wavefunction sampled on a 1D lattice.
#[derive(Debug, Clone)]
pub struct State {
    pub lattice: Lattice1D,
    pub psi: DVector<Complex<f64>>,
    /// Angular momentum quantum number. Carried for completeness; it has no
    /// effect in the 1D Cartesian geometry.
    pub angular_momentum: f64,
}

impl State {
    /// Zero wavefunction on `lattice`.
    pub fn new(lattice: &Lattice1D, angular_momentum: f64) -> Self {
        Self {
            lattice: *lattice,
            psi: DVector::from_element(lattice.dim, Complex::new(0.0, 0.0)),
            angular_momentum,
        }
    }

    /// Set ψ(x) = f(x) at every lattice point.
    pub fn init_state<F: Fn(f64) -> f64>(&mut self, f: F) {
        let x = self.lattice.x_axis();
        self.psi = x.map(|x| Complex::new(f(x), 0.0));
    }

    /// |ψ(x)|² at every lattice point.
    pub fn particle_density(&self) -> DVector<f64> {
        self.psi.map(|c| c.norm_sqr())
    }

    /// ∫|ψ|² dx
    pub fn norm2(&self) -> f64 {
        self.particle_density().sum() * self.lattice.delta_x
    }

    pub fn is_finite(&self) -> bool {
        self.psi.iter().all(|c| c.re.is_finite() && c.im.is_finite())
    }
}

/// Hamiltonian with an external potential and a contact interaction of
/// strength `coupling`.
#[derive(Debug, Clone)]
pub struct Hamiltonian {
    pub potential: DVector<f64>,
    pub mass: f64,
    pub coupling: f64,
}

impl Hamiltonian {
    pub fn new(potential: DVector<f64>, mass: f64, coupling: f64) -> Self {
        Self { potential, mass, coupling }
    }

    /// Build from a potential function evaluated on `lattice`.
    pub fn from_potential<F: Fn(f64, f64) -> f64>(
        lattice: &Lattice1D,
        potential: F,
        mass: f64,
        coupling: f64,
    ) -> Self {
        Self::new(lattice.sample(potential), mass, coupling)
    }
}

/// Time evolution backend.
pub trait Solver {
    /// Evolve `state` under `hamiltonian` for `iterations` steps of
    /// `time_step`. With `imag_time` the evolution runs in imaginary time
    /// and the state is renormalized to its initial norm after each step,
    /// relaxing it towards the ground state.
    fn evolve(
        &mut self,
        hamiltonian: &Hamiltonian,
        state: &mut State,
        time_step: f64,
        iterations: usize,
        imag_time: bool,
    ) -> Result<(), SolverError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::potential::harmonic_potential;

    #[test]
    fn test_constant_state_norm() {
        let lattice = Lattice1D::new(64, 4.0).unwrap();
        let mut state = State::new(&lattice, 0.0);
        assert_eq!(state.norm2(), 0.0);

        state.init_state(|_| 1.0 / 4.0_f64.sqrt());
        // |ψ|² = 1/4 over a box of length 8
        assert_relative_eq!(state.norm2(), 2.0, epsilon = 1e-12);
        assert!(state.is_finite());
        assert!(state.particle_density().iter().all(|&d| (d - 0.25).abs() < 1e-12));
    }

    #[test]
    fn test_hamiltonian_from_potential() {
        let lattice = Lattice1D::new(8, 2.0).unwrap();
        let h = Hamiltonian::from_potential(&lattice, harmonic_potential, 1.0, 3.0);
        assert_eq!(h.potential.len(), 8);
        assert_eq!(h.coupling, 3.0);
        let x = lattice.x_axis();
        for i in 0..8 {
            assert_eq!(h.potential[i], 0.5 * x[i] * x[i]);
        }
    }
}
