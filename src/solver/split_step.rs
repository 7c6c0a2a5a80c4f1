//! Second-order split-step (Strang / Trotter-Suzuki) propagator.
//!
//! Each step applies
//!
//! ```text
//! exp(-V_eff dt/2) · F⁻¹ exp(-k²/(2m) dt) F · exp(-V_eff dt/2)
//! ```
//!
//! with V_eff = V + g|ψ|², where F is the discrete Fourier transform. In real
//! time every exponent carries an extra factor of i. The box is treated as
//! periodic by the FFT; trapped states vanish at the edges so this matches a
//! closed box in practice.

use log::debug;
use nalgebra::DVector;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;
use crate::error::SolverError;
use super::traits::{Hamiltonian, Solver, State};

/// FFT based split-step solver. Keeps its planner so repeated runs on the
/// same lattice size reuse the FFT plans.
pub struct SplitStepSolver {
    planner: FftPlanner<f64>,
}

impl SplitStepSolver {
    pub fn new() -> Self {
        Self { planner: FftPlanner::new() }
    }
}

impl Default for SplitStepSolver {
    fn default() -> Self {
        Self::new()
    }
}

/// exp(-E dt) in imaginary time, exp(-i E dt) in real time.
#[inline]
fn propagator(energy: f64, dt: f64, imag_time: bool) -> Complex<f64> {
    if imag_time {
        Complex::new((-energy * dt).exp(), 0.0)
    } else {
        Complex::new(0.0, -energy * dt).exp()
    }
}

fn potential_half_step(hamiltonian: &Hamiltonian, state: &mut State, dt: f64, imag_time: bool) {
    let g = hamiltonian.coupling;
    for (c, v) in state.psi.iter_mut().zip(hamiltonian.potential.iter()) {
        let v_eff = v + g * c.norm_sqr();
        *c *= propagator(v_eff, 0.5 * dt, imag_time);
    }
}

impl Solver for SplitStepSolver {
    fn evolve(
        &mut self,
        hamiltonian: &Hamiltonian,
        state: &mut State,
        time_step: f64,
        iterations: usize,
        imag_time: bool,
    ) -> Result<(), SolverError> {
        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(SolverError::InvalidTimeStep(time_step));
        }
        let lattice = state.lattice;
        if hamiltonian.potential.len() != lattice.dim || state.psi.len() != lattice.dim {
            return Err(SolverError::InvalidLattice { dim: hamiltonian.potential.len(), radius: lattice.radius });
        }

        let n = lattice.dim;
        let fft = self.planner.plan_fft_forward(n);
        let ifft = self.planner.plan_fft_inverse(n);
        let mut scratch = vec![Complex::new(0.0, 0.0); fft.get_inplace_scratch_len().max(ifft.get_inplace_scratch_len())];

        let kinetic: DVector<Complex<f64>> = lattice
            .wave_numbers()
            .map(|k| propagator(k * k / (2.0 * hamiltonian.mass), time_step, imag_time));
        // rustfft leaves the round trip unnormalized
        let inv_n = 1.0 / n as f64;
        let norm0 = state.norm2();

        debug!(
            "evolving {} points for {} iterations (dt = {}, g = {}, imaginary = {})",
            n, iterations, time_step, hamiltonian.coupling, imag_time
        );

        for iteration in 0..iterations {
            potential_half_step(hamiltonian, state, time_step, imag_time);

            fft.process_with_scratch(state.psi.as_mut_slice(), &mut scratch);
            state.psi.component_mul_assign(&kinetic);
            ifft.process_with_scratch(state.psi.as_mut_slice(), &mut scratch);
            state.psi.apply(|c| *c *= inv_n);

            potential_half_step(hamiltonian, state, time_step, imag_time);

            if imag_time {
                let norm = state.norm2();
                if !(norm.is_finite() && norm > 0.0) {
                    return Err(SolverError::Diverged { iteration: iteration + 1 });
                }
                let scale = (norm0 / norm).sqrt();
                state.psi.apply(|c| *c *= scale);
            }

            if !state.is_finite() {
                return Err(SolverError::Diverged { iteration: iteration + 1 });
            }
        }

        Ok(())
    }
}
