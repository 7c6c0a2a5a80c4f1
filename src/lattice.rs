use nalgebra::DVector;
use std::f64::consts::PI;
use crate::error::SolverError;

/// One-dimensional Cartesian lattice over [-radius, radius].
///
/// Points sit at cell centres: x_i = -radius + (i + 1/2) * dx with
/// dx = 2 * radius / dim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lattice1D {
    pub dim: usize,
    pub radius: f64,
    pub delta_x: f64,
}

impl Lattice1D {
    pub fn new(dim: usize, radius: f64) -> Result<Self, SolverError> {
        if dim < 2 || !radius.is_finite() || radius <= 0.0 {
            return Err(SolverError::InvalidLattice { dim, radius });
        }
        Ok(Self {
            dim,
            radius,
            delta_x: 2.0 * radius / dim as f64,
        })
    }

    /// Physical extent of the box.
    pub fn length(&self) -> f64 {
        2.0 * self.radius
    }

    pub fn x_axis(&self) -> DVector<f64> {
        DVector::from_fn(self.dim, |i, _| -self.radius + (i as f64 + 0.5) * self.delta_x)
    }

    /// Angular wave numbers in FFT order: 0, 1, ..., -2, -1 (times 2π/L).
    pub fn wave_numbers(&self) -> DVector<f64> {
        let n = self.dim as i64;
        let dk = 2.0 * PI / self.length();
        DVector::from_fn(self.dim, |j, _| {
            let j = j as i64;
            let m = if j <= (n - 1) / 2 { j } else { j - n };
            m as f64 * dk
        })
    }

    /// Evaluate a potential V(x, y) on the lattice at y = 0.
    pub fn sample<F: Fn(f64, f64) -> f64>(&self, f: F) -> DVector<f64> {
        self.x_axis().map(|x| f(x, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lattice_rejects_bad_geometry() {
        assert!(Lattice1D::new(1, 1.0).is_err());
        assert!(Lattice1D::new(16, 0.0).is_err());
        assert!(Lattice1D::new(16, -2.0).is_err());
        assert!(Lattice1D::new(16, f64::NAN).is_err());
    }

    #[test]
    fn test_x_axis_is_centred_and_symmetric() {
        let lattice = Lattice1D::new(10, 5.0).unwrap();
        let x = lattice.x_axis();
        assert_eq!(x.len(), 10);
        assert_relative_eq!(lattice.delta_x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[0], -4.5, epsilon = 1e-12);
        assert_relative_eq!(x[9], 4.5, epsilon = 1e-12);
        for i in 0..10 {
            assert_relative_eq!(x[i], -x[9 - i], epsilon = 1e-12);
            assert!(x[i] > -5.0 && x[i] < 5.0);
        }
    }

    #[test]
    fn test_odd_lattice_contains_origin() {
        let lattice = Lattice1D::new(11, 2.0).unwrap();
        assert_relative_eq!(lattice.x_axis()[5], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_wave_numbers_fft_order() {
        let lattice = Lattice1D::new(4, PI).unwrap();
        // L = 2π so dk = 1
        let k = lattice.wave_numbers();
        assert_eq!(k.as_slice(), &[0.0, 1.0, -2.0, -1.0]);

        let lattice = Lattice1D::new(5, PI).unwrap();
        let k = lattice.wave_numbers();
        assert_eq!(k.as_slice(), &[0.0, 1.0, 2.0, -2.0, -1.0]);
    }

    #[test]
    fn test_sample_potential() {
        let lattice = Lattice1D::new(4, 2.0).unwrap();
        let v = lattice.sample(|x, y| x + 10.0 * y);
        assert_eq!(v.as_slice(), lattice.x_axis().as_slice());
    }
}
