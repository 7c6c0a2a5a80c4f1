//! External potentials V(x, y) used to trap the condensate.

use serde::{Deserialize, Serialize};

/// Harmonic potential
///
/// ```text
/// ( x^2 + y^2 ) / 2
/// ```
pub fn harmonic_potential(x: f64, y: f64) -> f64 {
    0.5 * (x * x + y * y)
}

/// Harmonic trap with a cosine lattice on top
///
/// ```text
/// 0.5x^2 + 24cos^2(x)
/// ```
pub fn custom_potential_1(x: f64, _y: f64) -> f64 {
    0.5 * (x * x) + 24.0 * x.cos().powi(2)
}

/// Selects the potential a run is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PotentialKind {
    #[default]
    Harmonic,
    Custom1,
}

impl PotentialKind {
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        match self {
            PotentialKind::Harmonic => harmonic_potential(x, y),
            PotentialKind::Custom1 => custom_potential_1(x, y),
        }
    }
}
