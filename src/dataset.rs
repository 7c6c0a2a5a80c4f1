//! Training data generation by sweeping the coupling strength g.

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::error::{BecError, Result};
use crate::io::{save, DEFAULT_DATA_DIR};

pub const DEFAULT_G_LOW: f64 = 0.0;
pub const DEFAULT_G_HIGH: f64 = 500.0;

/// Spatial grid shared by every sample of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub x: Vec<f64>,
}

/// (coupling, normalized density)
pub type Datapoint = (f64, Vec<f64>);

/// Grid plus all samples of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub x: Vec<f64>,
    pub data: Vec<Datapoint>,
}

impl Dataset {
    pub fn new(reference: Reference, data: Vec<Datapoint>) -> Self {
        Self { x: reference.x, data }
    }

    pub fn reference(&self) -> Reference {
        Reference { x: self.x.clone() }
    }

    /// Every density lines up with the grid.
    pub fn is_consistent(&self) -> bool {
        self.data.iter().all(|(_, density)| density.len() == self.x.len())
    }

    /// Split into parallel inputs (couplings), outputs (densities) and the
    /// reference grid.
    pub fn into_parts(self) -> (Vec<f64>, Vec<Vec<f64>>, Reference) {
        let (inputs, outputs) = self.data.into_iter().unzip();
        (inputs, outputs, Reference { x: self.x })
    }
}

/// Anything that turns a coupling into a density profile.
pub trait DensityModel {
    fn particle_density(&mut self, coupling: f64) -> Result<(Reference, Vec<f64>)>;
}

impl<F> DensityModel for F
where
    F: FnMut(f64) -> Result<(Reference, Vec<f64>)>,
{
    fn particle_density(&mut self, coupling: f64) -> Result<(Reference, Vec<f64>)> {
        self(coupling)
    }
}

/// Draw `n` couplings uniformly from [low, high). A collapsed range yields
/// `low` every time. Bounds whose width overflows are rejected.
pub fn sample_couplings<R: Rng + ?Sized>(rng: &mut R, n: usize, low: f64, high: f64) -> Result<Vec<f64>> {
    if !(high - low).is_finite() || low > high {
        return Err(BecError::InvalidRange { low, high });
    }
    if low == high {
        return Ok(vec![low; n]);
    }
    let dist = Uniform::new(low, high);
    Ok((0..n).map(|_| dist.sample(rng)).collect())
}

/// Create a dataset from `model` by varying g over [g_low, g_high) and
/// write it to `data_dir/filename`.
///
/// The reference grid of the last sample becomes the dataset grid. Any
/// failing sample aborts the run before anything is written, and so does
/// asking for zero samples.
pub fn generate_varg_with<M, R>(
    rng: &mut R,
    mut model: M,
    num_samples: usize,
    filename: &str,
    g_low: f64,
    g_high: f64,
    data_dir: &Path,
) -> Result<Dataset>
where
    M: DensityModel,
    R: Rng + ?Sized,
{
    if num_samples == 0 {
        return Err(BecError::NoSamples);
    }
    let couplings = sample_couplings(rng, num_samples, g_low, g_high)?;

    let pb = ProgressBar::new(num_samples as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} g = {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut datapoints: Vec<Datapoint> = Vec::with_capacity(num_samples);
    let mut reference: Option<Reference> = None;
    for g in couplings {
        pb.set_message(format!("{:.2}", g));
        let (sample_ref, density) = match model.particle_density(g) {
            Ok(sample) => sample,
            Err(e) => {
                pb.abandon();
                return Err(e);
            }
        };
        debug!("sampled g = {:.4} ({} points)", g, density.len());

        if let Some(prev) = &reference {
            if prev.x != sample_ref.x {
                warn!("reference grid changed at g = {:.4}; keeping the latest one", g);
            }
        }
        reference = Some(sample_ref);
        datapoints.push((g, density));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let reference = reference.ok_or(BecError::NoSamples)?;
    let dataset = Dataset::new(reference, datapoints);
    save(&dataset, filename, data_dir)?;
    Ok(dataset)
}

/// `generate_varg_with` on the thread RNG and the default data directory.
pub fn generate_varg<M: DensityModel>(
    model: M,
    num_samples: usize,
    filename: &str,
    g_low: f64,
    g_high: f64,
) -> Result<Dataset> {
    let mut rng = rand::thread_rng();
    generate_varg_with(&mut rng, model, num_samples, filename, g_low, g_high, Path::new(DEFAULT_DATA_DIR))
}
