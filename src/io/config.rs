// Read a run description from YAML:
/*
simulation:
  dim: 512
  radius: 10.0
  angular_momentum: 0.0
  time_step: 0.01
  iterations: 2000
  potential: harmonic
generation:
  num_samples: 100
  filename: bec1d
  g_low: 0.0
  g_high: 500.0
  data_dir: data/
  seed: 42
 */

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use crate::dataset::{DEFAULT_G_HIGH, DEFAULT_G_LOW};
use crate::error::Result;
use crate::io::DEFAULT_DATA_DIR;
use crate::simulation::BecParams;

/// How the coupling sweep is sampled and where it is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub num_samples: usize,
    pub filename: String,
    #[serde(default = "default_g_low")]
    pub g_low: f64,
    #[serde(default = "default_g_high")]
    pub g_high: f64,
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Fixed RNG seed; the thread RNG is used when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_g_low() -> f64 {
    DEFAULT_G_LOW
}

fn default_g_high() -> f64 {
    DEFAULT_G_HIGH
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub simulation: BecParams,
    pub generation: GenerationConfig,
}

pub fn read_run_config<P: AsRef<Path>>(filename: P) -> Result<RunConfig> {
    let reader = BufReader::new(File::open(filename)?);
    Ok(serde_yaml::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BecError;
    use crate::potential::PotentialKind;
    use tempfile::tempdir;

    #[test]
    fn test_read_full_config() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        let path = dir.join("run.yml");
        std::fs::write(
            &path,
            "simulation:\n  dim: 256\n  radius: 8.0\n  angular_momentum: 1.0\n  time_step: 0.005\n  iterations: 300\n  potential: custom1\ngeneration:\n  num_samples: 12\n  filename: sweep\n  g_low: 5.0\n  g_high: 50.0\n  data_dir: out/\n  seed: 3\n",
        )
        .unwrap();

        let config = read_run_config(&path).unwrap();
        assert_eq!(config.simulation.dim, 256);
        assert_eq!(config.simulation.potential, PotentialKind::Custom1);
        assert_eq!(config.simulation.angular_momentum, 1.0);
        assert_eq!(config.generation.num_samples, 12);
        assert_eq!(config.generation.g_high, 50.0);
        assert_eq!(config.generation.data_dir, PathBuf::from("out/"));
        assert_eq!(config.generation.seed, Some(3));
    }

    #[test]
    fn test_defaults() {
        let config: RunConfig = serde_yaml::from_str(
            "simulation:\n  dim: 64\n  radius: 4.0\n  time_step: 0.01\n  iterations: 10\ngeneration:\n  num_samples: 2\n  filename: t\n",
        )
        .unwrap();
        assert_eq!(config.simulation.potential, PotentialKind::Harmonic);
        assert_eq!(config.simulation.angular_momentum, 0.0);
        assert_eq!(config.generation.g_low, 0.0);
        assert_eq!(config.generation.g_high, 500.0);
        assert_eq!(config.generation.data_dir, PathBuf::from("data/"));
        assert_eq!(config.generation.seed, None);
    }

    #[test]
    fn test_malformed_config() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        let path = dir.join("bad.yml");
        std::fs::write(&path, "simulation: [1, 2\n").unwrap();
        assert!(matches!(read_run_config(&path), Err(BecError::Config(_))));
        assert!(matches!(read_run_config(dir.join("absent.yml")), Err(BecError::Io(_))));
    }
}
