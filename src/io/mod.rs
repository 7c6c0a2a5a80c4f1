//! IO module - dataset persistence and run configuration.

mod config;
mod storage;

pub use config::{read_run_config, GenerationConfig, RunConfig};
pub use storage::{dataset_path, load, load_dataset, save, DEFAULT_DATA_DIR};
