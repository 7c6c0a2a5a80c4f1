use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use neuralbec::{
    generate_varg_with, load, plot_wave_function, read_run_config, Bec1D, PlotOptions, DEFAULT_DATA_DIR,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sweep the coupling strength and write a dataset
    Generate {
        #[arg(short, long, default_value = "config.yml")]
        config: String,
    },
    /// Plot one density profile of a stored dataset
    Plot {
        /// Dataset name (without the .data suffix)
        #[arg(short, long)]
        name: String,
        #[arg(short, long, default_value = DEFAULT_DATA_DIR)]
        data_dir: PathBuf,
        /// Sample to plot
        #[arg(short, long, default_value_t = 0)]
        index: usize,
        #[arg(short, long)]
        save_to: Option<PathBuf>,
        #[arg(short, long)]
        title: Option<String>,
    },
}

fn generate(config: &str) -> anyhow::Result<()> {
    let run = read_run_config(config).with_context(|| format!("reading {}", config))?;
    let generation = &run.generation;
    std::fs::create_dir_all(&generation.data_dir)
        .with_context(|| format!("creating {}", generation.data_dir.display()))?;

    info!(
        "sampling {} couplings in [{}, {}) on {} points",
        generation.num_samples, generation.g_low, generation.g_high, run.simulation.dim
    );

    let model = Bec1D::new(run.simulation);
    let dataset = match generation.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_varg_with(&mut rng, model, generation.num_samples, &generation.filename, generation.g_low, generation.g_high, &generation.data_dir)?
        }
        None => {
            let mut rng = rand::thread_rng();
            generate_varg_with(&mut rng, model, generation.num_samples, &generation.filename, generation.g_low, generation.g_high, &generation.data_dir)?
        }
    };

    info!("generated {} samples", dataset.data.len());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match args.command {
        Command::Generate { config } => generate(&config)?,
        Command::Plot { name, data_dir, index, save_to, title } => {
            let (inputs, outputs, reference) = load(&name, &data_dir)?;
            if index >= outputs.len() {
                bail!("dataset {} has {} samples, no index {}", name, outputs.len(), index);
            }
            let title = title.unwrap_or_else(|| format!("g = {:.3}", inputs[index]));
            let options = PlotOptions {
                title: Some(title.as_str()),
                save_to: save_to.as_deref(),
                ..Default::default()
            };
            if let Some(svg) = plot_wave_function(&reference.x, &outputs[index], &options)? {
                println!("{}", svg);
            }
        }
    }
    Ok(())
}
