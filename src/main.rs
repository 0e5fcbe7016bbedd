use std::path::PathBuf;
use std::process;

use clap::Parser;
use plife_core::{ParticleColor, RecipeConfig};

/// Generate a random particle-life recipe file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Where to write the generated recipe
    output: PathBuf,

    /// RON file with generation parameters, replacing the defaults
    #[arg(long)]
    params: Option<PathBuf>,

    /// Fixed random seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Comma-separated colors to generate particles and rules for
    #[arg(long, value_delimiter = ',')]
    colors: Option<Vec<ParticleColor>>,

    /// Particles spawned per color
    #[arg(long)]
    particles: Option<u32>,
}

fn load_params(path: &PathBuf) -> Result<RecipeConfig, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Could not read {}: {e}", path.display()))?;
    ron::from_str(&text).map_err(|e| format!("Could not parse {}: {e}", path.display()))
}

fn run(args: Args) -> Result<(), String> {
    let mut config = match &args.params {
        Some(path) => load_params(path)?,
        None => RecipeConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(colors) = args.colors {
        config.colors = colors;
    }
    if let Some(particles) = args.particles {
        config.particles_per_color = particles;
    }
    config.validate()?;

    // Pin the seed before generating so unseeded runs can be replayed
    let seed = plife_gen::resolve_seed(&config);
    config.seed = Some(seed);
    log::info!("Generating recipe with seed {seed}");

    let recipe = plife_gen::generate(&config);
    plife_storage::save_recipe(&recipe, &args.output)?;

    let colors = config.colors.len();
    log::info!(
        "Wrote {} particle groups and {} rules to {}",
        colors,
        colors * colors,
        args.output.display()
    );
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        log::error!("{e}");
        process::exit(1);
    }
}
