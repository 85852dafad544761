/// Synthesizes RGB, instance and depth images of vehicle scenes.
mod assets;
mod backend;
mod composer;
mod constants;
mod driver;
mod error;
mod metadata;
mod providers;
mod serializer;

use clap::Parser;
use std::path::PathBuf;

use backend::HeadlessEngine;
use driver::{CancellationToken, SynthesisConfig};

/// Synthesize images for reconstructing development vehicles
#[derive(Debug, Parser)]
#[clap(name = "scene-synthesis")]
struct Args {
    /// Directory where the rendered images are stored
    #[clap(short, long, default_value = ".")]
    output: PathBuf,

    /// Seed for the random number generator; defaults to the current unix timestamp
    #[clap(short, long)]
    seed: Option<u64>,

    /// Number of images to produce; generates until terminated when omitted
    #[clap(short, long)]
    num: Option<u64>,

    /// Path of the metadata store; defaults to meta_data.db inside the output directory
    #[clap(long)]
    database_path: Option<PathBuf>,

    /// Also write a human-viewable composite image per scene
    #[clap(long)]
    human_output: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = SynthesisConfig {
        output_dir: args.output,
        count: args.num,
        start_seed: args.seed.unwrap_or_else(driver::timestamp_seed),
        database_path: args.database_path,
        human_visible: args.human_output,
    };

    let mut engine = HeadlessEngine::new();
    let token = CancellationToken::new();
    driver::run(&mut engine, &config, &token)?;

    Ok(())
}
