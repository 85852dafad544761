/// Recolors rendered depth and instance images for presentation figures.
mod colormap;
mod panels;
mod plot;

use clap::Parser;
use std::path::PathBuf;

/// Renders the depth and instance images with a colormap to show the
/// differences in a presentation
#[derive(Debug, Parser)]
#[clap(name = "presentation-plotter")]
struct Args {
    /// Directory where the rendered images can be found
    #[clap(short, long)]
    input: PathBuf,

    /// Directory where the recolored images are stored
    #[clap(short, long)]
    output: PathBuf,

    /// Produce one combined RGB/instance/depth figure per scene
    #[clap(short, long)]
    combined: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    std::fs::create_dir_all(&args.output)?;

    if args.combined {
        plot::plot_combined(&args.input, &args.output)
    } else {
        plot::plot_per_file(&args.input, &args.output)
    }
}
