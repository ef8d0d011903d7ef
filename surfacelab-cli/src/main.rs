mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "surfacelab", about = "Procedural materials and auto-framing for 3D models")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a material texture and write it as PNG
    Synth(commands::synth::SynthArgs),
    /// Print the extent and camera framing of a mesh
    Frame(commands::frame::FrameArgs),
    /// Load a model through the viewer controller and print the final state
    View(commands::view::ViewArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match &cli.command {
        Commands::Synth(args) => commands::synth::run(args),
        Commands::Frame(args) => commands::frame::run(args),
        Commands::View(args) => commands::view::run(args),
    }
}
