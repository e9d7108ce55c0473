mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "droppy", about = "Droplet detection and auto-cropping for contact-angle images")]
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
    /// Detect the droplet and baseline and crop around them
    Crop(commands::crop::CropArgs),
    /// Write the Canny edge map of an image
    Edges(commands::edges::EdgesArgs),
    /// Print default auto-crop configuration as TOML
    Config(commands::config::ConfigArgs),
    /// Show image metadata
    Info(commands::info::InfoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Crop(args) => commands::crop::run(args),
        Commands::Edges(args) => commands::edges::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Info(args) => commands::info::run(args),
    }
}
