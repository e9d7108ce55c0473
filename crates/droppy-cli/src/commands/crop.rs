use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use droppy_core::frame::Frame;
use droppy_core::{
    auto_crop_detailed, crop_image, extract_edges, load_image, save_edge_overlay, save_image,
    AutoCropConfig,
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use super::edges::EdgeArgs;
use crate::summary::print_crop_summary;

#[derive(Args)]
pub struct CropArgs {
    /// Input image
    pub file: PathBuf,

    /// Padding in pixels around the droplet and baseline
    #[arg(long)]
    pub pad: Option<usize>,

    #[command(flatten)]
    pub edge: EdgeArgs,

    /// TOML file with auto-crop settings (flags override it)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the cropped image here (PNG or TIFF by extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write an edge overlay with the crop rectangle here
    #[arg(long)]
    pub overlay: Option<PathBuf>,
}

pub fn run(args: &CropArgs) -> Result<()> {
    let config = build_config(args)?;
    let frame = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!(
        "Auto-crop: {} ({}x{})",
        args.file.display(),
        frame.width(),
        frame.height()
    );

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Searching radii [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let report = auto_crop_detailed(&frame.data, &config, |done, total| {
        pb.set_length(total as u64);
        pb.set_position(done as u64);
    })?;
    pb.finish_and_clear();

    print_crop_summary(&args.file, &frame, &report);
    println!("{}", report.bounds);

    if let Some(ref out) = args.output {
        let cropped = crop_image(&frame.data, &report.bounds)?;
        save_image(&Frame::new(cropped, frame.original_bit_depth), out)
            .with_context(|| format!("Failed to write {}", out.display()))?;
        println!("Cropped image saved to {}", out.display());
    }

    if let Some(ref out) = args.overlay {
        let edges = extract_edges(&frame.data, &config.edges)?;
        save_edge_overlay(&frame.data, &edges, Some(&report.bounds), out)
            .with_context(|| format!("Failed to write {}", out.display()))?;
        println!("Overlay saved to {}", out.display());
    }

    Ok(())
}

/// Defaults, then the `--config` file, then individual flags.
fn build_config(args: &CropArgs) -> Result<AutoCropConfig> {
    let mut config = match args.config {
        Some(ref path) => load_config(path)?,
        None => AutoCropConfig::default(),
    };
    if let Some(pad) = args.pad {
        config.pad = pad;
    }
    config.edges = args.edge.apply(config.edges);
    config.validate()?;
    debug!(?config, "Resolved auto-crop config");
    Ok(config)
}

fn load_config(path: &Path) -> Result<AutoCropConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
}
