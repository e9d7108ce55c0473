use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use droppy_core::autocrop::scale::{full_resolution_radii, ScaleFactor};
use droppy_core::{load_image, AutoCropConfig};

#[derive(Args)]
pub struct InfoArgs {
    /// Input image
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let frame = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let (h, w) = (frame.height(), frame.width());
    let defaults = AutoCropConfig::default();
    let radii = full_resolution_radii(h, w, defaults.radius_step);
    let scale = ScaleFactor::for_dims(h, w, defaults.target_max_dim);

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", w, h);
    println!("Bit depth:   {}", frame.original_bit_depth);
    match (radii.first(), radii.last()) {
        (Some(lo), Some(hi)) => {
            println!("Radii:       {} ({}..={} step {})", radii.len(), lo, hi, defaults.radius_step)
        }
        _ => println!("Radii:       none (image too small)"),
    }
    println!("Search scale: 1/{}", scale.get());

    Ok(())
}
