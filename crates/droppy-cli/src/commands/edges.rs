use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use droppy_core::io::image_io::save_edge_map;
use droppy_core::{edge_points, extract_edges, load_image, EdgeParams};

/// Canny flags shared by `crop` and `edges`.
#[derive(Args, Clone, Debug, Default)]
pub struct EdgeArgs {
    /// Gaussian smoothing sigma for edge detection
    #[arg(long)]
    pub sigma: Option<f64>,

    /// Hysteresis low threshold (default 0.1)
    #[arg(long)]
    pub low: Option<f64>,

    /// Hysteresis high threshold (default 0.2)
    #[arg(long)]
    pub high: Option<f64>,
}

impl EdgeArgs {
    /// Overlay the flags that were given onto `base`.
    pub fn apply(&self, base: EdgeParams) -> EdgeParams {
        EdgeParams {
            sigma: self.sigma.unwrap_or(base.sigma),
            low: self.low.or(base.low),
            high: self.high.or(base.high),
        }
    }
}

#[derive(Args)]
pub struct EdgesArgs {
    /// Input image
    pub file: PathBuf,

    #[command(flatten)]
    pub edge: EdgeArgs,

    /// Output PNG for the edge map
    #[arg(short, long)]
    pub output: PathBuf,
}

pub fn run(args: &EdgesArgs) -> Result<()> {
    let frame = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let params = args.edge.apply(EdgeParams::default());

    let edges = extract_edges(&frame.data, &params)?;
    let count = edge_points(&edges).len();
    save_edge_map(&edges, &args.output)?;

    println!(
        "{} edge pixels ({}x{}) saved to {}",
        count,
        frame.width(),
        frame.height(),
        args.output.display()
    );
    Ok(())
}
