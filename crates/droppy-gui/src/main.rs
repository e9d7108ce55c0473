use std::path::PathBuf;

use anyhow::{Context, Result};
use droppy_core::{auto_crop, load_image, AutoCropConfig, EdgeParams};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let path = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => match rfd::FileDialog::new()
            .add_filter("Images", &["png", "tif", "tiff", "jpg", "jpeg", "bmp"])
            .pick_file()
        {
            Some(path) => path,
            None => return Ok(()),
        },
    };

    let frame =
        load_image(&path).with_context(|| format!("Failed to load {}", path.display()))?;
    let params = droppy_gui::tune_edge_params(&frame.data, EdgeParams::default(), None)?;

    let config = AutoCropConfig {
        edges: params,
        ..Default::default()
    };
    let bounds = auto_crop(&frame.data, &config)?;
    info!(%bounds, "Auto-crop finished");
    println!("{bounds}");
    Ok(())
}
