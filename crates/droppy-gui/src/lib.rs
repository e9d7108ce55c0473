pub mod app;
pub mod convert;
pub mod state;

use std::cell::Cell;
use std::rc::Rc;

use anyhow::{bail, Result};
use droppy_core::autocrop::Bounds;
use droppy_core::EdgeParams;
use ndarray::Array2;
use tracing::info;

pub use state::TunerState;

/// Open a blocking preview window for tuning Canny parameters on `image`.
///
/// `view` limits the preview to an inclusive region; edges are still computed
/// on the whole image. Returns the values selected when the window closed,
/// either through "Done" or by closing it.
pub fn tune_edge_params(
    image: &Array2<f32>,
    initial: EdgeParams,
    view: Option<Bounds>,
) -> Result<EdgeParams> {
    let (h, w) = image.dim();
    if h == 0 || w == 0 {
        bail!("Cannot tune edges on an empty {w}x{h} image");
    }
    if let Some(b) = view {
        if b.right >= w || b.bottom >= h || b.left > b.right || b.top > b.bottom {
            bail!("View {b} does not fit a {w}x{h} image");
        }
    }

    let result = Rc::new(Cell::new(initial));
    let app_result = Rc::clone(&result);
    let image = image.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0])
            .with_min_inner_size([400.0, 300.0])
            .with_title("Canny preview"),
        ..Default::default()
    };

    eframe::run_native(
        "DroppyTuner",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(app::TunerApp::new(image, initial, view, app_result)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Tuner window failed: {e}"))?;

    let params = result.get();
    info!("Proceeding with sigma = {:6.2}", params.sigma);
    Ok(params)
}
