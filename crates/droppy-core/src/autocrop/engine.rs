use ndarray::Array2;
use tracing::{debug, info};

use crate::edges::extract_edges;
use crate::error::{DroppyError, Result};
use crate::hough::CircleCandidate;

use super::baseline::{locate, Baseline, BaselineSearch};
use super::bounds::{reconcile, Bounds};
use super::circle_search::search;
use super::config::AutoCropConfig;
use super::reduce::reduce;
use super::scale::{full_resolution_radii, scaled_radii, Circle, ScaleFactor};

/// Everything the auto-crop pipeline derived on the way to its bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct AutoCropReport {
    pub bounds: Bounds,
    /// Detected droplet in full-resolution coordinates.
    pub circle: Circle,
    /// The same detection in the reduced search space, with its vote count.
    pub candidate: CircleCandidate,
    pub scale: ScaleFactor,
    pub baseline: Baseline,
}

/// Detect the droplet and its baseline and return padded crop bounds.
pub fn auto_crop(image: &Array2<f32>, config: &AutoCropConfig) -> Result<Bounds> {
    auto_crop_with_progress(image, config, |_, _| {})
}

/// [`auto_crop`] with a callback receiving `(chunks_done, chunks_total)` of
/// the circle search.
pub fn auto_crop_with_progress(
    image: &Array2<f32>,
    config: &AutoCropConfig,
    progress: impl FnMut(usize, usize),
) -> Result<Bounds> {
    auto_crop_detailed(image, config, progress).map(|report| report.bounds)
}

/// Run the full pipeline and keep every intermediate result.
///
/// Pipeline: Canny edges -> downscale -> chunked circle Hough on the reduced
/// map -> rescale -> baseline search on the full map -> padded, clipped bounds.
pub fn auto_crop_detailed(
    image: &Array2<f32>,
    config: &AutoCropConfig,
    progress: impl FnMut(usize, usize),
) -> Result<AutoCropReport> {
    config.validate()?;
    let (h, w) = image.dim();
    if h == 0 || w == 0 {
        return Err(DroppyError::InvalidDimensions {
            width: w,
            height: h,
        });
    }

    info!("Performing auto-cropping, please wait...");

    let radii = full_resolution_radii(h, w, config.radius_step);
    if radii.is_empty() {
        return Err(DroppyError::EmptyRadiusSet {
            width: w,
            height: h,
        });
    }

    let edges = extract_edges(image, &config.edges)?;

    let reduced = reduce(&edges, config.target_max_dim);
    let scale = reduced.scale;
    let search_radii = scaled_radii(&radii, scale);
    debug!(
        scale = scale.get(),
        reduced = ?reduced.map.dim(),
        radii = search_radii.len(),
        "Edge map prepared for circle search"
    );

    let candidate = search(&reduced.map, &search_radii, config.chunk_size, progress)
        .ok_or(DroppyError::NoCircleFound)?;
    drop(reduced);

    let circle = scale.to_full(&candidate);
    debug!(
        cx = circle.center_x,
        cy = circle.center_y,
        r = circle.radius,
        score = candidate.score,
        "Circle detected"
    );

    let baseline = locate(
        &edges,
        &circle,
        config.pad,
        BaselineSearch {
            angle_threshold_deg: config.baseline_angle_deg,
            angle_bins: config.line_angle_bins,
        },
    );

    let bounds = reconcile(&candidate, scale, baseline.y, config.pad, h, w);
    debug!(%bounds, "Auto-crop bounds");

    Ok(AutoCropReport {
        bounds,
        circle,
        candidate,
        scale,
        baseline,
    })
}
