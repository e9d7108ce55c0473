pub mod canny;
pub mod hysteresis;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_EDGE_SIGMA, DEFAULT_HIGH_THRESHOLD, DEFAULT_LOW_THRESHOLD};
use crate::error::EdgeError;

pub use canny::canny;

/// Boolean raster; `true` marks an edge pixel.
pub type EdgeMap = Array2<bool>;

/// Canny parameters. `None` thresholds fall back to the detector's defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeParams {
    /// Gaussian smoothing sigma.
    #[serde(default = "default_sigma")]
    pub sigma: f64,
    /// Hysteresis low threshold in gradient-magnitude units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    /// Hysteresis high threshold in gradient-magnitude units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
}

fn default_sigma() -> f64 {
    DEFAULT_EDGE_SIGMA
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_EDGE_SIGMA,
            low: None,
            high: None,
        }
    }
}

impl EdgeParams {
    pub fn new(sigma: f64, low: Option<f64>, high: Option<f64>) -> Self {
        Self { sigma, low, high }
    }

    /// Resolve the effective `(low, high)` pair and validate all parameters.
    pub fn resolved_thresholds(&self) -> Result<(f64, f64), EdgeError> {
        if !self.sigma.is_finite() || self.sigma < 0.0 {
            return Err(EdgeError::InvalidSigma(self.sigma));
        }
        let low = self.low.unwrap_or(DEFAULT_LOW_THRESHOLD);
        let high = self.high.unwrap_or(DEFAULT_HIGH_THRESHOLD);
        for t in [low, high] {
            if !t.is_finite() {
                return Err(EdgeError::InvalidThreshold(t));
            }
        }
        if low > high {
            return Err(EdgeError::InvertedThresholds { low, high });
        }
        Ok((low, high))
    }
}

/// Compute the Canny edge map of a grayscale image with values in [0, 1].
pub fn extract_edges(image: &Array2<f32>, params: &EdgeParams) -> Result<EdgeMap, EdgeError> {
    let (low, high) = params.resolved_thresholds()?;
    let data = image.mapv(|v| v as f64);
    Ok(canny(&data, params.sigma, low, high))
}

/// List edge pixels as `(x, y)` pairs, ordered by x then y.
pub fn edge_points(edges: &EdgeMap) -> Vec<(usize, usize)> {
    let (h, w) = edges.dim();
    let mut points = Vec::new();
    for x in 0..w {
        for y in 0..h {
            if edges[[y, x]] {
                points.push((x, y));
            }
        }
    }
    points
}
