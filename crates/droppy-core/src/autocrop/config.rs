use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BASELINE_ANGLE_DEG, DEFAULT_CHUNK_SIZE, DEFAULT_LINE_ANGLE_BINS, DEFAULT_PAD,
    DEFAULT_RADIUS_STEP, DEFAULT_TARGET_MAX_DIM,
};
use crate::edges::EdgeParams;
use crate::error::{DroppyError, Result};

/// Configuration for droplet detection and cropping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AutoCropConfig {
    /// Margin in pixels added on every side before clipping.
    #[serde(default = "default_pad")]
    pub pad: usize,
    /// Canny parameters.
    #[serde(flatten)]
    pub edges: EdgeParams,
    /// Largest edge-map dimension the circle search runs on.
    #[serde(default = "default_target_max_dim")]
    pub target_max_dim: usize,
    /// Spacing between candidate radii in full-resolution pixels.
    #[serde(default = "default_radius_step")]
    pub radius_step: usize,
    /// Number of radii accumulated at once.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Minimum normal angle (degrees) for a line to count as a baseline.
    #[serde(default = "default_baseline_angle_deg")]
    pub baseline_angle_deg: f64,
    /// Angle resolution of the line Hough transform.
    #[serde(default = "default_line_angle_bins")]
    pub line_angle_bins: usize,
}

fn default_pad() -> usize {
    DEFAULT_PAD
}
fn default_target_max_dim() -> usize {
    DEFAULT_TARGET_MAX_DIM
}
fn default_radius_step() -> usize {
    DEFAULT_RADIUS_STEP
}
fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}
fn default_baseline_angle_deg() -> f64 {
    DEFAULT_BASELINE_ANGLE_DEG
}
fn default_line_angle_bins() -> usize {
    DEFAULT_LINE_ANGLE_BINS
}

impl Default for AutoCropConfig {
    fn default() -> Self {
        Self {
            pad: DEFAULT_PAD,
            edges: EdgeParams::default(),
            target_max_dim: DEFAULT_TARGET_MAX_DIM,
            radius_step: DEFAULT_RADIUS_STEP,
            chunk_size: DEFAULT_CHUNK_SIZE,
            baseline_angle_deg: DEFAULT_BASELINE_ANGLE_DEG,
            line_angle_bins: DEFAULT_LINE_ANGLE_BINS,
        }
    }
}

impl AutoCropConfig {
    /// Default search settings with the given padding and edge parameters.
    pub fn new(pad: usize, edges: EdgeParams) -> Self {
        Self {
            pad,
            edges,
            ..Default::default()
        }
    }

    /// Reject settings the search cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.target_max_dim == 0 {
            return Err(DroppyError::InvalidConfig(
                "target_max_dim must be > 0".into(),
            ));
        }
        if self.radius_step == 0 {
            return Err(DroppyError::InvalidConfig("radius_step must be > 0".into()));
        }
        if self.chunk_size == 0 {
            return Err(DroppyError::InvalidConfig("chunk_size must be > 0".into()));
        }
        if self.line_angle_bins == 0 {
            return Err(DroppyError::InvalidConfig(
                "line_angle_bins must be > 0".into(),
            ));
        }
        if !(0.0..=90.0).contains(&self.baseline_angle_deg) {
            return Err(DroppyError::InvalidConfig(format!(
                "baseline_angle_deg must be within [0, 90], got {}",
                self.baseline_angle_deg
            )));
        }
        Ok(())
    }
}
