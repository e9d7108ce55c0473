use thiserror::Error;

/// Failures raised by the Canny edge detector.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EdgeError {
    #[error("Invalid Gaussian sigma: {0} (must be finite and >= 0)")]
    InvalidSigma(f64),

    #[error("Invalid threshold: {0} (must be finite)")]
    InvalidThreshold(f64),

    #[error("Low threshold {low} must not exceed high threshold {high}")]
    InvertedThresholds { low: f64, high: f64 },
}

#[derive(Error, Debug)]
pub enum DroppyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No Hough radii to search for a {width}x{height} image")]
    EmptyRadiusSet { width: usize, height: usize },

    #[error("No circle candidate found by Hough search; check edges, thresholds or radius range")]
    NoCircleFound,

    #[error(transparent)]
    EdgeDetection(#[from] EdgeError),
}

pub type Result<T> = std::result::Result<T, DroppyError>;
