/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Default padding (pixels) added on every side of the detected droplet.
pub const DEFAULT_PAD: usize = 25;

/// Default Gaussian sigma for Canny edge detection.
pub const DEFAULT_EDGE_SIGMA: f64 = 1.0;

/// Canny low threshold used when none is given (fraction of the float range).
pub const DEFAULT_LOW_THRESHOLD: f64 = 0.1;

/// Canny high threshold used when none is given (fraction of the float range).
pub const DEFAULT_HIGH_THRESHOLD: f64 = 0.2;

/// Gaussian kernels extend to `truncate * sigma` on each side.
pub const GAUSSIAN_TRUNCATE: f64 = 4.0;

/// Largest edge-map dimension the circle search runs on before downscaling.
pub const DEFAULT_TARGET_MAX_DIM: usize = 2000;

/// Spacing between consecutive candidate radii, in full-resolution pixels.
pub const DEFAULT_RADIUS_STEP: usize = 10;

/// Candidate radii start at `min(H, W) / RADIUS_MIN_DIVISOR`.
pub const RADIUS_MIN_DIVISOR: usize = 10;

/// Number of radii whose accumulators are alive at the same time.
pub const DEFAULT_CHUNK_SIZE: usize = 8;

/// Lines at least this far from vertical (in degrees) count as a baseline.
/// Overridable through `AutoCropConfig::baseline_angle_deg`.
pub const DEFAULT_BASELINE_ANGLE_DEG: f64 = 80.0;

/// Number of angle bins across [-90, 90) degrees in the line Hough transform.
pub const DEFAULT_LINE_ANGLE_BINS: usize = 360;

/// Tolerance for angle comparisons against the baseline threshold.
pub const ANGLE_EPSILON: f64 = 1e-9;

/// Binarization level applied after bilinear downsampling of an edge map.
pub const REDUCE_BINARIZE_LEVEL: f32 = 0.5;

/// Tuner slider ranges.
pub const TUNER_SIGMA_MAX: f64 = 10.0;
pub const TUNER_INITIAL_LOW: f64 = 0.1;
pub const TUNER_INITIAL_HIGH: f64 = 0.3;
