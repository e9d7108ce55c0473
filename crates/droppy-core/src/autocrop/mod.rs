pub mod baseline;
pub mod bounds;
pub mod circle_search;
pub(crate) mod config;
mod engine;
pub mod reduce;
pub mod scale;

pub use baseline::{Baseline, BaselineSource};
pub use bounds::Bounds;
pub use config::AutoCropConfig;
pub use engine::{auto_crop, auto_crop_detailed, auto_crop_with_progress, AutoCropReport};
pub use scale::{Circle, ScaleFactor};
