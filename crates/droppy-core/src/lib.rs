pub mod autocrop;
pub mod consts;
pub mod edges;
pub mod error;
pub mod filters;
pub mod frame;
pub mod hough;
pub mod io;

pub use autocrop::{
    auto_crop, auto_crop_detailed, auto_crop_with_progress, AutoCropConfig, AutoCropReport,
    Bounds,
};
pub use edges::{edge_points, extract_edges, EdgeMap, EdgeParams};
pub use error::{DroppyError, EdgeError, Result};
pub use frame::Frame;
pub use io::crop::crop_image;
pub use io::image_io::{load_image, save_edge_overlay, save_image};
