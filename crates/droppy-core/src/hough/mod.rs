pub mod circle;
pub mod line;

pub use circle::{circle_perimeter_offsets, hough_circle, strongest_circle, CircleCandidate};
pub use line::{hough_line, LineCandidate, LineHough};
