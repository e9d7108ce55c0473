use ndarray::s;
use tracing::debug;

use crate::edges::EdgeMap;
use crate::hough::{hough_line, LineCandidate};

use super::scale::Circle;

/// Where the baseline row came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaselineSource {
    /// The strongest line of the whole edge map.
    Global,
    /// The strongest line of the map below row `offset`.
    Cropped { offset: usize },
    /// No horizontal line was accepted; the circle's lower edge is used.
    CircleFallback,
}

/// Detected baseline in full-resolution coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Baseline {
    /// Row of the baseline under the circle center. May lie outside the image.
    pub y: i64,
    pub source: BaselineSource,
    /// Accepted line, already expressed in the full map's frame.
    pub line: Option<LineCandidate>,
}

/// Line-search settings for [`locate`].
#[derive(Clone, Copy, Debug)]
pub struct BaselineSearch {
    pub angle_threshold_deg: f64,
    pub angle_bins: usize,
}

/// Find the supporting line beneath `circle`.
///
/// The strongest line of the full map is used when it is near-horizontal.
/// Otherwise the search is repeated on the rows below `cy - r - pad`, since
/// the globally strongest line is often an unrelated edge. If neither search
/// yields a near-horizontal line, the circle's lower edge is returned.
pub fn locate(edges: &EdgeMap, circle: &Circle, pad: usize, search: BaselineSearch) -> Baseline {
    let height = edges.nrows();
    let global = hough_line(edges.view(), search.angle_bins).strongest_line();

    let accepted = match global {
        None => None,
        Some(line) if line.is_near_horizontal(search.angle_threshold_deg) => {
            Some((line, BaselineSource::Global))
        }
        Some(line) => {
            let offset = (circle.center_y - circle.radius - pad as i64).max(0) as usize;
            debug!(
                theta_deg = line.theta.to_degrees(),
                offset, "Strongest line is not horizontal; searching below the droplet"
            );
            search_below(edges, offset, search)
                .map(|l| (l.shifted_down(offset), BaselineSource::Cropped { offset }))
        }
    };

    let y = accepted.and_then(|(line, _)| line.y_at(circle.center_x as f64));
    match (accepted, y) {
        (Some((line, source)), Some(y)) => {
            debug!(y = y.round(), ?source, "Baseline found");
            Baseline {
                y: y.round() as i64,
                source,
                line: Some(line),
            }
        }
        _ => {
            let y = circle.lower_edge(height);
            debug!(y, "No horizontal baseline; using circle lower edge");
            Baseline {
                y,
                source: BaselineSource::CircleFallback,
                line: None,
            }
        }
    }
}

/// Strongest near-horizontal line of the rows starting at `offset`, in the
/// sub-map's own frame.
fn search_below(edges: &EdgeMap, offset: usize, search: BaselineSearch) -> Option<LineCandidate> {
    if offset >= edges.nrows() {
        return None;
    }
    hough_line(edges.slice(s![offset.., ..]), search.angle_bins)
        .strongest_line()
        .filter(|l| l.is_near_horizontal(search.angle_threshold_deg))
}
