use tracing::debug;

use crate::edges::{edge_points, EdgeMap};
use crate::hough::{hough_circle, strongest_circle, CircleCandidate};

/// Exhaustive circle Hough search over `radii`, run `chunk_size` radii at a
/// time so that at most `chunk_size` accumulators are alive at once.
///
/// The running best is replaced only by a strictly higher score, so ties keep
/// the lower radius. `progress` receives `(chunks_done, chunks_total)`.
/// Returns `None` if no chunk produced a single vote.
pub fn search(
    edges: &EdgeMap,
    radii: &[usize],
    chunk_size: usize,
    mut progress: impl FnMut(usize, usize),
) -> Option<CircleCandidate> {
    let chunk_size = chunk_size.max(1);
    let points = edge_points(edges);
    let dims = edges.dim();
    let total = radii.len().div_ceil(chunk_size);

    radii
        .chunks(chunk_size)
        .enumerate()
        .fold(None, |best, (i, chunk)| {
            let accumulators = hough_circle(&points, dims, chunk);
            let peak = strongest_circle(&accumulators, chunk);
            drop(accumulators);

            debug!(
                chunk = i + 1,
                total,
                radii = ?(chunk.first(), chunk.last()),
                peak = ?peak.map(|p| p.score),
                "Circle search chunk done"
            );
            progress(i + 1, total);
            merge_best(best, peak)
        })
}

/// Associative "keep the higher score" combine; the left side wins ties.
pub fn merge_best(
    left: Option<CircleCandidate>,
    right: Option<CircleCandidate>,
) -> Option<CircleCandidate> {
    match (left, right) {
        (Some(l), Some(r)) => Some(l.better_of(r)),
        (l, None) => l,
        (None, r) => r,
    }
}
