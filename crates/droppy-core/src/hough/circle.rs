use ndarray::Array2;
use rayon::prelude::*;

/// Best circle found in one accumulator stack, in the coordinates of the edge
/// map it was detected on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CircleCandidate {
    /// Number of edge pixels voting for this circle.
    pub score: u32,
    /// Column of the center.
    pub center_x: usize,
    /// Row of the center.
    pub center_y: usize,
    pub radius: usize,
}

impl CircleCandidate {
    /// Keep the higher-scoring candidate; on equal scores keep `self`.
    pub fn better_of(self, other: CircleCandidate) -> CircleCandidate {
        if other.score > self.score {
            other
        } else {
            self
        }
    }
}

/// Offsets `(dy, dx)` of the Bresenham circle of the given radius, deduplicated.
pub fn circle_perimeter_offsets(radius: usize) -> Vec<(isize, isize)> {
    let r = radius as isize;
    let mut offsets = Vec::with_capacity(8 * radius.max(1));
    let mut x: isize = 0;
    let mut y: isize = r;
    let mut d: isize = 3 - 2 * r;

    while y >= x {
        offsets.extend_from_slice(&[
            (y, x),
            (-y, x),
            (y, -x),
            (-y, -x),
            (x, y),
            (-x, y),
            (x, -y),
            (-x, -y),
        ]);
        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }

    offsets.sort_unstable();
    offsets.dedup();
    offsets
}

/// Accumulate circle votes for each radius. Every edge pixel votes for all
/// centers lying on a circle of that radius around it.
///
/// Returns one `(height, width)` accumulator per radius, in `radii` order.
pub fn hough_circle(
    edge_points: &[(usize, usize)],
    dims: (usize, usize),
    radii: &[usize],
) -> Vec<Array2<u32>> {
    let (h, w) = dims;
    radii
        .par_iter()
        .map(|&radius| {
            let offsets = circle_perimeter_offsets(radius);
            let mut acc = Array2::<u32>::zeros((h, w));
            for &(x, y) in edge_points {
                for &(dy, dx) in &offsets {
                    let ty = y as isize + dy;
                    let tx = x as isize + dx;
                    if ty >= 0 && tx >= 0 && (ty as usize) < h && (tx as usize) < w {
                        acc[[ty as usize, tx as usize]] += 1;
                    }
                }
            }
            acc
        })
        .collect()
}

/// Single strongest peak across a stack of accumulators.
///
/// Scans radii in order, then rows, then columns; the first maximum wins.
/// Returns `None` when no accumulator holds a single vote.
pub fn strongest_circle(accumulators: &[Array2<u32>], radii: &[usize]) -> Option<CircleCandidate> {
    let mut best: Option<CircleCandidate> = None;
    for (acc, &radius) in accumulators.iter().zip(radii) {
        for ((row, col), &votes) in acc.indexed_iter() {
            if votes == 0 {
                continue;
            }
            let replaces = match best {
                None => true,
                Some(b) => votes > b.score,
            };
            if replaces {
                best = Some(CircleCandidate {
                    score: votes,
                    center_x: col,
                    center_y: row,
                    radius,
                });
            }
        }
    }
    best
}
