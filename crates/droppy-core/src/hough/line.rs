use std::f64::consts::PI;

use ndarray::{Array2, ArrayView2};

use crate::consts::ANGLE_EPSILON;

/// Straight line in Hesse normal form: `x * cos(theta) + y * sin(theta) = rho`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineCandidate {
    /// Angle of the line normal in radians, in [-pi/2, pi/2).
    pub theta: f64,
    /// Signed perpendicular distance from the origin of the map's frame.
    pub rho: f64,
    /// Number of edge pixels on the line.
    pub votes: u32,
}

impl LineCandidate {
    /// True when the normal is within `90 - threshold_deg` degrees of
    /// vertical, i.e. the line itself is close to horizontal.
    pub fn is_near_horizontal(&self, threshold_deg: f64) -> bool {
        self.theta.abs() >= threshold_deg.to_radians() - ANGLE_EPSILON
    }

    /// Express a line found in a sub-map whose first row sits at `offset`
    /// in the frame of the enclosing map.
    pub fn shifted_down(&self, offset: usize) -> LineCandidate {
        LineCandidate {
            rho: self.rho + offset as f64 * self.theta.sin(),
            ..*self
        }
    }

    /// Row at which the line crosses column `x`. `None` for vertical lines.
    pub fn y_at(&self, x: f64) -> Option<f64> {
        let s = self.theta.sin();
        if s.abs() < ANGLE_EPSILON {
            return None;
        }
        Some((self.rho - x * self.theta.cos()) / s)
    }
}

/// Vote space of the straight-line Hough transform.
#[derive(Clone, Debug)]
pub struct LineHough {
    /// Votes indexed by `(rho + offset, angle index)`.
    pub accumulator: Array2<u32>,
    /// Sampled normal angles, evenly spaced over [-pi/2, pi/2).
    pub angles: Vec<f64>,
    /// Shift applied to rho so that bin 0 holds `rho = -offset`.
    pub offset: usize,
}

impl LineHough {
    /// Single strongest line; first maximum in (rho, angle) scan order.
    pub fn strongest_line(&self) -> Option<LineCandidate> {
        let mut best: Option<(usize, usize, u32)> = None;
        for ((r, t), &votes) in self.accumulator.indexed_iter() {
            if votes == 0 {
                continue;
            }
            let replaces = match best {
                None => true,
                Some((_, _, b)) => votes > b,
            };
            if replaces {
                best = Some((r, t, votes));
            }
        }
        best.map(|(r, t, votes)| LineCandidate {
            theta: self.angles[t],
            rho: r as f64 - self.offset as f64,
            votes,
        })
    }
}

/// Evenly spaced angles over [-pi/2, pi/2).
pub fn line_angles(bins: usize) -> Vec<f64> {
    (0..bins)
        .map(|i| -PI / 2.0 + i as f64 * PI / bins as f64)
        .collect()
}

/// Straight-line Hough transform with unit distance bins.
pub fn hough_line(edges: ArrayView2<'_, bool>, angle_bins: usize) -> LineHough {
    let (h, w) = edges.dim();
    let angles = line_angles(angle_bins);
    let offset = ((h * h + w * w) as f64).sqrt().ceil() as usize;
    let mut accumulator = Array2::<u32>::zeros((2 * offset + 1, angles.len()));

    let trig: Vec<(f64, f64)> = angles.iter().map(|a| (a.cos(), a.sin())).collect();
    for ((y, x), &is_edge) in edges.indexed_iter() {
        if !is_edge {
            continue;
        }
        for (t, &(c, s)) in trig.iter().enumerate() {
            let rho = (x as f64 * c + y as f64 * s).round() as isize + offset as isize;
            accumulator[[rho as usize, t]] += 1;
        }
    }

    LineHough {
        accumulator,
        angles,
        offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angles_cover_half_turn() {
        let a = line_angles(180);
        assert_eq!(a.len(), 180);
        assert!((a[0] + PI / 2.0).abs() < 1e-12);
        assert!(a[179] < PI / 2.0);
    }

    #[test]
    fn test_horizontal_line_detected() {
        let mut edges = Array2::from_elem((50, 80), false);
        for x in 5..75 {
            edges[[31, x]] = true;
        }
        let hough = hough_line(edges.view(), 360);
        let line = hough.strongest_line().unwrap();
        assert!(line.is_near_horizontal(80.0));
        assert_eq!(line.votes, 70);
        let y = line.y_at(40.0).unwrap();
        assert!((y - 31.0).abs() < 0.5, "y = {y}");
    }

    #[test]
    fn test_vertical_line_is_not_horizontal() {
        let mut edges = Array2::from_elem((60, 60), false);
        for y in 0..60 {
            edges[[y, 12]] = true;
        }
        let line = hough_line(edges.view(), 360).strongest_line().unwrap();
        assert!(!line.is_near_horizontal(80.0));
        assert!(line.theta.abs() < 1e-9);
        assert!((line.rho - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_shift_matches_uncropped_detection() {
        let mut edges = Array2::from_elem((70, 40), false);
        for x in 0..40 {
            edges[[55, x]] = true;
        }
        let full = hough_line(edges.view(), 360).strongest_line().unwrap();
        let crop = edges.slice(ndarray::s![30.., ..]);
        let local = hough_line(crop, 360).strongest_line().unwrap();
        let shifted = local.shifted_down(30);
        let y_full = full.y_at(20.0).unwrap();
        let y_shifted = shifted.y_at(20.0).unwrap();
        assert!((y_full - y_shifted).abs() < 1e-6);
        assert!((y_shifted - 55.0).abs() < 0.5);
    }

    #[test]
    fn test_empty_map_has_no_line() {
        let edges = Array2::from_elem((0, 10), false);
        assert!(hough_line(edges.view(), 180).strongest_line().is_none());
    }
}
