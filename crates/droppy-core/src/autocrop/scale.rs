//! Conversions between the reduced-resolution search space and the
//! full-resolution image. Reduced coordinates only ever appear inside a
//! [`CircleCandidate`]; full-resolution ones inside a [`Circle`].

use crate::consts::RADIUS_MIN_DIVISOR;
use crate::hough::CircleCandidate;

/// Integer downscale factor; full-resolution / scale = reduced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScaleFactor(usize);

impl ScaleFactor {
    pub const IDENTITY: ScaleFactor = ScaleFactor(1);

    /// `max(1, ceil(max(h, w) / target_max_dim))`.
    pub fn for_dims(h: usize, w: usize, target_max_dim: usize) -> Self {
        let largest = h.max(w);
        Self(largest.div_ceil(target_max_dim.max(1)).max(1))
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn is_identity(self) -> bool {
        self.0 == 1
    }

    /// Reduced-resolution radius for a full-resolution one (floored, at least 1).
    pub fn reduce_radius(self, radius: usize) -> usize {
        (radius / self.0).max(1)
    }

    /// Map a reduced-resolution detection back to full resolution.
    pub fn to_full(self, candidate: &CircleCandidate) -> Circle {
        let s = self.0 as i64;
        Circle {
            center_x: candidate.center_x as i64 * s,
            center_y: candidate.center_y as i64 * s,
            radius: candidate.radius.max(1) as i64 * s,
        }
    }
}

/// Circle in full-resolution pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Circle {
    pub center_x: i64,
    pub center_y: i64,
    pub radius: i64,
}

impl Circle {
    /// Lowest row the circle reaches, clamped to the last image row.
    pub fn lower_edge(&self, height: usize) -> i64 {
        (self.center_y + self.radius).min(height as i64 - 1)
    }
}

/// Full-resolution candidate radii: `[max(min(h, w) / 10, 1), max(h, w))` in
/// steps of `step`.
pub fn full_resolution_radii(h: usize, w: usize, step: usize) -> Vec<usize> {
    let start = (h.min(w) / RADIUS_MIN_DIVISOR).max(1);
    (start..h.max(w)).step_by(step.max(1)).collect()
}

/// Radii for the reduced map: divided by the scale factor, floored, clamped
/// to at least 1 and deduplicated.
pub fn scaled_radii(radii: &[usize], scale: ScaleFactor) -> Vec<usize> {
    let mut scaled: Vec<usize> = radii.iter().map(|&r| scale.reduce_radius(r)).collect();
    scaled.sort_unstable();
    scaled.dedup();
    scaled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_for_dims() {
        assert_eq!(ScaleFactor::for_dims(200, 200, 2000).get(), 1);
        assert_eq!(ScaleFactor::for_dims(2000, 1500, 2000).get(), 1);
        assert_eq!(ScaleFactor::for_dims(2001, 10, 2000).get(), 2);
        assert_eq!(ScaleFactor::for_dims(3000, 6100, 2000).get(), 4);
    }

    #[test]
    fn test_full_resolution_radii() {
        let radii = full_resolution_radii(200, 300, 10);
        assert_eq!(radii.first(), Some(&20));
        assert_eq!(radii.last(), Some(&290));
        assert!(radii.windows(2).all(|p| p[1] - p[0] == 10));
    }

    #[test]
    fn test_degenerate_dims_have_no_radii() {
        assert!(full_resolution_radii(1, 1, 10).is_empty());
        assert_eq!(full_resolution_radii(1, 2, 10), vec![1]);
    }

    #[test]
    fn test_scaled_radii_collapse_and_clamp() {
        let scale = ScaleFactor::for_dims(4000, 4000, 2000);
        assert_eq!(scale.get(), 2);
        let scaled = scaled_radii(&[1, 2, 3, 10, 11, 20], scale);
        assert_eq!(scaled, vec![1, 5, 10]);
    }

    #[test]
    fn test_to_full() {
        let scale = ScaleFactor::for_dims(6000, 100, 2000);
        let c = CircleCandidate {
            score: 9,
            center_x: 10,
            center_y: 20,
            radius: 0,
        };
        let full = scale.to_full(&c);
        assert_eq!(full, Circle { center_x: 30, center_y: 60, radius: 3 });
        assert_eq!(full.lower_edge(50), 49);
        assert_eq!(full.lower_edge(1000), 63);
    }
}
